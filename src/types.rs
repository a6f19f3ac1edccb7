//! Common types used throughout awx-state
//!
//! This module contains the decoded response model and the small shared
//! enums used across multiple modules.

use crate::error::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// Decoded API response: a string-keyed map of dynamically typed values.
///
/// Keys are kept ordered so re-serialization is canonical.
pub type ApiMap = BTreeMap<String, ApiValue>;

// ============================================================================
// Decoded Values
// ============================================================================

/// A dynamically typed value taken from a decoded API response.
///
/// Numbers decoded from a response body arrive as the generic
/// [`ApiValue::Number`] token. Values produced by other code paths (values
/// rebuilt from typed state, hand-built request payloads) may carry native
/// [`ApiValue::Int`] or [`ApiValue::Float`] instead. Coercions accept both.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(untagged)]
pub enum ApiValue {
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<ApiValue>),
    Map(ApiMap),
}

impl ApiValue {
    /// Short name of the variant, used in diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            ApiValue::Null => "null",
            ApiValue::Bool(_) => "bool",
            ApiValue::Number(_) => "number",
            ApiValue::Int(_) => "int64",
            ApiValue::Float(_) => "float64",
            ApiValue::String(_) => "string",
            ApiValue::List(_) => "list",
            ApiValue::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ApiValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ApiValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&ApiMap> {
        match self {
            ApiValue::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[ApiValue]> {
        match self {
            ApiValue::List(l) => Some(l),
            _ => None,
        }
    }

    /// Consume the value, returning the inner map if it is one
    pub fn into_map(self) -> Option<ApiMap> {
        match self {
            ApiValue::Map(m) => Some(m),
            _ => None,
        }
    }

    /// Serialize to the canonical compact JSON form
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<'de> Deserialize<'de> for ApiValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        JsonValue::deserialize(deserializer).map(Self::from)
    }
}

impl From<JsonValue> for ApiValue {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => ApiValue::Null,
            JsonValue::Bool(b) => ApiValue::Bool(b),
            JsonValue::Number(n) => ApiValue::Number(n),
            JsonValue::String(s) => ApiValue::String(s),
            JsonValue::Array(items) => {
                ApiValue::List(items.into_iter().map(ApiValue::from).collect())
            }
            JsonValue::Object(fields) => ApiValue::Map(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, ApiValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<ApiValue> for JsonValue {
    fn from(value: ApiValue) -> Self {
        match value {
            ApiValue::Null => JsonValue::Null,
            ApiValue::Bool(b) => JsonValue::Bool(b),
            ApiValue::Number(n) => JsonValue::Number(n),
            ApiValue::Int(i) => JsonValue::from(i),
            ApiValue::Float(f) => JsonValue::from(f),
            ApiValue::String(s) => JsonValue::String(s),
            ApiValue::List(items) => {
                JsonValue::Array(items.into_iter().map(JsonValue::from).collect())
            }
            ApiValue::Map(fields) => JsonValue::Object(
                fields
                    .into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&str> for ApiValue {
    fn from(value: &str) -> Self {
        ApiValue::String(value.to_string())
    }
}

impl From<String> for ApiValue {
    fn from(value: String) -> Self {
        ApiValue::String(value)
    }
}

impl From<bool> for ApiValue {
    fn from(value: bool) -> Self {
        ApiValue::Bool(value)
    }
}

impl From<i64> for ApiValue {
    fn from(value: i64) -> Self {
        ApiValue::Int(value)
    }
}

impl From<f64> for ApiValue {
    fn from(value: f64) -> Self {
        ApiValue::Float(value)
    }
}

impl From<ApiMap> for ApiValue {
    fn from(value: ApiMap) -> Self {
        ApiValue::Map(value)
    }
}

/// Convert a decoded JSON document into an [`ApiMap`].
///
/// `null` (an empty body) becomes an empty map. Any other non-object document
/// is a decode error.
pub fn to_api_map(value: JsonValue) -> Result<ApiMap> {
    match ApiValue::from(value) {
        ApiValue::Map(m) => Ok(m),
        ApiValue::Null => Ok(ApiMap::new()),
        other => Err(Error::decode(format!(
            "expected a JSON object, received {}",
            other.type_name()
        ))),
    }
}

/// Parse a JSON text into an [`ApiMap`]
pub fn parse_api_map(body: &str) -> Result<ApiMap> {
    if body.trim().is_empty() {
        return Ok(ApiMap::new());
    }
    let value: JsonValue = serde_json::from_str(body).map_err(|e| Error::Decode {
        message: format!("Failed to parse JSON: {e}"),
    })?;
    to_api_map(value)
}

// ============================================================================
// HTTP Types
// ============================================================================

/// HTTP method
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    #[default]
    GET,
    POST,
    PATCH,
    DELETE,
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => reqwest::Method::GET,
            Method::POST => reqwest::Method::POST,
            Method::PATCH => reqwest::Method::PATCH,
            Method::DELETE => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Method::GET => "GET",
            Method::POST => "POST",
            Method::PATCH => "PATCH",
            Method::DELETE => "DELETE",
        };
        f.write_str(name)
    }
}

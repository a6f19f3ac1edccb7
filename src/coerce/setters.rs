//! Setter implementations
//!
//! One setter per target type. Each treats absent input the same as `null`.

use super::types::{trim, CoercionError, Trim};
use crate::attr::Attr;
use crate::types::{ApiValue, JsonValue};

type CoerceResult = Result<(), CoercionError>;

/// Record the failure as an explicit null and hand the error back
fn reject<T>(dest: &mut Attr<T>, err: CoercionError) -> CoerceResult {
    *dest = Attr::Null;
    Err(err)
}

// ============================================================================
// Scalars
// ============================================================================

/// Set a boolean attribute
pub fn set_bool(dest: &mut Attr<bool>, data: Option<&ApiValue>) -> CoerceResult {
    match data {
        None | Some(ApiValue::Null) => *dest = Attr::Null,
        Some(ApiValue::Bool(b)) => *dest = Attr::Value(*b),
        Some(other) => return reject(dest, CoercionError::wrong_type("bool", other.type_name())),
    }
    Ok(())
}

/// Set a 64-bit integer attribute.
///
/// Accepts the generic number token and native numbers. Floating point input
/// is accepted only when it carries no fractional part.
pub fn set_int64(dest: &mut Attr<i64>, data: Option<&ApiValue>) -> CoerceResult {
    const EXPECTED: &str = "number, int64, float64";
    let converted = match data {
        None | Some(ApiValue::Null) => {
            *dest = Attr::Null;
            return Ok(());
        }
        Some(ApiValue::Int(i)) => Some(*i),
        Some(ApiValue::Number(n)) => n.as_i64().or_else(|| n.as_f64().and_then(integral)),
        Some(ApiValue::Float(f)) => integral(*f),
        Some(other) => return reject(dest, CoercionError::wrong_type(EXPECTED, other.type_name())),
    };

    match converted {
        Some(i) => {
            *dest = Attr::Value(i);
            Ok(())
        }
        None => {
            let raw = match data {
                Some(ApiValue::Number(n)) => n.to_string(),
                Some(ApiValue::Float(f)) => f.to_string(),
                _ => String::new(),
            };
            reject(dest, CoercionError::conversion(raw, "int64"))
        }
    }
}

fn integral(f: f64) -> Option<i64> {
    if f.is_finite() && f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

/// Set a 64-bit float attribute
pub fn set_float64(dest: &mut Attr<f64>, data: Option<&ApiValue>) -> CoerceResult {
    match data {
        None | Some(ApiValue::Null) => *dest = Attr::Null,
        Some(ApiValue::Float(f)) => *dest = Attr::Value(*f),
        Some(ApiValue::Int(i)) => *dest = Attr::Value(*i as f64),
        Some(ApiValue::Number(n)) => match n.as_f64() {
            Some(f) => *dest = Attr::Value(f),
            None => return reject(dest, CoercionError::conversion(n, "float64")),
        },
        Some(other) => {
            return reject(
                dest,
                CoercionError::wrong_type("number, float64, int64", other.type_name()),
            )
        }
    }
    Ok(())
}

/// Set a string attribute.
///
/// A generic number token is rendered in its decoded textual form.
pub fn set_string(dest: &mut Attr<String>, data: Option<&ApiValue>, policy: Trim) -> CoerceResult {
    match data {
        None | Some(ApiValue::Null) => *dest = Attr::Null,
        Some(ApiValue::String(s)) => *dest = Attr::Value(trim(policy, s)),
        Some(ApiValue::Number(n)) => *dest = Attr::Value(n.to_string()),
        Some(other) => {
            return reject(
                dest,
                CoercionError::wrong_type("string, number", other.type_name()),
            )
        }
    }
    Ok(())
}

// ============================================================================
// Embedded documents
// ============================================================================

fn canonical(value: &ApiValue) -> Result<String, CoercionError> {
    value.to_json_string().map_err(|e| CoercionError::Serialize {
        message: e.to_string(),
    })
}

/// Set a string attribute holding an embedded JSON document.
///
/// A string is taken as already serialized. Any other value is serialized to
/// its canonical form.
pub fn set_json_string(
    dest: &mut Attr<String>,
    data: Option<&ApiValue>,
    policy: Trim,
) -> CoerceResult {
    match data {
        None | Some(ApiValue::Null) => *dest = Attr::Null,
        Some(ApiValue::String(s)) => *dest = Attr::Value(trim(policy, s)),
        Some(other) => match canonical(other) {
            Ok(s) => *dest = Attr::Value(s),
            Err(e) => return reject(dest, e),
        },
    }
    Ok(())
}

/// Set a string attribute holding a JSON or YAML mapping.
///
/// JSON and YAML input are both re-serialized as canonical JSON, so key
/// order and spacing from the API never show up as a change. An empty string
/// is kept empty.
pub fn set_json_yaml_string(
    dest: &mut Attr<String>,
    data: Option<&ApiValue>,
    policy: Trim,
) -> CoerceResult {
    let raw = match data {
        None | Some(ApiValue::Null) => {
            *dest = Attr::Null;
            return Ok(());
        }
        Some(ApiValue::String(s)) => s,
        Some(other) => {
            return match canonical(other) {
                Ok(s) => {
                    *dest = Attr::Value(trim(policy, &s));
                    Ok(())
                }
                Err(e) => reject(dest, e),
            }
        }
    };

    if raw.trim().is_empty() {
        *dest = Attr::string("");
        return Ok(());
    }

    let json = serde_json::from_str::<serde_json::Map<String, JsonValue>>(raw)
        .ok()
        .and_then(|map| serde_json::to_string(&map).ok());
    let value = match json {
        Some(canonical) => canonical,
        None => match yaml_mapping_to_json(raw) {
            Some(converted) => converted,
            None => {
                return reject(
                    dest,
                    CoercionError::InvalidPayload {
                        message: "payload is neither json nor yaml".to_string(),
                    },
                )
            }
        },
    };

    *dest = Attr::Value(trim(policy, &value));
    Ok(())
}

fn yaml_mapping_to_json(raw: &str) -> Option<String> {
    let mapping: serde_yaml::Mapping = serde_yaml::from_str(raw).ok()?;
    let json = serde_json::to_value(mapping).ok()?;
    serde_json::to_string(&json).ok()
}

// ============================================================================
// Lists
// ============================================================================

/// Set a list-of-strings attribute.
///
/// `null` becomes an empty list, which is how lists are persisted.
pub fn set_list_string(
    dest: &mut Attr<Vec<String>>,
    data: Option<&ApiValue>,
    policy: Trim,
) -> CoerceResult {
    let items = match data {
        None | Some(ApiValue::Null) => {
            *dest = Attr::Value(Vec::new());
            return Ok(());
        }
        Some(ApiValue::List(items)) => items,
        Some(other) => return reject(dest, CoercionError::wrong_type("list", other.type_name())),
    };

    let mut out = Vec::with_capacity(items.len());
    for item in items {
        match item {
            ApiValue::String(s) => out.push(trim(policy, s)),
            other => {
                return reject(
                    dest,
                    CoercionError::wrong_type("list of strings", other.type_name()),
                )
            }
        }
    }
    *dest = Attr::Value(out);
    Ok(())
}

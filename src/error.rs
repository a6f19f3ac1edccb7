//! Error types for awx-state
//!
//! This module defines the operation-fatal error hierarchy. Field-level
//! coercion problems are not errors at this level; they are collected as
//! [`Diagnostics`](crate::diag::Diagnostics) by the mapping applier.

use thiserror::Error;

/// The main error type for awx-state
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Precondition Errors
    // ============================================================================
    #[error("no data passed")]
    NoData,

    #[error("state and previous state required for {origin} on {operation}")]
    MissingState { origin: String, operation: String },

    #[error("{kind} has no id set")]
    MissingId { kind: String },

    // ============================================================================
    // Search Result Errors
    // ============================================================================
    #[error("no entries found: {message}")]
    NotFound { message: String },

    #[error("more than one entry present, refine your query: received {count} entries, expected 1")]
    Ambiguous { count: i64 },

    #[error("malformed response: {message}")]
    MalformedResponse { message: String },

    // ============================================================================
    // Reconciliation Errors
    // ============================================================================
    #[error("failed to reconcile '{field}': {message}")]
    Reconcile { field: String, message: String },

    #[error("mutually exclusive fields {fields:?} are all populated in group '{group}'")]
    ExclusiveViolation { group: String, fields: Vec<String> },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Unknown entity kind: {kind}")]
    UnknownKind { kind: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} on {endpoint}: {body}")]
    HttpStatus {
        status: u16,
        endpoint: String,
        body: String,
    },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create a missing state error
    pub fn missing_state(origin: impl ToString, operation: impl ToString) -> Self {
        Self::MissingState {
            origin: origin.to_string(),
            operation: operation.to_string(),
        }
    }

    /// Create a not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create a malformed response error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Create a reconciliation error
    pub fn reconcile(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Reconcile {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, endpoint: impl Into<String>, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            endpoint: endpoint.into(),
            body: body.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Whether this error comes from the search result disambiguator
    pub fn is_search_error(&self) -> bool {
        matches!(
            self,
            Error::NotFound { .. } | Error::Ambiguous { .. } | Error::MalformedResponse { .. }
        )
    }

    /// Whether the remote side reported the entity as gone
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::HttpStatus { status, .. } => *status == 404,
            _ => false,
        }
    }
}

/// Result type alias for awx-state
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

//! Coercion error and trimming policy types

use thiserror::Error;

/// A single field failed to coerce
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoercionError {
    #[error("invalid data type: {found}, requires {expected}")]
    WrongType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("failed to convert {value} to {target}")]
    Conversion { value: String, target: &'static str },

    #[error("{message}")]
    InvalidPayload { message: String },

    #[error("failed to serialize value: {message}")]
    Serialize { message: String },
}

impl CoercionError {
    pub(crate) fn wrong_type(expected: &'static str, found: &'static str) -> Self {
        Self::WrongType { expected, found }
    }

    pub(crate) fn conversion(value: impl ToString, target: &'static str) -> Self {
        Self::Conversion {
            value: value.to_string(),
            target,
        }
    }

    /// Short summary used as the diagnostic title
    pub fn summary(&self) -> &'static str {
        match self {
            CoercionError::WrongType { .. } => "wrong data type passed",
            CoercionError::Conversion { .. } => "failed to convert value",
            CoercionError::InvalidPayload { .. } => "invalid payload",
            CoercionError::Serialize { .. } => "failed to serialize value",
        }
    }
}

/// Trimming policy for string values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trim {
    /// Keep the value as received
    #[default]
    None,
    /// Strip surrounding whitespace
    Whitespace,
    /// Strip surrounding whitespace, newlines, and one pair of surrounding
    /// double quotes added by the AWX settings encoder
    Awx,
}

/// Apply a trimming policy to a string
pub fn trim(policy: Trim, input: &str) -> String {
    match policy {
        Trim::None => input.to_string(),
        Trim::Whitespace => input.trim().to_string(),
        Trim::Awx => {
            let out = input.trim().trim_matches('\n');
            let out = out
                .strip_prefix('"')
                .and_then(|s| s.strip_suffix('"'))
                .unwrap_or(out);
            out.to_string()
        }
    }
}

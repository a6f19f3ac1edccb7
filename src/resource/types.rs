//! Resource lifecycle types

use crate::diag::Diagnostics;
use serde::Serialize;

/// Result of one lifecycle operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<R> {
    /// The reconciled record to persist
    pub state: R,
    /// Non-fatal field and reconciliation problems
    pub diagnostics: Diagnostics,
}

impl<R> Outcome<R> {
    pub fn new(state: R, diagnostics: Diagnostics) -> Self {
        Self { state, diagnostics }
    }

    /// Whether any field failed to decode
    pub fn has_error(&self) -> bool {
        self.diagnostics.has_error()
    }

    pub fn into_state(self) -> R {
        self.state
    }
}

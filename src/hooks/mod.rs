//! Reconciliation hooks
//!
//! Typed post-processing applied after a response has been mapped onto a
//! fresh state record. The remote API never echoes secrets back in clear; it
//! returns [`ENCRYPTED`] or omits them. The helpers here carry real values
//! forward from the previous state so that a refresh does not register a
//! spurious change.
//!
//! Each entity kind wires these helpers together in its own
//! [`StateRecord::reconcile`](crate::model::StateRecord::reconcile).

mod secrets;
mod types;

pub use secrets::{merge_masked_json, preserve_masked};
pub use types::{is_refresh, require_state_for, require_state_or_prev, Operation, Origin, ENCRYPTED};

#[cfg(test)]
mod tests;

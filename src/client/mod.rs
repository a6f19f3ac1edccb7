//! Transport to the AWX REST API
//!
//! A thin single-shot request/decode adapter. It attaches the credentials it
//! is given and decodes the body into an [`ApiMap`](crate::types::ApiMap);
//! there is no retry, refresh, or pagination.

mod awx;
mod transport;

pub use awx::{AwxClient, USER_AGENT};
pub use transport::{current_user, current_user_id, Transport};

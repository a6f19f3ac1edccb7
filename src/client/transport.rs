//! Transport trait

use crate::error::{Error, Result};
use crate::search::extract_single;
use crate::types::{ApiMap, ApiValue, JsonValue, Method};
use async_trait::async_trait;

/// Sends one request and decodes the response body
#[async_trait]
pub trait Transport: Send + Sync {
    /// `endpoint` is a path (with optional query) relative to the host
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&JsonValue>,
    ) -> Result<ApiMap>;
}

/// Endpoint describing the authenticated user
pub const ME_ENDPOINT: &str = "/api/v2/me/";

/// The authenticated user
pub async fn current_user(transport: &dyn Transport) -> Result<ApiMap> {
    let response = transport.request(Method::GET, ME_ENDPOINT, None).await?;
    extract_single(response)
}

/// Id of the authenticated user
pub async fn current_user_id(transport: &dyn Transport) -> Result<i64> {
    let user = current_user(transport).await?;
    match user.get("id") {
        Some(ApiValue::Number(n)) => n
            .as_i64()
            .ok_or_else(|| Error::malformed(format!("user id {n} is not an integer"))),
        Some(ApiValue::Int(id)) => Ok(*id),
        Some(other) => Err(Error::malformed(format!(
            "received {} for the user id",
            other.type_name()
        ))),
        None => Err(Error::malformed("no id for the current user")),
    }
}

//! Resource lifecycle
//!
//! Runs the normalization pipeline around a single transport call:
//!
//! ```text
//! request ──► extract_single ──► field mappings ──► reconcile ──► Outcome
//! ```
//!
//! Every operation works on a fresh default record and hands it back only
//! when the whole pipeline succeeded. A failed request or a fatal
//! reconciliation error yields the error and no state.

mod types;

pub use types::Outcome;

use crate::client::{current_user_id, Transport};
use crate::diag::Diagnostics;
use crate::error::{Error, Result};
use crate::hooks::{Operation, Origin};
use crate::model::{OwnedCredential, StateRecord};
use crate::search::extract_single;
use crate::types::{ApiMap, Method};
use tracing::{debug, info};
use url::form_urlencoded::byte_serialize;

/// Turn a decoded response into a reconciled record
pub fn normalize<R: StateRecord>(
    operation: Operation,
    origin: Origin,
    previous: Option<&R>,
    response: ApiMap,
) -> Result<Outcome<R>> {
    let data = extract_single(response)?;

    let mut state = R::default();
    let mut diagnostics = state.update_from_api(Some(&data))?;
    diagnostics.append(R::reconcile(operation, origin, previous, Some(&mut state))?);

    debug!(
        kind = %R::KIND,
        %operation,
        %origin,
        diagnostics = diagnostics.len(),
        "normalized response"
    );
    Ok(Outcome::new(state, diagnostics))
}

/// Refresh a managed entity from the server
pub async fn read<R: StateRecord>(
    transport: &dyn Transport,
    origin: Origin,
    previous: &R,
) -> Result<Outcome<R>> {
    let endpoint = R::KIND.item_endpoint(previous.id())?;
    let response = transport.request(Method::GET, &endpoint, None).await?;
    normalize(Operation::Read, origin, Some(previous), response)
}

/// Read an entity by id for a data source; singletons ignore the id
pub async fn read_data_source<R: StateRecord>(
    transport: &dyn Transport,
    id: Option<i64>,
) -> Result<Outcome<R>> {
    let endpoint = R::KIND.item_endpoint(id)?;
    let response = transport.request(Method::GET, &endpoint, None).await?;
    normalize(Operation::Read, Origin::DataSource, None, response)
}

/// Find the single entity whose `field` equals `value`
pub async fn lookup<R: StateRecord>(
    transport: &dyn Transport,
    field: &str,
    value: &str,
) -> Result<Outcome<R>> {
    if R::KIND.is_singleton() {
        return Err(Error::config(format!(
            "{} is a singleton and cannot be searched",
            R::KIND
        )));
    }
    let mut endpoint = format!("{}?{}={}", R::KIND.endpoint(), encode(field), encode(value));
    if let Some((key, fixed)) = R::KIND.search_filter() {
        endpoint.push_str(&format!("&{}={}", encode(key), encode(&fixed)));
    }
    let response = transport.request(Method::GET, &endpoint, None).await?;
    normalize(Operation::Read, Origin::DataSource, None, response)
}

/// Create an entity; singletons are written in place
pub async fn create<R: StateRecord>(transport: &dyn Transport, planned: &R) -> Result<Outcome<R>> {
    let method = if R::KIND.is_singleton() {
        Method::PATCH
    } else {
        Method::POST
    };
    let body = planned.request_body();
    let response = transport
        .request(method, R::KIND.endpoint(), Some(&body))
        .await?;
    let outcome = normalize(Operation::Create, Origin::Resource, Some(planned), response)?;
    info!(kind = %R::KIND, id = ?outcome.state.id(), "created");
    Ok(outcome)
}

/// Apply `planned` to the entity tracked by `previous`
pub async fn update<R: StateRecord>(
    transport: &dyn Transport,
    previous: &R,
    planned: &R,
) -> Result<Outcome<R>> {
    let endpoint = R::KIND.item_endpoint(previous.id())?;
    let body = planned.request_body();
    let response = transport
        .request(Method::PATCH, &endpoint, Some(&body))
        .await?;
    // Secrets the server masks back come from the plan, not the old state
    normalize(Operation::Update, Origin::Resource, Some(planned), response)
}

/// Delete the entity tracked by `previous`
pub async fn delete<R: StateRecord>(transport: &dyn Transport, previous: &R) -> Result<Diagnostics> {
    let endpoint = R::KIND.item_endpoint(previous.id())?;
    transport.request(Method::DELETE, &endpoint, None).await?;
    info!(kind = %R::KIND, id = ?previous.id(), "deleted");
    R::reconcile(Operation::Delete, Origin::Resource, Some(previous), None)
}

/// Create a credential, owned by the authenticated user when no owner is set
pub async fn create_credential<R: OwnedCredential>(
    transport: &dyn Transport,
    planned: &R,
) -> Result<Outcome<R>> {
    if planned.has_owner() {
        return create(transport, planned).await;
    }
    let mut planned = planned.clone();
    planned.set_user(current_user_id(transport).await?);
    create(transport, &planned).await
}

fn encode(raw: &str) -> String {
    byte_serialize(raw.as_bytes()).collect()
}

#[cfg(test)]
mod tests;

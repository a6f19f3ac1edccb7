//! Tests for the resource lifecycle

use super::*;
use crate::error::Error;
use crate::hooks::ENCRYPTED;
use crate::attr::Attr;
use crate::model::{Credential, CredentialNet, Organization, SettingsAuthGithub, User};
use crate::types::{ApiValue, JsonValue};
use async_trait::async_trait;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::collections::VecDeque;
use std::sync::Mutex;

type Call = (Method, String, Option<JsonValue>);

/// In-memory transport answering from a queue and recording every call
#[derive(Default)]
struct FakeTransport {
    responses: Mutex<VecDeque<Result<ApiMap>>>,
    calls: Mutex<Vec<Call>>,
}

impl FakeTransport {
    fn with(responses: Vec<Result<JsonValue>>) -> Self {
        let responses = responses
            .into_iter()
            .map(|r| r.map(|v| ApiValue::from(v).into_map().unwrap_or_default()))
            .collect();
        Self {
            responses: Mutex::new(responses),
            calls: Mutex::default(),
        }
    }

    fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for FakeTransport {
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&JsonValue>,
    ) -> Result<ApiMap> {
        self.calls
            .lock()
            .unwrap()
            .push((method, endpoint.to_string(), body.cloned()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(Error::Other("no response queued".to_string())))
    }
}

fn credential(value: JsonValue) -> Credential {
    let mut record = Credential::default();
    let map = ApiValue::from(value).into_map().unwrap();
    record.update_from_api(Some(&map)).unwrap();
    record
}

// ============================================================================
// Normalize
// ============================================================================

#[test]
fn test_normalize_unwraps_search_envelope() {
    let response = ApiValue::from(json!({"count": 1, "results": [{"id": 3, "name": "ops"}]}))
        .into_map()
        .unwrap();
    let outcome: Outcome<Organization> =
        normalize(Operation::Read, Origin::DataSource, None, response).unwrap();
    assert_eq!(outcome.state.id(), Some(3));
    assert!(outcome.diagnostics.is_empty());
}

#[test]
fn test_normalize_requires_previous_for_resource_read() {
    let response = ApiValue::from(json!({"id": 3})).into_map().unwrap();
    let err = normalize::<Organization>(Operation::Read, Origin::Resource, None, response).unwrap_err();
    assert!(matches!(err, Error::MissingState { .. }));
}

#[test]
fn test_normalize_keeps_partial_state_with_diagnostics() {
    let response = ApiValue::from(json!({"id": 3, "name": true, "max_hosts": 10}))
        .into_map()
        .unwrap();
    let outcome: Outcome<Organization> =
        normalize(Operation::Read, Origin::DataSource, None, response).unwrap();
    assert!(outcome.has_error());
    assert_eq!(outcome.diagnostics.len(), 1);
    assert_eq!(outcome.state.max_hosts, Attr::Value(10));
}

// ============================================================================
// Read
// ============================================================================

#[tokio::test]
async fn test_read_restores_masked_inputs() {
    let previous = credential(json!({
        "id": 9,
        "name": "ssh",
        "organization": 1,
        "inputs": {"username": "root", "password": "hunter2"},
    }));
    let transport = FakeTransport::with(vec![Ok(json!({
        "id": 9,
        "name": "ssh",
        "organization": 1,
        "inputs": {"username": "admin", "password": ENCRYPTED},
    }))]);

    let outcome = read(&transport, Origin::Resource, &previous).await.unwrap();
    assert_eq!(
        outcome.state.inputs.as_str(),
        Some(r#"{"password":"hunter2","username":"admin"}"#)
    );
    assert_eq!(transport.calls()[0].1, "/api/v2/credentials/9/");
}

#[tokio::test]
async fn test_read_without_id_fails_before_request() {
    let transport = FakeTransport::default();
    let err = read(&transport, Origin::Resource, &Organization::default())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::MissingId { .. }));
    assert!(transport.calls().is_empty());
}

#[tokio::test]
async fn test_read_failure_returns_no_state() {
    let previous = credential(json!({"id": 9, "organization": 1}));
    let transport = FakeTransport::with(vec![Err(Error::http_status(404, "/api/v2/credentials/9/", ""))]);
    let err = read(&transport, Origin::Resource, &previous).await.unwrap_err();
    assert!(err.is_not_found());
}

#[tokio::test]
async fn test_read_data_source_singleton() {
    let transport = FakeTransport::with(vec![Ok(json!({
        "SOCIAL_AUTH_GITHUB_KEY": "key",
        "SOCIAL_AUTH_GITHUB_SECRET": ENCRYPTED,
    }))]);
    let outcome: Outcome<SettingsAuthGithub> = read_data_source(&transport, None).await.unwrap();
    assert_eq!(outcome.state.social_auth_github_secret.as_str(), Some(ENCRYPTED));
    assert_eq!(transport.calls()[0].1, "/api/v2/settings/github/");
}

// ============================================================================
// Lookup
// ============================================================================

#[tokio::test]
async fn test_lookup_encodes_query() {
    let transport = FakeTransport::with(vec![Ok(json!({
        "count": 1,
        "results": [{"id": 4, "username": "jane doe"}],
    }))]);
    let outcome: Outcome<User> = lookup(&transport, "username", "jane doe").await.unwrap();
    assert_eq!(outcome.state.id(), Some(4));
    assert_eq!(transport.calls()[0].1, "/api/v2/users/?username=jane+doe");
}

#[tokio::test]
async fn test_lookup_net_credential_narrows_by_type() {
    let transport = FakeTransport::with(vec![Ok(json!({
        "count": 1,
        "results": [{"id": 6, "name": "switches", "inputs": {"username": "netops"}}],
    }))]);
    let outcome: Outcome<CredentialNet> = lookup(&transport, "name", "switches").await.unwrap();
    assert_eq!(outcome.state.username.as_str(), Some("netops"));
    assert_eq!(
        transport.calls()[0].1,
        "/api/v2/credentials/?name=switches&credential_type=4"
    );
}

#[tokio::test]
async fn test_lookup_ambiguous() {
    let transport = FakeTransport::with(vec![Ok(json!({
        "count": 2,
        "results": [{"id": 1}, {"id": 2}],
    }))]);
    let err = lookup::<Organization>(&transport, "name", "dup").await.unwrap_err();
    assert!(matches!(err, Error::Ambiguous { count: 2 }));
}

#[tokio::test]
async fn test_lookup_rejects_singletons() {
    let transport = FakeTransport::default();
    let err = lookup::<SettingsAuthGithub>(&transport, "name", "x").await.unwrap_err();
    assert!(matches!(err, Error::Config { .. }));
}

// ============================================================================
// Create / Update / Delete
// ============================================================================

#[tokio::test]
async fn test_create_posts_body_and_keeps_planned_inputs() {
    let mut planned = Credential::default();
    planned.name = Attr::string("ssh");
    planned.credential_type = Attr::Value(1);
    planned.organization = Attr::Value(2);
    planned.inputs = Attr::string(r#"{"password":"hunter2"}"#);

    let transport = FakeTransport::with(vec![Ok(json!({
        "id": 11,
        "name": "ssh",
        "credential_type": 1,
        "organization": 2,
        "inputs": {"password": ENCRYPTED},
    }))]);
    let outcome = create_credential(&transport, &planned).await.unwrap();

    assert_eq!(outcome.state.id(), Some(11));
    assert_eq!(outcome.state.inputs, planned.inputs);

    let calls = transport.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, Method::POST);
    assert_eq!(
        calls[0].2,
        Some(json!({
            "name": "ssh",
            "credential_type": 1,
            "organization": 2,
            "inputs": {"password": "hunter2"},
        }))
    );
}

#[tokio::test]
async fn test_create_credential_defaults_owner_to_current_user() {
    let mut planned = Credential::default();
    planned.name = Attr::string("token");

    let transport = FakeTransport::with(vec![
        Ok(json!({"count": 1, "results": [{"id": 42, "username": "admin"}]})),
        Ok(json!({"id": 12, "name": "token", "user": 42})),
    ]);
    let outcome = create_credential(&transport, &planned).await.unwrap();
    assert_eq!(outcome.state.user, Attr::Value(42));
    assert!(outcome.state.organization.is_null());

    let calls = transport.calls();
    assert_eq!(calls[0].1, "/api/v2/me/");
    assert_eq!(calls[1].2, Some(json!({"name": "token", "user": 42})));
}

#[tokio::test]
async fn test_create_net_credential_owned_by_current_user() {
    let planned = CredentialNet {
        name: Attr::string("switches"),
        username: Attr::string("netops"),
        password: Attr::string("pw"),
        ..Default::default()
    };

    let transport = FakeTransport::with(vec![
        Ok(json!({"count": 1, "results": [{"id": 42, "username": "admin"}]})),
        Ok(json!({
            "id": 13,
            "name": "switches",
            "organization": null,
            "inputs": {"username": "netops", "password": ENCRYPTED},
        })),
    ]);
    let outcome = create_credential(&transport, &planned).await.unwrap();
    assert_eq!(outcome.state.id(), Some(13));
    assert_eq!(outcome.state.password.as_str(), Some("pw"));
    assert!(outcome.state.organization.is_null());

    let calls = transport.calls();
    assert_eq!(calls[0].1, "/api/v2/me/");
    assert_eq!(
        calls[1].2,
        Some(json!({
            "name": "switches",
            "credential_type": 4,
            "user": 42,
            "inputs": {"username": "netops", "password": "pw"},
        }))
    );
}

#[tokio::test]
async fn test_create_singleton_patches() {
    let mut planned = SettingsAuthGithub::default();
    planned.social_auth_github_secret = Attr::string("s3cr3t");
    let transport = FakeTransport::with(vec![Ok(json!({"SOCIAL_AUTH_GITHUB_SECRET": ENCRYPTED}))]);

    let outcome = create(&transport, &planned).await.unwrap();
    assert_eq!(outcome.state.social_auth_github_secret.as_str(), Some("s3cr3t"));
    assert_eq!(transport.calls()[0].0, Method::PATCH);
}

#[tokio::test]
async fn test_update_patches_item_endpoint() {
    let previous = credential(json!({"id": 9, "name": "old", "organization": 1}));
    let mut planned = previous.clone();
    planned.name = Attr::string("new");

    let transport = FakeTransport::with(vec![Ok(json!({"id": 9, "name": "new", "organization": 1}))]);
    let outcome = update(&transport, &previous, &planned).await.unwrap();

    assert_eq!(outcome.state.name.as_str(), Some("new"));
    let calls = transport.calls();
    assert_eq!(calls[0].0, Method::PATCH);
    assert_eq!(calls[0].1, "/api/v2/credentials/9/");
}

#[tokio::test]
async fn test_create_rejects_credential_with_two_owners() {
    let transport = FakeTransport::with(vec![Ok(json!({"id": 5, "organization": 1, "team": 2}))]);
    let mut planned = Credential::default();
    planned.organization = Attr::Value(1);
    let err = create_credential(&transport, &planned).await.unwrap_err();
    assert!(matches!(err, Error::ExclusiveViolation { .. }));
}

#[tokio::test]
async fn test_delete() {
    let previous = credential(json!({"id": 9, "organization": 1}));
    let transport = FakeTransport::with(vec![Ok(JsonValue::Null)]);
    let diags = delete(&transport, &previous).await.unwrap();
    assert!(diags.is_empty());
    assert_eq!(transport.calls()[0], (Method::DELETE, "/api/v2/credentials/9/".to_string(), None));
}

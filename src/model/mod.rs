//! Typed state records
//!
//! One record per entity kind, declared as a field table with
//! `state_record!`. Each record implements [`StateRecord`], which
//! gives the resource lifecycle everything it needs: the mapping list, the
//! reconciliation hook, the id, and the request body.
//!
//! ```text
//! ApiMap ──► field_mappings ──► apply_field_mappings ──► record
//!                                                          │
//!                        previous record ──► reconcile ◄───┘
//! ```

mod application;
mod credential;
mod credential_net;
mod inventory_source;
mod job_template;
mod kind;
mod macros;
mod notification_template;
mod organization;
mod record;
mod settings;
mod user;

pub use application::Application;
pub use credential::{Credential, OwnedCredential, CREDENTIAL_OWNER};
pub use credential_net::{CredentialNet, CREDENTIAL_NET_TYPE};
pub use inventory_source::InventorySource;
pub use job_template::JobTemplate;
pub use kind::EntityKind;
pub use notification_template::NotificationTemplate;
pub use organization::Organization;
pub use record::StateRecord;
pub use settings::{SettingsAuthAzureAdOauth2, SettingsAuthGithub, SettingsAuthLdap, SettingsAuthSaml};
pub use user::User;

use crate::types::JsonValue;

/// Request body value for a field holding serialized JSON.
///
/// The API expects the embedded document itself; text that does not parse is
/// sent as a plain string.
pub(crate) fn embedded_json(raw: &str) -> JsonValue {
    serde_json::from_str(raw).unwrap_or_else(|_| JsonValue::String(raw.to_string()))
}

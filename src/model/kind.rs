//! Entity kinds

use super::credential_net::CREDENTIAL_NET_TYPE;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every entity kind the layer knows how to normalize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Organization,
    Application,
    Credential,
    CredentialNet,
    NotificationTemplate,
    User,
    JobTemplate,
    InventorySource,
    SettingsAuthGithub,
    SettingsAuthAzureAdOauth2,
    SettingsAuthLdap,
    SettingsAuthSaml,
}

impl EntityKind {
    pub const ALL: [EntityKind; 12] = [
        EntityKind::Organization,
        EntityKind::Application,
        EntityKind::Credential,
        EntityKind::CredentialNet,
        EntityKind::NotificationTemplate,
        EntityKind::User,
        EntityKind::JobTemplate,
        EntityKind::InventorySource,
        EntityKind::SettingsAuthGithub,
        EntityKind::SettingsAuthAzureAdOauth2,
        EntityKind::SettingsAuthLdap,
        EntityKind::SettingsAuthSaml,
    ];

    /// Snake case name
    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Organization => "organization",
            EntityKind::Application => "application",
            EntityKind::Credential => "credential",
            EntityKind::CredentialNet => "credential_net",
            EntityKind::NotificationTemplate => "notification_template",
            EntityKind::User => "user",
            EntityKind::JobTemplate => "job_template",
            EntityKind::InventorySource => "inventory_source",
            EntityKind::SettingsAuthGithub => "settings_auth_github",
            EntityKind::SettingsAuthAzureAdOauth2 => "settings_auth_azuread_oauth2",
            EntityKind::SettingsAuthLdap => "settings_auth_ldap",
            EntityKind::SettingsAuthSaml => "settings_auth_saml",
        }
    }

    /// Type name the state is persisted under
    pub fn type_name(self) -> String {
        format!("awx_{}", self.name())
    }

    /// Collection or singleton endpoint, with a trailing slash
    pub fn endpoint(self) -> &'static str {
        match self {
            EntityKind::Organization => "/api/v2/organizations/",
            EntityKind::Application => "/api/v2/applications/",
            EntityKind::Credential | EntityKind::CredentialNet => "/api/v2/credentials/",
            EntityKind::NotificationTemplate => "/api/v2/notification_templates/",
            EntityKind::User => "/api/v2/users/",
            EntityKind::JobTemplate => "/api/v2/job_templates/",
            EntityKind::InventorySource => "/api/v2/inventory_sources/",
            EntityKind::SettingsAuthGithub => "/api/v2/settings/github/",
            EntityKind::SettingsAuthAzureAdOauth2 => "/api/v2/settings/azuread-oauth2/",
            EntityKind::SettingsAuthLdap => "/api/v2/settings/ldap/",
            EntityKind::SettingsAuthSaml => "/api/v2/settings/saml/",
        }
    }

    /// Settings pages have no id and exist exactly once
    pub fn is_singleton(self) -> bool {
        matches!(
            self,
            EntityKind::SettingsAuthGithub
                | EntityKind::SettingsAuthAzureAdOauth2
                | EntityKind::SettingsAuthLdap
                | EntityKind::SettingsAuthSaml
        )
    }

    /// Unique attribute used by lookups
    pub fn lookup_field(self) -> Option<&'static str> {
        match self {
            EntityKind::User => Some("username"),
            EntityKind::Organization
            | EntityKind::Application
            | EntityKind::Credential
            | EntityKind::CredentialNet
            | EntityKind::NotificationTemplate
            | EntityKind::JobTemplate
            | EntityKind::InventorySource => Some("name"),
            EntityKind::SettingsAuthGithub
            | EntityKind::SettingsAuthAzureAdOauth2
            | EntityKind::SettingsAuthLdap
            | EntityKind::SettingsAuthSaml => None,
        }
    }

    /// Query pair every search of this kind is narrowed by
    pub fn search_filter(self) -> Option<(&'static str, String)> {
        match self {
            EntityKind::CredentialNet => Some(("credential_type", CREDENTIAL_NET_TYPE.to_string())),
            _ => None,
        }
    }

    /// Endpoint of a single entity
    pub fn item_endpoint(self, id: Option<i64>) -> Result<String> {
        if self.is_singleton() {
            return Ok(self.endpoint().to_string());
        }
        match id {
            Some(id) => Ok(format!("{}{id}/", self.endpoint())),
            None => Err(Error::MissingId {
                kind: self.name().to_string(),
            }),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EntityKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let name = normalized.strip_prefix("awx_").unwrap_or(&normalized);
        EntityKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| Error::UnknownKind {
                kind: s.to_string(),
            })
    }
}

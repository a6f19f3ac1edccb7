//! Authentication settings pages
//!
//! Singletons keyed by upper-case setting names. The API masks every secret
//! setting, including on the response to the write that set it.

mod azuread;
mod github;
mod ldap;
mod saml;

pub use azuread::SettingsAuthAzureAdOauth2;
pub use github::SettingsAuthGithub;
pub use ldap::SettingsAuthLdap;
pub use saml::SettingsAuthSaml;

use crate::error::Result;
use crate::hooks::{require_state_for, Operation, Origin};

/// Settings hooks touch fresh state on create as well
fn require_settings_state<T>(
    operation: Operation,
    origin: Origin,
    previous: Option<&T>,
    fresh: Option<&T>,
) -> Result<()> {
    require_state_for(
        origin,
        operation,
        &[Operation::Create, Operation::Read, Operation::Update],
        previous,
        fresh,
    )
}

fn restores_secrets(operation: Operation, origin: Origin) -> bool {
    origin == Origin::Resource && operation != Operation::Delete
}

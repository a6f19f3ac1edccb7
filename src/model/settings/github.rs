use super::{require_settings_state, restores_secrets};
use crate::diag::Diagnostics;
use crate::error::Result;
use crate::hooks::{preserve_masked, Operation, Origin};
use crate::mapping::FieldMapping;
use crate::model::kind::EntityKind;
use crate::model::macros::state_record;
use crate::model::record::StateRecord;
use crate::types::{ApiMap, JsonValue};

state_record! {
    /// GitHub OAuth2 settings
    pub struct SettingsAuthGithub {
        social_auth_github_callback_url: String = "SOCIAL_AUTH_GITHUB_CALLBACK_URL",
        social_auth_github_key: String = "SOCIAL_AUTH_GITHUB_KEY",
        social_auth_github_secret: String = "SOCIAL_AUTH_GITHUB_SECRET",
        social_auth_github_organization_map: JsonString = "SOCIAL_AUTH_GITHUB_ORGANIZATION_MAP",
        social_auth_github_team_map: JsonString = "SOCIAL_AUTH_GITHUB_TEAM_MAP",
    }
}

impl StateRecord for SettingsAuthGithub {
    const KIND: EntityKind = EntityKind::SettingsAuthGithub;

    fn field_mappings<'a>(&'a mut self, _data: &'a ApiMap) -> Vec<FieldMapping<'a>> {
        self.declared_mappings()
    }

    fn reconcile(
        operation: Operation,
        origin: Origin,
        previous: Option<&Self>,
        fresh: Option<&mut Self>,
    ) -> Result<Diagnostics> {
        require_settings_state(operation, origin, previous, fresh.as_deref())?;
        if let (Some(previous), Some(fresh)) = (previous, fresh) {
            if restores_secrets(operation, origin) {
                preserve_masked(
                    &mut fresh.social_auth_github_secret,
                    &previous.social_auth_github_secret,
                );
            }
        }
        Ok(Diagnostics::new())
    }

    fn id(&self) -> Option<i64> {
        None
    }

    fn request_body(&self) -> JsonValue {
        JsonValue::Object(self.declared_body(&["SOCIAL_AUTH_GITHUB_CALLBACK_URL"]))
    }
}

use super::{require_settings_state, restores_secrets};
use crate::attr::Attr;
use crate::diag::Diagnostics;
use crate::error::Result;
use crate::hooks::{preserve_masked, Operation, Origin};
use crate::mapping::FieldMapping;
use crate::model::kind::EntityKind;
use crate::model::macros::state_record;
use crate::model::record::StateRecord;
use crate::types::{ApiMap, JsonValue};

state_record! {
    /// SAML settings
    pub struct SettingsAuthSaml {
        saml_auto_create_objects: Bool = "SAML_AUTO_CREATE_OBJECTS",
        social_auth_saml_callback_url: String = "SOCIAL_AUTH_SAML_CALLBACK_URL",
        social_auth_saml_metadata_url: String = "SOCIAL_AUTH_SAML_METADATA_URL",
        social_auth_saml_sp_entity_id: String = "SOCIAL_AUTH_SAML_SP_ENTITY_ID",
        /// PEM; the trailing newline is dropped by the encoder
        social_auth_saml_sp_public_cert: TrimmedString = "SOCIAL_AUTH_SAML_SP_PUBLIC_CERT",
        social_auth_saml_sp_private_key: TrimmedString = "SOCIAL_AUTH_SAML_SP_PRIVATE_KEY",
        social_auth_saml_org_info: JsonString = "SOCIAL_AUTH_SAML_ORG_INFO",
        social_auth_saml_technical_contact: JsonString = "SOCIAL_AUTH_SAML_TECHNICAL_CONTACT",
        social_auth_saml_support_contact: JsonString = "SOCIAL_AUTH_SAML_SUPPORT_CONTACT",
        social_auth_saml_enabled_idps: JsonString = "SOCIAL_AUTH_SAML_ENABLED_IDPS",
        social_auth_saml_security_config: JsonString = "SOCIAL_AUTH_SAML_SECURITY_CONFIG",
        social_auth_saml_sp_extra: JsonString = "SOCIAL_AUTH_SAML_SP_EXTRA",
        social_auth_saml_extra_data: ListString = "SOCIAL_AUTH_SAML_EXTRA_DATA",
        social_auth_saml_organization_map: JsonString = "SOCIAL_AUTH_SAML_ORGANIZATION_MAP",
        social_auth_saml_team_map: JsonString = "SOCIAL_AUTH_SAML_TEAM_MAP",
        social_auth_saml_organization_attr: JsonString = "SOCIAL_AUTH_SAML_ORGANIZATION_ATTR",
        social_auth_saml_team_attr: JsonString = "SOCIAL_AUTH_SAML_TEAM_ATTR",
        social_auth_saml_user_flags_by_attr: JsonString = "SOCIAL_AUTH_SAML_USER_FLAGS_BY_ATTR",
    }
}

fn ensure_trailing_newline(value: &mut Attr<String>) {
    if let Attr::Value(pem) = value {
        if !pem.is_empty() && !pem.ends_with('\n') {
            pem.push('\n');
        }
    }
}

impl StateRecord for SettingsAuthSaml {
    const KIND: EntityKind = EntityKind::SettingsAuthSaml;

    fn field_mappings<'a>(&'a mut self, _data: &'a ApiMap) -> Vec<FieldMapping<'a>> {
        self.declared_mappings()
    }

    fn reconcile(
        operation: Operation,
        origin: Origin,
        previous: Option<&Self>,
        mut fresh: Option<&mut Self>,
    ) -> Result<Diagnostics> {
        require_settings_state(operation, origin, previous, fresh.as_deref())?;
        if let Some(fresh) = fresh.as_deref_mut() {
            ensure_trailing_newline(&mut fresh.social_auth_saml_sp_public_cert);
        }

        if let (Some(previous), Some(fresh)) = (previous, fresh) {
            if restores_secrets(operation, origin) {
                preserve_masked(
                    &mut fresh.social_auth_saml_sp_private_key,
                    &previous.social_auth_saml_sp_private_key,
                );
            }
        }
        Ok(Diagnostics::new())
    }

    fn id(&self) -> Option<i64> {
        None
    }

    fn request_body(&self) -> JsonValue {
        JsonValue::Object(self.declared_body(&["SOCIAL_AUTH_SAML_CALLBACK_URL"]))
    }
}

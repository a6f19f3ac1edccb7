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
    /// LDAP authentication settings for the default server and servers 1 to 5
    pub struct SettingsAuthLdap {
        auth_ldap_bind_dn: String = "AUTH_LDAP_BIND_DN",
        auth_ldap_bind_password: String = "AUTH_LDAP_BIND_PASSWORD",
        auth_ldap_connection_options: JsonString = "AUTH_LDAP_CONNECTION_OPTIONS",
        auth_ldap_deny_group: String = "AUTH_LDAP_DENY_GROUP",
        auth_ldap_group_search: ListString = "AUTH_LDAP_GROUP_SEARCH",
        auth_ldap_group_type: String = "AUTH_LDAP_GROUP_TYPE",
        auth_ldap_group_type_params: JsonString = "AUTH_LDAP_GROUP_TYPE_PARAMS",
        auth_ldap_organization_map: JsonString = "AUTH_LDAP_ORGANIZATION_MAP",
        auth_ldap_require_group: String = "AUTH_LDAP_REQUIRE_GROUP",
        auth_ldap_server_uri: String = "AUTH_LDAP_SERVER_URI",
        auth_ldap_start_tls: Bool = "AUTH_LDAP_START_TLS",
        auth_ldap_team_map: JsonString = "AUTH_LDAP_TEAM_MAP",
        auth_ldap_user_attr_map: JsonString = "AUTH_LDAP_USER_ATTR_MAP",
        auth_ldap_user_dn_template: String = "AUTH_LDAP_USER_DN_TEMPLATE",
        auth_ldap_user_flags_by_group: JsonString = "AUTH_LDAP_USER_FLAGS_BY_GROUP",
        auth_ldap_user_search: ListString = "AUTH_LDAP_USER_SEARCH",

        auth_ldap_1_bind_dn: String = "AUTH_LDAP_1_BIND_DN",
        auth_ldap_1_bind_password: String = "AUTH_LDAP_1_BIND_PASSWORD",
        auth_ldap_1_connection_options: JsonString = "AUTH_LDAP_1_CONNECTION_OPTIONS",
        auth_ldap_1_deny_group: String = "AUTH_LDAP_1_DENY_GROUP",
        auth_ldap_1_group_search: ListString = "AUTH_LDAP_1_GROUP_SEARCH",
        auth_ldap_1_group_type: String = "AUTH_LDAP_1_GROUP_TYPE",
        auth_ldap_1_group_type_params: JsonString = "AUTH_LDAP_1_GROUP_TYPE_PARAMS",
        auth_ldap_1_organization_map: JsonString = "AUTH_LDAP_1_ORGANIZATION_MAP",
        auth_ldap_1_require_group: String = "AUTH_LDAP_1_REQUIRE_GROUP",
        auth_ldap_1_server_uri: String = "AUTH_LDAP_1_SERVER_URI",
        auth_ldap_1_start_tls: Bool = "AUTH_LDAP_1_START_TLS",
        auth_ldap_1_team_map: JsonString = "AUTH_LDAP_1_TEAM_MAP",
        auth_ldap_1_user_attr_map: JsonString = "AUTH_LDAP_1_USER_ATTR_MAP",
        auth_ldap_1_user_dn_template: String = "AUTH_LDAP_1_USER_DN_TEMPLATE",
        auth_ldap_1_user_flags_by_group: JsonString = "AUTH_LDAP_1_USER_FLAGS_BY_GROUP",
        auth_ldap_1_user_search: ListString = "AUTH_LDAP_1_USER_SEARCH",

        auth_ldap_2_bind_dn: String = "AUTH_LDAP_2_BIND_DN",
        auth_ldap_2_bind_password: String = "AUTH_LDAP_2_BIND_PASSWORD",
        auth_ldap_2_connection_options: JsonString = "AUTH_LDAP_2_CONNECTION_OPTIONS",
        auth_ldap_2_deny_group: String = "AUTH_LDAP_2_DENY_GROUP",
        auth_ldap_2_group_search: ListString = "AUTH_LDAP_2_GROUP_SEARCH",
        auth_ldap_2_group_type: String = "AUTH_LDAP_2_GROUP_TYPE",
        auth_ldap_2_group_type_params: JsonString = "AUTH_LDAP_2_GROUP_TYPE_PARAMS",
        auth_ldap_2_organization_map: JsonString = "AUTH_LDAP_2_ORGANIZATION_MAP",
        auth_ldap_2_require_group: String = "AUTH_LDAP_2_REQUIRE_GROUP",
        auth_ldap_2_server_uri: String = "AUTH_LDAP_2_SERVER_URI",
        auth_ldap_2_start_tls: Bool = "AUTH_LDAP_2_START_TLS",
        auth_ldap_2_team_map: JsonString = "AUTH_LDAP_2_TEAM_MAP",
        auth_ldap_2_user_attr_map: JsonString = "AUTH_LDAP_2_USER_ATTR_MAP",
        auth_ldap_2_user_dn_template: String = "AUTH_LDAP_2_USER_DN_TEMPLATE",
        auth_ldap_2_user_flags_by_group: JsonString = "AUTH_LDAP_2_USER_FLAGS_BY_GROUP",
        auth_ldap_2_user_search: ListString = "AUTH_LDAP_2_USER_SEARCH",

        auth_ldap_3_bind_dn: String = "AUTH_LDAP_3_BIND_DN",
        auth_ldap_3_bind_password: String = "AUTH_LDAP_3_BIND_PASSWORD",
        auth_ldap_3_connection_options: JsonString = "AUTH_LDAP_3_CONNECTION_OPTIONS",
        auth_ldap_3_deny_group: String = "AUTH_LDAP_3_DENY_GROUP",
        auth_ldap_3_group_search: ListString = "AUTH_LDAP_3_GROUP_SEARCH",
        auth_ldap_3_group_type: String = "AUTH_LDAP_3_GROUP_TYPE",
        auth_ldap_3_group_type_params: JsonString = "AUTH_LDAP_3_GROUP_TYPE_PARAMS",
        auth_ldap_3_organization_map: JsonString = "AUTH_LDAP_3_ORGANIZATION_MAP",
        auth_ldap_3_require_group: String = "AUTH_LDAP_3_REQUIRE_GROUP",
        auth_ldap_3_server_uri: String = "AUTH_LDAP_3_SERVER_URI",
        auth_ldap_3_start_tls: Bool = "AUTH_LDAP_3_START_TLS",
        auth_ldap_3_team_map: JsonString = "AUTH_LDAP_3_TEAM_MAP",
        auth_ldap_3_user_attr_map: JsonString = "AUTH_LDAP_3_USER_ATTR_MAP",
        auth_ldap_3_user_dn_template: String = "AUTH_LDAP_3_USER_DN_TEMPLATE",
        auth_ldap_3_user_flags_by_group: JsonString = "AUTH_LDAP_3_USER_FLAGS_BY_GROUP",
        auth_ldap_3_user_search: ListString = "AUTH_LDAP_3_USER_SEARCH",

        auth_ldap_4_bind_dn: String = "AUTH_LDAP_4_BIND_DN",
        auth_ldap_4_bind_password: String = "AUTH_LDAP_4_BIND_PASSWORD",
        auth_ldap_4_connection_options: JsonString = "AUTH_LDAP_4_CONNECTION_OPTIONS",
        auth_ldap_4_deny_group: String = "AUTH_LDAP_4_DENY_GROUP",
        auth_ldap_4_group_search: ListString = "AUTH_LDAP_4_GROUP_SEARCH",
        auth_ldap_4_group_type: String = "AUTH_LDAP_4_GROUP_TYPE",
        auth_ldap_4_group_type_params: JsonString = "AUTH_LDAP_4_GROUP_TYPE_PARAMS",
        auth_ldap_4_organization_map: JsonString = "AUTH_LDAP_4_ORGANIZATION_MAP",
        auth_ldap_4_require_group: String = "AUTH_LDAP_4_REQUIRE_GROUP",
        auth_ldap_4_server_uri: String = "AUTH_LDAP_4_SERVER_URI",
        auth_ldap_4_start_tls: Bool = "AUTH_LDAP_4_START_TLS",
        auth_ldap_4_team_map: JsonString = "AUTH_LDAP_4_TEAM_MAP",
        auth_ldap_4_user_attr_map: JsonString = "AUTH_LDAP_4_USER_ATTR_MAP",
        auth_ldap_4_user_dn_template: String = "AUTH_LDAP_4_USER_DN_TEMPLATE",
        auth_ldap_4_user_flags_by_group: JsonString = "AUTH_LDAP_4_USER_FLAGS_BY_GROUP",
        auth_ldap_4_user_search: ListString = "AUTH_LDAP_4_USER_SEARCH",

        auth_ldap_5_bind_dn: String = "AUTH_LDAP_5_BIND_DN",
        auth_ldap_5_bind_password: String = "AUTH_LDAP_5_BIND_PASSWORD",
        auth_ldap_5_connection_options: JsonString = "AUTH_LDAP_5_CONNECTION_OPTIONS",
        auth_ldap_5_deny_group: String = "AUTH_LDAP_5_DENY_GROUP",
        auth_ldap_5_group_search: ListString = "AUTH_LDAP_5_GROUP_SEARCH",
        auth_ldap_5_group_type: String = "AUTH_LDAP_5_GROUP_TYPE",
        auth_ldap_5_group_type_params: JsonString = "AUTH_LDAP_5_GROUP_TYPE_PARAMS",
        auth_ldap_5_organization_map: JsonString = "AUTH_LDAP_5_ORGANIZATION_MAP",
        auth_ldap_5_require_group: String = "AUTH_LDAP_5_REQUIRE_GROUP",
        auth_ldap_5_server_uri: String = "AUTH_LDAP_5_SERVER_URI",
        auth_ldap_5_start_tls: Bool = "AUTH_LDAP_5_START_TLS",
        auth_ldap_5_team_map: JsonString = "AUTH_LDAP_5_TEAM_MAP",
        auth_ldap_5_user_attr_map: JsonString = "AUTH_LDAP_5_USER_ATTR_MAP",
        auth_ldap_5_user_dn_template: String = "AUTH_LDAP_5_USER_DN_TEMPLATE",
        auth_ldap_5_user_flags_by_group: JsonString = "AUTH_LDAP_5_USER_FLAGS_BY_GROUP",
        auth_ldap_5_user_search: ListString = "AUTH_LDAP_5_USER_SEARCH",
    }
}

impl SettingsAuthLdap {
    /// Bind passwords of the default server and servers 1 to 5, in order
    pub fn bind_passwords(&self) -> [&Attr<String>; 6] {
        [
            &self.auth_ldap_bind_password,
            &self.auth_ldap_1_bind_password,
            &self.auth_ldap_2_bind_password,
            &self.auth_ldap_3_bind_password,
            &self.auth_ldap_4_bind_password,
            &self.auth_ldap_5_bind_password,
        ]
    }

    fn bind_passwords_mut(&mut self) -> [&mut Attr<String>; 6] {
        [
            &mut self.auth_ldap_bind_password,
            &mut self.auth_ldap_1_bind_password,
            &mut self.auth_ldap_2_bind_password,
            &mut self.auth_ldap_3_bind_password,
            &mut self.auth_ldap_4_bind_password,
            &mut self.auth_ldap_5_bind_password,
        ]
    }
}

impl StateRecord for SettingsAuthLdap {
    const KIND: EntityKind = EntityKind::SettingsAuthLdap;

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
        let (Some(previous), Some(fresh)) = (previous, fresh) else {
            return Ok(Diagnostics::new());
        };

        if restores_secrets(operation, origin) {
            for (fresh, previous) in fresh
                .bind_passwords_mut()
                .into_iter()
                .zip(previous.bind_passwords())
            {
                preserve_masked(fresh, previous);
            }
        }
        Ok(Diagnostics::new())
    }

    fn id(&self) -> Option<i64> {
        None
    }

    fn request_body(&self) -> JsonValue {
        JsonValue::Object(self.declared_body(&[]))
    }
}

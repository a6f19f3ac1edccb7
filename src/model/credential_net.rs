use super::credential::OwnedCredential;
use super::kind::EntityKind;
use super::macros::state_record;
use super::record::StateRecord;
use crate::attr::Attr;
use crate::diag::Diagnostics;
use crate::error::Result;
use crate::hooks::{preserve_masked, require_state_for, Operation, Origin};
use crate::mapping::{FieldMapping, Setter};
use crate::types::{ApiMap, ApiValue, JsonValue};
use serde_json::Map;
use tracing::debug;

/// Credential type id of the built-in network credential type
pub const CREDENTIAL_NET_TYPE: i64 = 4;

state_record! {
    /// A network device credential, with its inputs flattened into fields
    pub struct CredentialNet {
        id: Int64 = "id",
        name: String = "name",
        description: String = "description",
    }
    unmapped {
        organization: Int64,
        /// Owner sent on create when no organization is set; never persisted
        #[serde(skip)]
        user: Int64,
        username: String,
        authorize: Bool,
        /// Write-only, masked by the API
        password: String,
        ssh_key_data: String,
        ssh_key_unlock: String,
        authorize_password: String,
    }
}

impl CredentialNet {
    fn secrets_mut(&mut self) -> [(&'static str, &mut Attr<String>); 4] {
        [
            ("password", &mut self.password),
            ("ssh_key_data", &mut self.ssh_key_data),
            ("ssh_key_unlock", &mut self.ssh_key_unlock),
            ("authorize_password", &mut self.authorize_password),
        ]
    }

    fn secrets(&self) -> [(&'static str, &Attr<String>); 4] {
        [
            ("password", &self.password),
            ("ssh_key_data", &self.ssh_key_data),
            ("ssh_key_unlock", &self.ssh_key_unlock),
            ("authorize_password", &self.authorize_password),
        ]
    }
}

impl OwnedCredential for CredentialNet {
    fn has_owner(&self) -> bool {
        self.organization.value().is_some() || self.user.value().is_some()
    }

    fn set_user(&mut self, user_id: i64) {
        self.user = Attr::Value(user_id);
    }
}

impl StateRecord for CredentialNet {
    const KIND: EntityKind = EntityKind::CredentialNet;

    fn field_mappings<'a>(&'a mut self, data: &'a ApiMap) -> Vec<FieldMapping<'a>> {
        let (
            mut mappings,
            (organization, _user, username, authorize, password, ssh_key_data, ssh_key_unlock, authorize_password),
        ) = self.split_mappings();

        match data.get("organization") {
            Some(value) if !value.is_null() => {
                mappings.push(FieldMapping::new("organization", Setter::Int64(organization)));
            }
            _ => *organization = Attr::Null,
        }

        match data.get("inputs").and_then(ApiValue::as_map) {
            Some(inputs) => {
                mappings.push(FieldMapping::new("username", Setter::String(username)).within(inputs));
                mappings.push(FieldMapping::new("authorize", Setter::Bool(authorize)).within(inputs));
            }
            None => {
                *username = Attr::Null;
                *authorize = Attr::Null;
            }
        }

        // Secrets only ever come back masked
        for secret in [password, ssh_key_data, ssh_key_unlock, authorize_password] {
            *secret = Attr::Null;
        }
        mappings
    }

    fn reconcile(
        operation: Operation,
        origin: Origin,
        previous: Option<&Self>,
        fresh: Option<&mut Self>,
    ) -> Result<Diagnostics> {
        require_state_for(
            origin,
            operation,
            &[Operation::Create, Operation::Read, Operation::Update],
            previous,
            fresh.as_deref(),
        )?;
        let (Some(previous), Some(fresh)) = (previous, fresh) else {
            return Ok(Diagnostics::new());
        };
        if origin != Origin::Resource || operation == Operation::Delete {
            return Ok(Diagnostics::new());
        }

        fresh.user = previous.user.clone();
        for ((field, slot), (_, prior)) in fresh.secrets_mut().into_iter().zip(previous.secrets()) {
            if preserve_masked(slot, prior) {
                debug!(%operation, field, "kept secret from previous state");
            }
        }
        Ok(Diagnostics::new())
    }

    fn id(&self) -> Option<i64> {
        self.id.value().copied()
    }

    fn request_body(&self) -> JsonValue {
        let mut body = self.declared_body(&["id"]);
        body.insert("credential_type".to_string(), JsonValue::from(CREDENTIAL_NET_TYPE));
        for (key, owner) in [("organization", &self.organization), ("user", &self.user)] {
            if let Some(id) = owner.value() {
                body.insert(key.to_string(), JsonValue::from(*id));
            }
        }

        let mut inputs = Map::new();
        if let Some(username) = self.username.value() {
            inputs.insert("username".to_string(), JsonValue::from(username.clone()));
        }
        for (key, secret) in self.secrets() {
            if let Some(value) = secret.value() {
                inputs.insert(key.to_string(), JsonValue::from(value.clone()));
            }
        }
        if let Some(authorize) = self.authorize.value() {
            inputs.insert("authorize".to_string(), JsonValue::from(*authorize));
        }
        body.insert("inputs".to_string(), JsonValue::Object(inputs));
        JsonValue::Object(body)
    }
}

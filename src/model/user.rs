use super::kind::EntityKind;
use super::macros::state_record;
use super::record::StateRecord;
use crate::diag::Diagnostics;
use crate::error::Result;
use crate::hooks::{preserve_masked, require_state_or_prev, Operation, Origin};
use crate::mapping::FieldMapping;
use crate::types::{ApiMap, JsonValue};
use tracing::debug;

state_record! {
    /// A user account
    pub struct User {
        id: Int64 = "id",
        username: String = "username",
        first_name: String = "first_name",
        last_name: String = "last_name",
        email: String = "email",
        is_superuser: Bool = "is_superuser",
        is_system_auditor: Bool = "is_system_auditor",
        /// Write-only
        password: String = "password",
        ldap_dn: String = "ldap_dn",
        last_login: String = "last_login",
        external_account: String = "external_account",
    }
}

impl StateRecord for User {
    const KIND: EntityKind = EntityKind::User;

    fn field_mappings<'a>(&'a mut self, _data: &'a ApiMap) -> Vec<FieldMapping<'a>> {
        self.declared_mappings()
    }

    fn reconcile(
        operation: Operation,
        origin: Origin,
        previous: Option<&Self>,
        fresh: Option<&mut Self>,
    ) -> Result<Diagnostics> {
        require_state_or_prev(origin, operation, previous, fresh.as_deref())?;
        let (Some(previous), Some(fresh)) = (previous, fresh) else {
            return Ok(Diagnostics::new());
        };

        if origin == Origin::Resource
            && operation != Operation::Delete
            && preserve_masked(&mut fresh.password, &previous.password)
        {
            debug!(%operation, "kept password from previous state");
        }
        Ok(Diagnostics::new())
    }

    fn id(&self) -> Option<i64> {
        self.id.value().copied()
    }

    fn request_body(&self) -> JsonValue {
        JsonValue::Object(self.declared_body(&[
            "id",
            "ldap_dn",
            "last_login",
            "external_account",
        ]))
    }
}

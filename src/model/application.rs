use super::kind::EntityKind;
use super::macros::state_record;
use super::record::StateRecord;
use crate::diag::Diagnostics;
use crate::error::Result;
use crate::hooks::{is_refresh, require_state_or_prev, Operation, Origin};
use crate::mapping::FieldMapping;
use crate::types::{ApiMap, JsonValue};

state_record! {
    /// An OAuth2 application
    pub struct Application {
        id: Int64 = "id",
        name: String = "name",
        description: String = "description",
        organization: Int64 = "organization",
        authorization_grant_type: String = "authorization_grant_type",
        client_id: String = "client_id",
        /// Only returned in clear on creation
        client_secret: String = "client_secret",
        client_type: String = "client_type",
        redirect_uris: String = "redirect_uris",
        skip_authorization: Bool = "skip_authorization",
    }
}

impl StateRecord for Application {
    const KIND: EntityKind = EntityKind::Application;

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

        if is_refresh(origin, operation)
            && fresh.client_type.as_str() == Some("confidential")
            && !previous.client_type.is_null()
        {
            fresh.client_secret = previous.client_secret.clone();
        }
        Ok(Diagnostics::new())
    }

    fn id(&self) -> Option<i64> {
        self.id.value().copied()
    }

    fn request_body(&self) -> JsonValue {
        JsonValue::Object(self.declared_body(&["id", "client_id", "client_secret"]))
    }
}

use super::kind::EntityKind;
use super::macros::state_record;
use super::record::StateRecord;
use crate::diag::Diagnostics;
use crate::error::Result;
use crate::hooks::{merge_masked_json, require_state_for, Operation, Origin};
use crate::mapping::FieldMapping;
use crate::types::{ApiMap, JsonValue};

state_record! {
    /// A notification template
    pub struct NotificationTemplate {
        id: Int64 = "id",
        name: String = "name",
        description: String = "description",
        organization: Int64 = "organization",
        notification_type: String = "notification_type",
        /// Per-type settings as serialized JSON; tokens and passwords come
        /// back masked
        notification_configuration: JsonString = "notification_configuration",
        messages: JsonString = "messages",
    }
}

impl StateRecord for NotificationTemplate {
    const KIND: EntityKind = EntityKind::NotificationTemplate;

    fn field_mappings<'a>(&'a mut self, _data: &'a ApiMap) -> Vec<FieldMapping<'a>> {
        self.declared_mappings()
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
        if origin != Origin::Resource {
            return Ok(Diagnostics::new());
        }

        match operation {
            Operation::Create => {
                fresh.notification_configuration = previous.notification_configuration.clone();
                Ok(Diagnostics::new())
            }
            Operation::Read | Operation::Update => merge_masked_json(
                "notification_configuration",
                &previous.notification_configuration,
                &mut fresh.notification_configuration,
            ),
            Operation::Delete => Ok(Diagnostics::new()),
        }
    }

    fn id(&self) -> Option<i64> {
        self.id.value().copied()
    }

    fn request_body(&self) -> JsonValue {
        JsonValue::Object(self.declared_body(&["id"]))
    }
}

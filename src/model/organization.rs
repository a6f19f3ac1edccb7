use super::kind::EntityKind;
use super::macros::state_record;
use super::record::StateRecord;
use crate::mapping::FieldMapping;
use crate::types::{ApiMap, JsonValue};

state_record! {
    /// An organization
    pub struct Organization {
        id: Int64 = "id",
        name: String = "name",
        description: String = "description",
        max_hosts: Int64 = "max_hosts",
        default_environment: Int64 = "default_environment",
    }
}

impl StateRecord for Organization {
    const KIND: EntityKind = EntityKind::Organization;

    fn field_mappings<'a>(&'a mut self, _data: &'a ApiMap) -> Vec<FieldMapping<'a>> {
        self.declared_mappings()
    }

    fn id(&self) -> Option<i64> {
        self.id.value().copied()
    }

    fn request_body(&self) -> JsonValue {
        JsonValue::Object(self.declared_body(&["id"]))
    }
}

use super::kind::EntityKind;
use super::macros::state_record;
use super::record::StateRecord;
use crate::mapping::FieldMapping;
use crate::types::{ApiMap, JsonValue};

state_record! {
    /// An inventory source
    pub struct InventorySource {
        id: Int64 = "id",
        name: String = "name",
        description: String = "description",
        inventory: Int64 = "inventory",
        source: String = "source",
        source_path: String = "source_path",
        source_project: Int64 = "source_project",
        source_vars: JsonYamlString = "source_vars",
        credential: Int64 = "credential",
        execution_environment: Int64 = "execution_environment",
        enabled_var: String = "enabled_var",
        enabled_value: String = "enabled_value",
        host_filter: String = "host_filter",
        overwrite: Bool = "overwrite",
        overwrite_vars: Bool = "overwrite_vars",
        timeout: Int64 = "timeout",
        verbosity: String = "verbosity",
        update_on_launch: Bool = "update_on_launch",
        update_cache_timeout: Int64 = "update_cache_timeout",
    }
}

impl StateRecord for InventorySource {
    const KIND: EntityKind = EntityKind::InventorySource;

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

use super::kind::EntityKind;
use super::macros::state_record;
use super::record::StateRecord;
use crate::mapping::FieldMapping;
use crate::types::{ApiMap, JsonValue};

state_record! {
    /// A job template
    pub struct JobTemplate {
        id: Int64 = "id",
        name: String = "name",
        description: String = "description",
        job_type: String = "job_type",
        organization: Int64 = "organization",
        inventory: Int64 = "inventory",
        project: Int64 = "project",
        playbook: String = "playbook",
        scm_branch: String = "scm_branch",
        forks: Int64 = "forks",
        limit: String = "limit",
        verbosity: String = "verbosity",
        /// JSON or YAML, normalized to JSON
        extra_vars: JsonYamlString = "extra_vars",
        job_tags: String = "job_tags",
        skip_tags: String = "skip_tags",
        start_at_task: String = "start_at_task",
        timeout: Int64 = "timeout",
        use_fact_cache: Bool = "use_fact_cache",
        execution_environment: Int64 = "execution_environment",
        host_config_key: String = "host_config_key",
        become_enabled: Bool = "become_enabled",
        diff_mode: Bool = "diff_mode",
        force_handlers: Bool = "force_handlers",
        allow_simultaneous: Bool = "allow_simultaneous",
        survey_enabled: Bool = "survey_enabled",
        job_slice_count: Int64 = "job_slice_count",
        prevent_instance_group_fallback: Bool = "prevent_instance_group_fallback",
        webhook_service: String = "webhook_service",
        webhook_credential: Int64 = "webhook_credential",
        ask_scm_branch_on_launch: Bool = "ask_scm_branch_on_launch",
        ask_diff_mode_on_launch: Bool = "ask_diff_mode_on_launch",
        ask_variables_on_launch: Bool = "ask_variables_on_launch",
        ask_limit_on_launch: Bool = "ask_limit_on_launch",
        ask_tags_on_launch: Bool = "ask_tags_on_launch",
        ask_skip_tags_on_launch: Bool = "ask_skip_tags_on_launch",
        ask_job_type_on_launch: Bool = "ask_job_type_on_launch",
        ask_verbosity_on_launch: Bool = "ask_verbosity_on_launch",
        ask_inventory_on_launch: Bool = "ask_inventory_on_launch",
        ask_credential_on_launch: Bool = "ask_credential_on_launch",
        ask_execution_environment_on_launch: Bool = "ask_execution_environment_on_launch",
        ask_labels_on_launch: Bool = "ask_labels_on_launch",
        ask_forks_on_launch: Bool = "ask_forks_on_launch",
        ask_job_slice_count_on_launch: Bool = "ask_job_slice_count_on_launch",
        ask_timeout_on_launch: Bool = "ask_timeout_on_launch",
        ask_instance_groups_on_launch: Bool = "ask_instance_groups_on_launch",
    }
}

impl StateRecord for JobTemplate {
    const KIND: EntityKind = EntityKind::JobTemplate;

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

use super::kind::EntityKind;
use super::macros::state_record;
use super::record::StateRecord;
use crate::attr::Attr;
use crate::diag::Diagnostics;
use crate::error::Result;
use crate::hooks::{merge_masked_json, require_state_for, Operation, Origin};
use crate::mapping::{select_exclusive, ExclusiveGroup, FieldMapping, Setter};
use crate::types::{ApiMap, JsonValue};

/// A credential belongs to exactly one of these
pub const CREDENTIAL_OWNER: ExclusiveGroup =
    ExclusiveGroup::new("owner", &["organization", "user", "team"]);

state_record! {
    /// A credential of any credential type
    pub struct Credential {
        id: Int64 = "id",
        name: String = "name",
        description: String = "description",
        credential_type: Int64 = "credential_type",
        kind: String = "kind",
        cloud: Bool = "cloud",
        kubernetes: Bool = "kubernetes",
        managed: Bool = "managed",
        /// Type-specific inputs as serialized JSON; secrets come back masked
        inputs: JsonString = "inputs",
    }
    unmapped {
        organization: Int64,
        user: Int64,
        team: Int64,
    }
}

impl Credential {
    /// Whether any member of the owner group is set
    pub fn has_owner(&self) -> bool {
        [&self.organization, &self.user, &self.team]
            .iter()
            .any(|owner| owner.value().is_some())
    }
}

/// A credential record that can be handed to the authenticated user as owner
pub trait OwnedCredential: StateRecord {
    /// Whether the record already names an owner
    fn has_owner(&self) -> bool;

    fn set_user(&mut self, user_id: i64);
}

impl OwnedCredential for Credential {
    fn has_owner(&self) -> bool {
        Credential::has_owner(self)
    }

    fn set_user(&mut self, user_id: i64) {
        self.user = Attr::Value(user_id);
    }
}

impl StateRecord for Credential {
    const KIND: EntityKind = EntityKind::Credential;

    fn field_mappings<'a>(&'a mut self, data: &'a ApiMap) -> Vec<FieldMapping<'a>> {
        let selected = select_exclusive(data, &CREDENTIAL_OWNER);
        let (mut mappings, (organization, user, team)) = self.split_mappings();

        for (key, dest) in [("organization", organization), ("user", user), ("team", team)] {
            if selected.contains(&key) {
                mappings.push(FieldMapping::new(key, Setter::Int64(dest)));
            } else {
                *dest = Attr::Null;
            }
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
        if origin != Origin::Resource {
            return Ok(Diagnostics::new());
        }

        match operation {
            Operation::Create => {
                fresh.inputs = previous.inputs.clone();
                Ok(Diagnostics::new())
            }
            Operation::Read | Operation::Update => {
                merge_masked_json("inputs", &previous.inputs, &mut fresh.inputs)
            }
            Operation::Delete => Ok(Diagnostics::new()),
        }
    }

    fn id(&self) -> Option<i64> {
        self.id.value().copied()
    }

    fn request_body(&self) -> JsonValue {
        let mut body = self.declared_body(&["id", "kind", "cloud", "kubernetes", "managed"]);
        for (key, owner) in [
            ("organization", &self.organization),
            ("user", &self.user),
            ("team", &self.team),
        ] {
            if let Some(id) = owner.value() {
                body.insert(key.to_string(), JsonValue::from(*id));
            }
        }
        JsonValue::Object(body)
    }

    fn check_response(data: &ApiMap) -> Result<()> {
        CREDENTIAL_OWNER.check(data).map(|_| ())
    }
}

//! The state record trait

use super::kind::EntityKind;
use crate::diag::Diagnostics;
use crate::error::{Error, Result};
use crate::hooks::{require_state_or_prev, Operation, Origin};
use crate::mapping::{apply_field_mappings, FieldMapping};
use crate::types::{ApiMap, JsonValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;

/// A typed state record for one entity kind
pub trait StateRecord:
    Clone + Default + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: EntityKind;

    /// Mappings from a decoded response onto this record.
    ///
    /// Fields whose value is decided outside the mapping list (unselected
    /// owner keys) are set here before the list is returned.
    fn field_mappings<'a>(&'a mut self, data: &'a ApiMap) -> Vec<FieldMapping<'a>>;

    /// Post-processing after the response has been mapped
    fn reconcile(
        operation: Operation,
        origin: Origin,
        previous: Option<&Self>,
        fresh: Option<&mut Self>,
    ) -> Result<Diagnostics> {
        require_state_or_prev(origin, operation, previous, fresh.as_deref())?;
        Ok(Diagnostics::new())
    }

    /// Database id, `None` for singletons
    fn id(&self) -> Option<i64>;

    /// Body sent on create and update
    fn request_body(&self) -> JsonValue;

    /// Structural checks on a response before it is mapped
    fn check_response(_data: &ApiMap) -> Result<()> {
        Ok(())
    }

    /// Map a decoded response onto this record
    fn update_from_api(&mut self, data: Option<&ApiMap>) -> Result<Diagnostics> {
        let data = data.ok_or(Error::NoData)?;
        Self::check_response(data)?;
        let mappings = self.field_mappings(data);
        apply_field_mappings(Some(data), mappings)
    }
}

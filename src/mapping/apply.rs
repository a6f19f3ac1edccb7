//! Mapping applier

use super::types::FieldMapping;
use crate::diag::Diagnostics;
use crate::error::{Error, Result};
use crate::types::ApiMap;
use tracing::{debug, warn};

/// Apply every mapping against the response.
///
/// A missing response is fatal. Otherwise each mapping runs regardless of how
/// the others went, and each coercion failure becomes one diagnostic
/// attributed to the mapping's remote key.
pub fn apply_field_mappings(
    data: Option<&ApiMap>,
    mappings: Vec<FieldMapping<'_>>,
) -> Result<Diagnostics> {
    let data = data.ok_or(Error::NoData)?;
    let mut diags = Diagnostics::new();
    let total = mappings.len();

    for mut mapping in mappings {
        let source = mapping.data.unwrap_or(data);
        let value = source.get(mapping.api_field);
        if let Err(e) = mapping.setter.apply(value) {
            warn!(field = mapping.api_field, error = %e, "failed to coerce field");
            diags.add_attribute_error(mapping.api_field, e.summary(), e.to_string());
        }
    }

    debug!(
        mappings = total,
        failed = diags.len(),
        "applied field mappings"
    );
    Ok(diags)
}

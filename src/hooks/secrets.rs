//! Masked secret restoration

use super::types::ENCRYPTED;
use crate::attr::Attr;
use crate::diag::Diagnostics;
use crate::error::{Error, Result};
use crate::types::JsonValue;
use tracing::{debug, warn};

fn is_real(value: &Attr<String>) -> bool {
    value.as_str().is_some_and(|s| !s.is_empty() && s != ENCRYPTED)
}

/// Restore a single secret field.
///
/// When the fresh value is the sentinel, null or empty and the previous value
/// is real, the previous value is copied over. Returns whether it was.
pub fn preserve_masked(fresh: &mut Attr<String>, previous: &Attr<String>) -> bool {
    let masked = fresh.as_str() == Some(ENCRYPTED) || fresh.is_empty_value();
    if masked && is_real(previous) {
        *fresh = previous.clone();
        return true;
    }
    false
}

/// Restore sentinel leaves inside an embedded JSON document.
///
/// Both values hold serialized JSON. Every leaf of `fresh` equal to the
/// sentinel is replaced by the value at the same path in `previous`, walking
/// maps by key and arrays by index. When anything was replaced the fresh
/// document is re-serialized canonically. A sentinel with no previous
/// counterpart is left in place and reported as a warning.
pub fn merge_masked_json(
    field: &str,
    previous: &Attr<String>,
    fresh: &mut Attr<String>,
) -> Result<Diagnostics> {
    let mut diags = Diagnostics::new();
    let Some(raw) = fresh.as_str().filter(|s| s.contains(ENCRYPTED)) else {
        return Ok(diags);
    };

    let mut document: JsonValue = serde_json::from_str(raw)
        .map_err(|e| Error::reconcile(field, format!("failed to decode value from new state: {e}")))?;
    let prior = match previous.as_str().filter(|s| !s.is_empty()) {
        Some(p) => Some(serde_json::from_str::<JsonValue>(p).map_err(|e| {
            Error::reconcile(field, format!("failed to decode value from previous state: {e}"))
        })?),
        None => None,
    };

    let mut missing = Vec::new();
    let restored = restore(&mut document, prior.as_ref(), "", &mut missing);

    for path in missing {
        warn!(field, path = %path, "masked value has no previous counterpart");
        diags.add_attribute_warning(
            field,
            "masked value has no previous counterpart",
            format!("keeping {ENCRYPTED} at '{path}'"),
        );
    }

    if restored > 0 {
        debug!(field, restored, "restored masked values");
        *fresh = Attr::Value(serde_json::to_string(&document)?);
    }
    Ok(diags)
}

fn restore(
    fresh: &mut JsonValue,
    previous: Option<&JsonValue>,
    path: &str,
    missing: &mut Vec<String>,
) -> usize {
    if fresh.as_str() == Some(ENCRYPTED) {
        return match previous {
            Some(p) => {
                *fresh = p.clone();
                1
            }
            None => {
                missing.push(path.to_string());
                0
            }
        };
    }

    match fresh {
        JsonValue::Object(fields) => fields
            .iter_mut()
            .map(|(key, value)| {
                let child = previous.and_then(|p| p.get(key.as_str()));
                restore(value, child, &join(path, key), missing)
            })
            .sum(),
        JsonValue::Array(items) => items
            .iter_mut()
            .enumerate()
            .map(|(index, value)| {
                let child = previous.and_then(|p| p.get(index));
                restore(value, child, &join(path, &index.to_string()), missing)
            })
            .sum(),
        _ => 0,
    }
}

fn join(path: &str, segment: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else {
        format!("{path}.{segment}")
    }
}

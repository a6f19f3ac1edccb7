//! Tests for the mapping module

use super::*;
use crate::attr::Attr;
use crate::diag::Severity;
use crate::error::Error;
use crate::types::{ApiMap, ApiValue};
use pretty_assertions::assert_eq;
use serde_json::json;

fn map(value: serde_json::Value) -> ApiMap {
    ApiValue::from(value).into_map().unwrap()
}

const OWNER: ExclusiveGroup = ExclusiveGroup::new("owner", &["organization", "user", "team"]);

#[derive(Debug, Default)]
struct Target {
    id: Attr<i64>,
    name: Attr<String>,
    enabled: Attr<bool>,
    username: Attr<String>,
    tags: Attr<Vec<String>>,
}

#[test]
fn test_missing_response_is_fatal() {
    let mut target = Target::default();
    let mappings = vec![FieldMapping::new("id", Setter::Int64(&mut target.id))];
    let err = apply_field_mappings(None, mappings).unwrap_err();
    assert!(matches!(err, Error::NoData));
    assert_eq!(err.to_string(), "no data passed");
}

#[test]
fn test_all_mappings_applied() {
    let data = map(json!({
        "id": 4,
        "name": "deploy",
        "enabled": true,
        "tags": ["a", "b"],
    }));
    let mut target = Target::default();
    let diags = apply_field_mappings(
        Some(&data),
        vec![
            FieldMapping::new("id", Setter::Int64(&mut target.id)),
            FieldMapping::new("name", Setter::String(&mut target.name)),
            FieldMapping::new("enabled", Setter::Bool(&mut target.enabled)),
            FieldMapping::new("tags", Setter::ListString(&mut target.tags)),
            FieldMapping::new("username", Setter::String(&mut target.username)),
        ],
    )
    .unwrap();

    assert!(diags.is_empty());
    assert_eq!(target.id, Attr::Value(4));
    assert_eq!(target.name.as_str(), Some("deploy"));
    assert_eq!(target.enabled, Attr::Value(true));
    assert_eq!(target.tags, Attr::Value(vec!["a".to_string(), "b".to_string()]));
    assert!(target.username.is_null());
}

#[test]
fn test_one_failure_does_not_stop_the_rest() {
    let data = map(json!({"id": "four", "name": "deploy", "enabled": false}));
    let mut target = Target::default();
    let diags = apply_field_mappings(
        Some(&data),
        vec![
            FieldMapping::new("id", Setter::Int64(&mut target.id)),
            FieldMapping::new("name", Setter::String(&mut target.name)),
            FieldMapping::new("enabled", Setter::Bool(&mut target.enabled)),
        ],
    )
    .unwrap();

    assert_eq!(diags.len(), 1);
    let diag = diags.iter().next().unwrap();
    assert_eq!(diag.severity, Severity::Error);
    assert_eq!(diag.attribute.as_deref(), Some("id"));
    assert_eq!(diag.summary, "wrong data type passed");

    assert!(target.id.is_null());
    assert_eq!(target.name.as_str(), Some("deploy"));
    assert_eq!(target.enabled, Attr::Value(false));
}

#[test]
fn test_every_failure_is_reported() {
    let data = map(json!({"id": "x", "name": 3, "enabled": "yes"}));
    let mut target = Target::default();
    let diags = apply_field_mappings(
        Some(&data),
        vec![
            FieldMapping::new("id", Setter::Int64(&mut target.id)),
            FieldMapping::new("enabled", Setter::Bool(&mut target.enabled)),
        ],
    )
    .unwrap();

    let attrs: Vec<_> = diags.iter().filter_map(|d| d.attribute.clone()).collect();
    assert_eq!(attrs, vec!["id", "enabled"]);
}

#[test]
fn test_mapping_reads_from_sub_map() {
    let data = map(json!({"username": "outer", "inputs": {"username": "inner"}}));
    let inputs = data.get("inputs").and_then(ApiValue::as_map).unwrap();
    let mut target = Target::default();
    apply_field_mappings(
        Some(&data),
        vec![FieldMapping::new("username", Setter::String(&mut target.username)).within(inputs)],
    )
    .unwrap();
    assert_eq!(target.username.as_str(), Some("inner"));
}

#[test]
fn test_custom_setter() {
    let data = map(json!({"kind": "ssh"}));
    let mut seen = None;
    apply_field_mappings(
        Some(&data),
        vec![FieldMapping::new(
            "kind",
            Setter::Custom(Box::new(|v| {
                seen = v.and_then(ApiValue::as_str).map(str::to_uppercase);
                Ok(())
            })),
        )],
    )
    .unwrap();
    assert_eq!(seen.as_deref(), Some("SSH"));
}

#[test]
fn test_select_only_populated_owner() {
    let data = map(json!({"organization": 5, "user": null}));
    assert_eq!(select_exclusive(&data, &OWNER), vec!["organization"]);
    assert_eq!(OWNER.check(&data).unwrap(), Some("organization"));
}

#[test]
fn test_select_nothing_populated() {
    let data = map(json!({"team": null}));
    assert!(select_exclusive(&data, &OWNER).is_empty());
    assert_eq!(OWNER.check(&data).unwrap(), None);
}

#[test]
fn test_check_reports_violation() {
    let data = map(json!({"organization": 5, "team": 2}));
    assert_eq!(select_exclusive(&data, &OWNER), vec!["organization", "team"]);
    let err = OWNER.check(&data).unwrap_err();
    match err {
        Error::ExclusiveViolation { group, fields } => {
            assert_eq!(group, "owner");
            assert_eq!(fields, vec!["organization", "team"]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

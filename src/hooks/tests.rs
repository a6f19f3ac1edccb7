//! Tests for the hooks module

use super::*;
use crate::attr::Attr;
use crate::error::Error;
use crate::diag::Severity;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

fn json_attr(value: serde_json::Value) -> Attr<String> {
    Attr::Value(value.to_string())
}

fn parsed(attr: &Attr<String>) -> serde_json::Value {
    serde_json::from_str(attr.as_str().unwrap()).unwrap()
}

// ============================================================================
// Preconditions
// ============================================================================

#[test_case(Operation::Read ; "read")]
#[test_case(Operation::Update ; "update")]
fn test_resource_refresh_requires_both_records(operation: Operation) {
    let record = 1;
    let err = require_state_or_prev(Origin::Resource, operation, None, Some(&record)).unwrap_err();
    assert!(matches!(err, Error::MissingState { .. }));
    assert_eq!(
        err.to_string(),
        format!("state and previous state required for resource on {operation}")
    );

    assert!(require_state_or_prev::<i32>(Origin::Resource, operation, Some(&record), None).is_err());
    assert!(require_state_or_prev(Origin::Resource, operation, Some(&record), Some(&record)).is_ok());
}

#[test_case(Origin::DataSource, Operation::Read ; "data source read")]
#[test_case(Origin::Resource, Operation::Create ; "resource create")]
#[test_case(Origin::Resource, Operation::Delete ; "resource delete")]
fn test_other_combinations_need_nothing(origin: Origin, operation: Operation) {
    assert!(require_state_or_prev::<i32>(origin, operation, None, None).is_ok());
}

#[test]
fn test_require_state_for_custom_list() {
    let required = [Operation::Create, Operation::Read, Operation::Update];
    assert!(require_state_for::<i32>(Origin::Resource, Operation::Create, &required, None, None).is_err());
    assert!(require_state_for::<i32>(Origin::Resource, Operation::Delete, &required, None, None).is_ok());
}

#[test]
fn test_is_refresh() {
    assert!(is_refresh(Origin::Resource, Operation::Read));
    assert!(is_refresh(Origin::Resource, Operation::Update));
    assert!(!is_refresh(Origin::Resource, Operation::Create));
    assert!(!is_refresh(Origin::DataSource, Operation::Read));
}

#[test]
fn test_parse_operation_and_origin() {
    assert_eq!("Update".parse::<Operation>().unwrap(), Operation::Update);
    assert_eq!("data-source".parse::<Origin>().unwrap(), Origin::DataSource);
    assert!("merge".parse::<Operation>().is_err());
}

// ============================================================================
// Single secrets
// ============================================================================

#[test_case(Attr::string(ENCRYPTED) ; "sentinel")]
#[test_case(Attr::Null ; "null")]
#[test_case(Attr::string("") ; "empty")]
fn test_preserve_masked_restores(mut fresh: Attr<String>) {
    let previous = Attr::string("hunter2");
    assert!(preserve_masked(&mut fresh, &previous));
    assert_eq!(fresh.as_str(), Some("hunter2"));
}

#[test]
fn test_preserve_masked_keeps_real_fresh_value() {
    let mut fresh = Attr::string("rotated");
    assert!(!preserve_masked(&mut fresh, &Attr::string("hunter2")));
    assert_eq!(fresh.as_str(), Some("rotated"));
}

#[test_case(Attr::Null ; "null")]
#[test_case(Attr::string(ENCRYPTED) ; "sentinel")]
#[test_case(Attr::string("") ; "empty")]
fn test_preserve_masked_needs_real_previous(previous: Attr<String>) {
    let mut fresh = Attr::string(ENCRYPTED);
    assert!(!preserve_masked(&mut fresh, &previous));
    assert_eq!(fresh.as_str(), Some(ENCRYPTED));
}

// ============================================================================
// Embedded JSON secrets
// ============================================================================

#[test]
fn test_merge_top_level_secret() {
    let previous = json_attr(json!({"username": "admin", "password": "s3cr3t"}));
    let mut fresh = json_attr(json!({"username": "admin", "password": ENCRYPTED}));

    let diags = merge_masked_json("inputs", &previous, &mut fresh).unwrap();
    assert!(diags.is_empty());
    assert_eq!(fresh.as_str(), Some(r#"{"password":"s3cr3t","username":"admin"}"#));
}

#[test]
fn test_merge_nested_secret() {
    let previous = json_attr(json!({"url": "https://hooks.example", "token": {"value": "abc"}}));
    let mut fresh = json_attr(json!({"url": "https://hooks.example", "token": {"value": ENCRYPTED}}));

    merge_masked_json("notification_configuration", &previous, &mut fresh).unwrap();
    assert_eq!(
        parsed(&fresh),
        json!({"url": "https://hooks.example", "token": {"value": "abc"}})
    );
}

#[test]
fn test_merge_inside_arrays() {
    let previous = json_attr(json!({"keys": ["one", "two"]}));
    let mut fresh = json_attr(json!({"keys": [ENCRYPTED, "two"]}));

    merge_masked_json("inputs", &previous, &mut fresh).unwrap();
    assert_eq!(parsed(&fresh), json!({"keys": ["one", "two"]}));
}

#[test]
fn test_merge_without_sentinel_is_untouched() {
    let previous = json_attr(json!({"a": 1}));
    let raw = r#"{"b": 2,  "a": 1}"#;
    let mut fresh = Attr::string(raw);

    let diags = merge_masked_json("inputs", &previous, &mut fresh).unwrap();
    assert!(diags.is_empty());
    assert_eq!(fresh.as_str(), Some(raw));
}

#[test]
fn test_merge_missing_counterpart_warns() {
    let previous = json_attr(json!({"username": "admin"}));
    let mut fresh = json_attr(json!({"username": "admin", "ssh_key_data": ENCRYPTED}));

    let diags = merge_masked_json("inputs", &previous, &mut fresh).unwrap();
    assert_eq!(diags.len(), 1);
    let diag = diags.iter().next().unwrap();
    assert_eq!(diag.severity, Severity::Warning);
    assert_eq!(diag.attribute.as_deref(), Some("inputs"));
    assert!(diag.detail.contains("ssh_key_data"));
    assert_eq!(parsed(&fresh)["ssh_key_data"], json!(ENCRYPTED));
}

#[test]
fn test_merge_without_previous_state_warns() {
    let mut fresh = json_attr(json!({"password": ENCRYPTED}));
    let diags = merge_masked_json("inputs", &Attr::Null, &mut fresh).unwrap();
    assert_eq!(diags.warnings().count(), 1);
}

#[test]
fn test_merge_rejects_undecodable_fresh_value() {
    let mut fresh = Attr::string(format!("{{\"password\": \"{ENCRYPTED}\""));
    let err = merge_masked_json("inputs", &Attr::string("{}"), &mut fresh).unwrap_err();
    assert!(matches!(err, Error::Reconcile { .. }));
    assert!(err.to_string().contains("new state"));
}

#[test]
fn test_merge_rejects_undecodable_previous_value() {
    let mut fresh = json_attr(json!({"password": ENCRYPTED}));
    let err = merge_masked_json("inputs", &Attr::string("not json"), &mut fresh).unwrap_err();
    assert!(err.to_string().contains("previous state"));
}

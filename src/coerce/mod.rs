//! Value coercion module
//!
//! Typed setters that take an arbitrary decoded value (or its absence) and
//! populate a nullable [`Attr`](crate::attr::Attr) field.
//!
//! # Overview
//!
//! Every setter follows the same contract:
//! - absent or `null` input sets the destination to [`Attr::Null`](crate::attr::Attr::Null)
//! - a value of the expected shape sets [`Attr::Value`](crate::attr::Attr::Value)
//! - any other shape sets `Null` and returns a [`CoercionError`]
//!
//! Setters never panic and never look at anything but their own input, so the
//! mapping applier can run them side by side and collect every failure.

mod setters;
mod types;

pub use setters::{
    set_bool, set_float64, set_int64, set_json_string, set_json_yaml_string, set_list_string,
    set_string,
};
pub use types::{trim, CoercionError, Trim};

//! Mapping types

use crate::attr::Attr;
use crate::coerce::{self, CoercionError, Trim};
use crate::error::{Error, Result};
use crate::types::{ApiMap, ApiValue};

/// Custom setter closure
pub type SetterFn<'a> = Box<dyn FnMut(Option<&ApiValue>) -> std::result::Result<(), CoercionError> + 'a>;

/// A typed destination paired with the coercion that fills it
pub enum Setter<'a> {
    Bool(&'a mut Attr<bool>),
    Int64(&'a mut Attr<i64>),
    Float64(&'a mut Attr<f64>),
    String(&'a mut Attr<String>),
    /// String with the AWX trimming policy
    TrimmedString(&'a mut Attr<String>),
    JsonString(&'a mut Attr<String>),
    /// JSON or YAML mapping, stored as JSON with the AWX trimming policy
    JsonYamlString(&'a mut Attr<String>),
    ListString(&'a mut Attr<Vec<String>>),
    Custom(SetterFn<'a>),
}

impl Setter<'_> {
    /// Run the coercion against a looked-up value
    pub fn apply(&mut self, data: Option<&ApiValue>) -> std::result::Result<(), CoercionError> {
        match self {
            Setter::Bool(dest) => coerce::set_bool(dest, data),
            Setter::Int64(dest) => coerce::set_int64(dest, data),
            Setter::Float64(dest) => coerce::set_float64(dest, data),
            Setter::String(dest) => coerce::set_string(dest, data, Trim::None),
            Setter::TrimmedString(dest) => coerce::set_string(dest, data, Trim::Awx),
            Setter::JsonString(dest) => coerce::set_json_string(dest, data, Trim::None),
            Setter::JsonYamlString(dest) => coerce::set_json_yaml_string(dest, data, Trim::Awx),
            Setter::ListString(dest) => coerce::set_list_string(dest, data, Trim::None),
            Setter::Custom(f) => f(data),
        }
    }
}

impl std::fmt::Debug for Setter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Setter::Bool(_) => "Bool",
            Setter::Int64(_) => "Int64",
            Setter::Float64(_) => "Float64",
            Setter::String(_) => "String",
            Setter::TrimmedString(_) => "TrimmedString",
            Setter::JsonString(_) => "JsonString",
            Setter::JsonYamlString(_) => "JsonYamlString",
            Setter::ListString(_) => "ListString",
            Setter::Custom(_) => "Custom",
        };
        f.write_str(name)
    }
}

/// A remote key, the setter it feeds, and an optional sub-map to read from
#[derive(Debug)]
pub struct FieldMapping<'a> {
    pub api_field: &'static str,
    pub setter: Setter<'a>,
    pub data: Option<&'a ApiMap>,
}

impl<'a> FieldMapping<'a> {
    pub fn new(api_field: &'static str, setter: Setter<'a>) -> Self {
        Self {
            api_field,
            setter,
            data: None,
        }
    }

    /// Read the key from a nested map instead of the top-level response
    #[must_use]
    pub fn within(mut self, data: &'a ApiMap) -> Self {
        self.data = Some(data);
        self
    }
}

/// A set of remote keys of which the API populates at most one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExclusiveGroup {
    pub name: &'static str,
    pub keys: &'static [&'static str],
}

impl ExclusiveGroup {
    pub const fn new(name: &'static str, keys: &'static [&'static str]) -> Self {
        Self { name, keys }
    }

    /// The single populated key, or an error when more than one is populated
    pub fn check(&self, data: &ApiMap) -> Result<Option<&'static str>> {
        let selected = select_exclusive(data, self);
        match selected.as_slice() {
            [] => Ok(None),
            [one] => Ok(Some(*one)),
            many => Err(Error::ExclusiveViolation {
                group: self.name.to_string(),
                fields: many.iter().map(ToString::to_string).collect(),
            }),
        }
    }
}

/// Keys of the group that are present and non-null in the response, in group
/// order. Exclusivity is not enforced here; see [`ExclusiveGroup::check`].
pub fn select_exclusive(data: &ApiMap, group: &ExclusiveGroup) -> Vec<&'static str> {
    group
        .keys
        .iter()
        .copied()
        .filter(|key| data.get(*key).is_some_and(|v| !v.is_null()))
        .collect()
}

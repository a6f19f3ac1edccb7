//! Nullable typed attribute values
//!
//! `Attr<T>` is the three-valued field type every state record is built
//! from: a known value, an explicit null, or not yet known.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A typed, nullable attribute.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Attr<T> {
    /// The value has not been computed yet
    #[default]
    Unknown,
    /// The value is explicitly absent
    Null,
    /// The value is present
    Value(T),
}

impl<T> Attr<T> {
    pub fn is_null(&self) -> bool {
        matches!(self, Attr::Null)
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Attr::Unknown)
    }

    /// The value is either null or unknown
    pub fn is_unset(&self) -> bool {
        !matches!(self, Attr::Value(_))
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Attr::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<T> {
        match self {
            Attr::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<T: Clone + Default> Attr<T> {
    /// The value, or the type's zero value when unset
    pub fn value_or_default(&self) -> T {
        self.value().cloned().unwrap_or_default()
    }
}

impl Attr<String> {
    /// Attribute holding a string value
    pub fn string(value: impl Into<String>) -> Self {
        Attr::Value(value.into())
    }

    /// Null, unknown, or the empty string
    pub fn is_empty_value(&self) -> bool {
        self.value().map_or(true, String::is_empty)
    }

    pub fn as_str(&self) -> Option<&str> {
        self.value().map(String::as_str)
    }
}

impl<T> From<Option<T>> for Attr<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Attr::Null, Attr::Value)
    }
}

impl<T: Serialize> Serialize for Attr<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value().serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Attr<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Attr::from)
    }
}

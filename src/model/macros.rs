//! Declarative state record tables
//!
//! A record is written once as a table of `field: Kind = "remote_key"` rows.
//! The macro expands it into the struct, the mapping list the applier runs,
//! and the request body builder, keeping all three in step.
//!
//! Rows under `unmapped` become fields that the record wires up by hand
//! (owner groups, nested sub-maps).

/// Attribute type for a setter kind
macro_rules! attr_type {
    (Bool) => { $crate::attr::Attr<bool> };
    (Int64) => { $crate::attr::Attr<i64> };
    (Float64) => { $crate::attr::Attr<f64> };
    (String) => { $crate::attr::Attr<::std::string::String> };
    (TrimmedString) => { $crate::attr::Attr<::std::string::String> };
    (JsonString) => { $crate::attr::Attr<::std::string::String> };
    (JsonYamlString) => { $crate::attr::Attr<::std::string::String> };
    (ListString) => { $crate::attr::Attr<::std::vec::Vec<::std::string::String>> };
}

/// Request body value for a field of a setter kind
macro_rules! body_value {
    (JsonString, $attr:expr) => {
        $attr.value().map(|v| $crate::model::embedded_json(v))
    };
    ($kind:ident, $attr:expr) => {
        $attr.value().map(|v| ::serde_json::Value::from(v.clone()))
    };
}

macro_rules! state_record {
    (
        $(#[$meta:meta])*
        pub struct $name:ident {
            $(
                $(#[$fmeta:meta])*
                $field:ident : $kind:ident = $key:literal
            ),* $(,)?
        }
        $(
            unmapped {
                $(
                    $(#[$umeta:meta])*
                    $ufield:ident : $ukind:ident
                ),* $(,)?
            }
        )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$fmeta])*
                #[serde(default)]
                pub $field: $crate::model::macros::attr_type!($kind),
            )*
            $($(
                $(#[$umeta])*
                #[serde(default)]
                pub $ufield: $crate::model::macros::attr_type!($ukind),
            )*)?
        }

        impl $name {
            /// Remote keys of the table-driven fields, in declaration order
            pub const API_FIELDS: &'static [&'static str] = &[$($key),*];

            /// One mapping per table-driven field
            #[allow(dead_code)]
            pub(crate) fn declared_mappings(&mut self) -> ::std::vec::Vec<$crate::mapping::FieldMapping<'_>> {
                self.split_mappings().0
            }

            /// The table-driven mappings together with the unmapped fields,
            /// borrowed disjointly
            #[allow(clippy::unused_unit)]
            pub(crate) fn split_mappings(
                &mut self,
            ) -> (
                ::std::vec::Vec<$crate::mapping::FieldMapping<'_>>,
                ($($(&mut $crate::model::macros::attr_type!($ukind),)*)?),
            ) {
                (
                    vec![
                        $(
                            $crate::mapping::FieldMapping::new(
                                $key,
                                $crate::mapping::Setter::$kind(&mut self.$field),
                            ),
                        )*
                    ],
                    ($($(&mut self.$ufield,)*)?),
                )
            }

            /// Known table-driven values keyed by remote key, minus `skip`
            pub(crate) fn declared_body(
                &self,
                skip: &[&str],
            ) -> ::serde_json::Map<::std::string::String, ::serde_json::Value> {
                let mut body = ::serde_json::Map::new();
                $(
                    if !skip.contains(&$key) {
                        if let Some(value) = $crate::model::macros::body_value!($kind, &self.$field) {
                            body.insert($key.to_string(), value);
                        }
                    }
                )*
                body
            }
        }
    };
}

pub(crate) use attr_type;
pub(crate) use body_value;
pub(crate) use state_record;

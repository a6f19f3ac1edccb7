//! Field mapping module
//!
//! Declarative (remote key → setter) mappings and the applier that runs them
//! against a decoded response.
//!
//! # Overview
//!
//! - [`FieldMapping`] pairs a remote key with a typed [`Setter`], optionally
//!   reading from a nested sub-map (such as a credential's `inputs`)
//! - [`apply_field_mappings`] runs every mapping and collects all failures
//! - [`ExclusiveGroup`] and [`select_exclusive`] decide which of several
//!   competing owner keys the response actually populated

mod apply;
mod types;

pub use apply::apply_field_mappings;
pub use types::{select_exclusive, ExclusiveGroup, FieldMapping, Setter};

#[cfg(test)]
mod tests;

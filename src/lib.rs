// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # awx-state
//!
//! Response normalization and state reconciliation for the AWX REST API.
//!
//! Every AWX entity the provider manages goes through the same pipeline:
//! the decoded JSON body is unwrapped from its search envelope, each field is
//! coerced onto a typed record, and a per-kind hook reconciles the result
//! with the previously known state (secrets the server masks as
//! `$encrypted$` are carried forward from what the caller already knows).
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use awx_state::client::AwxClient;
//! use awx_state::config::ProviderConfig;
//! use awx_state::model::Credential;
//! use awx_state::{resource, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = ProviderConfig::from_file("awx.yaml")?.with_env();
//!     let client = AwxClient::new(&config)?;
//!
//!     let found = resource::lookup::<Credential>(&client, "name", "deploy-key").await?;
//!     for diag in found.diagnostics.iter() {
//!         eprintln!("{}: {}", diag.summary, diag.detail);
//!     }
//!     println!("{}", serde_json::to_string(&found.state)?);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        Resource lifecycle                       │
//! │   read()   lookup()   create()   update()   delete()            │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────┬───────────┬───────┴───────┬───────────┬─────────────┐
//! │  Client  │  Search   │    Mapping    │   Hooks   │   Model     │
//! ├──────────┼───────────┼───────────────┼───────────┼─────────────┤
//! │ reqwest  │ count /   │ FieldMapping  │ masked    │ StateRecord │
//! │ basic /  │ results   │ Setter        │ secrets   │ EntityKind  │
//! │ bearer   │ unwrap    │ exclusive     │ nested    │ 11 kinds    │
//! │          │           │ groups        │ merge     │             │
//! └──────────┴───────────┴───────┬───────┴───────────┴─────────────┘
//!                                │
//!                  Coerce (ApiValue ──► Attr<T>)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Decoded response model and shared enums
pub mod types;

/// Three-valued typed attributes
pub mod attr;

/// Field-level diagnostics
pub mod diag;

/// Value coercion primitives
pub mod coerce;

/// Search result disambiguation
pub mod search;

/// Field mappings and exclusive groups
pub mod mapping;

/// State reconciliation hooks
pub mod hooks;

/// Typed state records per entity kind
pub mod model;

/// Provider configuration
pub mod config;

/// Environment helpers
pub mod helpers;

/// AWX transport
pub mod client;

/// Resource lifecycle operations
pub mod resource;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use attr::Attr;
pub use diag::{Diagnostic, Diagnostics, Severity};
pub use error::{Error, Result};
pub use hooks::{Operation, Origin, ENCRYPTED};
pub use model::{EntityKind, StateRecord};
pub use resource::Outcome;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

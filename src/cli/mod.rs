//! CLI module
//!
//! Command-line interface over the normalization pipeline.
//!
//! # Commands
//!
//! - `kinds` - List entity kinds and their endpoints
//! - `normalize` - Normalize a saved response offline
//! - `read` - Read an entity by id
//! - `lookup` - Find an entity by a unique attribute

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;

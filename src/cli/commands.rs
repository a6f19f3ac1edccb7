//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Normalize AWX API responses into reconciled state records
#[derive(Parser, Debug)]
#[command(name = "awx-state")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Provider configuration file (YAML or JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List supported entity kinds
    Kinds,

    /// Run a saved response through the pipeline without contacting AWX
    Normalize {
        /// Entity kind, e.g. `credential` or `awx_settings_auth_ldap`
        #[arg(short, long)]
        kind: String,

        /// Response body (JSON)
        #[arg(short, long)]
        response: PathBuf,

        /// Previous state record (JSON)
        #[arg(short, long)]
        previous: Option<PathBuf>,

        /// Lifecycle operation
        #[arg(long, default_value = "read")]
        operation: String,

        /// `resource` or `data_source`; defaults to resource when a previous
        /// state is given
        #[arg(long)]
        origin: Option<String>,
    },

    /// Read an entity from AWX
    Read {
        #[arg(short, long)]
        kind: String,

        /// Entity id, unused for settings kinds
        #[arg(long)]
        id: Option<i64>,

        /// Previous state record (JSON); reads as a managed resource when set
        #[arg(short, long)]
        previous: Option<PathBuf>,
    },

    /// Find the single entity matching a field value
    Lookup {
        #[arg(short, long)]
        kind: String,

        /// Field to filter on, defaults to the kind's unique attribute
        #[arg(long)]
        field: Option<String>,

        #[arg(long)]
        value: String,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON, one document per line
    Json,
    /// Indented JSON
    Pretty,
}

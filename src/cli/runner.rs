//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::AwxClient;
use crate::config::ProviderConfig;
use crate::error::{Error, Result, ResultExt};
use crate::hooks::{Operation, Origin};
use crate::model::{
    Application, Credential, CredentialNet, EntityKind, InventorySource, JobTemplate,
    NotificationTemplate, Organization, SettingsAuthAzureAdOauth2, SettingsAuthGithub,
    SettingsAuthLdap, SettingsAuthSaml, StateRecord, User,
};
use crate::resource::{self, Outcome};
use crate::types::{parse_api_map, JsonValue};
use serde_json::json;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Run `$body` with `$record` bound to the record type of `$kind`
macro_rules! dispatch {
    ($kind:expr, $record:ident => $body:expr) => {
        match $kind {
            EntityKind::Organization => {
                type $record = Organization;
                $body
            }
            EntityKind::Application => {
                type $record = Application;
                $body
            }
            EntityKind::Credential => {
                type $record = Credential;
                $body
            }
            EntityKind::CredentialNet => {
                type $record = CredentialNet;
                $body
            }
            EntityKind::NotificationTemplate => {
                type $record = NotificationTemplate;
                $body
            }
            EntityKind::User => {
                type $record = User;
                $body
            }
            EntityKind::JobTemplate => {
                type $record = JobTemplate;
                $body
            }
            EntityKind::InventorySource => {
                type $record = InventorySource;
                $body
            }
            EntityKind::SettingsAuthGithub => {
                type $record = SettingsAuthGithub;
                $body
            }
            EntityKind::SettingsAuthAzureAdOauth2 => {
                type $record = SettingsAuthAzureAdOauth2;
                $body
            }
            EntityKind::SettingsAuthLdap => {
                type $record = SettingsAuthLdap;
                $body
            }
            EntityKind::SettingsAuthSaml => {
                type $record = SettingsAuthSaml;
                $body
            }
        }
    };
}

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let output = match &self.cli.command {
            Commands::Kinds => Self::kinds(),
            Commands::Normalize {
                kind,
                response,
                previous,
                operation,
                origin,
            } => Self::normalize(
                kind.parse::<EntityKind>()?,
                response,
                previous.as_deref(),
                operation.parse::<Operation>()?,
                origin.as_deref().map(str::parse::<Origin>).transpose()?,
            )?,
            Commands::Read { kind, id, previous } => {
                self.read(kind.parse::<EntityKind>()?, *id, previous.as_deref()).await?
            }
            Commands::Lookup { kind, field, value } => {
                self.lookup(kind.parse::<EntityKind>()?, field.as_deref(), value).await?
            }
        };
        self.output_message(&output);
        Ok(())
    }

    /// Describe every entity kind
    fn kinds() -> JsonValue {
        let kinds: Vec<JsonValue> = EntityKind::ALL
            .iter()
            .map(|kind| {
                json!({
                    "kind": kind.name(),
                    "type": kind.type_name(),
                    "endpoint": kind.endpoint(),
                    "singleton": kind.is_singleton(),
                    "lookup_field": kind.lookup_field(),
                })
            })
            .collect();
        json!({ "kinds": kinds })
    }

    /// Offline pipeline over saved documents
    fn normalize(
        kind: EntityKind,
        response: &Path,
        previous: Option<&Path>,
        operation: Operation,
        origin: Option<Origin>,
    ) -> Result<JsonValue> {
        let origin = origin.unwrap_or(if previous.is_some() {
            Origin::Resource
        } else {
            Origin::DataSource
        });
        let content = fs::read_to_string(response)
            .with_context(|| format!("Failed to read {}", response.display()))?;
        let response = parse_api_map(&content)?;
        debug!(%kind, %operation, %origin, "normalizing saved response");

        dispatch!(kind, R => {
            let previous: Option<R> = previous.map(load_record).transpose()?;
            render(&resource::normalize(operation, origin, previous.as_ref(), response)?)
        })
    }

    /// Read by id, or refresh a previous state
    async fn read(&self, kind: EntityKind, id: Option<i64>, previous: Option<&Path>) -> Result<JsonValue> {
        let client = self.client()?;
        dispatch!(kind, R => {
            let outcome = match previous.map(load_record::<R>).transpose()? {
                Some(previous) => resource::read(&client, Origin::Resource, &previous).await?,
                None => resource::read_data_source::<R>(&client, id).await?,
            };
            render(&outcome)
        })
    }

    async fn lookup(&self, kind: EntityKind, field: Option<&str>, value: &str) -> Result<JsonValue> {
        let field = field
            .or_else(|| kind.lookup_field())
            .ok_or_else(|| Error::config(format!("{kind} has no lookup field")))?;
        let client = self.client()?;
        dispatch!(kind, R => render(&resource::lookup::<R>(&client, field, value).await?))
    }

    /// Client configured from `--config` and the environment
    fn client(&self) -> Result<AwxClient> {
        let config = match &self.cli.config {
            Some(path) => ProviderConfig::from_file(path)?,
            None => ProviderConfig::default(),
        }
        .with_env();
        AwxClient::new(&config)
    }

    /// Output a message
    fn output_message(&self, msg: &JsonValue) {
        match self.cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(msg).unwrap_or_default());
            }
            OutputFormat::Pretty => {
                println!("{}", serde_json::to_string_pretty(msg).unwrap_or_default());
            }
        }
    }
}

/// Load a state record written by an earlier run
fn load_record<R: StateRecord>(path: &Path) -> Result<R> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .map_err(|e| Error::config(format!("Invalid {} state in {}: {e}", R::KIND, path.display())))
}

fn render<R: StateRecord>(outcome: &Outcome<R>) -> Result<JsonValue> {
    Ok(serde_json::to_value(outcome)?)
}

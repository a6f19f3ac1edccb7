//! Hook context types

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sentinel the API substitutes for secret values
pub const ENCRYPTED: &str = "$encrypted$";

/// Lifecycle step that produced the response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Create => "create",
            Operation::Read => "read",
            Operation::Update => "update",
            Operation::Delete => "delete",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "create" => Ok(Operation::Create),
            "read" => Ok(Operation::Read),
            "update" => Ok(Operation::Update),
            "delete" => Ok(Operation::Delete),
            other => Err(Error::config(format!("unknown operation '{other}'"))),
        }
    }
}

/// Whether the caller manages the entity or only reads it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Origin {
    DataSource,
    Resource,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::DataSource => f.write_str("data source"),
            Origin::Resource => f.write_str("resource"),
        }
    }
}

impl FromStr for Origin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "data_source" | "datasource" => Ok(Origin::DataSource),
            "resource" => Ok(Origin::Resource),
            other => Err(Error::config(format!("unknown origin '{other}'"))),
        }
    }
}

/// A managed entity being read back after a read or update
pub fn is_refresh(origin: Origin, operation: Operation) -> bool {
    origin == Origin::Resource && matches!(operation, Operation::Read | Operation::Update)
}

/// Managed reads and updates must see both records
pub fn require_state_or_prev<T>(
    origin: Origin,
    operation: Operation,
    previous: Option<&T>,
    fresh: Option<&T>,
) -> Result<()> {
    require_state_for(
        origin,
        operation,
        &[Operation::Read, Operation::Update],
        previous,
        fresh,
    )
}

/// Managed operations listed in `required` must see both records
pub fn require_state_for<T>(
    origin: Origin,
    operation: Operation,
    required: &[Operation],
    previous: Option<&T>,
    fresh: Option<&T>,
) -> Result<()> {
    if origin == Origin::Resource
        && required.contains(&operation)
        && (previous.is_none() || fresh.is_none())
    {
        return Err(Error::missing_state(origin, operation));
    }
    Ok(())
}

//! Provider configuration
//!
//! Connection settings for the AWX API, loaded from a YAML (or JSON) file and
//! completed from the environment. Values set in the file always win over
//! the environment.

use crate::error::{Error, Result};
use crate::helpers::{first_set, first_set_env_var, str_to_bool};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

// ============================================================================
// Environment Variables
// ============================================================================

pub const HOST_ENV: &[&str] = &["TOWER_HOST", "AWX_HOST"];
pub const USERNAME_ENV: &[&str] = &["TOWER_USERNAME", "AWX_USERNAME"];
pub const PASSWORD_ENV: &[&str] = &["TOWER_PASSWORD", "AWX_PASSWORD"];
pub const TOKEN_ENV: &[&str] = &["TOWER_AUTH_TOKEN", "AWX_AUTH_TOKEN"];
pub const VERIFY_SSL_ENV: &[&str] = &["TOWER_VERIFY_SSL", "AWX_VERIFY_SSL"];

fn default_timeout_secs() -> u64 {
    30
}

// ============================================================================
// Provider Config
// ============================================================================

/// Connection settings for the AWX API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Base URL, e.g. `https://awx.example.com`
    #[serde(default)]
    pub hostname: Option<String>,

    #[serde(default)]
    pub username: Option<String>,

    #[serde(default)]
    pub password: Option<String>,

    /// OAuth2 token, exclusive with username/password
    #[serde(default)]
    pub token: Option<String>,

    /// Verify TLS certificates (default true)
    #[serde(default)]
    pub verify_ssl: Option<bool>,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            hostname: None,
            username: None,
            password: None,
            token: None,
            verify_ssl: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// How requests authenticate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    Basic { username: String, password: String },
    Token(String),
}

impl ProviderConfig {
    /// Parse a config document
    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Fill unset fields from the process environment
    #[must_use]
    pub fn with_env(self) -> Self {
        self.fill_unset(first_set_env_var)
    }

    /// Fill unset fields from an arbitrary variable lookup
    #[must_use]
    pub fn with_env_from<F>(self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        self.fill_unset(|names| first_set(&lookup, names))
    }

    /// `resolve` returns the first set value among a group of variable names
    fn fill_unset<R>(mut self, resolve: R) -> Self
    where
        R: Fn(&[&str]) -> Option<String>,
    {
        for (slot, names) in [
            (&mut self.hostname, HOST_ENV),
            (&mut self.username, USERNAME_ENV),
            (&mut self.password, PASSWORD_ENV),
            (&mut self.token, TOKEN_ENV),
        ] {
            if slot.is_none() {
                *slot = resolve(names);
            }
        }
        if self.verify_ssl.is_none() {
            self.verify_ssl = resolve(VERIFY_SSL_ENV).map(|v| str_to_bool(&v));
        }
        self
    }

    pub fn verify_ssl(&self) -> bool {
        self.verify_ssl.unwrap_or(true)
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validated hostname
    pub fn host(&self) -> Result<&str> {
        match self.hostname.as_deref().map(str::trim) {
            Some(host) if !host.is_empty() => Ok(host),
            _ => Err(Error::missing_field("hostname")),
        }
    }

    /// Validate the settings and pick the authentication method
    pub fn credentials(&self) -> Result<Credentials> {
        self.host()?;
        let set = |v: &Option<String>| v.as_deref().filter(|s| !s.is_empty()).map(str::to_string);
        let (username, password, token) = (set(&self.username), set(&self.password), set(&self.token));

        match (username, password, token) {
            (None, None, Some(token)) => Ok(Credentials::Token(token)),
            (Some(username), Some(password), None) => Ok(Credentials::Basic { username, password }),
            (_, _, Some(_)) => Err(Error::config(
                "token cannot be combined with username and password",
            )),
            (Some(_), None, None) => Err(Error::missing_field("password")),
            (None, Some(_), None) => Err(Error::missing_field("username")),
            (None, None, None) => Err(Error::config(
                "either a token or a username and password is required",
            )),
        }
    }

    /// Check the whole configuration
    pub fn validate(&self) -> Result<()> {
        self.credentials().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(vars: &[(&'static str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<&'static str, String> =
            vars.iter().map(|(k, v)| (*k, v.to_string())).collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_parse_yaml() {
        let config = ProviderConfig::from_yaml(
            r"
hostname: https://awx.example.com
username: admin
password: secret
verify_ssl: false
",
        )
        .unwrap();
        assert_eq!(config.hostname.as_deref(), Some("https://awx.example.com"));
        assert!(!config.verify_ssl());
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(
            config.credentials().unwrap(),
            Credentials::Basic {
                username: "admin".to_string(),
                password: "secret".to_string()
            }
        );
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{{\"hostname\": \"https://awx\", \"token\": \"abc\", \"timeout_secs\": 5}}").unwrap();

        let config = ProviderConfig::from_file(file.path()).unwrap();
        assert_eq!(config.credentials().unwrap(), Credentials::Token("abc".to_string()));
        assert_eq!(config.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_env_fills_unset_fields() {
        let config = ProviderConfig {
            username: Some("from-file".to_string()),
            ..Default::default()
        }
        .with_env_from(env(&[
            ("AWX_HOST", "https://awx"),
            ("TOWER_USERNAME", "from-env"),
            ("AWX_PASSWORD", "pw"),
            ("TOWER_VERIFY_SSL", "FALSE"),
        ]));

        assert_eq!(config.hostname.as_deref(), Some("https://awx"));
        assert_eq!(config.username.as_deref(), Some("from-file"));
        assert_eq!(config.password.as_deref(), Some("pw"));
        assert_eq!(config.verify_ssl, Some(false));
    }

    #[test]
    fn test_tower_variables_take_precedence() {
        let config = ProviderConfig::default().with_env_from(env(&[
            ("TOWER_HOST", "https://tower"),
            ("AWX_HOST", "https://awx"),
        ]));
        assert_eq!(config.hostname.as_deref(), Some("https://tower"));
    }

    #[test]
    fn test_missing_hostname() {
        let config = ProviderConfig {
            token: Some("abc".to_string()),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { ref field } if field == "hostname"));
    }

    #[test]
    fn test_token_conflicts_with_basic() {
        let config = ProviderConfig {
            hostname: Some("https://awx".to_string()),
            username: Some("admin".to_string()),
            token: Some("abc".to_string()),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::Config { .. })));
    }

    #[test]
    fn test_username_requires_password() {
        let config = ProviderConfig {
            hostname: Some("https://awx".to_string()),
            username: Some("admin".to_string()),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(matches!(err, Error::MissingConfigField { ref field } if field == "password"));
    }

    #[test]
    fn test_no_credentials() {
        let config = ProviderConfig {
            hostname: Some("https://awx".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(ProviderConfig::from_yaml("  ").unwrap(), ProviderConfig::default());
    }

    #[test]
    fn test_with_env_keeps_fields_already_set() {
        let config = ProviderConfig {
            hostname: Some("https://file".to_string()),
            username: Some("u".to_string()),
            password: Some("p".to_string()),
            token: Some("t".to_string()),
            verify_ssl: Some(false),
            ..Default::default()
        };
        assert_eq!(config.clone().with_env(), config);
    }
}

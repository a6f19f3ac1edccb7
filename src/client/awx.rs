//! reqwest-backed AWX client

use super::transport::Transport;
use crate::config::{Credentials, ProviderConfig};
use crate::error::{Error, Result};
use crate::types::{parse_api_map, ApiMap, JsonValue, Method};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::Client;
use tracing::{debug, warn};
use url::Url;

pub const USER_AGENT: &str = concat!("awx-state/", env!("CARGO_PKG_VERSION"));

/// Client for a single AWX instance
#[derive(Debug, Clone)]
pub struct AwxClient {
    client: Client,
    host: String,
    credentials: Credentials,
}

impl AwxClient {
    /// Build a client from validated provider settings
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let credentials = config.credentials()?;
        let host = config.host()?.trim_end_matches('/').to_string();
        Url::parse(&host)?;

        let client = Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(!config.verify_ssl())
            .build()?;

        Ok(Self {
            client,
            host,
            credentials,
        })
    }

    /// Full URL of an endpoint on this host
    pub fn url(&self, endpoint: &str) -> Result<Url> {
        let endpoint = endpoint.trim_start_matches('/');
        Ok(Url::parse(&format!("{}/{endpoint}", self.host))?)
    }

    pub fn host(&self) -> &str {
        &self.host
    }
}

#[async_trait]
impl Transport for AwxClient {
    async fn request(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&JsonValue>,
    ) -> Result<ApiMap> {
        let url = self.url(endpoint)?;
        debug!(%method, %url, "sending request");

        let mut req = self
            .client
            .request(method.into(), url)
            .header(ACCEPT, "application/json");
        req = match &self.credentials {
            Credentials::Basic { username, password } => req.basic_auth(username, Some(password)),
            Credentials::Token(token) => req.bearer_auth(token),
        };
        if let Some(body) = body {
            req = req.json(body);
        }

        let response = req.send().await?;
        let status = response.status();
        let payload = response.text().await?;

        if !status.is_success() {
            warn!(%method, endpoint, status = status.as_u16(), "request failed");
            return Err(Error::http_status(status.as_u16(), endpoint, payload));
        }

        debug!(%method, endpoint, status = status.as_u16(), bytes = payload.len(), "request succeeded");
        parse_api_map(&payload)
    }
}

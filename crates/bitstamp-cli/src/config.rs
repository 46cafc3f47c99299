/*
[INPUT]:  YAML configuration file and BITSTAMP_* environment variables
[OUTPUT]: Parsed CLI configuration, client settings and credentials
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use std::fmt;
use std::path::Path;
use std::time::Duration;

use anyhow::Context;
use bitstamp_adapter::http::BASE_URL;
use bitstamp_adapter::{BitstampClient, BitstampPrivateClient, ClientConfig, Credentials};
use serde::{Deserialize, Serialize};

/// Top-level configuration for the command line client
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CliConfig {
    /// Exchange host, without the `/api` prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connect timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Account credentials; the environment is used when absent
    #[serde(default)]
    pub credentials: Option<CredentialsConfig>,
}

/// Account credentials configuration
#[derive(Clone, Deserialize, Serialize)]
pub struct CredentialsConfig {
    pub customer_id: String,
    pub api_key: String,
    pub api_secret: String,
}

impl fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("customer_id", &self.customer_id)
            .field("api_key", &"[REDACTED]")
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            credentials: None,
        }
    }
}

fn default_base_url() -> String {
    BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl CliConfig {
    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read {}", path.display()))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let config: Self = serde_yaml::from_str(content)?;
        Ok(config)
    }

    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
            ..ClientConfig::default()
        }
    }

    pub fn public_client(&self) -> anyhow::Result<BitstampClient> {
        BitstampClient::with_config_and_base_url(self.client_config(), &self.base_url)
            .context("build HTTP client")
    }

    /// Credentials from the config file, falling back to the environment
    pub fn credentials(&self) -> anyhow::Result<Credentials> {
        match &self.credentials {
            Some(creds) => Ok(Credentials::new(
                creds.customer_id.clone(),
                creds.api_key.clone(),
                creds.api_secret.clone(),
            )),
            None => Credentials::from_env().context("load credentials from environment"),
        }
    }

    pub fn private_client(&self) -> anyhow::Result<BitstampPrivateClient> {
        Ok(BitstampPrivateClient::with_client(
            self.public_client()?,
            self.credentials()?,
        ))
    }
}

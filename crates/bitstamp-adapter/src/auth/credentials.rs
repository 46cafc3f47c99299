/*
[INPUT]:  Customer id, API key and API secret (explicit or from environment)
[OUTPUT]: Immutable credential set with a redacted Debug impl
[POS]:    Auth layer - account identity for private endpoints
[UPDATE]: When credential sources or secret handling change
*/

//! Private keys are stored using the `secrecy` crate: memory is zeroized on
//! drop and the secret never shows up in `Debug` output.

use std::fmt;
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretBox};

use super::nonce::NonceGenerator;
use crate::http::{BitstampError, Result};

pub const CUSTOMER_ID_ENV: &str = "BITSTAMP_CUSTOMER_ID";
pub const API_KEY_ENV: &str = "BITSTAMP_API_KEY";
pub const API_SECRET_ENV: &str = "BITSTAMP_API_SECRET";

/// Account credentials for authenticated requests
///
/// Clones share one nonce sequence, so every request signed with this
/// credential set gets a distinct, increasing nonce.
pub struct Credentials {
    customer_id: String,
    api_key: String,
    api_secret: SecretBox<String>,
    nonces: Arc<NonceGenerator>,
}

impl Credentials {
    pub fn new(
        customer_id: impl Into<String>,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: customer_id.into(),
            api_key: api_key.into(),
            api_secret: SecretBox::new(Box::new(api_secret.into())),
            nonces: Arc::new(NonceGenerator::new()),
        }
    }

    /// Read `BITSTAMP_CUSTOMER_ID`, `BITSTAMP_API_KEY` and `BITSTAMP_API_SECRET`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build credentials from any variable source keyed like the environment
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let require = |name: &str| {
            lookup(name).filter(|value| !value.is_empty()).ok_or_else(|| {
                BitstampError::Config(format!("Environment variable not set: {name}"))
            })
        };

        Ok(Self::new(
            require(CUSTOMER_ID_ENV)?,
            require(API_KEY_ENV)?,
            require(API_SECRET_ENV)?,
        ))
    }

    pub fn customer_id(&self) -> &str {
        &self.customer_id
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub(crate) fn api_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }

    /// Nonce sequence shared by every clone of this credential set
    pub fn nonces(&self) -> &NonceGenerator {
        &self.nonces
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            customer_id: self.customer_id.clone(),
            api_key: self.api_key.clone(),
            api_secret: SecretBox::new(Box::new(self.api_secret.expose_secret().clone())),
            nonces: Arc::clone(&self.nonces),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let key_prefix: String = self.api_key.chars().take(4).collect();
        f.debug_struct("Credentials")
            .field("customer_id", &self.customer_id)
            .field("api_key", &format!("{key_prefix}..."))
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

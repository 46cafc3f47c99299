/*
[INPUT]:  Error sources (transport, decoding, configuration)
[OUTPUT]: Structured error type separating fatal from soft failures
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Bitstamp adapter
///
/// Two families: configuration errors are programming mistakes and never
/// reach the network; soft failures are network or decoding problems that
/// the caller may retry.
#[derive(Error, Debug)]
pub enum BitstampError {
    /// HTTP request failed in the transport (connect, timeout, DNS)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport failure reported by a non-reqwest transport
    #[error("Transport error: {0}")]
    Transport(String),

    /// Body could not be decoded as the expected structure
    #[error("Invalid response: {reason}")]
    InvalidResponse { reason: String, body: String },

    /// Request parameters could not be encoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error (unsupported API version, bad base URL, missing credentials)
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BitstampError {
    /// Network or decoding failure; no partial result exists
    pub fn is_soft_failure(&self) -> bool {
        matches!(
            self,
            BitstampError::Http(_)
                | BitstampError::Transport(_)
                | BitstampError::InvalidResponse { .. }
        )
    }

    /// Programming or setup error that retrying cannot fix
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            BitstampError::Config(_) | BitstampError::UrlParse(_) | BitstampError::Serialization(_)
        )
    }

    /// Check if the transport gave up waiting
    pub fn is_timeout(&self) -> bool {
        matches!(self, BitstampError::Http(err) if err.is_timeout())
    }

    /// Raw body recorded for a response that failed to decode
    pub fn response_body(&self) -> Option<&str> {
        match self {
            BitstampError::InvalidResponse { body, .. } => Some(body),
            _ => None,
        }
    }

    pub(crate) fn invalid_response(reason: impl ToString, body: impl Into<String>) -> Self {
        BitstampError::InvalidResponse {
            reason: reason.to_string(),
            body: body.into(),
        }
    }
}

/// Result type alias for Bitstamp operations
pub type Result<T> = std::result::Result<T, BitstampError>;

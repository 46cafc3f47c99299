/*
[INPUT]:  Exchange wire vocabulary (versions, verbs, time windows, sort orders)
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When the exchange adds API versions or new enumerated parameters
*/

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::http::BitstampError;

/// Bitstamp REST API version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    /// Legacy API rooted at `/api`
    V1,
    /// Current API rooted at `/api/v2`
    #[default]
    V2,
}

impl ApiVersion {
    /// Numeric version as used in request descriptors
    pub const fn number(self) -> u8 {
        match self {
            ApiVersion::V1 => 1,
            ApiVersion::V2 => 2,
        }
    }

    /// Path prefix appended to the host
    pub const fn path_prefix(self) -> &'static str {
        match self {
            ApiVersion::V1 => "/api",
            ApiVersion::V2 => "/api/v2",
        }
    }
}

impl From<ApiVersion> for u8 {
    fn from(version: ApiVersion) -> Self {
        version.number()
    }
}

impl TryFrom<u8> for ApiVersion {
    type Error = BitstampError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(ApiVersion::V1),
            2 => Ok(ApiVersion::V2),
            other => Err(BitstampError::Config(format!(
                "request dispatch is not implemented for Bitstamp API version {other}"
            ))),
        }
    }
}

/// HTTP verbs used by the exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub const fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }

    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an endpoint needs the signed `key`/`signature`/`nonce` triple
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    Public,
    Private,
}

/// Look-back window for the public transactions endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionWindow {
    Minute,
    #[default]
    Hour,
    Day,
}

impl TransactionWindow {
    pub const fn as_str(self) -> &'static str {
        match self {
            TransactionWindow::Minute => "minute",
            TransactionWindow::Hour => "hour",
            TransactionWindow::Day => "day",
        }
    }
}

impl fmt::Display for TransactionWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort direction for user transaction listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// Bank withdrawal rail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BankWithdrawalType {
    #[serde(rename = "sepa")]
    Sepa,
    #[serde(rename = "international")]
    International,
}

/// Side of a public trade, decoded from the numeric `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TradeSide {
    Buy,
    Sell,
}

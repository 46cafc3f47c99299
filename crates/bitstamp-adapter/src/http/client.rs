/*
[INPUT]:  Request descriptors, client configuration and an HTTP transport
[OUTPUT]: Decoded JSON payloads or raw responses
[POS]:    HTTP layer - versioned request dispatcher shared by all endpoints
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, instrument, warn};
use url::Url;

use crate::http::transport::{HttpRequest, HttpTransport, RawResponse, ReqwestTransport};
use crate::http::{BitstampError, Result};
use crate::types::{ApiVersion, RequestDescriptor};

/// Production host for the Bitstamp REST API
pub const BASE_URL: &str = "https://www.bitstamp.net";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("bitstamp-adapter/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Result of a dispatched request
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Body decoded as JSON
    Json(Value),
    /// Body returned untouched
    Raw(RawResponse),
}

impl Payload {
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            Payload::Raw(_) => None,
        }
    }

    pub fn into_json(self) -> Result<Value> {
        match self {
            Payload::Json(value) => Ok(value),
            Payload::Raw(raw) => Err(BitstampError::invalid_response(
                "expected a structured response, got a raw one",
                raw.body,
            )),
        }
    }

    pub fn into_raw(self) -> Option<RawResponse> {
        match self {
            Payload::Raw(raw) => Some(raw),
            Payload::Json(_) => None,
        }
    }
}

/// Public request dispatcher for the Bitstamp REST API
///
/// Cheap to clone; clones share the underlying transport.
#[derive(Debug, Clone)]
pub struct BitstampClient {
    transport: Arc<dyn HttpTransport>,
    base_url: String,
}

impl BitstampClient {
    /// Create a new client with default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, BASE_URL)
    }

    /// Create a client against another host (tests, proxies)
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(Arc::new(transport), base_url)
    }

    /// Create a client on top of an injected transport
    pub fn with_transport(transport: Arc<dyn HttpTransport>, base_url: &str) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| BitstampError::Config(format!("Invalid base URL '{base_url}': {e}")))?;
        if parsed.cannot_be_a_base() {
            return Err(BitstampError::Config(format!(
                "Base URL '{base_url}' cannot carry a path"
            )));
        }

        Ok(Self {
            transport,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Host the client talks to, without a trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Versioned base URL, e.g. `https://www.bitstamp.net/api/v2`
    pub fn versioned_base_url(&self, version: u8) -> Result<String> {
        let version = ApiVersion::try_from(version)?;
        Ok(format!("{}{}", self.base_url, version.path_prefix()))
    }

    /// Full URL for an endpoint path. The path is appended verbatim so the
    /// version prefix survives.
    fn endpoint_url(&self, version: u8, path: &str) -> Result<Url> {
        let base = self.versioned_base_url(version)?;
        if has_dot_segment(path) {
            return Err(BitstampError::Config(format!(
                "Path '{path}' contains a relative segment"
            )));
        }
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    /// Issue the request described by `descriptor`
    ///
    /// An unsupported version fails before any network access. Transport and
    /// decoding failures are logged and returned as soft failures.
    #[instrument(
        skip_all,
        fields(
            method = %descriptor.method(),
            path = descriptor.path(),
            version = descriptor.version()
        )
    )]
    pub async fn dispatch(&self, descriptor: &RequestDescriptor) -> Result<Payload> {
        let url = self.endpoint_url(descriptor.version(), descriptor.path())?;
        debug!(%url, "dispatching Bitstamp request");

        let request = HttpRequest {
            method: descriptor.method(),
            url,
            params: descriptor.params().clone(),
        };

        let response = match self.transport.execute(request).await {
            Ok(response) => response,
            Err(err) => {
                error!(error = %err, "Error while accessing Bitstamp HTTP API");
                return Err(err);
            }
        };

        if !response.is_success() {
            warn!(status = response.status, "Bitstamp returned a non-success status");
        }

        if !descriptor.expects_structured_response() {
            return Ok(Payload::Raw(response));
        }

        match serde_json::from_str::<Value>(&response.body) {
            Ok(value) => Ok(Payload::Json(value)),
            Err(err) => {
                error!(
                    status = response.status,
                    body = %response.body,
                    "Not a valid JSON response from Bitstamp"
                );
                Err(BitstampError::invalid_response(err, response.body))
            }
        }
    }

    /// Dispatch and decode the JSON body into `T`
    pub async fn send_json<T: DeserializeOwned>(&self, descriptor: RequestDescriptor) -> Result<T> {
        let value = self.dispatch(&descriptor).await?.into_json()?;
        decode_value(value)
    }

    /// Dispatch without decoding and return the body text
    pub async fn send_text(&self, descriptor: RequestDescriptor) -> Result<String> {
        let payload = self.dispatch(&descriptor.raw()).await?;
        match payload {
            Payload::Raw(raw) => Ok(raw.body),
            Payload::Json(value) => Ok(value.to_string()),
        }
    }
}

/// Whether the path part of `path` has a `.` or `..` segment, which URL
/// parsing would resolve away (percent-encoded dots included)
fn has_dot_segment(path: &str) -> bool {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    path.split(['/', '\\']).any(|segment| {
        let segment = segment.to_ascii_lowercase().replace("%2e", ".");
        segment == "." || segment == ".."
    })
}

/// Type a decoded body, keeping the body for diagnostics on mismatch
pub(crate) fn decode_value<T: DeserializeOwned>(value: Value) -> Result<T> {
    serde_json::from_value(value.clone()).map_err(|err| {
        error!(error = %err, body = %value, "Unexpected response shape from Bitstamp");
        BitstampError::invalid_response(err, value.to_string())
    })
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::http::transport::MockTransport;
    use crate::types::HttpMethod;

    fn mock_client(transport: Arc<MockTransport>) -> BitstampClient {
        BitstampClient::with_transport(transport, "https://example.com").unwrap()
    }

    #[test]
    fn test_versioned_base_urls() {
        let client = BitstampClient::new().unwrap();
        assert_eq!(client.base_url(), BASE_URL);
        assert_eq!(
            client.versioned_base_url(1).unwrap(),
            "https://www.bitstamp.net/api"
        );
        assert_eq!(
            client.versioned_base_url(2).unwrap(),
            "https://www.bitstamp.net/api/v2"
        );
        assert!(client.versioned_base_url(3).unwrap_err().is_config_error());
    }

    #[test]
    fn test_invalid_base_url_is_config_error() {
        let transport = Arc::new(MockTransport::new(200, "{}"));
        let err = BitstampClient::with_transport(transport, "not a url").unwrap_err();
        assert!(err.is_config_error());
    }

    #[tokio::test]
    async fn test_unsupported_version_never_reaches_transport() {
        let transport = Arc::new(MockTransport::new(200, "{}"));
        let client = mock_client(transport.clone());

        let descriptor = RequestDescriptor::get("/ticker/btcusd/").with_version(3u8);
        let err = client.dispatch(&descriptor).await.unwrap_err();

        assert!(matches!(err, BitstampError::Config(_)));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_decodes_json_keys() {
        let original = serde_json::json!({"a": 1, "b": "two", "c": [3], "d": {"e": null}});
        let transport = Arc::new(MockTransport::json(&original));
        let client = mock_client(transport.clone());

        let payload = client
            .dispatch(&RequestDescriptor::get("/anything/"))
            .await
            .unwrap();

        let decoded = payload.as_json().and_then(Value::as_object).unwrap();
        let expected = original.as_object().unwrap();
        let decoded_keys: Vec<_> = decoded.keys().collect();
        let expected_keys: Vec<_> = expected.keys().collect();
        assert_eq!(decoded_keys, expected_keys);

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.url.as_str(), "https://example.com/api/v2/anything/");
    }

    #[tokio::test]
    async fn test_dispatch_raw_skips_decoding() {
        let transport = Arc::new(MockTransport::new(200, "not json"));
        let client = mock_client(transport);

        let payload = client
            .dispatch(&RequestDescriptor::get("/eur_usd/").raw())
            .await
            .unwrap();

        assert_eq!(
            payload.into_raw(),
            Some(RawResponse {
                status: 200,
                body: "not json".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_dispatch_invalid_json_is_soft_failure() {
        let transport = Arc::new(MockTransport::new(502, "<html>Bad Gateway</html>"));
        let client = mock_client(transport);

        let err = client
            .dispatch(&RequestDescriptor::get("/ticker/btcusd/"))
            .await
            .unwrap_err();

        assert!(err.is_soft_failure());
        assert_eq!(err.response_body(), Some("<html>Bad Gateway</html>"));
    }

    #[tokio::test]
    async fn test_dispatch_transport_failure_is_soft() {
        let transport = Arc::new(MockTransport::failing("connection refused"));
        let client = mock_client(transport);

        let err = client
            .dispatch(&RequestDescriptor::get("/order_book/btcusd/"))
            .await
            .unwrap_err();

        assert!(err.is_soft_failure());
    }

    #[tokio::test]
    async fn test_empty_list_is_not_a_failure() {
        let transport = Arc::new(MockTransport::new(200, "[]"));
        let client = mock_client(transport);

        let result: Vec<BTreeMap<String, Value>> = client
            .send_json(RequestDescriptor::get("/transactions/btcusd?&time=minute"))
            .await
            .unwrap();

        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn test_send_json_shape_mismatch_keeps_body() {
        let transport = Arc::new(MockTransport::new(200, r#"{"status": "error"}"#));
        let client = mock_client(transport);

        let err = client
            .send_json::<Vec<Value>>(RequestDescriptor::get("/transactions/btcusd"))
            .await
            .unwrap_err();

        assert!(err.is_soft_failure());
        assert_eq!(err.response_body(), Some(r#"{"status":"error"}"#));
    }

    #[tokio::test]
    async fn test_send_text_returns_body() {
        let transport = Arc::new(MockTransport::new(200, "\"1BitcoinAddress\""));
        let client = mock_client(transport);

        let text = client
            .send_text(RequestDescriptor::post("/bitcoin_deposit_address/").with_version(1u8))
            .await
            .unwrap();

        assert_eq!(text, "\"1BitcoinAddress\"");
    }

    #[tokio::test]
    async fn test_relative_segment_is_not_sent() {
        let transport = Arc::new(MockTransport::new(200, "{}"));
        let client = mock_client(transport.clone());

        for path in ["/balance/../cancel_all_orders/", "/balance/%2E%2e/", "/balance/./"] {
            let err = client
                .dispatch(&RequestDescriptor::post(path))
                .await
                .unwrap_err();
            assert!(err.is_config_error(), "{path}");
        }
        assert!(transport.requests().is_empty());

        client
            .dispatch(&RequestDescriptor::post("/balance/..%2Fcancel_all_orders/"))
            .await
            .unwrap();
        let request = transport.last_request().unwrap();
        assert_eq!(request.url.path(), "/api/v2/balance/..%2Fcancel_all_orders/");
    }
}

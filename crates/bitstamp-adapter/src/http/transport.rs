/*
[INPUT]:  Fully resolved HTTP requests (verb, URL, parameters)
[OUTPUT]: Raw HTTP responses (status + body) or transport errors
[POS]:    HTTP layer - pluggable transport behind the dispatcher
[UPDATE]: When adding transport options or new transport implementations
*/

use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::http::client::ClientConfig;
use crate::http::{BitstampError, Result};
use crate::types::{HttpMethod, Params};

/// Request handed to a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub params: Params,
}

/// Undecoded HTTP response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for the HTTP collaborator used by the dispatcher
///
/// GET parameters go into the query string, POST parameters into a
/// form-encoded body. Network failures must be returned as errors for which
/// [`BitstampError::is_soft_failure`] is true.
#[async_trait]
pub trait HttpTransport: Send + Sync + std::fmt::Debug {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse>;
}

/// Default transport backed by `reqwest`
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| BitstampError::Config(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }

    /// Wrap an existing reqwest client (shared connection pool, custom TLS)
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse> {
        let mut builder = self
            .client
            .request(request.method.as_reqwest(), request.url);

        if !request.params.is_empty() {
            builder = match request.method {
                HttpMethod::Get => builder.query(&request.params),
                HttpMethod::Post => builder.form(&request.params),
            };
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        Ok(RawResponse { status, body })
    }
}

/// Transport for testing: records requests and replays a canned outcome
#[derive(Debug)]
pub struct MockTransport {
    outcome: MockOutcome,
    requests: Mutex<Vec<HttpRequest>>,
}

#[derive(Debug, Clone)]
enum MockOutcome {
    Respond(RawResponse),
    Fail(String),
}

impl MockTransport {
    /// Answer every request with `status` and `body`
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self::with_outcome(MockOutcome::Respond(RawResponse {
            status,
            body: body.into(),
        }))
    }

    /// Answer every request with a JSON body and status 200
    pub fn json(body: &serde_json::Value) -> Self {
        Self::new(200, body.to_string())
    }

    /// Fail every request as if the network were down
    pub fn failing(message: impl Into<String>) -> Self {
        Self::with_outcome(MockOutcome::Fail(message.into()))
    }

    fn with_outcome(outcome: MockOutcome) -> Self {
        Self {
            outcome,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Requests seen so far, oldest first
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last_request(&self) -> Option<HttpRequest> {
        self.requests().pop()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);

        match &self.outcome {
            MockOutcome::Respond(response) => Ok(response.clone()),
            MockOutcome::Fail(message) => Err(BitstampError::Transport(message.clone())),
        }
    }
}

/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for bitstamp-adapter tests

use std::collections::HashMap;
use std::time::Duration;

use bitstamp_adapter::{BitstampClient, BitstampPrivateClient, ClientConfig, Credentials};
use wiremock::{MockServer, Request};

pub const TEST_CUSTOMER_ID: &str = "123456";
pub const TEST_API_KEY: &str = "test-api-key";
pub const TEST_API_SECRET: &str = "test-api-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn test_config() -> ClientConfig {
    ClientConfig {
        timeout: Duration::from_secs(5),
        connect_timeout: Duration::from_secs(2),
        ..ClientConfig::default()
    }
}

/// Public client pointed at the mock server
pub fn public_client(server: &MockServer) -> BitstampClient {
    BitstampClient::with_config_and_base_url(test_config(), &server.uri())
        .expect("client should build")
}

pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_CUSTOMER_ID, TEST_API_KEY, TEST_API_SECRET)
}

/// Private client pointed at the mock server
#[allow(dead_code)]
pub fn private_client(server: &MockServer) -> BitstampPrivateClient {
    BitstampPrivateClient::with_client(public_client(server), test_credentials())
}

/// Decode a form-encoded request body
#[allow(dead_code)]
pub fn form_body(request: &Request) -> HashMap<String, String> {
    url::form_urlencoded::parse(&request.body)
        .into_owned()
        .collect()
}

/// Sample public trades, newest first
#[allow(dead_code)]
pub fn transactions_fixture(count: usize) -> serde_json::Value {
    let trades: Vec<_> = (0..count)
        .map(|i| {
            serde_json::json!({
                "date": (1_700_000_000 - i).to_string(),
                "tid": (90_000 - i).to_string(),
                "price": "64000.00",
                "amount": "0.01000000",
                "type": (i % 2).to_string()
            })
        })
        .collect();
    serde_json::Value::Array(trades)
}

#[allow(dead_code)]
pub fn ticker_fixture() -> serde_json::Value {
    serde_json::json!({
        "high": "65000.00",
        "last": "64250.10",
        "timestamp": "1700000000",
        "bid": "64250.00",
        "vwap": "64000.55",
        "volume": "1234.56789012",
        "low": "63000.00",
        "ask": "64251.00",
        "open": "63500.00"
    })
}

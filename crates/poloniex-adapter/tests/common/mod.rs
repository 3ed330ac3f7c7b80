/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for poloniex-adapter tests

use std::time::Duration;

use poloniex_adapter::{ClientConfig, Credentials, PoloniexClient};
use wiremock::MockServer;

pub const TEST_KEY: &str = "INTEGRATION-KEY";
pub const TEST_SECRET: &str = "integration-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client pointed at the mock server's `/public` and `/tradingApi` paths
pub fn mock_client(server: &MockServer) -> PoloniexClient {
    mock_client_with_config(server, ClientConfig::default())
}

#[allow(dead_code)]
pub fn mock_client_with_config(server: &MockServer, config: ClientConfig) -> PoloniexClient {
    PoloniexClient::with_config_and_base_urls(
        config,
        &format!("{}/public", server.uri()),
        &format!("{}/tradingApi", server.uri()),
    )
    .expect("client init")
}

/// Same as [`mock_client`], with test credentials attached
pub fn authenticated_client(server: &MockServer) -> PoloniexClient {
    mock_client(server).with_credentials(Credentials::new(TEST_KEY, TEST_SECRET))
}

#[allow(dead_code)]
pub fn short_timeout_config() -> ClientConfig {
    ClientConfig {
        timeout: Duration::from_millis(200),
        ..ClientConfig::default()
    }
}

/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for flickr-adapter tests

use std::time::Duration;

use flickr_adapter::{ClientConfig, Credentials, FlickrClient};
use wiremock::MockServer;

pub const TEST_API_KEY: &str = "key1";
pub const TEST_SECRET: &str = "s3cr3t";
pub const REST_PATH: &str = "/services/rest/";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Credentials matching the pinned signature fixtures
pub fn test_credentials() -> Credentials {
    Credentials::new(TEST_API_KEY, TEST_SECRET)
}

/// Client configuration aimed at the mock server, without pacing
pub fn test_config(server: &MockServer) -> ClientConfig {
    ClientConfig {
        rest_endpoint: format!("{}{}", server.uri(), REST_PATH),
        auth_endpoint: format!("{}/services/auth/", server.uri()),
        min_request_interval: Duration::ZERO,
        ..ClientConfig::default()
    }
}

/// Client talking to the mock server
pub fn client_for(server: &MockServer) -> FlickrClient {
    FlickrClient::with_config(test_credentials(), test_config(server))
        .expect("client should build")
}

/*
[INPUT]:  Fully built request URL
[OUTPUT]: Raw response body bytes or a transport-level error
[POS]:    HTTP layer - the only component that touches the network
[UPDATE]: When adding request methods or transport implementations
*/

use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;
use url::Url;

use crate::http::client::ClientConfig;
use crate::http::{FlickrError, Result};

/// Executes outbound requests on behalf of the client
///
/// The trait is async so implementations can share a connection pool or be
/// replaced by an in-memory fake in tests.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    /// Issue a GET and return the body of a successful response
    async fn get(&self, url: Url) -> Result<Vec<u8>>;
}

/// `reqwest`-backed transport
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http_client: Client,
}

impl ReqwestTransport {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;
        Ok(Self { http_client })
    }

    /// Wrap an already configured `reqwest` client
    pub fn from_client(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn get(&self, url: Url) -> Result<Vec<u8>> {
        // The query carries api_sig and auth_token: only the path may reach
        // logs or errors.
        let endpoint = url.path().to_string();
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status();
        if !status.is_success() {
            debug!(%endpoint, status = status.as_u16(), "non-success HTTP status");
            return Err(FlickrError::Status {
                status: status.as_u16(),
                endpoint,
            });
        }

        let body = response.bytes().await.map_err(reqwest::Error::without_url)?;
        debug!(%endpoint, bytes = body.len(), "response received");
        Ok(body.to_vec())
    }
}

/*
[INPUT]:  Credentials (API key, secret, optional auth token), client configuration, transport
[OUTPUT]: Signed, rate-limited API calls decoded into typed results
[POS]:    HTTP layer - core client and the shared call pipeline
[UPDATE]: When adding connection options or changing the call pipeline
*/

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use crate::http::envelope;
use crate::http::rate_limit::{DEFAULT_MIN_INTERVAL, RateLimiter};
use crate::http::request::{ResponseFormat, UrlBuilder};
use crate::http::signature::RequestSigner;
use crate::http::transport::{ReqwestTransport, Transport};
use crate::http::{FlickrError, Result};
use crate::params::{ParamSet, WireParams};
use crate::types::Permission;

/// Base URLs for the Flickr API
pub const REST_ENDPOINT: &str = "https://api.flickr.com/services/rest/";
pub const AUTH_ENDPOINT: &str = "https://www.flickr.com/services/auth/";

const AUTH_TOKEN_PARAM: &str = "auth_token";

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    /// Minimum spacing between two outbound calls
    pub min_request_interval: Duration,
    pub rest_endpoint: String,
    pub auth_endpoint: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            min_request_interval: DEFAULT_MIN_INTERVAL,
            rest_endpoint: REST_ENDPOINT.to_string(),
            auth_endpoint: AUTH_ENDPOINT.to_string(),
        }
    }
}

/// Application credentials, plus the user's token once one has been issued
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub secret: String,
    pub auth_token: Option<String>,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret: secret.into(),
            auth_token: None,
        }
    }

    pub fn with_auth_token(mut self, auth_token: impl Into<String>) -> Self {
        self.auth_token = Some(auth_token.into());
        self
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret", &"<redacted>")
            .field("auth_token", &self.auth_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

/// Main HTTP client for the Flickr API
///
/// Share one instance (behind an `Arc`) across tasks: every call made through
/// it passes the same rate limiter.
#[derive(Debug)]
pub struct FlickrClient {
    credentials: Credentials,
    signer: RequestSigner,
    rest: UrlBuilder,
    auth: UrlBuilder,
    limiter: Arc<RateLimiter>,
    transport: Arc<dyn Transport>,
}

impl FlickrClient {
    /// Create a new client with default configuration
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config)?;
        Self::with_transport(credentials, config, Arc::new(transport))
    }

    /// Create a new client on top of a caller-supplied transport
    pub fn with_transport(
        credentials: Credentials,
        config: ClientConfig,
        transport: Arc<dyn Transport>,
    ) -> Result<Self> {
        if credentials.api_key.trim().is_empty() {
            return Err(FlickrError::Config("API key must not be empty".to_string()));
        }
        if credentials.secret.is_empty() {
            return Err(FlickrError::Config("API secret must not be empty".to_string()));
        }

        let rest_base = Url::parse(&config.rest_endpoint)?;
        let auth_base = Url::parse(&config.auth_endpoint)?;
        let signer = RequestSigner::new(&credentials.api_key, &credentials.secret);

        Ok(Self {
            rest: UrlBuilder::new(rest_base, &credentials.api_key),
            auth: UrlBuilder::new(auth_base, &credentials.api_key),
            signer,
            credentials,
            limiter: Arc::new(RateLimiter::new(config.min_request_interval)),
            transport,
        })
    }

    /// Pace this client with a limiter shared with other clients
    pub fn with_rate_limiter(mut self, limiter: Arc<RateLimiter>) -> Self {
        self.limiter = limiter;
        self
    }

    pub fn rate_limiter(&self) -> &Arc<RateLimiter> {
        &self.limiter
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn api_key(&self) -> &str {
        &self.credentials.api_key
    }

    /// Token sent with signed calls, if set
    pub fn auth_token(&self) -> Option<&str> {
        self.credentials.auth_token.as_deref()
    }

    /// Set the token used to act on behalf of a user
    pub fn set_auth_token(&mut self, auth_token: impl Into<String>) {
        self.credentials.auth_token = Some(auth_token.into());
    }

    pub fn clear_auth_token(&mut self) {
        self.credentials.auth_token = None;
    }

    /// Build the URL for a REST method call
    ///
    /// Signed calls also carry the auth token, when one is set.
    pub fn method_url(&self, method: &str, mut params: ParamSet, sign: bool) -> Url {
        if !sign {
            return self.rest.build(method, params, ResponseFormat::Json, None);
        }
        if let Some(token) = self.auth_token() {
            params.insert(AUTH_TOKEN_PARAM, token);
        }
        self.rest
            .build(method, params, ResponseFormat::Json, Some(&self.signer))
    }

    /// Build the signed web authentication URL for `perms`
    pub(crate) fn web_auth_url(&self, perms: Permission) -> Url {
        self.auth.build_auth(perms, &self.signer)
    }

    /// Run one API call through the full pipeline
    ///
    /// marshal -> (sign) -> build URL -> rate limit -> transport -> envelope
    pub async fn call<P, T>(&self, method: &str, params: &P, sign: bool) -> Result<T>
    where
        P: WireParams + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.method_url(method, params.to_wire_params(), sign);

        self.limiter.acquire().await;
        debug!(method, signed = sign, "calling Flickr");

        let body = self.transport.get(url).await?;
        let result = envelope::decode::<T>(&body)?.into_result();
        if let Err(FlickrError::Api { code, message }) = &result {
            warn!(method, %code, %message, "Flickr returned an error");
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde::Deserialize;
    use serde::de::IgnoredAny;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct RecordingTransport {
        body: Vec<u8>,
        fail: bool,
        urls: Mutex<Vec<Url>>,
    }

    impl RecordingTransport {
        fn replying(body: &str) -> Arc<Self> {
            Arc::new(Self {
                body: body.as_bytes().to_vec(),
                ..Default::default()
            })
        }

        fn failing() -> Arc<Self> {
            Arc::new(Self {
                fail: true,
                ..Default::default()
            })
        }

        fn last_query(&self) -> ParamSet {
            let urls = self.urls.lock().unwrap();
            let url = urls.last().expect("no request recorded");
            url.query_pairs()
                .map(|(key, value)| (key.into_owned(), value.into_owned()))
                .collect()
        }
    }

    #[async_trait]
    impl Transport for RecordingTransport {
        async fn get(&self, url: Url) -> Result<Vec<u8>> {
            self.urls.lock().unwrap().push(url.clone());
            if self.fail {
                return Err(FlickrError::Status {
                    status: 503,
                    endpoint: url.path().to_string(),
                });
            }
            Ok(self.body.clone())
        }
    }

    fn test_config() -> ClientConfig {
        ClientConfig {
            min_request_interval: Duration::ZERO,
            ..ClientConfig::default()
        }
    }

    fn client_with(transport: Arc<RecordingTransport>, credentials: Credentials) -> FlickrClient {
        FlickrClient::with_transport(credentials, test_config(), transport).expect("client init")
    }

    #[derive(Debug, Deserialize)]
    struct Echo {
        foo: Content,
    }

    #[derive(Debug, Deserialize)]
    struct Content {
        #[serde(rename = "_content")]
        content: String,
    }

    #[test]
    fn test_rejects_empty_api_key() {
        let transport = RecordingTransport::replying("{}");
        let err = FlickrClient::with_transport(Credentials::new(" ", "secret"), test_config(), transport)
            .unwrap_err();
        assert!(matches!(err, FlickrError::Config(_)));
    }

    #[test]
    fn test_rejects_invalid_endpoint() {
        let transport = RecordingTransport::replying("{}");
        let config = ClientConfig {
            rest_endpoint: "not a url".to_string(),
            ..test_config()
        };
        let err = FlickrClient::with_transport(Credentials::new("key1", "s3cr3t"), config, transport)
            .unwrap_err();
        assert!(matches!(err, FlickrError::UrlParse(_)));
    }

    #[test]
    fn test_signed_url_carries_token_and_signature() {
        let credentials = Credentials::new("key1", "s3cr3t").with_auth_token("72157-token");
        let client = client_with(RecordingTransport::replying("{}"), credentials);

        let params: ParamSet = [("foo", "1")].into_iter().collect();
        let url = client.method_url("flickr.test.echo", params, true);
        let query: ParamSet = url
            .query_pairs()
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();

        assert_eq!(query.get("auth_token"), Some("72157-token"));
        let signer = RequestSigner::new("key1", "s3cr3t");
        assert_eq!(query.get("api_sig"), Some(signer.signature(&query).as_str()));
    }

    #[test]
    fn test_unsigned_url_carries_neither_token_nor_signature() {
        let credentials = Credentials::new("key1", "s3cr3t").with_auth_token("72157-token");
        let client = client_with(RecordingTransport::replying("{}"), credentials);

        let url = client.method_url("flickr.test.echo", ParamSet::new(), false);
        let query = url.query().unwrap_or_default();
        assert!(!query.contains("auth_token"));
        assert!(!query.contains("api_sig"));
        assert!(query.contains("api_key=key1"));
    }

    #[tokio::test]
    async fn test_call_decodes_payload() {
        let transport = RecordingTransport::replying(
            r#"{"foo":{"_content":"1"},"method":{"_content":"flickr.test.echo"},"stat":"ok"}"#,
        );
        let client = client_with(Arc::clone(&transport), Credentials::new("key1", "s3cr3t"));

        let params: ParamSet = [("foo", "1")].into_iter().collect();
        let echo: Echo = client
            .call("flickr.test.echo", &params, true)
            .await
            .expect("call failed");

        assert_eq!(echo.foo.content, "1");
        let query = transport.last_query();
        assert_eq!(query.get("method"), Some("flickr.test.echo"));
        assert_eq!(query.get("format"), Some("json"));
        assert!(query.contains_key("api_sig"));
    }

    #[tokio::test]
    async fn test_call_surfaces_api_failure() {
        let transport =
            RecordingTransport::replying(r#"{"stat":"fail","code":98,"message":"Invalid auth token"}"#);
        let client = client_with(transport, Credentials::new("key1", "s3cr3t"));

        let err = client
            .call::<_, IgnoredAny>("flickr.test.login", &ParamSet::new(), true)
            .await
            .unwrap_err();
        assert_eq!(err.api_code(), Some("98"));
        assert_eq!(err.to_string(), "Flickr error code 98: Invalid auth token");
    }

    #[tokio::test]
    async fn test_call_surfaces_transport_failure() {
        let client = client_with(RecordingTransport::failing(), Credentials::new("key1", "s3cr3t"));

        let err = client
            .call::<_, IgnoredAny>("flickr.test.echo", &ParamSet::new(), false)
            .await
            .unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_call_surfaces_parse_failure() {
        let client = client_with(RecordingTransport::replying("<html>"), Credentials::new("key1", "s3cr3t"));

        let err = client
            .call::<_, IgnoredAny>("flickr.test.echo", &ParamSet::new(), false)
            .await
            .unwrap_err();
        assert!(err.is_parse());
    }

    #[tokio::test]
    async fn test_clients_can_share_a_limiter() {
        let shared = Arc::new(RateLimiter::new(Duration::from_millis(80)));
        let first = client_with(RecordingTransport::replying(r#"{"stat":"ok"}"#), Credentials::new("a", "s"))
            .with_rate_limiter(Arc::clone(&shared));
        let second = client_with(RecordingTransport::replying(r#"{"stat":"ok"}"#), Credentials::new("b", "s"))
            .with_rate_limiter(Arc::clone(&shared));

        let started = tokio::time::Instant::now();
        first
            .call::<_, IgnoredAny>("flickr.test.null", &ParamSet::new(), false)
            .await
            .expect("first call");
        second
            .call::<_, IgnoredAny>("flickr.test.null", &ParamSet::new(), false)
            .await
            .expect("second call");

        assert!(started.elapsed() >= Duration::from_millis(80));
        assert!(Arc::ptr_eq(first.rate_limiter(), second.rate_limiter()));
    }

    #[test]
    fn test_credentials_debug_redacts_secrets() {
        let credentials = Credentials::new("key1", "s3cr3t").with_auth_token("72157-token");
        let rendered = format!("{credentials:?}");
        assert!(rendered.contains("key1"));
        assert!(!rendered.contains("s3cr3t"));
        assert!(!rendered.contains("72157-token"));
    }
}

/*
[INPUT]:  HTTP configuration (timeouts, TLS strictness), base URLs, credentials
[OUTPUT]: Dispatcher for public GET and signed private POST requests
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing client behavior
*/

use std::sync::Arc;
use std::time::Duration;

use hyper::ext::ReasonPhrase;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::auth::signer::{KEY_HEADER, SIGN_HEADER};
use crate::auth::{Credentials, IncreasingNonce, NonceProvider, RequestSigner};
use crate::http::{PoloniexError, Result};
use crate::types::Params;

/// Base URLs for Poloniex API
pub const PUBLIC_API_URL: &str = "https://poloniex.com/public";
pub const PRIVATE_API_URL: &str = "https://poloniex.com/tradingApi";

/// Client identifier sent with every request
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

const DEFAULT_TIMEOUT_MS: u64 = 1719;
const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 10_000;
const TCP_KEEPALIVE: Duration = Duration::from_secs(60);

/// HTTP client configuration
///
/// Durations are read and written as milliseconds (`timeout_ms`,
/// `connect_timeout_ms`), so the struct can sit inside a YAML or TOML file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    #[serde(rename = "timeout_ms", with = "duration_ms")]
    pub timeout: Duration,
    #[serde(rename = "connect_timeout_ms", with = "duration_ms")]
    pub connect_timeout: Duration,
    /// Verify TLS certificates. Turning this off is an escape hatch for
    /// hosts with broken trust stores.
    pub strict_ssl: bool,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            connect_timeout: Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS),
            strict_ssl: true,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

mod duration_ms {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u64(value.as_millis() as u64)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}

/// Main HTTP client for Poloniex API
#[derive(Debug, Clone)]
pub struct PoloniexClient {
    http_client: Client,
    public_url: Url,
    private_url: Url,
    signer: RequestSigner,
    nonce: Arc<dyn NonceProvider>,
}

impl PoloniexClient {
    /// Create a new client with default configuration and no credentials
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_urls(config, PUBLIC_API_URL, PRIVATE_API_URL)
    }

    /// Create a new client against explicit endpoint URLs
    pub fn with_config_and_base_urls(
        config: ClientConfig,
        public_url: &str,
        private_url: &str,
    ) -> Result<Self> {
        if !config.strict_ssl {
            warn!("TLS certificate verification disabled");
        }

        let http_client = Client::builder()
            .user_agent(config.user_agent)
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .tcp_keepalive(TCP_KEEPALIVE)
            .danger_accept_invalid_certs(!config.strict_ssl)
            .build()?;

        Ok(Self {
            http_client,
            public_url: Url::parse(public_url)?,
            private_url: Url::parse(private_url)?,
            signer: RequestSigner::default(),
            nonce: Arc::new(IncreasingNonce::new()),
        })
    }

    /// Attach credentials, builder style
    pub fn with_credentials(mut self, credentials: Credentials) -> Self {
        self.set_credentials(credentials);
        self
    }

    /// Set credentials for private requests
    pub fn set_credentials(&mut self, credentials: Credentials) {
        self.signer = RequestSigner::new(credentials);
    }

    /// Replace the nonce source
    pub fn with_nonce_provider(mut self, nonce: Arc<dyn NonceProvider>) -> Self {
        self.nonce = nonce;
        self
    }

    /// API key in use, empty when no credentials were set
    pub fn api_key(&self) -> &str {
        self.signer.key()
    }

    pub fn public_url(&self) -> &Url {
        &self.public_url
    }

    pub fn private_url(&self) -> &Url {
        &self.private_url
    }

    /// Request builder sharing this client's connection pool, user agent and timeouts
    pub fn http_request(&self, method: Method, url: Url) -> RequestBuilder {
        self.http_client.request(method, url)
    }

    /// GET the public endpoint with `params` as the query string
    pub async fn public_request(&self, params: Params) -> Result<Value> {
        let mut url = self.public_url.clone();
        url.query_pairs_mut().extend_pairs(params.iter());

        debug!(
            method = "GET",
            command = params.command().unwrap_or_default(),
            url = %self.public_url,
            "public request"
        );
        self.send_request(self.http_request(Method::GET, url)).await
    }

    /// POST `params` plus a fresh nonce to the private endpoint, signed
    ///
    /// Missing credentials fail here, before anything is sent.
    pub async fn private_request(&self, mut params: Params) -> Result<Value> {
        params.insert("nonce", self.nonce.next_nonce());
        let auth = self.signer.sign(&params)?;

        debug!(
            method = "POST",
            command = params.command().unwrap_or_default(),
            url = %self.private_url,
            "private request"
        );
        let builder = self
            .http_request(Method::POST, self.private_url.clone())
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .header(KEY_HEADER, auth.key)
            .header(SIGN_HEADER, auth.sign)
            .body(params.canonical_string());
        self.send_request(builder).await
    }

    /// Send a request and decode a 200 response as JSON
    ///
    /// Any other status becomes [`PoloniexError::Status`] and the body is
    /// dropped unread, even when it holds JSON.
    pub async fn send_request<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T> {
        let response = builder
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                debug!(error = %e, "transport failure");
                PoloniexError::Http(e)
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            // hyper only records the phrase when it differs from the standard one
            let reason = response
                .extensions()
                .get::<ReasonPhrase>()
                .map(ReasonPhrase::as_bytes);
            let err = PoloniexError::status_with_reason(status, reason);
            warn!(status = status.as_u16(), error = %err, "non-200 response, body discarded");
            return Err(err);
        }

        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}

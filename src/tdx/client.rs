//! Endpoint forwarder for the TDX data API.

use reqwest::header::ACCEPT_ENCODING;
use serde_json::Value;
use tracing::{debug, instrument, warn};

use super::credentials::TdxCredentials;
use super::error::{TdxResult, UpstreamError};
use crate::core::config::TdxConfig;
use crate::core::{Error, Result};

/// Authenticated client for the TDX basic API.
///
/// Every request attaches the current bearer token from the owned
/// [`TdxCredentials`] and returns the response body as raw JSON.
#[derive(Debug)]
pub struct TdxClient {
    http: reqwest::Client,
    base_url: String,
    credentials: TdxCredentials,
}

impl TdxClient {
    /// Create a client from its parts.
    pub fn new(
        http: reqwest::Client,
        credentials: TdxCredentials,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            credentials,
        }
    }

    /// Build a client from configuration.
    ///
    /// Fails when the client id or secret is not configured.
    pub fn from_config(config: &TdxConfig) -> Result<Self> {
        let (client_id, client_secret) = config.client_credentials()?;

        let http = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::internal(format!("Failed to create HTTP client: {}", e)))?;

        let credentials =
            TdxCredentials::new(http.clone(), &config.auth_url, client_id, client_secret);

        Ok(Self::new(http, credentials, &config.api_base_url))
    }

    /// Full URL for an endpoint path relative to the API base.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    /// GET an endpoint and return its JSON body.
    ///
    /// The body is returned whatever the HTTP status; upstream error
    /// payloads reach the caller as data.
    #[instrument(skip(self, query), fields(endpoint = %endpoint))]
    pub async fn request(&self, endpoint: &str, query: &[(&str, &str)]) -> TdxResult<Value> {
        let token = self.credentials.get_token().await?;
        let url = self.endpoint_url(endpoint);
        debug!("Forwarding GET {}", url);

        let mut request = self
            .http
            .get(&url)
            .bearer_auth(&token)
            .header(ACCEPT_ENCODING, "gzip");
        if !query.is_empty() {
            request = request.query(query);
        }

        let response = request.send().await.map_err(UpstreamError::Request)?;
        let status = response.status();
        if !status.is_success() {
            warn!("TDX returned HTTP {} for {}, passing body through", status, endpoint);
        }

        let body = response.bytes().await.map_err(UpstreamError::Request)?;
        let value = serde_json::from_slice(&body).map_err(|e| UpstreamError::InvalidBody {
            status: status.as_u16(),
            message: e.to_string(),
        })?;

        Ok(value)
    }
}

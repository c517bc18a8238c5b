//! OAuth2 client-credentials token cache for the TDX gateway.
//!
//! A single access token is fetched lazily and reused until shortly before
//! it expires. The cache lock is never held across the token request, so
//! concurrent callers that all find the cache stale each fetch a token and
//! the last one written wins. Token fetches have no side effects upstream.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use super::error::AuthError;

/// Lifetime assumed when the token response omits `expires_in`.
pub const DEFAULT_EXPIRES_IN_SECS: i64 = 3600;

/// Seconds shaved off the advertised lifetime before a token is refreshed.
pub const EXPIRY_MARGIN_SECS: i64 = 60;

/// A cached bearer token.
#[derive(Debug, Clone)]
struct Credential {
    token: String,
    expires_at: DateTime<Utc>,
}

impl Credential {
    fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    expires_in: Option<i64>,
}

/// Credential manager owning the client id/secret and the cached token.
pub struct TdxCredentials {
    http: reqwest::Client,
    token_url: String,
    client_id: String,
    client_secret: String,
    cached: RwLock<Option<Credential>>,
}

impl TdxCredentials {
    /// Create a credential manager with an empty cache.
    pub fn new(
        http: reqwest::Client,
        token_url: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            http,
            token_url: token_url.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            cached: RwLock::new(None),
        }
    }

    /// Return a valid access token, fetching a new one if the cache is
    /// empty or expired.
    pub async fn get_token(&self) -> Result<String, AuthError> {
        if let Some(token) = self.cached_token().await {
            debug!("Using cached TDX access token");
            return Ok(token);
        }

        let credential = self.fetch().await.inspect_err(|e| {
            warn!("TDX token request failed: {}", e);
        })?;
        let token = credential.token.clone();
        *self.cached.write().await = Some(credential);

        Ok(token)
    }

    /// Expiry of the cached token, if one has been fetched.
    pub async fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.cached.read().await.as_ref().map(|c| c.expires_at)
    }

    async fn cached_token(&self) -> Option<String> {
        let now = Utc::now();
        self.cached
            .read()
            .await
            .as_ref()
            .filter(|c| c.is_valid_at(now))
            .map(|c| c.token.clone())
    }

    async fn fetch(&self) -> Result<Credential, AuthError> {
        info!("Requesting TDX access token");

        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(AuthError::Request)?;

        let status = response.status();
        let body = response.bytes().await.map_err(AuthError::Request)?;

        if !status.is_success() {
            return Err(AuthError::Rejected {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        let payload: TokenResponse = serde_json::from_slice(&body)
            .map_err(|e| AuthError::InvalidResponse(e.to_string()))?;
        let token = payload.access_token.ok_or(AuthError::MissingAccessToken)?;
        let expires_in = payload.expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECS);
        let expires_at = expires_in
            .checked_sub(EXPIRY_MARGIN_SECS)
            .and_then(Duration::try_seconds)
            .and_then(|lifetime| Utc::now().checked_add_signed(lifetime))
            .ok_or_else(|| {
                AuthError::InvalidResponse(format!("expires_in out of range: {}", expires_in))
            })?;

        debug!(expires_in, %expires_at, "TDX access token issued");

        Ok(Credential { token, expires_at })
    }

    #[cfg(test)]
    pub(crate) async fn seed(&self, token: &str, expires_at: DateTime<Utc>) {
        *self.cached.write().await = Some(Credential {
            token: token.to_string(),
            expires_at,
        });
    }
}

impl std::fmt::Debug for TdxCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TdxCredentials")
            .field("token_url", &self.token_url)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_string_contains, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const TOKEN_PATH: &str = "/auth/token";

    fn credentials(server: &MockServer) -> TdxCredentials {
        TdxCredentials::new(
            reqwest::Client::new(),
            format!("{}{}", server.uri(), TOKEN_PATH),
            "my-client",
            "my-secret",
        )
    }

    #[tokio::test]
    async fn test_fetches_token_with_client_credentials_form() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .and(header("content-type", "application/x-www-form-urlencoded"))
            .and(body_string_contains("grant_type=client_credentials"))
            .and(body_string_contains("client_id=my-client"))
            .and(body_string_contains("client_secret=my-secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "token-1",
                "expires_in": 86400
            })))
            .expect(1)
            .mount(&server)
            .await;

        let creds = credentials(&server);
        assert_eq!(creds.get_token().await.unwrap(), "token-1");
    }

    #[tokio::test]
    async fn test_valid_cached_token_skips_network() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "fresh"
            })))
            .expect(0)
            .mount(&server)
            .await;

        let creds = credentials(&server);
        creds.seed("cached", Utc::now() + Duration::minutes(10)).await;

        assert_eq!(creds.get_token().await.unwrap(), "cached");
        assert_eq!(creds.get_token().await.unwrap(), "cached");
    }

    #[tokio::test]
    async fn test_token_reused_until_expiry() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "token-1",
                "expires_in": 3600
            })))
            .expect(1)
            .mount(&server)
            .await;

        let creds = credentials(&server);
        for _ in 0..3 {
            assert_eq!(creds.get_token().await.unwrap(), "token-1");
        }
    }

    #[tokio::test]
    async fn test_expired_token_triggers_single_fetch() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "renewed",
                "expires_in": 7200
            })))
            .expect(1)
            .mount(&server)
            .await;

        let creds = credentials(&server);
        creds.seed("stale", Utc::now() - Duration::seconds(1)).await;

        let before = Utc::now();
        assert_eq!(creds.get_token().await.unwrap(), "renewed");
        let after = Utc::now();

        let expires_at = creds.expires_at().await.unwrap();
        assert!(expires_at >= before + Duration::seconds(7200 - EXPIRY_MARGIN_SECS));
        assert!(expires_at <= after + Duration::seconds(7200 - EXPIRY_MARGIN_SECS));
    }

    #[tokio::test]
    async fn test_missing_expires_in_defaults_to_an_hour() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "token-1"
            })))
            .mount(&server)
            .await;

        let creds = credentials(&server);
        let before = Utc::now();
        creds.get_token().await.unwrap();

        let expires_at = creds.expires_at().await.unwrap();
        let lifetime = DEFAULT_EXPIRES_IN_SECS - EXPIRY_MARGIN_SECS;
        assert!(expires_at >= before + Duration::seconds(lifetime));
        assert!(expires_at <= Utc::now() + Duration::seconds(lifetime));
    }

    #[tokio::test]
    async fn test_out_of_range_expires_in_is_auth_error() {
        for expires_in in [i64::MAX, i64::MIN] {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path(TOKEN_PATH))
                .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                    "access_token": "token-1",
                    "expires_in": expires_in
                })))
                .mount(&server)
                .await;

            let creds = credentials(&server);
            let result = creds.get_token().await;
            assert!(
                matches!(result, Err(AuthError::InvalidResponse(ref msg)) if msg.contains("expires_in")),
                "expires_in {} gave {:?}",
                expires_in,
                result
            );
            assert!(creds.expires_at().await.is_none());
        }
    }

    #[tokio::test]
    async fn test_lifetime_within_margin_is_never_cached_as_valid() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "short-lived",
                "expires_in": EXPIRY_MARGIN_SECS
            })))
            .expect(2)
            .mount(&server)
            .await;

        let creds = credentials(&server);
        creds.get_token().await.unwrap();
        creds.get_token().await.unwrap();
    }

    #[tokio::test]
    async fn test_missing_access_token_keeps_previous_credential() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "expires_in": 3600
            })))
            .expect(1)
            .mount(&server)
            .await;

        let creds = credentials(&server);
        let previous_expiry = Utc::now() - Duration::seconds(5);
        creds.seed("old", previous_expiry).await;

        let result = creds.get_token().await;
        assert!(matches!(result, Err(AuthError::MissingAccessToken)));
        assert_eq!(creds.expires_at().await, Some(previous_expiry));
    }

    #[tokio::test]
    async fn test_non_success_status_is_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .respond_with(
                ResponseTemplate::new(401).set_body_json(json!({ "error": "invalid_client" })),
            )
            .mount(&server)
            .await;

        let creds = credentials(&server);
        match creds.get_token().await {
            Err(AuthError::Rejected { status, body }) => {
                assert_eq!(status, 401);
                assert!(body.contains("invalid_client"));
            }
            other => panic!("expected rejection, got {:?}", other),
        }
        assert!(creds.expires_at().await.is_none());
    }

    #[tokio::test]
    async fn test_non_json_token_body_is_auth_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(TOKEN_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let creds = credentials(&server);
        assert!(matches!(
            creds.get_token().await,
            Err(AuthError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_unreachable_token_endpoint_is_auth_error() {
        let creds = TdxCredentials::new(
            reqwest::Client::new(),
            "http://127.0.0.1:1/token",
            "id",
            "secret",
        );
        assert!(matches!(
            creds.get_token().await,
            Err(AuthError::Request(_))
        ));
    }

    #[test]
    fn test_secret_redacted_in_debug() {
        let creds = TdxCredentials::new(
            reqwest::Client::new(),
            "http://localhost/token",
            "id",
            "super_secret_value",
        );
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_value"));
    }
}

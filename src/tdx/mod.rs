//! Access to the TDX transportation data gateway.
//!
//! - `credentials` - OAuth2 client-credentials token cache
//! - `client` - authenticated GET forwarding to the basic data API
//! - `error` - authentication and upstream error types

pub mod client;
pub mod credentials;
mod error;

pub use client::TdxClient;
pub use credentials::TdxCredentials;
pub use error::{AuthError, TdxError, TdxResult, UpstreamError};

/// Default OAuth2 token endpoint.
pub const DEFAULT_AUTH_URL: &str =
    "https://tdx.transportdata.tw/auth/realms/TDXConnect/protocol/openid-connect/token";

/// Default base URL of the basic data API.
pub const DEFAULT_API_BASE_URL: &str = "https://tdx.transportdata.tw/api/basic/v2";

#[cfg(test)]
pub(crate) mod test_support {
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::{TdxClient, TdxCredentials};

    pub const TEST_TOKEN: &str = "test-access-token";

    /// Start a mock gateway serving `/auth/token` (at most once) and return a
    /// client whose data API lives under `/api`.
    pub async fn mock_client() -> (MockServer, TdxClient) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": TEST_TOKEN,
                "expires_in": 86400
            })))
            .expect(..=1)
            .mount(&server)
            .await;

        let http = reqwest::Client::new();
        let credentials = TdxCredentials::new(
            http.clone(),
            format!("{}/auth/token", server.uri()),
            "test-client",
            "test-secret",
        );
        let client = TdxClient::new(http, credentials, format!("{}/api", server.uri()));

        (server, client)
    }
}

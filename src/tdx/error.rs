//! TDX gateway error types.

use thiserror::Error;

/// Result type for calls against the TDX gateway.
pub type TdxResult<T> = Result<T, TdxError>;

/// Errors raised while obtaining an access token.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The token endpoint could not be reached.
    #[error("Token request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The token endpoint answered with a non-success status.
    #[error("Token endpoint returned {status}: {body}")]
    Rejected { status: u16, body: String },

    /// The token response was not valid JSON.
    #[error("Invalid token response: {0}")]
    InvalidResponse(String),

    /// The token response had no `access_token` field.
    #[error("Token response is missing access_token")]
    MissingAccessToken,
}

/// Errors raised while forwarding a request to a data endpoint.
///
/// A non-2xx status carrying a JSON body is not an error; it is returned
/// to the caller as data.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The data endpoint could not be reached, or the body could not be read.
    #[error("Upstream request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The data endpoint returned a body that is not JSON.
    #[error("Upstream returned a non-JSON body (HTTP {status}): {message}")]
    InvalidBody { status: u16, message: String },
}

/// Any failure of a forwarded TDX call.
#[derive(Debug, Error)]
pub enum TdxError {
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}

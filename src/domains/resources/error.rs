//! Resource-specific error types.

use thiserror::Error;

use crate::tdx::TdxError;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested resource was not found.
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Fetching the resource content from TDX failed.
    #[error("TDX request failed: {0}")]
    Upstream(#[from] TdxError),
}

impl ResourceError {
    /// Create a new "not found" error.
    pub fn not_found(uri: impl Into<String>) -> Self {
        Self::NotFound(uri.into())
    }
}

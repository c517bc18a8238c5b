//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

use crate::tdx::TdxError;

/// Errors that can occur during tool calls.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The call arguments did not match the tool's parameters.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The forwarded TDX request failed.
    #[error("TDX request failed: {0}")]
    Upstream(#[from] TdxError),
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}

/// Protocol-level errors for calls that never reached TDX.
///
/// Upstream failures are reported in-band with `error_result` instead.
impl From<ToolError> for McpError {
    fn from(error: ToolError) -> Self {
        match error {
            ToolError::InvalidArguments(msg) => McpError::invalid_params(msg, None),
            ToolError::Upstream(e) => McpError::internal_error(e.to_string(), None),
        }
    }
}

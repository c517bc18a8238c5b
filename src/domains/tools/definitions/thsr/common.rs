//! Shared plumbing for the THSR tools.
//!
//! Every THSR tool is a fixed TDX endpoint path filled in from string
//! arguments. [`ThsrEndpointTool`] captures that mapping; the provided
//! methods turn it into an rmcp tool model and route.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{info, warn};

use crate::domains::tools::ToolError;
use crate::tdx::TdxClient;

/// A tool that forwards to one TDX endpoint.
pub trait ThsrEndpointTool {
    /// Tool name as registered in MCP.
    const NAME: &'static str;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    /// Call arguments.
    type Params: DeserializeOwned + JsonSchema + Send + 'static;

    /// Endpoint path relative to the API base URL.
    fn endpoint(params: &Self::Params) -> String;

    /// Create a Tool model for this tool (metadata).
    fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<Self::Params>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Parse raw call arguments into this tool's parameters.
    fn parse_params(arguments: serde_json::Map<String, Value>) -> Result<Self::Params, ToolError> {
        serde_json::from_value(Value::Object(arguments))
            .map_err(|e| ToolError::invalid_arguments(e.to_string()))
    }

    /// Create a ToolRoute for the rmcp tool router.
    fn create_route<S>(client: Arc<TdxClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
        Self: Sized + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params = Self::parse_params(args)?;
                let endpoint = Self::endpoint(&params);
                info!("{} -> {}", Self::NAME, endpoint);

                let result = match client.request(&endpoint, &[]).await {
                    Ok(value) => json_result(&value),
                    Err(e) => error_result(&ToolError::from(e)),
                };

                Ok::<_, McpError>(result)
            }
            .boxed()
        })
    }
}

/// Render an upstream JSON value as a single text content block.
pub fn json_result(value: &Value) -> CallToolResult {
    CallToolResult::success(vec![Content::text(value.to_string())])
}

/// Report a failed call as an error result the client can read.
pub fn error_result(error: &ToolError) -> CallToolResult {
    warn!("{}", error);
    CallToolResult::error(vec![Content::text(error.to_string())])
}

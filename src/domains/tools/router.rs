//! Tool Router - builds the rmcp ToolRouter from the tool definitions.
//!
//! Every route captures the shared TDX client, so all tools reuse one
//! cached access token.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::{
    ThsrAvailableSeatsTool, ThsrEndpointTool, ThsrLiveScheduleTool, ThsrStationsTool,
    ThsrTimetableTool, ThsrTrainInfoTool, ThsrTrainSeatStatusTool,
};
use crate::tdx::TdxClient;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<TdxClient>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(ThsrStationsTool::create_route(client.clone()))
        .with_route(ThsrTimetableTool::create_route(client.clone()))
        .with_route(ThsrLiveScheduleTool::create_route(client.clone()))
        .with_route(ThsrTrainInfoTool::create_route(client.clone()))
        .with_route(ThsrAvailableSeatsTool::create_route(client.clone()))
        .with_route(ThsrTrainSeatStatusTool::create_route(client))
}

/// Names of all registered tools.
pub fn tool_names() -> Vec<&'static str> {
    vec![
        ThsrStationsTool::NAME,
        ThsrTimetableTool::NAME,
        ThsrLiveScheduleTool::NAME,
        ThsrTrainInfoTool::NAME,
        ThsrAvailableSeatsTool::NAME,
        ThsrTrainSeatStatusTool::NAME,
    ]
}

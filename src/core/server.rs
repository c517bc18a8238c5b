//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by delegating to the tools and resources domains.
//!
//! The ToolRouter is built dynamically in `domains/tools/router.rs`; adding
//! a tool does not require modifying this file.

use rmcp::{
    ErrorData as McpError, RoleServer, ServerHandler, handler::server::tool::ToolRouter, model::*,
    service::RequestContext, tool_handler,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::config::Config;
use crate::domains::{
    resources::{ResourceError, ResourceService},
    tools::build_tool_router,
};
use crate::tdx::TdxClient;

const INSTRUCTIONS: &str = "Taiwan High Speed Rail (THSR) data from the TDX open data platform. \
     Use get_thsr_stations to look up station IDs (e.g. 1000 Taipei, 1070 Zuoying), then \
     get_thsr_timetable, get_thsr_live_schedule, get_thsr_train_info, get_thsr_available_seats \
     or get_thsr_train_seat_status. Dates use YYYY-MM-DD. Results are raw TDX JSON.";

/// The main MCP server handler.
///
/// This struct implements the `ServerHandler` trait from rmcp. One TDX
/// client, and with it one cached access token, is shared by every tool and
/// resource for the lifetime of the server.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Service for handling resource-related requests.
    resource_service: Arc<ResourceService>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server with the given configuration.
    ///
    /// Fails if the TDX credentials are not configured.
    pub fn new(config: Config) -> super::Result<Self> {
        let client = Arc::new(TdxClient::from_config(&config.tdx)?);
        Ok(Self::with_client(config, client))
    }

    /// Create a server around an existing TDX client.
    pub fn with_client(config: Config, client: Arc<TdxClient>) -> Self {
        let resource_service = Arc::new(ResourceService::new(client.clone()));

        Self {
            tool_router: build_tool_router::<Self>(client),
            config: Arc::new(config),
            resource_service,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: self.config.server.name.clone(),
                version: self.config.server.version.clone(),
                ..Implementation::from_build_env()
            },
            ..Default::default()
        }
    }

    #[instrument(skip(self, _context))]
    async fn list_resources(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListResourcesResult, McpError> {
        info!("Listing resources");
        let resources = self.resource_service.list_resources().await;
        Ok(ListResourcesResult {
            resources,
            next_cursor: None,
            meta: None,
        })
    }

    #[instrument(skip(self, _context))]
    async fn read_resource(
        &self,
        request: ReadResourceRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<ReadResourceResult, McpError> {
        info!("Reading resource: {}", request.uri);
        self.resource_service
            .read_resource(&request.uri)
            .await
            .map_err(|e| match e {
                ResourceError::NotFound(_) => McpError::resource_not_found(e.to_string(), None),
                ResourceError::Upstream(_) => McpError::internal_error(e.to_string(), None),
            })
    }
}

//! Taiwan High Speed Rail MCP Server
//!
//! This crate exposes Taiwan High Speed Rail (THSR) data from the TDX open
//! data platform to MCP clients as tools and resources.
//!
//! # Architecture
//!
//! - **core**: Configuration, error handling, the server handler and transports
//! - **domains**: Functionality exposed over MCP
//!   - **tools**: Station, timetable, live board, train and seat lookups
//!   - **resources**: The `thsr://stations` resource
//! - **tdx**: OAuth2 token caching and authenticated requests to TDX
//!
//! # Example
//!
//! ```rust,no_run
//! use thsr_mcp_server::core::{Config, McpServer, TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config.clone())?;
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;
pub mod tdx;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};

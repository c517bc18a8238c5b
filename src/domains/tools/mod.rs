//! Tools domain module.
//!
//! Tools are the THSR queries MCP clients can call. Each one forwards a
//! single GET to the TDX gateway and returns the upstream JSON untouched.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - Dynamic ToolRouter builder
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/thsr/` implementing `ThsrEndpointTool`
//! 2. Export it in `definitions/thsr/mod.rs`
//! 3. Add a route in `router.rs` using `with_route()`

pub mod definitions;
mod error;
pub mod router;

pub use error::ToolError;
pub use router::{build_tool_router, tool_names};

//! Domains module containing the MCP-facing functionality.
//!
//! - **tools**: THSR lookups exposed as MCP tools
//! - **resources**: read-only resources backed by the same TDX client

pub mod resources;
pub mod tools;

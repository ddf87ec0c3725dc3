//! Raibot MCP Server Library
//!
//! This library contains the MCP protocol layer types and handlers.
//! The actual server binary is in main.rs.

pub mod prompts;
pub mod protocol;
pub mod resources;
pub mod tools;

// Re-export commonly used types
pub use protocol::RaibotMcpServer;
pub use resources::{ResourceSpec, RESOURCES};
pub use tools::*;

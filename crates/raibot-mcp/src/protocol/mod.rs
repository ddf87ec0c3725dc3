//! MCP Protocol Layer
//!
//! This module implements the Model Context Protocol server using rmcp 0.9.
//! It exposes the simulated Raibot as MCP tools, resources and a prompt.

pub mod server;

pub use server::RaibotMcpServer;

//! # raibot-core
//!
//! Core types for the Raibot MCP Server.
//!
//! This crate contains all fundamental types with **no internal dependencies**
//! on other raibot crates. It provides:
//!
//! - Grid geometry (Position) and move validation
//! - The fixed terrain layout
//! - Persisted document types (knowledge map, history)
//! - Error types
//! - Server configuration
//!
//! ## Architecture
//!
//! This is Layer 0 in the architecture - all other crates depend on this one,
//! but this crate has no dependencies on other raibot crates.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod geometry;
pub mod history;
pub mod map;
pub mod movement;
pub mod terrain;

// Re-export commonly used types
pub use config::{ServerConfig, ServerSettings, SimulationSettings, StorageSettings};
pub use error::{Edge, Error, Result};
pub use geometry::{Position, GRID_SIZE};
pub use history::{History, HistoryEvent};
pub use map::{KnowledgeMap, Tile};
pub use movement::{step, validate_move, Direction, Instruction};
pub use terrain::Terrain;

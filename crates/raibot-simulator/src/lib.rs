//! # raibot-simulator
//!
//! Move orchestration for the simulated Raibot.
//!
//! This crate sequences grid-model checks from raibot-core against the
//! documents in raibot-store:
//! - `start` places the robot and resets its map and history
//! - `left`/`right`/`up`/`down` move one cell, stopping at edges and obstacles
//! - every attempt, successful or not, is appended to the history
//!
//! ## Architecture
//!
//! This is Layer 2 in the architecture - it depends on raibot-core and
//! raibot-store.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod simulator;

// Re-export commonly used types
pub use simulator::{Simulator, SimulatorCommand};

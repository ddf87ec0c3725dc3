//! MCP Tool Types
//!
//! This module defines the MCP tool parameter types and their JSON schemas.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use raibot_core::Instruction;
use raibot_simulator::SimulatorCommand;

/// Greeting returned by `hello_world`.
pub const HELLO_TEXT: &str = "Hello, world! This is Raibot's MCP server.";

// =============================================================================
// Simulator Tools
// =============================================================================

/// Parameters for raibot_simulator
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimulatorParams {
    /// The instructions the robot is to carry out
    #[schemars(schema_with = "direction_schema")]
    pub direction: String,

    /// The column (ie: x-coord) to start at, between 1 and 5
    /// Required when direction is 'start'
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 5))]
    pub start_x: Option<i64>,

    /// The row (ie: y-coord) to start at, between 1 and 5 (row 1 is the bottom)
    /// Required when direction is 'start'
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(range(min = 1, max = 5))]
    pub start_y: Option<i64>,
}

// The direction stays a plain string so that unknown tokens reach the
// simulator and are recorded in the history.
fn direction_schema(_generator: &mut schemars::SchemaGenerator) -> schemars::Schema {
    schemars::json_schema!({
        "type": "string",
        "enum": Instruction::TOKENS,
        "description": "The instructions the robot is to carry out"
    })
}

impl From<SimulatorParams> for SimulatorCommand {
    fn from(params: SimulatorParams) -> Self {
        Self {
            direction: params.direction,
            start_x: params.start_x,
            start_y: params.start_y,
        }
    }
}

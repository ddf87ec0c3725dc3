//! Move history records.

use serde::{Deserialize, Serialize};

use crate::{Error, Position, Result};

/// Instruction recorded when the history is reset.
pub const RESET_INSTRUCTION: &str = "Start at given location";

/// Result recorded when the history is reset.
pub const RESET_RESULT: &str = "History reset";

/// Result recorded for a successful move.
pub const RESULT_OK: &str = "Ok";

/// One attempted transition and its outcome.
///
/// Serialized flat as `{fromX, fromY, toX, toY, instruction, result}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistoryEvent", into = "RawHistoryEvent")]
pub struct HistoryEvent {
    /// Cell the robot was in
    pub from: Position,
    /// Cell the instruction targeted
    pub to: Position,
    /// Instruction as issued
    pub instruction: String,
    /// Outcome description
    pub result: String,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHistoryEvent {
    from_x: i64,
    from_y: i64,
    to_x: i64,
    to_y: i64,
    instruction: String,
    result: String,
}

impl TryFrom<RawHistoryEvent> for HistoryEvent {
    type Error = Error;

    fn try_from(raw: RawHistoryEvent) -> Result<Self> {
        Ok(Self {
            from: Position::new(raw.from_x, raw.from_y)?,
            to: Position::new(raw.to_x, raw.to_y)?,
            instruction: raw.instruction,
            result: raw.result,
        })
    }
}

impl From<HistoryEvent> for RawHistoryEvent {
    fn from(event: HistoryEvent) -> Self {
        Self {
            from_x: event.from.x(),
            from_y: event.from.y(),
            to_x: event.to.x(),
            to_y: event.to.y(),
            instruction: event.instruction,
            result: event.result,
        }
    }
}

impl HistoryEvent {
    /// Create an event.
    pub fn new(
        from: Position,
        to: Position,
        instruction: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            from,
            to,
            instruction: instruction.into(),
            result: result.into(),
        }
    }

    /// The synthetic event a reset history starts with.
    pub fn reset(at: Position) -> Self {
        Self::new(at, at, RESET_INSTRUCTION, RESET_RESULT)
    }
}

/// Chronological sequence of [`HistoryEvent`]s, persisted as a JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(pub Vec<HistoryEvent>);

impl History {
    /// History containing only the reset event at `at`.
    pub fn reset_at(at: Position) -> Self {
        Self(vec![HistoryEvent::reset(at)])
    }

    /// Append one event.
    pub fn push(&mut self, event: HistoryEvent) {
        self.0.push(event);
    }

    /// Number of events.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no events.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Most recent event.
    pub fn last(&self) -> Option<&HistoryEvent> {
        self.0.last()
    }

    /// Events oldest first.
    pub fn events(&self) -> &[HistoryEvent] {
        &self.0
    }
}

//! Error types for the Raibot MCP Server.

use std::fmt;

use thiserror::Error;

use crate::Position;

/// Grid edge that a move would have crossed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Column 1
    Left,
    /// Column 5
    Right,
    /// Row 1
    Bottom,
    /// Row 5
    Top,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            Edge::Left => "Cannot move left, already at the left edge",
            Edge::Right => "Cannot move right, already at the right edge",
            Edge::Bottom => "Cannot move down, already at the bottom edge",
            Edge::Top => "Cannot move up, already at the top edge",
        };
        f.write_str(message)
    }
}

/// Main error type for Raibot operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input rejected before reaching the simulation (e.g. coordinate out of range)
    #[error("Invalid input: {0}")]
    Validation(String),

    /// `start` issued without both start coordinates
    #[error("startX and startY must be provided when direction is 'start'")]
    MissingStartCoordinates,

    /// Move would leave the grid
    #[error("{0}")]
    OutOfBounds(Edge),

    /// Direction token not understood
    #[error("Unknown instruction: {0}")]
    UnknownInstruction(String),

    /// Target cell is an obstacle in the terrain
    #[error("Cannot move here, there is an obstacle")]
    BlockedByObstacle(Position),

    /// Persisted document failed to load or validate
    #[error("Failed to read/parse {document} document: {reason}")]
    CorruptState {
        /// Logical document key
        document: &'static str,
        /// Underlying cause
        reason: String,
    },

    /// Document could not be validated or written
    #[error("Failed to validate/write {document} document: {reason}")]
    Persistence {
        /// Logical document key
        document: &'static str,
        /// Underlying cause
        reason: String,
    },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the error was caused by the caller's request rather than the
    /// server's state or storage.
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Error::Validation(_) | Error::MissingStartCoordinates | Error::UnknownInstruction(_)
        )
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_messages() {
        assert_eq!(
            Error::OutOfBounds(Edge::Left).to_string(),
            "Cannot move left, already at the left edge"
        );
        assert_eq!(
            Error::OutOfBounds(Edge::Right).to_string(),
            "Cannot move right, already at the right edge"
        );
        assert_eq!(
            Error::OutOfBounds(Edge::Bottom).to_string(),
            "Cannot move down, already at the bottom edge"
        );
        assert_eq!(
            Error::OutOfBounds(Edge::Top).to_string(),
            "Cannot move up, already at the top edge"
        );
    }

    #[test]
    fn test_missing_start_coordinates_error() {
        let err = Error::MissingStartCoordinates;
        assert_eq!(
            err.to_string(),
            "startX and startY must be provided when direction is 'start'"
        );
    }

    #[test]
    fn test_unknown_instruction_error() {
        let err = Error::UnknownInstruction("jump".to_string());
        assert_eq!(err.to_string(), "Unknown instruction: jump");
    }

    #[test]
    fn test_blocked_by_obstacle_error() {
        let err = Error::BlockedByObstacle(Position::new(3, 1).unwrap());
        assert_eq!(err.to_string(), "Cannot move here, there is an obstacle");
    }

    #[test]
    fn test_corrupt_state_error() {
        let err = Error::CorruptState {
            document: "map",
            reason: "expected array".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read/parse map document: expected array"
        );
    }

    #[test]
    fn test_persistence_error() {
        let err = Error::Persistence {
            document: "history",
            reason: "disk full".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to validate/write history document: disk full"
        );
    }

    #[test]
    fn test_config_error() {
        let err = Error::Config("transport must be stdio".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: transport must be stdio"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_caller_errors() {
        assert!(Error::Validation("x".to_string()).is_caller_error());
        assert!(Error::MissingStartCoordinates.is_caller_error());
        assert!(Error::UnknownInstruction("jump".to_string()).is_caller_error());
        assert!(!Error::OutOfBounds(Edge::Top).is_caller_error());
        assert!(!Error::Config("bad".to_string()).is_caller_error());
    }
}

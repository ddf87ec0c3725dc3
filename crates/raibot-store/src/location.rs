//! Robot location document (`location.json`).

use std::path::PathBuf;

use tracing::{debug, instrument};

use raibot_core::{Position, Result};

use crate::document::{Document, JsonDocument};

impl Document for Position {
    const KEY: &'static str = "location";

    fn initial() -> Self {
        Position::origin()
    }
}

/// Store for the robot's current cell.
#[derive(Debug, Clone)]
pub struct LocationStore {
    document: JsonDocument<Position>,
}

impl LocationStore {
    /// Location persisted at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            document: JsonDocument::new(path),
        }
    }

    /// Current location, `(1,1)` if none has been stored yet.
    pub async fn read(&self) -> Result<Position> {
        self.document.read().await
    }

    /// Replace the stored location.
    #[instrument(skip(self))]
    pub async fn write(&self, position: Position) -> Result<()> {
        debug!("Saving location {}", position);
        self.document.write(&position).await
    }

    /// Current location as pretty-printed JSON.
    pub async fn render(&self) -> Result<String> {
        self.document.render().await
    }
}

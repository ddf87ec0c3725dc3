//! Move history document (`history.json`).

use std::path::PathBuf;

use tracing::{debug, instrument};

use raibot_core::{History, HistoryEvent, Position, Result};

use crate::document::{Document, JsonDocument};

impl Document for History {
    const KEY: &'static str = "history";

    fn initial() -> Self {
        History::reset_at(Position::origin())
    }
}

/// Append-only log of attempted moves.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    document: JsonDocument<History>,
}

impl HistoryStore {
    /// History persisted at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            document: JsonDocument::new(path),
        }
    }

    /// Full history, oldest first.
    pub async fn read(&self) -> Result<History> {
        self.document.read().await
    }

    /// Replace the whole history.
    pub async fn write(&self, history: &History) -> Result<()> {
        self.document.write(history).await
    }

    /// Add `event` to the end of the stored history.
    #[instrument(skip(self, event), fields(instruction = %event.instruction))]
    pub async fn append(&self, event: HistoryEvent) -> Result<()> {
        let mut history = self.read().await?;
        debug!("Recording history event: {}", event.result);
        history.push(event);
        self.write(&history).await
    }

    /// Overwrite the history with the single reset event at `at`.
    pub async fn reset(&self, at: Position) -> Result<History> {
        debug!("Resetting history at {}", at);
        let history = History::reset_at(at);
        self.write(&history).await?;
        Ok(history)
    }

    /// Full history as pretty-printed JSON.
    pub async fn render(&self) -> Result<String> {
        self.document.render().await
    }
}

//! # raibot-store
//!
//! JSON file backed state for the Raibot MCP Server.
//!
//! This crate provides:
//! - A generic whole-file JSON document with lazy default initialization
//! - The location, knowledge map and history sub-stores
//! - [`StateStore`], which keeps the three documents side by side in one
//!   data directory
//!
//! ## Architecture
//!
//! This is Layer 1 in the architecture - it depends only on raibot-core.
//!
//! Read-modify-write cycles (`append`, `write_cell`) are not atomic: two
//! writers sharing the same files can lose an update. Callers that need
//! ordering must serialize access themselves.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod document;
pub mod history;
pub mod location;
pub mod map;

use std::fmt;
use std::path::{Path, PathBuf};

use raibot_core::Result;

// Re-export commonly used types
pub use document::{Document, JsonDocument};
pub use history::HistoryStore;
pub use location::LocationStore;
pub use map::MapStore;

/// Identifies one of the persisted documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKey {
    /// Robot location
    Location,
    /// Knowledge map
    Map,
    /// Move history
    History,
}

impl DocumentKey {
    /// All documents.
    pub const ALL: [DocumentKey; 3] = [
        DocumentKey::Location,
        DocumentKey::Map,
        DocumentKey::History,
    ];

    /// Logical key.
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentKey::Location => "location",
            DocumentKey::Map => "map",
            DocumentKey::History => "history",
        }
    }

    /// File name inside the data directory.
    pub fn file_name(self) -> &'static str {
        match self {
            DocumentKey::Location => "location.json",
            DocumentKey::Map => "map.json",
            DocumentKey::History => "history.json",
        }
    }
}

impl fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The three Raibot documents stored in one directory.
#[derive(Debug, Clone)]
pub struct StateStore {
    data_dir: PathBuf,
    /// Robot location
    pub location: LocationStore,
    /// Knowledge map
    pub map: MapStore,
    /// Move history
    pub history: HistoryStore,
}

impl StateStore {
    /// Store rooted at `data_dir`. The directory is created on first write.
    pub fn open(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        Self {
            location: LocationStore::new(data_dir.join(DocumentKey::Location.file_name())),
            map: MapStore::new(data_dir.join(DocumentKey::Map.file_name())),
            history: HistoryStore::new(data_dir.join(DocumentKey::History.file_name())),
            data_dir,
        }
    }

    /// Directory holding the documents.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Pretty-printed JSON of one document.
    pub async fn render(&self, key: DocumentKey) -> Result<String> {
        match key {
            DocumentKey::Location => self.location.render().await,
            DocumentKey::Map => self.map.render().await,
            DocumentKey::History => self.history.render().await,
        }
    }
}

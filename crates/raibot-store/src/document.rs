//! Whole-file JSON documents.
//!
//! Every read re-parses the backing file and every write re-serializes the
//! whole value; nothing is cached in memory.

use std::fmt::Display;
use std::io::ErrorKind;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::fs;
use tracing::{debug, error, warn};

use raibot_core::{Error, Result};

/// A value persisted as one JSON file.
///
/// Shape validation happens during deserialization: the document types only
/// admit in-range coordinates and fixed-size grids, so a value that parses is
/// a valid document and a value that exists can always be written.
pub trait Document: Serialize + DeserializeOwned + Send + Sync {
    /// Logical key, also used in error messages.
    const KEY: &'static str;

    /// Value written when the backing file is missing or empty.
    fn initial() -> Self;
}

/// File-backed [`Document`].
#[derive(Debug, Clone)]
pub struct JsonDocument<D> {
    path: PathBuf,
    _marker: PhantomData<fn() -> D>,
}

impl<D: Document> JsonDocument<D> {
    /// Document stored at `path`. The file is not touched until first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _marker: PhantomData,
        }
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the document.
    ///
    /// A missing or empty file is initialized with [`Document::initial`].
    /// Anything that fails to parse is reported as [`Error::CorruptState`].
    pub async fn read(&self) -> Result<D> {
        let contents = match fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(
                    "{} file {} is missing, creating default",
                    D::KEY,
                    self.path.display()
                );
                String::new()
            }
            Err(e) => {
                error!("Error reading {} file: {}", D::KEY, e);
                return Err(corrupt::<D, _>(e));
            }
        };

        if contents.trim().is_empty() {
            let initial = D::initial();
            self.write(&initial).await?;
            return Ok(initial);
        }

        serde_json::from_str(&contents).map_err(|e| {
            error!("Error parsing {} file: {}", D::KEY, e);
            corrupt::<D, _>(e)
        })
    }

    /// Overwrite the whole file with `document`, pretty-printed.
    pub async fn write(&self, document: &D) -> Result<()> {
        let json = serde_json::to_string_pretty(document).map_err(persistence::<D, _>)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(persistence::<D, _>)?;
            }
        }

        fs::write(&self.path, json).await.map_err(|e| {
            error!("Error writing {} file: {}", D::KEY, e);
            persistence::<D, _>(e)
        })?;

        debug!("Wrote {} document to {}", D::KEY, self.path.display());
        Ok(())
    }

    /// Current document as pretty-printed JSON.
    pub async fn render(&self) -> Result<String> {
        let document = self.read().await?;
        serde_json::to_string_pretty(&document).map_err(persistence::<D, _>)
    }
}

fn corrupt<D: Document, E: Display>(reason: E) -> Error {
    Error::CorruptState {
        document: D::KEY,
        reason: reason.to_string(),
    }
}

fn persistence<D: Document, E: Display>(reason: E) -> Error {
    Error::Persistence {
        document: D::KEY,
        reason: reason.to_string(),
    }
}

//! Knowledge map document (`map.json`).

use std::path::PathBuf;

use tracing::{debug, instrument};

use raibot_core::{KnowledgeMap, Position, Result, Tile};

use crate::document::{Document, JsonDocument};

impl Document for KnowledgeMap {
    const KEY: &'static str = "map";

    fn initial() -> Self {
        KnowledgeMap::unknown()
    }
}

/// Store for what the robot has learned about the grid.
#[derive(Debug, Clone)]
pub struct MapStore {
    document: JsonDocument<KnowledgeMap>,
}

impl MapStore {
    /// Map persisted at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            document: JsonDocument::new(path),
        }
    }

    /// Current map, all unknown if none has been stored yet.
    pub async fn read(&self) -> Result<KnowledgeMap> {
        self.document.read().await
    }

    /// Replace the whole map.
    pub async fn write(&self, map: &KnowledgeMap) -> Result<()> {
        self.document.write(map).await
    }

    /// Update a single cell, leaving the rest of the map as stored.
    #[instrument(skip(self))]
    pub async fn write_cell(&self, position: Position, tile: Tile) -> Result<()> {
        let mut map = self.read().await?;
        map.set(position, tile);
        debug!("Marking {} as {:?}", position, tile);
        self.write(&map).await
    }

    /// Forget everything: overwrite with an all-unknown map.
    pub async fn reset(&self) -> Result<KnowledgeMap> {
        debug!("Resetting map");
        let map = KnowledgeMap::unknown();
        self.write(&map).await?;
        Ok(map)
    }

    /// Current map as pretty-printed JSON.
    pub async fn render(&self) -> Result<String> {
        self.document.render().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raibot_core::Error;

    fn pos(x: i64, y: i64) -> Position {
        Position::new(x, y).unwrap()
    }

    #[tokio::test]
    async fn test_default_map_is_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let store = MapStore::new(dir.path().join("map.json"));
        assert_eq!(store.read().await.unwrap(), KnowledgeMap::unknown());
    }

    #[tokio::test]
    async fn test_write_cell_changes_one_cell() {
        let dir = tempfile::tempdir().unwrap();
        let store = MapStore::new(dir.path().join("map.json"));

        store.write_cell(pos(2, 1), Tile::Clear).await.unwrap();
        store.write_cell(pos(3, 1), Tile::Obstacle).await.unwrap();

        let map = store.read().await.unwrap();
        assert_eq!(map.get(pos(2, 1)), Tile::Clear);
        assert_eq!(map.get(pos(3, 1)), Tile::Obstacle);
        assert_eq!(map.count(Tile::Unknown), 23);
    }

    #[tokio::test]
    async fn test_reset() {
        let dir = tempfile::tempdir().unwrap();
        let store = MapStore::new(dir.path().join("map.json"));
        store.write_cell(pos(5, 5), Tile::Clear).await.unwrap();

        let map = store.reset().await.unwrap();
        assert_eq!(map, KnowledgeMap::unknown());
        assert_eq!(store.read().await.unwrap(), KnowledgeMap::unknown());
    }

    #[tokio::test]
    async fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = MapStore::new(dir.path().join("map.json"));

        let mut map = KnowledgeMap::unknown();
        map.set(pos(1, 1), Tile::Clear);
        map.set(pos(4, 3), Tile::Obstacle);
        store.write(&map).await.unwrap();

        assert_eq!(store.read().await.unwrap(), map);
    }

    #[tokio::test]
    async fn test_wrong_shape_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("map.json");
        std::fs::write(&path, r#"{"tiles": [["?", "?"]]}"#).unwrap();

        let store = MapStore::new(&path);
        let err = store.write_cell(pos(1, 1), Tile::Clear).await.unwrap_err();
        assert!(matches!(err, Error::CorruptState { document: "map", .. }));
    }
}

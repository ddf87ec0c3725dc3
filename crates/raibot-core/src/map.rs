//! The robot's knowledge map.

use serde::{Deserialize, Serialize};

use crate::geometry::GRID_SIZE;
use crate::Position;

const SIZE: usize = GRID_SIZE as usize;

/// What the robot knows about one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tile {
    /// Not yet visited or probed
    #[default]
    #[serde(rename = "?")]
    Unknown,
    /// A move into this cell was blocked
    #[serde(rename = "X")]
    Obstacle,
    /// The robot has stood here
    #[serde(rename = " ")]
    Clear,
}

/// 5x5 grid of [`Tile`]s, persisted as `{"tiles": [[...], ...]}`.
///
/// The outer index is the column and the inner index the row, both zero-based,
/// so `(x, y)` is stored at `tiles[x - 1][y - 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct KnowledgeMap {
    /// Tiles indexed `[column][row]`
    pub tiles: [[Tile; SIZE]; SIZE],
}

impl KnowledgeMap {
    /// Map with every tile unknown.
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Tile at `position`.
    pub fn get(&self, position: Position) -> Tile {
        let (col, row) = position.zero_based();
        self.tiles[col][row]
    }

    /// Overwrite the tile at `position`.
    pub fn set(&mut self, position: Position, tile: Tile) {
        let (col, row) = position.zero_based();
        self.tiles[col][row] = tile;
    }

    /// Number of tiles in the given state.
    pub fn count(&self, tile: Tile) -> usize {
        self.tiles
            .iter()
            .flat_map(|column| column.iter())
            .filter(|t| **t == tile)
            .count()
    }
}

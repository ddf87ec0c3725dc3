//! Ground-truth terrain the simulated robot moves over.
//!
//! The terrain is never shown to the client; the robot only learns about it
//! through the knowledge map as it moves.

use crate::geometry::GRID_SIZE;
use crate::{Error, Position, Result};

/// Marker for a cell the robot can enter.
pub const OPEN: char = '+';

/// Marker for a permanent obstacle.
pub const BLOCKED: char = 'X';

/// Standard layout, listed from row 1 (bottom) upward.
pub const STANDARD_ROWS: [&str; 5] = [
    "++X++", // row 1
    "+++++", // row 2
    "+++++", // row 3
    "+++++", // row 4
    "+++++", // row 5
];

/// Fixed 5x5 open/obstacle layout.
///
/// Cells are stored in one linear buffer; `(x, y)` lives at offset
/// `(y - 1) * 5 + (x - 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terrain {
    cells: Vec<char>,
}

impl Terrain {
    /// The layout shipped with the server.
    pub fn standard() -> Self {
        Self {
            cells: STANDARD_ROWS.iter().flat_map(|row| row.chars()).collect(),
        }
    }

    /// Build a terrain from five rows of five `+`/`X` characters, bottom row first.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        if rows.len() != GRID_SIZE as usize {
            return Err(Error::Config(format!(
                "terrain must have {GRID_SIZE} rows, got {}",
                rows.len()
            )));
        }

        let mut cells = Vec::with_capacity((GRID_SIZE * GRID_SIZE) as usize);
        for (index, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.chars().count() != GRID_SIZE as usize {
                return Err(Error::Config(format!(
                    "terrain row {} must have {GRID_SIZE} cells, got '{row}'",
                    index + 1
                )));
            }
            if let Some(bad) = row.chars().find(|c| *c != OPEN && *c != BLOCKED) {
                return Err(Error::Config(format!(
                    "terrain row {} contains '{bad}', expected '{OPEN}' or '{BLOCKED}'",
                    index + 1
                )));
            }
            cells.extend(row.chars());
        }

        Ok(Self { cells })
    }

    /// Whether the robot may occupy `position`.
    pub fn is_open(&self, position: Position) -> bool {
        self.cells.get(Self::offset(position)) == Some(&OPEN)
    }

    fn offset(position: Position) -> usize {
        ((position.y() - 1) * GRID_SIZE + position.x() - 1) as usize
    }
}

impl Default for Terrain {
    fn default() -> Self {
        Self::standard()
    }
}

//! Geometry types for grid coordinates.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Width and height of the square grid.
pub const GRID_SIZE: i64 = 5;

/// Cell of the 5x5 grid (column `x`, row `y`, both 1-based).
///
/// Row 1 is the bottom row. A `Position` can only be built through
/// [`Position::new`], so every value in circulation lies inside the grid.
/// Deserialization goes through the same check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawPosition")]
pub struct Position {
    x: i64,
    y: i64,
}

#[derive(Deserialize)]
struct RawPosition {
    x: i64,
    y: i64,
}

impl TryFrom<RawPosition> for Position {
    type Error = Error;

    fn try_from(raw: RawPosition) -> Result<Self> {
        Position::new(raw.x, raw.y)
    }
}

impl Position {
    /// Create a new position, rejecting coordinates outside `1..=5`.
    pub fn new(x: i64, y: i64) -> Result<Self> {
        if !Self::in_range(x) {
            return Err(Error::Validation(format!(
                "x must be between 1 and {GRID_SIZE}, got {x}"
            )));
        }
        if !Self::in_range(y) {
            return Err(Error::Validation(format!(
                "y must be between 1 and {GRID_SIZE}, got {y}"
            )));
        }
        Ok(Self { x, y })
    }

    /// Bottom-left cell (1, 1).
    pub fn origin() -> Self {
        Self { x: 1, y: 1 }
    }

    /// Column (1-based).
    pub fn x(&self) -> i64 {
        self.x
    }

    /// Row (1-based, row 1 at the bottom).
    pub fn y(&self) -> i64 {
        self.y
    }

    /// Zero-based (column, row) pair for indexing fixed-size arrays.
    pub fn zero_based(&self) -> (usize, usize) {
        ((self.x - 1) as usize, (self.y - 1) as usize)
    }

    fn in_range(value: i64) -> bool {
        (1..=GRID_SIZE).contains(&value)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::origin()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

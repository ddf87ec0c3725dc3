//! Instructions and move validation for the robot.

use std::fmt;

use crate::error::Edge;
use crate::geometry::GRID_SIZE;
use crate::{Error, Position, Result};

/// Single-step move direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// One column to the left
    Left,
    /// One column to the right
    Right,
    /// One row up
    Up,
    /// One row down
    Down,
}

impl Direction {
    /// All directions, in a stable order.
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// `(dx, dy)` for one step in this direction.
    pub fn delta(self) -> (i64, i64) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, 1),
            Direction::Down => (0, -1),
        }
    }

    /// The direction that undoes this one.
    pub fn opposite(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Lowercase token used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Instruction accepted by the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// Place the robot and reset its knowledge
    Start,
    /// Step in a direction
    Move(Direction),
}

impl Instruction {
    /// Tokens accepted by [`Instruction::parse`].
    pub const TOKENS: [&'static str; 5] = ["start", "left", "right", "up", "down"];

    /// Parse a wire token (`start`, `left`, `right`, `up`, `down`).
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "start" => Ok(Instruction::Start),
            "left" => Ok(Instruction::Move(Direction::Left)),
            "right" => Ok(Instruction::Move(Direction::Right)),
            "up" => Ok(Instruction::Move(Direction::Up)),
            "down" => Ok(Instruction::Move(Direction::Down)),
            other => Err(Error::UnknownInstruction(other.to_string())),
        }
    }
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Start => f.write_str("start"),
            Instruction::Move(direction) => direction.fmt(f),
        }
    }
}

/// Apply `(delta_x, delta_y)` to `current`, failing with the edge that would be crossed.
pub fn validate_move(current: Position, delta_x: i64, delta_y: i64) -> Result<Position> {
    let new_x = current.x().checked_add(delta_x).ok_or(Error::OutOfBounds(
        if delta_x < 0 { Edge::Left } else { Edge::Right },
    ))?;
    let new_y = current.y().checked_add(delta_y).ok_or(Error::OutOfBounds(
        if delta_y < 0 { Edge::Bottom } else { Edge::Top },
    ))?;

    if new_x < 1 {
        return Err(Error::OutOfBounds(Edge::Left));
    }
    if new_x > GRID_SIZE {
        return Err(Error::OutOfBounds(Edge::Right));
    }
    if new_y < 1 {
        return Err(Error::OutOfBounds(Edge::Bottom));
    }
    if new_y > GRID_SIZE {
        return Err(Error::OutOfBounds(Edge::Top));
    }

    Position::new(new_x, new_y)
}

/// One step from `current` in `direction`.
pub fn step(current: Position, direction: Direction) -> Result<Position> {
    let (dx, dy) = direction.delta();
    validate_move(current, dx, dy)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: i64, y: i64) -> Position {
        Position::new(x, y).unwrap()
    }

    #[test]
    fn test_parse_instructions() {
        assert_eq!(Instruction::parse("start").unwrap(), Instruction::Start);
        assert_eq!(
            Instruction::parse("left").unwrap(),
            Instruction::Move(Direction::Left)
        );
        assert_eq!(
            Instruction::parse("down").unwrap(),
            Instruction::Move(Direction::Down)
        );
    }

    #[test]
    fn test_parse_unknown_instruction() {
        let err = Instruction::parse("jump").unwrap_err();
        assert!(matches!(err, Error::UnknownInstruction(ref t) if t == "jump"));

        // Tokens are case sensitive
        assert!(Instruction::parse("Left").is_err());
    }

    #[test]
    fn test_tokens_round_trip_through_display() {
        for token in Instruction::TOKENS {
            assert_eq!(Instruction::parse(token).unwrap().to_string(), token);
        }
    }

    #[test]
    fn test_deltas() {
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
        assert_eq!(Direction::Up.delta(), (0, 1));
        assert_eq!(Direction::Down.delta(), (0, -1));
    }

    #[test]
    fn test_validate_move_inside_grid() {
        assert_eq!(validate_move(pos(3, 3), 1, 0).unwrap(), pos(4, 3));
        assert_eq!(validate_move(pos(3, 3), 0, -1).unwrap(), pos(3, 2));
    }

    #[test]
    fn test_validate_move_edges() {
        assert!(matches!(
            validate_move(pos(1, 3), -1, 0),
            Err(Error::OutOfBounds(Edge::Left))
        ));
        assert!(matches!(
            validate_move(pos(5, 3), 1, 0),
            Err(Error::OutOfBounds(Edge::Right))
        ));
        assert!(matches!(
            validate_move(pos(3, 1), 0, -1),
            Err(Error::OutOfBounds(Edge::Bottom))
        ));
        assert!(matches!(
            validate_move(pos(3, 5), 0, 1),
            Err(Error::OutOfBounds(Edge::Top))
        ));
    }

    #[test]
    fn test_validate_move_huge_deltas() {
        assert!(matches!(
            validate_move(pos(5, 3), i64::MAX, 0),
            Err(Error::OutOfBounds(Edge::Right))
        ));
        assert!(matches!(
            validate_move(pos(1, 3), i64::MIN, 0),
            Err(Error::OutOfBounds(Edge::Left))
        ));
        assert!(matches!(
            validate_move(pos(3, 5), 0, i64::MAX),
            Err(Error::OutOfBounds(Edge::Top))
        ));
        assert!(matches!(
            validate_move(pos(3, 1), 0, i64::MIN),
            Err(Error::OutOfBounds(Edge::Bottom))
        ));
    }

    #[test]
    fn test_step_from_corner() {
        let corner = pos(1, 1);
        assert!(step(corner, Direction::Left).is_err());
        assert!(step(corner, Direction::Down).is_err());
        assert_eq!(step(corner, Direction::Up).unwrap(), pos(1, 2));
        assert_eq!(step(corner, Direction::Right).unwrap(), pos(2, 1));
    }
}

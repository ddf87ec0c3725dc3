//! Property-based tests for the grid model.
//!
//! Uses proptest to generate random positions and verify movement invariants.

use proptest::prelude::*;

use raibot_core::{step, validate_move, Direction, Position, Terrain, GRID_SIZE};

/// Generate any cell of the grid.
fn any_position() -> impl Strategy<Value = Position> {
    (1..=GRID_SIZE, 1..=GRID_SIZE).prop_map(|(x, y)| Position::new(x, y).unwrap())
}

/// Generate one of the four directions.
fn any_direction() -> impl Strategy<Value = Direction> {
    prop::sample::select(Direction::ALL.to_vec())
}

proptest! {
    /// Moving and then moving back returns to the starting cell.
    #[test]
    fn inverse_move_returns_to_start(start in any_position(), direction in any_direction()) {
        if let Ok(moved) = step(start, direction) {
            let back = step(moved, direction.opposite()).unwrap();
            prop_assert_eq!(back, start);
        }
    }

    /// A successful move changes exactly one coordinate by exactly one.
    #[test]
    fn successful_move_is_one_step(start in any_position(), direction in any_direction()) {
        if let Ok(moved) = step(start, direction) {
            let distance = (moved.x() - start.x()).abs() + (moved.y() - start.y()).abs();
            prop_assert_eq!(distance, 1);
        }
    }

    /// A move fails exactly when it would leave the grid.
    #[test]
    fn move_fails_only_at_edges(start in any_position(), direction in any_direction()) {
        let (dx, dy) = direction.delta();
        let target_x = start.x() + dx;
        let target_y = start.y() + dy;
        let inside = (1..=GRID_SIZE).contains(&target_x) && (1..=GRID_SIZE).contains(&target_y);
        prop_assert_eq!(validate_move(start, dx, dy).is_ok(), inside);
    }

    /// Arbitrary deltas never produce a position outside the grid.
    #[test]
    fn validate_move_never_escapes(start in any_position(), dx in -10i64..10, dy in -10i64..10) {
        if let Ok(moved) = validate_move(start, dx, dy) {
            prop_assert!((1..=GRID_SIZE).contains(&moved.x()));
            prop_assert!((1..=GRID_SIZE).contains(&moved.y()));
        }
    }

    /// Only (3,1) is blocked in the standard terrain.
    #[test]
    fn standard_terrain_single_obstacle(position in any_position()) {
        let expected_open = !(position.x() == 3 && position.y() == 1);
        prop_assert_eq!(Terrain::standard().is_open(position), expected_open);
    }

    /// Out-of-range coordinates are always rejected by the constructor.
    #[test]
    fn constructor_rejects_outside_grid(x in -20i64..20, y in -20i64..20) {
        let inside = (1..=GRID_SIZE).contains(&x) && (1..=GRID_SIZE).contains(&y);
        prop_assert_eq!(Position::new(x, y).is_ok(), inside);
    }
}

//! Move validation.

use crate::error::MoveRejection;
use crate::grid::{swap, Grid, Position};

use super::find_matches;

/// Explain why swapping `a` and `b` would be illegal.
///
/// A legal swap stays in bounds, exchanges edge-adjacent cells and produces
/// at least one match. The grid itself is never modified.
pub fn check_move(grid: &Grid, a: Position, b: Position) -> Result<(), MoveRejection> {
    for pos in [a, b] {
        if !grid.contains(pos) {
            return Err(MoveRejection::OutOfBounds(pos));
        }
    }
    if !a.is_adjacent(&b) {
        return Err(MoveRejection::NotAdjacent(a, b));
    }
    if find_matches(&swap(grid, a, b)).is_empty() {
        return Err(MoveRejection::NoMatch(a, b));
    }
    Ok(())
}

/// True if swapping `a` and `b` is a legal move.
pub fn is_valid_move(grid: &Grid, a: Position, b: Position) -> bool {
    check_move(grid, a, b).is_ok()
}

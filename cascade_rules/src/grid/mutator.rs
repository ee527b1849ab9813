//! Board mutations: swaps, match removal and special-token effects.
//!
//! All operations take the grid by reference and return a new value; the
//! input is never modified.

use rand::Rng;

use super::{ClearedGrid, Grid, Position};
use crate::matching::MatchResult;
use crate::token::{SpecialKind, TokenFactory};

/// Exchange two tokens. No legality check; out-of-range positions leave the
/// grid unchanged.
pub fn swap(grid: &Grid, a: Position, b: Position) -> Grid {
    let mut next = grid.clone();
    if let (Some(i), Some(j)) = (grid.index(a), grid.index(b)) {
        next.cells.swap(i, j);
    }
    next
}

/// Remove matched cells, place a pending special token, then settle.
///
/// The special token is only placed if its target cell is empty after
/// clearing. Its color is random rather than taken from the run.
pub fn resolve_matches<R: Rng>(
    grid: &Grid,
    result: &MatchResult,
    factory: &mut TokenFactory<R>,
) -> Grid {
    let mut cleared = grid.clear(&result.matched);
    if let Some(spawn) = result.special {
        if cleared.is_empty(spawn.position) {
            cleared.put(spawn.position, factory.special_token(spawn.kind));
        }
    }
    cleared.settle(factory)
}

/// Clear the area of the special token at `pos`.
///
/// Returns the grid with holes plus every cell that was emptied, in scan
/// order. Targets that are out of range or not special produce no holes and
/// an empty list. The caller must [`ClearedGrid::settle`] the result.
pub fn activate_special(grid: &Grid, pos: Position) -> (ClearedGrid, Vec<Position>) {
    let kind = match grid.get(pos).and_then(|t| t.special) {
        Some(kind) => kind,
        None => return (ClearedGrid::from(grid.clone()), Vec::new()),
    };

    let affected = special_area(grid.rows(), grid.cols(), pos, kind);
    (grid.clear(&affected), affected)
}

/// Cells covered by a special effect centered at `pos`, clipped to the grid.
pub fn special_area(rows: usize, cols: usize, pos: Position, kind: SpecialKind) -> Vec<Position> {
    match kind {
        SpecialKind::RowClear => (0..cols).map(|c| Position::new(pos.row, c)).collect(),
        SpecialKind::ColumnClear => (0..rows).map(|r| Position::new(r, pos.col)).collect(),
        SpecialKind::AreaBomb => {
            let rows_range = pos.row.saturating_sub(1)..=(pos.row + 1).min(rows - 1);
            let cols_range = pos.col.saturating_sub(1)..=(pos.col + 1).min(cols - 1);
            rows_range
                .flat_map(|r| cols_range.clone().map(move |c| Position::new(r, c)))
                .collect()
        }
    }
}

//! Run detection.
//!
//! Rows are scanned top to bottom, each left to right, then columns left to
//! right, each top to bottom. Every maximal run of three or more equal colors
//! is matched. Special flags play no part in matching.

mod validator;

pub use validator::*;

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::grid::{Grid, Position};
use crate::token::SpecialKind;

/// Minimum run length that counts as a match.
pub const MIN_RUN: usize = 3;

/// Direction a run extends in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A maximal run of equal colors along one row or column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    pub axis: Axis,
    /// Row index for horizontal runs, column index for vertical ones.
    pub line: usize,
    /// Offset of the first cell along the line.
    pub start: usize,
    pub len: usize,
}

impl Run {
    fn at(&self, offset: usize) -> Position {
        match self.axis {
            Axis::Horizontal => Position::new(self.line, offset),
            Axis::Vertical => Position::new(offset, self.line),
        }
    }

    /// Cells of the run in scan order.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (self.start..self.start + self.len).map(|offset| self.at(offset))
    }

    /// The special token this run earns, if any.
    ///
    /// Exactly four: a line clear along the run's axis at the second-to-last
    /// cell. Five or more: an area bomb at the third-to-last cell.
    pub fn special_spawn(&self) -> Option<SpecialSpawn> {
        let end = self.start + self.len;
        match self.len {
            4 => Some(SpecialSpawn {
                position: self.at(end - 2),
                kind: match self.axis {
                    Axis::Horizontal => SpecialKind::RowClear,
                    Axis::Vertical => SpecialKind::ColumnClear,
                },
            }),
            n if n >= 5 => Some(SpecialSpawn {
                position: self.at(end - 3),
                kind: SpecialKind::AreaBomb,
            }),
            _ => None,
        }
    }
}

/// A special token waiting to be placed after matched cells are cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialSpawn {
    pub position: Position,
    pub kind: SpecialKind,
}

/// Outcome of one detection pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MatchResult {
    /// Unique matched cells in first-seen scan order.
    pub matched: Vec<Position>,
    /// At most one spawn per pass: the first qualifying run wins.
    pub special: Option<SpecialSpawn>,
}

impl MatchResult {
    pub fn is_empty(&self) -> bool {
        self.matched.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matched.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.matched.contains(&pos)
    }
}

/// Every maximal run of length >= 3, rows first, then columns.
pub fn find_runs(grid: &Grid) -> Vec<Run> {
    let mut runs = Vec::new();
    for row in 0..grid.rows() {
        scan_line(grid, Axis::Horizontal, row, grid.cols(), &mut runs);
    }
    for col in 0..grid.cols() {
        scan_line(grid, Axis::Vertical, col, grid.rows(), &mut runs);
    }
    runs
}

fn scan_line(grid: &Grid, axis: Axis, line: usize, len: usize, runs: &mut Vec<Run>) {
    let color_at = |offset: usize| {
        let pos = match axis {
            Axis::Horizontal => Position::new(line, offset),
            Axis::Vertical => Position::new(offset, line),
        };
        grid.color(pos)
    };

    let mut start = 0;
    for offset in 1..=len {
        if offset < len && color_at(offset) == color_at(start) {
            continue;
        }
        let run_len = offset - start;
        if run_len >= MIN_RUN {
            runs.push(Run {
                axis,
                line,
                start,
                len: run_len,
            });
        }
        start = offset;
    }
}

/// Scan the grid for matches.
pub fn find_matches(grid: &Grid) -> MatchResult {
    let mut result = MatchResult::default();
    let mut seen = HashSet::new();

    for run in find_runs(grid) {
        for pos in run.cells() {
            if seen.insert(pos) {
                result.matched.push(pos);
            }
        }
        if result.special.is_none() {
            result.special = run.special_spawn();
        }
    }

    result
}

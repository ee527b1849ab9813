//! The playing grid and everything that rearranges it.
//!
//! A [`Grid`] is always fully populated. Cells only become empty inside a
//! [`ClearedGrid`], and the only way back to a `Grid` is
//! [`ClearedGrid::settle`], which applies gravity and refills from the top.

mod generator;
mod mutator;

pub use generator::*;
pub use mutator::*;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GridError;
use crate::token::{Color, Token, TokenFactory};

/// A cell coordinate. Row 0 is the top, column 0 the left edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if the two cells share an edge.
    pub fn is_adjacent(&self, other: &Position) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        (dr == 1 && dc == 0) || (dr == 0 && dc == 1)
    }

    /// The same cell with row and column exchanged.
    pub fn transposed(&self) -> Position {
        Position::new(self.col, self.row)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A fully populated `rows x cols` grid of tokens, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Token>,
}

/// Unchecked wire shape of a [`Grid`].
#[derive(Deserialize)]
struct RawGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Token>,
}

impl TryFrom<RawGrid> for Grid {
    type Error = GridError;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        Grid::from_tokens(raw.rows, raw.cols, raw.cells)
    }
}

impl Grid {
    /// Build a grid from row-major tokens.
    pub fn from_tokens(rows: usize, cols: usize, cells: Vec<Token>) -> Result<Self, GridError> {
        if cells.len() != rows * cols {
            return Err(GridError::DimensionMismatch {
                rows,
                cols,
                len: cells.len(),
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Build a grid of plain tokens from row-major colors, drawing ids from `factory`.
    pub fn from_colors<R: Rng>(
        rows: usize,
        cols: usize,
        colors: &[Color],
        factory: &mut TokenFactory<R>,
    ) -> Result<Self, GridError> {
        let cells = colors
            .iter()
            .map(|&color| factory.create(Some(color), None))
            .collect();
        Self::from_tokens(rows, cols, cells)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether a position lies inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.cols + pos.col)
    }

    /// Get the token at a position.
    pub fn get(&self, pos: Position) -> Option<&Token> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// Color at a position.
    pub fn color(&self, pos: Position) -> Option<Color> {
        self.get(pos).map(|t| t.color)
    }

    /// Replace the token at a position, returning the previous one.
    pub fn set(&mut self, pos: Position, token: Token) -> Option<Token> {
        let i = self.index(pos)?;
        Some(std::mem::replace(&mut self.cells[i], token))
    }

    /// All tokens in row-major order.
    pub fn tokens(&self) -> &[Token] {
        &self.cells
    }

    /// All positions in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |r| (0..self.cols).map(move |c| Position::new(r, c)))
    }

    /// Row-major colors, mostly useful for assertions and debugging.
    pub fn colors(&self) -> Vec<Color> {
        self.cells.iter().map(|t| t.color).collect()
    }

    /// The grid mirrored across its main diagonal.
    pub fn transpose(&self) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for c in 0..self.cols {
            for r in 0..self.rows {
                cells.push(self.cells[r * self.cols + c]);
            }
        }
        Grid {
            rows: self.cols,
            cols: self.rows,
            cells,
        }
    }

    /// Empty the given cells. Out-of-range positions are ignored.
    pub fn clear(&self, cells: &[Position]) -> ClearedGrid {
        let mut cleared = ClearedGrid::from(self.clone());
        for &pos in cells {
            cleared.take(pos);
        }
        cleared
    }
}

impl Default for Grid {
    /// A 0x0 grid, used before any level has started.
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            cells: Vec::new(),
        }
    }
}

/// A grid with holes, only alive between clearing and settling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearedGrid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<Token>>,
}

impl From<Grid> for ClearedGrid {
    fn from(grid: Grid) -> Self {
        Self {
            rows: grid.rows,
            cols: grid.cols,
            cells: grid.cells.into_iter().map(Some).collect(),
        }
    }
}

impl ClearedGrid {
    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.cols).then(|| pos.row * self.cols + pos.col)
    }

    /// Token at a position, `None` for holes and out-of-range positions.
    pub fn get(&self, pos: Position) -> Option<&Token> {
        self.index(pos).and_then(|i| self.cells[i].as_ref())
    }

    pub fn is_empty(&self, pos: Position) -> bool {
        self.index(pos).is_some_and(|i| self.cells[i].is_none())
    }

    /// Remove and return the token at a position.
    pub fn take(&mut self, pos: Position) -> Option<Token> {
        let i = self.index(pos)?;
        self.cells[i].take()
    }

    /// Put a token into a cell, returning whatever was there.
    pub fn put(&mut self, pos: Position, token: Token) -> Option<Token> {
        let i = self.index(pos)?;
        self.cells[i].replace(token)
    }

    /// Number of empty cells.
    pub fn holes(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Compact every column downward and refill the top from `factory`.
    ///
    /// Surviving tokens keep their relative order within a column. Columns
    /// are processed left to right, each refilled top to bottom.
    pub fn settle<R: Rng>(self, factory: &mut TokenFactory<R>) -> Grid {
        let (rows, cols) = (self.rows, self.cols);
        let mut cells = self.cells;

        for col in 0..cols {
            let mut write = rows;
            for row in (0..rows).rev() {
                if let Some(token) = cells[row * cols + col].take() {
                    write -= 1;
                    cells[write * cols + col] = Some(token);
                }
            }
            for row in 0..write {
                cells[row * cols + col] = Some(factory.random_token());
            }
        }

        // Every cell is `Some` after the column loop.
        let cells = cells.into_iter().flatten().collect();
        Grid { rows, cols, cells }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenId;

    fn grid_of(rows: usize, cols: usize, colors: &[Color]) -> Grid {
        Grid::from_colors(rows, cols, colors, &mut TokenFactory::seeded(0)).unwrap()
    }

    #[test]
    fn test_adjacency() {
        let p = Position::new(2, 2);
        assert!(p.is_adjacent(&Position::new(1, 2)));
        assert!(p.is_adjacent(&Position::new(2, 3)));
        assert!(!p.is_adjacent(&Position::new(3, 3)));
        assert!(!p.is_adjacent(&Position::new(2, 2)));
        assert!(!p.is_adjacent(&Position::new(2, 4)));
    }

    #[test]
    fn test_dimension_mismatch() {
        let err = Grid::from_tokens(2, 2, vec![Token::new(TokenId::nil(), Color::Red)]);
        assert_eq!(
            err,
            Err(GridError::DimensionMismatch {
                rows: 2,
                cols: 2,
                len: 1
            })
        );
    }

    #[test]
    fn test_snapshot_round_trip() {
        use Color::*;
        let grid = grid_of(2, 2, &[Red, Blue, Green, Yellow]);
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(back, grid);
    }

    #[test]
    fn test_mismatched_snapshot_rejected() {
        let err = serde_json::from_str::<Grid>(r#"{"rows":3,"cols":3,"cells":[]}"#).unwrap_err();
        assert!(err.to_string().contains("expected 3x3 tokens, got 0"));
    }

    #[test]
    fn test_settle_fills_every_hole() {
        use Color::*;
        let grid = grid_of(3, 3, &[Red, Blue, Green, Yellow, Purple, Orange, Red, Blue, Green]);
        let cleared = grid.clear(&grid.positions().collect::<Vec<_>>());
        assert_eq!(cleared.holes(), 9);
        let settled = cleared.settle(&mut TokenFactory::seeded(2));
        assert_eq!(settled.rows(), 3);
        assert_eq!(settled.cols(), 3);
        assert_eq!(settled.tokens().len(), 9);
    }

    #[test]
    fn test_out_of_range_get() {
        let grid = grid_of(2, 2, &[Color::Red; 4]);
        assert!(grid.get(Position::new(2, 0)).is_none());
        assert!(grid.get(Position::new(0, 2)).is_none());
        assert_eq!(grid.color(Position::new(1, 1)), Some(Color::Red));
    }

    #[test]
    fn test_transpose() {
        use Color::*;
        let grid = grid_of(2, 3, &[Red, Blue, Green, Yellow, Purple, Orange]);
        let t = grid.transpose();
        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 2);
        assert_eq!(t.colors(), vec![Red, Yellow, Blue, Purple, Green, Orange]);
        assert_eq!(t.transpose(), grid);
    }

    #[test]
    fn test_settle_compacts_and_refills() {
        use Color::*;
        // Column 0 top to bottom: Red, Blue, Green.
        let grid = grid_of(3, 1, &[Red, Blue, Green]);
        let red = *grid.get(Position::new(0, 0)).unwrap();
        let cleared = grid.clear(&[Position::new(1, 0)]);
        assert_eq!(cleared.holes(), 1);

        let mut factory = TokenFactory::seeded(5);
        let settled = cleared.settle(&mut factory);
        assert_eq!(settled.get(Position::new(1, 0)), Some(&red));
        assert_eq!(settled.color(Position::new(2, 0)), Some(Green));
        assert_ne!(settled.get(Position::new(0, 0)).unwrap().id, red.id);
    }

    #[test]
    fn test_settle_keeps_order_with_scattered_holes() {
        use Color::*;
        let grid = grid_of(5, 1, &[Red, Blue, Green, Yellow, Purple]);
        let cleared = grid.clear(&[Position::new(1, 0), Position::new(3, 0)]);
        let settled = cleared.settle(&mut TokenFactory::seeded(11));
        let bottom: Vec<Color> = (2..5)
            .map(|r| settled.color(Position::new(r, 0)).unwrap())
            .collect();
        assert_eq!(bottom, vec![Red, Green, Purple]);
    }
}

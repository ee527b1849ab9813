//! Initial board generation.

use rand::Rng;
use tracing::{debug, warn};

use super::Grid;
use crate::config::RulesConfig;
use crate::token::{Color, Token, TokenFactory};

/// Build a `rows x cols` grid with no pre-existing runs of three.
///
/// Every cell is filled at random, then full passes re-roll any cell that
/// closes a run with its two left or its two upper neighbors, until a pass
/// finds nothing. If `config.max_generation_passes` passes are not enough, a
/// single repair pass re-rolls offending cells while excluding the colors
/// that would complete a run.
pub fn create_board<R: Rng>(
    rows: usize,
    cols: usize,
    factory: &mut TokenFactory<R>,
    config: &RulesConfig,
) -> Grid {
    let mut cells: Vec<Token> = (0..rows * cols).map(|_| factory.random_token()).collect();

    let mut passes = 0;
    while reroll_pass(&mut cells, rows, cols, factory) {
        passes += 1;
        if passes >= config.max_generation_passes {
            warn!(rows, cols, passes, "board generation hit the re-roll cap, repairing");
            repair_pass(&mut cells, rows, cols, factory);
            break;
        }
    }
    debug!(rows, cols, passes, "board generated");

    Grid { rows, cols, cells }
}

/// Color shared by the two cells left of `(row, col)`, if they match.
fn left_pair(cells: &[Token], cols: usize, row: usize, col: usize) -> Option<Color> {
    if col < 2 {
        return None;
    }
    let a = cells[row * cols + col - 1].color;
    let b = cells[row * cols + col - 2].color;
    (a == b).then_some(a)
}

/// Color shared by the two cells above `(row, col)`, if they match.
fn upper_pair(cells: &[Token], cols: usize, row: usize, col: usize) -> Option<Color> {
    if row < 2 {
        return None;
    }
    let a = cells[(row - 1) * cols + col].color;
    let b = cells[(row - 2) * cols + col].color;
    (a == b).then_some(a)
}

fn reroll_pass<R: Rng>(
    cells: &mut [Token],
    rows: usize,
    cols: usize,
    factory: &mut TokenFactory<R>,
) -> bool {
    let mut changed = false;
    for row in 0..rows {
        for col in 0..cols {
            let i = row * cols + col;
            if left_pair(cells, cols, row, col) == Some(cells[i].color) {
                cells[i] = factory.random_token();
                changed = true;
            }
            if upper_pair(cells, cols, row, col) == Some(cells[i].color) {
                cells[i] = factory.random_token();
                changed = true;
            }
        }
    }
    changed
}

// Each cell's runs only involve cells earlier in scan order, so one pass
// settles the whole grid as long as the palette has at least three colors.
fn repair_pass<R: Rng>(
    cells: &mut [Token],
    rows: usize,
    cols: usize,
    factory: &mut TokenFactory<R>,
) {
    for row in 0..rows {
        for col in 0..cols {
            let i = row * cols + col;
            let excluded: Vec<Color> = [
                left_pair(cells, cols, row, col),
                upper_pair(cells, cols, row, col),
            ]
            .into_iter()
            .flatten()
            .collect();
            if excluded.contains(&cells[i].color) {
                let color = factory.random_color_except(&excluded);
                cells[i] = factory.create(Some(color), None);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::find_matches;

    #[test]
    fn test_no_initial_runs() {
        let config = RulesConfig::default();
        for seed in 0..40 {
            let mut factory = TokenFactory::seeded(seed);
            for (rows, cols) in [(3, 3), (6, 6), (7, 7), (8, 8), (4, 9)] {
                let grid = create_board(rows, cols, &mut factory, &config);
                assert_eq!(grid.rows(), rows);
                assert_eq!(grid.cols(), cols);
                assert!(
                    find_matches(&grid).is_empty(),
                    "seed {seed} produced a run on a {rows}x{cols} board"
                );
            }
        }
    }

    #[test]
    fn test_small_palette_still_clean() {
        let config = RulesConfig {
            palette_size: 3,
            ..Default::default()
        };
        for seed in 0..20 {
            let mut factory = TokenFactory::seeded(seed).with_palette_size(3);
            let grid = create_board(8, 8, &mut factory, &config);
            assert!(find_matches(&grid).is_empty());
        }
    }

    #[test]
    fn test_repair_pass_used_when_cap_is_one() {
        let config = RulesConfig {
            palette_size: 3,
            max_generation_passes: 1,
        };
        for seed in 0..20 {
            let mut factory = TokenFactory::seeded(seed).with_palette_size(3);
            let grid = create_board(8, 8, &mut factory, &config);
            assert!(find_matches(&grid).is_empty());
        }
    }

    #[test]
    fn test_seeded_boards_repeat() {
        let config = RulesConfig::default();
        let a = create_board(6, 6, &mut TokenFactory::seeded(77), &config);
        let b = create_board(6, 6, &mut TokenFactory::seeded(77), &config);
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_cell_board() {
        let grid = create_board(1, 1, &mut TokenFactory::seeded(1), &RulesConfig::default());
        assert_eq!(grid.tokens().len(), 1);
    }
}

//! Level table.

use serde::{Deserialize, Serialize};

const BASE_TARGET_SCORE: u32 = 1000;
const TARGET_SCORE_STEP: u32 = 500;
const BASE_MAX_MOVES: u32 = 15;
const BASE_GRID_SIZE: usize = 6;
const MAX_GRID_SIZE: usize = 8;

/// Parameters for a single level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelParams {
    pub target_score: u32,
    pub max_moves: u32,
    pub rows: usize,
    pub cols: usize,
}

/// Derive the parameters of `level`. Levels start at 1; 0 is treated as 1.
pub fn level_params(level: u32) -> LevelParams {
    let level = level.max(1);
    let size = (BASE_GRID_SIZE + (level / 5) as usize).min(MAX_GRID_SIZE);
    let step = (level - 1).saturating_mul(TARGET_SCORE_STEP);
    LevelParams {
        target_score: BASE_TARGET_SCORE.saturating_add(step),
        max_moves: BASE_MAX_MOVES + level / 3,
        rows: size,
        cols: size,
    }
}

//! Session state and the turn loop that mutates it.

mod cascade;
mod controller;

pub use cascade::*;
pub use controller::*;

use cascade_rules::{Grid, LevelParams};
use serde::{Deserialize, Serialize};

/// Lifecycle of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GameStatus {
    #[default]
    Idle,
    Playing,
    LevelComplete,
    GameOver,
}

impl GameStatus {
    /// True once the level is won or lost.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::LevelComplete | GameStatus::GameOver)
    }
}

/// Decide the status after a turn settles. Winning beats losing when both
/// thresholds are met by the same move.
pub fn evaluate_status(score: u32, target_score: u32, moves: u32, max_moves: u32) -> GameStatus {
    if score >= target_score {
        GameStatus::LevelComplete
    } else if moves >= max_moves {
        GameStatus::GameOver
    } else {
        GameStatus::Playing
    }
}

/// Everything the presentation layer needs to draw a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSession {
    grid: Grid,
    score: u32,
    level: u32,
    moves: u32,
    target_score: u32,
    max_moves: u32,
    status: GameStatus,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::idle()
    }
}

impl GameSession {
    /// A session that has not started yet.
    pub fn idle() -> Self {
        Self {
            grid: Grid::default(),
            score: 0,
            level: 1,
            moves: 0,
            target_score: 0,
            max_moves: 0,
            status: GameStatus::Idle,
        }
    }

    /// A fresh session in play for `level`.
    pub fn playing(level: u32, params: LevelParams, grid: Grid) -> Self {
        Self {
            grid,
            score: 0,
            level,
            moves: 0,
            target_score: params.target_score,
            max_moves: params.max_moves,
            status: GameStatus::Playing,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    pub fn max_moves(&self) -> u32 {
        self.max_moves
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves still available before the budget runs out.
    pub fn moves_left(&self) -> u32 {
        self.max_moves.saturating_sub(self.moves)
    }

    /// Input should only be accepted while this is true.
    pub fn is_playing(&self) -> bool {
        self.status == GameStatus::Playing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_rules::level_params;

    #[test]
    fn test_win_beats_loss() {
        assert_eq!(evaluate_status(1000, 1000, 15, 15), GameStatus::LevelComplete);
        assert_eq!(evaluate_status(1200, 1000, 20, 15), GameStatus::LevelComplete);
    }

    #[test]
    fn test_loss_and_continue() {
        assert_eq!(evaluate_status(990, 1000, 15, 15), GameStatus::GameOver);
        assert_eq!(evaluate_status(990, 1000, 14, 15), GameStatus::Playing);
    }

    #[test]
    fn test_idle_session() {
        let session = GameSession::idle();
        assert_eq!(session.status(), GameStatus::Idle);
        assert_eq!(session.level(), 1);
        assert_eq!(session.grid().rows(), 0);
        assert!(!session.is_playing());
    }

    #[test]
    fn test_playing_session_takes_params() {
        let params = level_params(3);
        let session = GameSession::playing(3, params, Grid::default());
        assert_eq!(session.target_score(), 2000);
        assert_eq!(session.max_moves(), 16);
        assert_eq!(session.moves_left(), 16);
        assert!(session.is_playing());
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(GameStatus::GameOver.is_terminal());
        assert!(GameStatus::LevelComplete.is_terminal());
        assert!(!GameStatus::Playing.is_terminal());
        assert!(!GameStatus::Idle.is_terminal());
    }
}

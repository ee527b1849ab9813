//! Gameplay events emitted while a turn resolves.
//!
//! The controller does not play sounds or animate anything; it reports what
//! happened in order and lets the presentation layer react.

use cascade_rules::{Position, SpecialKind};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A detection pass cleared cells. `step` counts from 0 within the turn.
    Matched {
        step: usize,
        cells: usize,
        points: u32,
    },

    /// A special token was created where the run was cleared, before gravity.
    SpecialSpawned { position: Position, kind: SpecialKind },

    /// The player triggered a special token.
    SpecialActivated {
        position: Position,
        kind: SpecialKind,
        affected: Vec<Position>,
        points: u32,
    },

    /// The target score was reached.
    LevelComplete { level: u32, score: u32 },

    /// The move budget ran out below the target score.
    GameOver { level: u32, score: u32 },
}

impl GameEvent {
    /// True for events that end the level one way or the other.
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameEvent::LevelComplete { .. } | GameEvent::GameOver { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_events() {
        assert!(GameEvent::GameOver { level: 1, score: 10 }.is_terminal());
        assert!(GameEvent::LevelComplete { level: 1, score: 1000 }.is_terminal());
        assert!(!GameEvent::Matched {
            step: 0,
            cells: 3,
            points: 30
        }
        .is_terminal());
    }

    #[test]
    fn test_event_json_shape() {
        let event = GameEvent::SpecialSpawned {
            position: Position::new(2, 3),
            kind: SpecialKind::RowClear,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["SpecialSpawned"]["kind"], "RowClear");
        assert_eq!(json["SpecialSpawned"]["position"]["col"], 3);
    }
}

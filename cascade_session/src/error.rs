use cascade_rules::{MoveRejection, Position};

use crate::session::GameStatus;

/// Why the controller ignored an action. A rejected action never changes
/// the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("session is not in play (status: {0:?})")]
    NotPlaying(GameStatus),

    #[error(transparent)]
    Move(#[from] MoveRejection),

    #[error("position {0} is outside the grid")]
    OutOfBounds(Position),

    #[error("no special token at {0}")]
    NotSpecial(Position),

    #[error("level {0} is not complete")]
    LevelNotComplete(u32),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_display() {
        let err = Rejection::NotSpecial(Position::new(1, 2));
        assert_eq!(err.to_string(), "no special token at (1, 2)");

        let err = Rejection::NotPlaying(GameStatus::GameOver);
        assert_eq!(err.to_string(), "session is not in play (status: GameOver)");
    }

    #[test]
    fn test_move_rejection_is_transparent() {
        let inner = MoveRejection::OutOfBounds(Position::new(9, 0));
        let err: Rejection = inner.into();
        assert_eq!(err.to_string(), inner.to_string());
    }
}

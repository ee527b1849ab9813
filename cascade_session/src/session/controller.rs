//! The game session controller.
//!
//! Every action follows the same shape: check the status, validate the
//! input, mutate the grid, cascade to a fixpoint, then evaluate win/loss.
//! Rejected actions return an error and leave the session untouched.

use cascade_rules::{
    check_move, create_board, level_params, score, swap, ConfigError, Grid, Position,
    TokenFactory,
};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::{evaluate_status, run_cascade, CascadeStep, GameSession, GameStatus};
use crate::config::SessionConfig;
use crate::error::Rejection;
use crate::events::GameEvent;

/// What an accepted action did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// Points gained this turn, special activation included.
    pub points: u32,
    /// Cascade steps in the order they resolved.
    pub steps: Vec<CascadeStep>,
    pub events: Vec<GameEvent>,
    /// Status after the turn settled.
    pub status: GameStatus,
}

/// Owns the one active session and the randomness that feeds it.
///
/// Actions must be serialized by the caller: one swap or activation at a
/// time.
pub struct GameController<R = StdRng> {
    config: SessionConfig,
    factory: TokenFactory<R>,
    session: GameSession,
}

impl GameController<StdRng> {
    /// Create an idle controller. Seeded when `config.seed` is set.
    pub fn new(config: SessionConfig) -> Result<Self, ConfigError> {
        let factory = match config.seed {
            Some(seed) => TokenFactory::seeded(seed),
            None => TokenFactory::from_entropy(),
        };
        Self::with_factory(config, factory)
    }
}

impl<R: Rng> GameController<R> {
    /// Create an idle controller around an existing token factory.
    ///
    /// The configuration is validated first: boards are only guaranteed
    /// run-free with at least three colors.
    pub fn with_factory(
        config: SessionConfig,
        factory: TokenFactory<R>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let factory = factory.with_palette_size(config.rules.palette_size);
        Ok(Self {
            config,
            factory,
            session: GameSession::idle(),
        })
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Begin `level` with a fresh board, from any state.
    #[instrument(skip(self))]
    pub fn start(&mut self, level: u32) -> &GameSession {
        let level = level.max(1);
        let params = level_params(level);
        let grid = create_board(params.rows, params.cols, &mut self.factory, &self.config.rules);
        self.session = GameSession::playing(level, params, grid);
        info!(
            level,
            target_score = params.target_score,
            max_moves = params.max_moves,
            "level started"
        );
        &self.session
    }

    /// Replay the current level from scratch.
    #[instrument(skip(self), fields(level = self.session.level))]
    pub fn restart(&mut self) -> &GameSession {
        let level = self.session.level;
        self.start(level)
    }

    /// Move on to the next level. Only honored after the level is complete.
    #[instrument(skip(self), fields(level = self.session.level, status = ?self.session.status))]
    pub fn advance(&mut self) -> Result<&GameSession, Rejection> {
        if self.session.status != GameStatus::LevelComplete {
            return Err(Rejection::LevelNotComplete(self.session.level));
        }
        let next = self.session.level.saturating_add(1);
        Ok(self.start(next))
    }

    /// Swap two cells. Costs a move when accepted.
    #[instrument(skip(self), fields(level = self.session.level, moves = self.session.moves))]
    pub fn submit_swap(&mut self, a: Position, b: Position) -> Result<TurnReport, Rejection> {
        self.ensure_playing()?;
        if let Err(reason) = check_move(&self.session.grid, a, b) {
            debug!(%reason, "swap rejected");
            return Err(reason.into());
        }

        self.session.moves += 1;
        let swapped = swap(&self.session.grid, a, b);
        Ok(self.settle_turn(swapped, 0, Vec::new()))
    }

    /// Trigger the special token at `pos`. Does not cost a move.
    #[instrument(skip(self), fields(level = self.session.level))]
    pub fn activate_special(&mut self, pos: Position) -> Result<TurnReport, Rejection> {
        self.ensure_playing()?;
        let token = self
            .session
            .grid
            .get(pos)
            .ok_or(Rejection::OutOfBounds(pos))?;
        let kind = token.special.ok_or(Rejection::NotSpecial(pos))?;

        let (cleared, affected) = cascade_rules::activate_special(&self.session.grid, pos);
        let points = score(affected.len(), true);
        debug!(?kind, cells = affected.len(), points, "special activated");

        let grid = cleared.settle(&mut self.factory);
        let events = vec![GameEvent::SpecialActivated {
            position: pos,
            kind,
            affected,
            points,
        }];
        Ok(self.settle_turn(grid, points, events))
    }

    fn ensure_playing(&self) -> Result<(), Rejection> {
        if self.session.is_playing() {
            Ok(())
        } else {
            Err(Rejection::NotPlaying(self.session.status))
        }
    }

    /// Cascade `grid` to a fixpoint, bank the points and evaluate win/loss.
    fn settle_turn(&mut self, grid: Grid, points: u32, mut events: Vec<GameEvent>) -> TurnReport {
        let cascade = run_cascade(grid, &mut self.factory, self.config.max_cascade_steps);

        for (step, resolved) in cascade.steps.iter().enumerate() {
            events.push(GameEvent::Matched {
                step,
                cells: resolved.matched.len(),
                points: resolved.points,
            });
            if let Some(spawn) = resolved.spawn {
                events.push(GameEvent::SpecialSpawned {
                    position: spawn.position,
                    kind: spawn.kind,
                });
            }
        }

        let points = points.saturating_add(cascade.points());
        let session = &mut self.session;
        session.grid = cascade.grid;
        session.score = session.score.saturating_add(points);
        session.status = evaluate_status(
            session.score,
            session.target_score,
            session.moves,
            session.max_moves,
        );

        match session.status {
            GameStatus::LevelComplete => {
                info!(level = session.level, score = session.score, "level complete");
                events.push(GameEvent::LevelComplete {
                    level: session.level,
                    score: session.score,
                });
            }
            GameStatus::GameOver => {
                info!(level = session.level, score = session.score, "game over");
                events.push(GameEvent::GameOver {
                    level: session.level,
                    score: session.score,
                });
            }
            GameStatus::Idle | GameStatus::Playing => {}
        }

        TurnReport {
            points,
            steps: cascade.steps,
            events,
            status: session.status,
        }
    }
}

//! # Cascade Session
//!
//! The turn loop of the tile-matching engine. This crate drives
//! `cascade_rules`: it validates swaps, runs cascades to a fixpoint, scores
//! them, and moves a session through its lifecycle.
//!
//! ## Core Components
//!
//! - **session**: `GameSession` state, the cascade loop, and the `GameController`
//! - **events**: Gameplay events for the presentation layer (sounds, effects, screens)
//! - **config**: TOML-backed session configuration
//! - **error**: Reasons an action was rejected
//!
//! The controller is synchronous. Every action runs to completion before it
//! returns; any staging between cascade steps is left to the caller, which
//! gets a grid snapshot per step.

pub mod config;
pub mod error;
pub mod events;
pub mod session;

pub use config::*;
pub use error::*;
pub use events::*;
pub use session::*;

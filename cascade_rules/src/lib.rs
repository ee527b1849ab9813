//! # Cascade Rules
//!
//! The rules crate for the tile-matching engine. It owns every pure piece of
//! gameplay logic and holds no session state.
//!
//! ## Components
//!
//! - **token**: Token definitions and the seedable `TokenFactory`
//! - **grid**: The fully-populated `Grid`, board generation, swaps, gravity and refill
//! - **matching**: Run detection and move validation
//! - **mechanics**: Scoring and the level table
//! - **config**: TOML-backed rules configuration

pub mod config;
pub mod error;
pub mod grid;
pub mod matching;
pub mod mechanics;
pub mod token;

pub use config::*;
pub use error::*;
pub use grid::*;
pub use matching::*;
pub use mechanics::*;
pub use token::*;

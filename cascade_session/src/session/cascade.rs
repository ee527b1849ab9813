//! The cascade loop: detect, score, resolve, repeat until the grid is stable.

use cascade_rules::{
    find_matches, resolve_matches, score, Grid, Position, SpecialSpawn, TokenFactory,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One detect-and-resolve step of a cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CascadeStep {
    pub matched: Vec<Position>,
    pub spawn: Option<SpecialSpawn>,
    pub points: u32,
    /// The grid after this step was resolved and refilled.
    pub grid: Grid,
}

/// A finished cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cascade {
    pub grid: Grid,
    pub steps: Vec<CascadeStep>,
}

impl Cascade {
    /// Total points earned across every step.
    pub fn points(&self) -> u32 {
        self.steps.iter().map(|s| s.points).sum()
    }
}

/// Resolve matches on `grid` until a detection pass finds none, or until
/// `max_steps` steps have run.
///
/// A capped cascade is not stable: the returned grid may still contain runs.
/// They stay on the board until the next accepted move clears them.
pub fn run_cascade<R: Rng>(
    mut grid: Grid,
    factory: &mut TokenFactory<R>,
    max_steps: usize,
) -> Cascade {
    let mut steps = Vec::new();

    loop {
        let result = find_matches(&grid);
        if result.is_empty() {
            break;
        }
        if steps.len() >= max_steps {
            warn!(max_steps, "cascade step cap reached with matches still on the grid");
            break;
        }

        let points = score(result.len(), false);
        debug!(step = steps.len(), cells = result.len(), points, "cascade step");
        grid = resolve_matches(&grid, &result, factory);
        steps.push(CascadeStep {
            matched: result.matched,
            spawn: result.special,
            points,
            grid: grid.clone(),
        });
    }

    Cascade { grid, steps }
}

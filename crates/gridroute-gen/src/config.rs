//! Planner configuration and the single build-validate-search entry point.

use gridroute_core::{Grid, Point};
use gridroute_paths::{SearchOutcome, find_route};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::error::GenError;
use crate::validator::GridValidator;

/// Everything needed to build and solve one grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Side length of the square grid.
    pub size: i32,
    /// Number of obstacles per layout.
    pub obstacles: usize,
    pub start: Point,
    pub goal: Point,
    /// Seed for the obstacle generator.
    pub seed: u64,
    /// Upper bound on generate-and-check attempts.
    pub max_attempts: usize,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            size: 7,
            obstacles: 10,
            start: Point::new(0, 0),
            goal: Point::new(6, 6),
            seed: 42,
            max_attempts: 1000,
        }
    }
}

impl PlannerConfig {
    /// Build the empty grid this configuration describes, checking that the
    /// requested obstacles fit.
    pub fn build_grid(&self) -> Result<Grid, GenError> {
        let grid = Grid::new(self.size, self.start, self.goal)?;
        let available = grid.eligible_count();
        if self.obstacles > available {
            return Err(GenError::InsufficientSpace {
                requested: self.obstacles,
                available,
            });
        }
        Ok(grid)
    }

    /// Check the configuration without running anything.
    pub fn validate(&self) -> Result<(), GenError> {
        self.build_grid().map(|_| ())
    }
}

/// Final grid plus the outputs handed to a renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Plan {
    pub grid: Grid,
    /// Search over the final grid. The route is present whenever validation
    /// succeeded.
    pub outcome: SearchOutcome,
    /// Attempts the validator needed.
    pub attempts: usize,
}

/// Build a grid, populate it until solvable, then search it.
///
/// Deterministic for a given configuration.
pub fn plan(config: &PlannerConfig) -> Result<Plan, GenError> {
    let mut grid = config.build_grid()?;
    let mut validator = GridValidator::new(StdRng::seed_from_u64(config.seed));
    let valid = validator.generate_valid(&mut grid, config.obstacles, config.max_attempts)?;
    log::info!(
        "solvable {0}x{0} grid after {1} attempt(s)",
        config.size,
        valid.attempts
    );

    let outcome = find_route(&grid);
    Ok(Plan {
        grid,
        outcome,
        attempts: valid.attempts,
    })
}

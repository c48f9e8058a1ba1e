//! Generate-and-check loop producing solvable grids.

use gridroute_core::{Grid, Point};
use gridroute_paths::{Route, find_route};
use rand::Rng;

use crate::error::GenError;
use crate::obstacles::ObstacleGenerator;

/// A solvable layout left in the caller's grid, with the route that proved it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidGrid {
    pub route: Route,
    /// Expansion trace of the successful search.
    pub visited: Vec<Point>,
    /// 1-based attempt that succeeded.
    pub attempts: usize,
}

/// Retries obstacle placement until the grid's start can reach its goal.
pub struct GridValidator<R: Rng> {
    pub generator: ObstacleGenerator<R>,
}

impl<R: Rng> GridValidator<R> {
    /// Create a validator with a fresh generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            generator: ObstacleGenerator::new(rng),
        }
    }

    /// Repopulate `grid` with `obstacle_count` obstacles until a route exists.
    ///
    /// Each attempt clears all obstacles first. On success the grid keeps the
    /// winning layout. Running out of space is reported immediately; running
    /// out of attempts yields [`GenError::Unsolvable`]. With
    /// `max_attempts == 0` the grid is left untouched.
    pub fn generate_valid(
        &mut self,
        grid: &mut Grid,
        obstacle_count: usize,
        max_attempts: usize,
    ) -> Result<ValidGrid, GenError> {
        for attempt in 1..=max_attempts {
            grid.clear_obstacles();
            self.generator.place(grid, obstacle_count)?;

            let outcome = find_route(grid);
            if let Some(route) = outcome.route {
                log::debug!(
                    "attempt {attempt}: solvable, route cost {}",
                    route.cost
                );
                return Ok(ValidGrid {
                    route,
                    visited: outcome.visited,
                    attempts: attempt,
                });
            }
            log::debug!("attempt {attempt}: no route, retrying");
        }

        let size = grid.size();
        log::warn!(
            "gave up after {max_attempts} attempts with {obstacle_count} obstacles on a {size}x{size} grid"
        );
        Err(GenError::Unsolvable {
            attempts: max_attempts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridroute_paths::bfs_distance;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn grid7() -> Grid {
        Grid::new(7, Point::new(0, 0), Point::new(6, 6)).unwrap()
    }

    #[test]
    fn returned_grids_are_solvable() {
        for seed in 0..25 {
            let mut g = grid7();
            let mut v = GridValidator::new(StdRng::seed_from_u64(seed));
            let valid = v.generate_valid(&mut g, 10, 1000).unwrap();

            assert_eq!(g.obstacle_count(), 10);
            assert!(valid.attempts >= 1);
            let again = find_route(&g);
            assert_eq!(again.route.as_ref(), Some(&valid.route));
            assert_eq!(again.visited, valid.visited);
            assert_eq!(
                bfs_distance(&g, g.start(), g.goal()),
                Some(valid.route.cost)
            );
        }
    }

    #[test]
    fn dense_grid_exhausts_attempts() {
        // Every eligible cell blocked: start (corner) can never reach goal.
        let mut g = Grid::new(3, Point::new(0, 0), Point::new(2, 2)).unwrap();
        let mut v = GridValidator::new(StdRng::seed_from_u64(5));
        assert_eq!(
            v.generate_valid(&mut g, 7, 4),
            Err(GenError::Unsolvable { attempts: 4 })
        );
    }

    #[test]
    fn insufficient_space_is_not_retried() {
        let mut g = Grid::new(3, Point::new(0, 0), Point::new(2, 2)).unwrap();
        let mut v = GridValidator::new(StdRng::seed_from_u64(5));
        assert_eq!(
            v.generate_valid(&mut g, 9, 100),
            Err(GenError::InsufficientSpace {
                requested: 9,
                available: 7
            })
        );
    }

    #[test]
    fn zero_attempts_leaves_grid_untouched() {
        let mut g = grid7();
        g.set_obstacle(Point::new(1, 1), true).unwrap();
        let before = g.clone();
        let mut v = GridValidator::new(StdRng::seed_from_u64(5));
        assert_eq!(
            v.generate_valid(&mut g, 10, 0),
            Err(GenError::Unsolvable { attempts: 0 })
        );
        assert_eq!(g, before);
    }

    #[test]
    fn previous_obstacles_are_cleared() {
        let mut g = grid7();
        for y in 1..7 {
            g.set_obstacle(Point::new(1, y), true).unwrap();
        }
        let mut v = GridValidator::new(StdRng::seed_from_u64(9));
        v.generate_valid(&mut g, 0, 1).unwrap();
        assert_eq!(g.obstacle_count(), 0);
    }
}

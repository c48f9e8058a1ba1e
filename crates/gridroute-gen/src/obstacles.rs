//! Random obstacle placement.

use gridroute_core::{Grid, Point};
use rand::{Rng, RngExt};

use crate::error::GenError;

/// Places obstacles on a [`Grid`] using its own random source.
pub struct ObstacleGenerator<R: Rng> {
    pub rng: R,
}

impl<R: Rng> ObstacleGenerator<R> {
    /// Create a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Flag `count` distinct eligible cells as obstacles.
    ///
    /// Each draw picks a row then a column uniformly over the whole grid and
    /// is rejected if it lands on the start, the goal, or an existing
    /// obstacle. Rejection sampling keeps the obstacle set reproducible for a
    /// given seed.
    ///
    /// Returns the new obstacles in placement order. Fails up front when
    /// fewer than `count` cells are eligible, since sampling could never
    /// finish.
    pub fn place(&mut self, grid: &mut Grid, count: usize) -> Result<Vec<Point>, GenError> {
        let available = grid.eligible_count();
        if available < count {
            return Err(GenError::InsufficientSpace {
                requested: count,
                available,
            });
        }

        let size = grid.size();
        let mut placed = Vec::with_capacity(count);
        let mut draws = 0usize;
        while placed.len() < count {
            let x = self.rng.random_range(0..size);
            let y = self.rng.random_range(0..size);
            let p = Point::new(x, y);
            draws += 1;
            if grid.cell(p).is_some_and(|c| c.is_eligible()) {
                grid.set_obstacle(p, true)?;
                placed.push(p);
            }
        }

        log::trace!("placed {count} obstacles in {draws} draws");
        Ok(placed)
    }
}

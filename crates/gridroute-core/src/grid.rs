//! The [`Grid`] type — a square array of [`Cell`]s with one start and one goal.
//!
//! A `Grid` owns its cells outright. Every mutation goes through `&mut self`,
//! so a grid is only ever edited by whichever component currently holds it.

use crate::cell::Cell;
use crate::error::GridError;
use crate::geom::{Point, Range};

/// Largest accepted side length.
pub const MAX_SIZE: i32 = 1024;

/// A fixed `size × size` grid of [`Cell`]s stored in row-major order.
///
/// Invariants: exactly one start and one goal, they differ, and neither is
/// ever an obstacle.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grid {
    size: i32,
    start: Point,
    goal: Point,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an obstacle-free grid with unit costs.
    ///
    /// Fails if `size` is not in `1..=MAX_SIZE`, if `start == goal`, or if either
    /// endpoint lies outside `[0, size)` on both axes.
    pub fn new(size: i32, start: Point, goal: Point) -> Result<Self, GridError> {
        if !(1..=MAX_SIZE).contains(&size) {
            return Err(GridError::Configuration(format!(
                "size must be in 1..={MAX_SIZE}, got {size}"
            )));
        }
        let bounds = Range::square(size);
        for (name, p) in [("start", start), ("goal", goal)] {
            if !bounds.contains(p) {
                return Err(GridError::Configuration(format!(
                    "{name} {p} lies outside {bounds}"
                )));
            }
        }
        if start == goal {
            return Err(GridError::Configuration(format!(
                "start and goal are both {start}"
            )));
        }

        let cells = bounds
            .iter()
            .map(|p| Cell {
                is_start: p == start,
                is_goal: p == goal,
                ..Cell::open(p)
            })
            .collect();

        Ok(Self {
            size,
            start,
            goal,
            cells,
        })
    }

    /// Side length of the grid.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// The bounding range `[0, size)²`.
    #[inline]
    pub fn bounds(&self) -> Range {
        Range::square(self.size)
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.bounds().contains(p)
    }

    /// The start coordinate.
    #[inline]
    pub fn start(&self) -> Point {
        self.start
    }

    /// The goal coordinate.
    #[inline]
    pub fn goal(&self) -> Point {
        self.goal
    }

    /// The cell at `p`, or `None` if out of bounds.
    pub fn cell(&self, p: Point) -> Option<&Cell> {
        self.bounds().index(p).map(|i| &self.cells[i])
    }

    /// Whether `p` is blocked. Coordinates outside the grid count as blocked.
    pub fn is_obstacle(&self, p: Point) -> bool {
        self.cell(p).is_none_or(|c| c.is_obstacle)
    }

    /// Cost of entering `p`, or `None` if out of bounds.
    pub fn cost(&self, p: Point) -> Option<u32> {
        self.cell(p).map(|c| c.cost)
    }

    /// Flag or unflag `p` as an obstacle.
    ///
    /// The start and goal can never be flagged; unflagging them is rejected
    /// too, since it is always a caller mistake.
    pub fn set_obstacle(&mut self, p: Point, flag: bool) -> Result<(), GridError> {
        let idx = self.bounds().index(p).ok_or(GridError::OutOfBounds(p))?;
        let cell = &mut self.cells[idx];
        if cell.is_endpoint() {
            return Err(GridError::InvalidOperation(p));
        }
        cell.is_obstacle = flag;
        Ok(())
    }

    /// Set the cost of entering `p`. The cost must be positive.
    pub fn set_cost(&mut self, p: Point, cost: u32) -> Result<(), GridError> {
        if cost == 0 {
            return Err(GridError::Configuration(format!(
                "cost of {p} must be positive"
            )));
        }
        let idx = self.bounds().index(p).ok_or(GridError::OutOfBounds(p))?;
        self.cells[idx].cost = cost;
        Ok(())
    }

    /// In-bounds 4-directional neighbours of `p`: up, down, left, right.
    ///
    /// Obstacles are included; callers filter them as needed.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        p.neighbors_4().into_iter().filter(|&n| self.contains(n))
    }

    /// Reset every obstacle flag. Start and goal flags are untouched.
    pub fn clear_obstacles(&mut self) {
        for cell in &mut self.cells {
            cell.is_obstacle = false;
        }
    }

    /// Obstacle coordinates in row-major order.
    pub fn obstacles(&self) -> Vec<Point> {
        self.cells
            .iter()
            .filter(|c| c.is_obstacle)
            .map(|c| c.pos)
            .collect()
    }

    /// Number of obstacle cells.
    pub fn obstacle_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_obstacle).count()
    }

    /// Number of cells that could still receive an obstacle.
    pub fn eligible_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_eligible()).count()
    }

    /// Row-major iterator over all cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid7() -> Grid {
        Grid::new(7, Point::new(0, 0), Point::new(6, 6)).unwrap()
    }

    #[test]
    fn new_flags_endpoints_and_unit_costs() {
        let g = grid7();
        assert_eq!(g.size(), 7);
        assert_eq!(g.iter().count(), 49);
        assert_eq!(g.iter().filter(|c| c.is_start).count(), 1);
        assert_eq!(g.iter().filter(|c| c.is_goal).count(), 1);
        assert!(g.cell(Point::new(0, 0)).unwrap().is_start);
        assert!(g.cell(Point::new(6, 6)).unwrap().is_goal);
        assert!(g.iter().all(|c| c.cost == 1 && !c.is_obstacle));
        assert_eq!(g.cell(Point::new(3, 5)).unwrap().pos, Point::new(3, 5));
    }

    #[test]
    fn new_rejects_bad_configuration() {
        let p = Point::new(1, 1);
        assert!(matches!(
            Grid::new(3, p, p),
            Err(GridError::Configuration(_))
        ));
        assert!(matches!(
            Grid::new(3, Point::new(0, 0), Point::new(3, 0)),
            Err(GridError::Configuration(_))
        ));
        assert!(matches!(
            Grid::new(3, Point::new(-1, 0), Point::new(2, 2)),
            Err(GridError::Configuration(_))
        ));
        assert!(matches!(
            Grid::new(0, Point::new(0, 0), Point::new(0, 0)),
            Err(GridError::Configuration(_))
        ));
    }

    #[test]
    fn new_rejects_oversized_grid() {
        assert!(matches!(
            Grid::new(MAX_SIZE + 1, Point::new(0, 0), Point::new(1, 1)),
            Err(GridError::Configuration(_))
        ));
        assert!(matches!(
            Grid::new(i32::MAX, Point::new(0, 0), Point::new(1, 1)),
            Err(GridError::Configuration(_))
        ));
    }

    #[test]
    fn set_obstacle_rejects_endpoints() {
        let mut g = grid7();
        assert_eq!(
            g.set_obstacle(Point::new(0, 0), true),
            Err(GridError::InvalidOperation(Point::new(0, 0)))
        );
        assert_eq!(
            g.set_obstacle(Point::new(6, 6), true),
            Err(GridError::InvalidOperation(Point::new(6, 6)))
        );
        assert_eq!(
            g.set_obstacle(Point::new(7, 0), true),
            Err(GridError::OutOfBounds(Point::new(7, 0)))
        );
        assert_eq!(g.obstacle_count(), 0);
    }

    #[test]
    fn set_and_clear_obstacles() {
        let mut g = grid7();
        g.set_obstacle(Point::new(2, 3), true).unwrap();
        g.set_obstacle(Point::new(1, 0), true).unwrap();
        assert!(g.is_obstacle(Point::new(2, 3)));
        assert_eq!(g.obstacles(), vec![Point::new(1, 0), Point::new(2, 3)]);
        assert_eq!(g.eligible_count(), 49 - 2 - 2);

        g.clear_obstacles();
        assert_eq!(g.obstacle_count(), 0);
        assert!(g.cell(g.start()).unwrap().is_start);
        assert!(g.cell(g.goal()).unwrap().is_goal);
    }

    #[test]
    fn out_of_bounds_is_blocked() {
        let g = grid7();
        assert!(g.is_obstacle(Point::new(-1, 0)));
        assert!(g.cell(Point::new(0, 7)).is_none());
        assert_eq!(g.cost(Point::new(0, 7)), None);
    }

    #[test]
    fn neighbors_are_bounded_and_ordered() {
        let g = grid7();
        let corner: Vec<_> = g.neighbors(Point::new(0, 0)).collect();
        assert_eq!(corner, vec![Point::new(1, 0), Point::new(0, 1)]);

        let inner: Vec<_> = g.neighbors(Point::new(3, 3)).collect();
        assert_eq!(
            inner,
            vec![
                Point::new(2, 3),
                Point::new(4, 3),
                Point::new(3, 2),
                Point::new(3, 4),
            ]
        );

        let edge: Vec<_> = g.neighbors(Point::new(6, 3)).collect();
        assert_eq!(
            edge,
            vec![Point::new(5, 3), Point::new(6, 2), Point::new(6, 4)]
        );
    }

    #[test]
    fn set_cost_requires_positive() {
        let mut g = grid7();
        g.set_cost(Point::new(1, 1), 5).unwrap();
        assert_eq!(g.cost(Point::new(1, 1)), Some(5));
        assert!(matches!(
            g.set_cost(Point::new(1, 1), 0),
            Err(GridError::Configuration(_))
        ));
    }
}

use gridroute_core::{Grid, Point, Range};

use crate::distance::manhattan;

/// Minimal pathfinding interface — provides bounds and neighbor enumeration.
pub trait Pather {
    /// Area the search may index into.
    fn bounds(&self) -> Range;

    /// Append passable neighbors of `p` into `buf`. The caller clears `buf`
    /// before calling. Append order is expansion order.
    fn neighbors(&self, p: Point, buf: &mut Vec<Point>);
}

/// Pather with weighted (positive-cost) moves.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` into adjacent `to`. Must be > 0.
    fn cost(&self, from: Point, to: Point) -> u32;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of distance from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Point, to: Point) -> u32;
}

impl Pather for Grid {
    #[inline]
    fn bounds(&self) -> Range {
        Grid::bounds(self)
    }

    fn neighbors(&self, p: Point, buf: &mut Vec<Point>) {
        buf.extend(Grid::neighbors(self, p).filter(|&n| !self.is_obstacle(n)));
    }
}

impl WeightedPather for Grid {
    #[inline]
    fn cost(&self, _from: Point, to: Point) -> u32 {
        Grid::cost(self, to).unwrap_or(u32::MAX)
    }
}

impl AstarPather for Grid {
    /// Manhattan distance. Admissible while every cell costs at least 1.
    #[inline]
    fn estimate(&self, from: Point, to: Point) -> u32 {
        manhattan(from, to)
    }
}

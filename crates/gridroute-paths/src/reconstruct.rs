//! Route reconstruction from a search's predecessor map.

use std::fmt;

use gridroute_core::{Point, Range};

/// Errors from turning a predecessor map into a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The target has no predecessor and is not the search origin.
    Unreached(Point),
}

impl fmt::Display for PathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unreached(p) => write!(f, "{p} was never reached by the search"),
        }
    }
}

impl std::error::Error for PathError {}

/// Predecessor ("came from") map over a bounded area.
///
/// Stored as a flat array indexed like the area's cells. Only coordinates
/// that were actually relaxed have an entry; the origin never does.
#[derive(Debug, Clone)]
pub struct PredecessorMap {
    bounds: Range,
    origin: Point,
    parents: Vec<Option<Point>>,
}

impl PredecessorMap {
    /// An empty map for a search starting at `origin`.
    pub fn new(bounds: Range, origin: Point) -> Self {
        Self {
            bounds,
            origin,
            parents: vec![None; bounds.len()],
        }
    }

    /// The coordinate the search started from.
    #[inline]
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Predecessor of `p`, if one was recorded.
    #[inline]
    pub fn get(&self, p: Point) -> Option<Point> {
        self.bounds.index(p).and_then(|i| self.parents[i])
    }

    /// Record `from` as the best predecessor of `p`. Ignored when `p` is out
    /// of bounds.
    #[inline]
    pub fn set(&mut self, p: Point, from: Point) {
        if let Some(i) = self.bounds.index(p) {
            self.parents[i] = Some(from);
        }
    }
}

/// Trace the route from the map's origin to `goal`, both inclusive.
///
/// Walks predecessors backwards from `goal` until it reaches a coordinate
/// with no entry.
pub fn reconstruct(came_from: &PredecessorMap, goal: Point) -> Result<Vec<Point>, PathError> {
    if goal != came_from.origin() && came_from.get(goal).is_none() {
        return Err(PathError::Unreached(goal));
    }

    let mut path = vec![goal];
    let mut cur = goal;
    // A well-formed map is a tree rooted at the origin, so the walk is
    // bounded by the number of cells.
    while let Some(prev) = came_from.get(cur) {
        if path.len() > came_from.bounds.len() {
            break;
        }
        path.push(prev);
        cur = prev;
    }
    path.reverse();
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconstruct_follows_parents() {
        let mut m = PredecessorMap::new(Range::square(3), Point::new(0, 0));
        m.set(Point::new(1, 0), Point::new(0, 0));
        m.set(Point::new(1, 1), Point::new(1, 0));
        m.set(Point::new(2, 1), Point::new(1, 1));
        // Unrelated branch must not leak into the route.
        m.set(Point::new(0, 1), Point::new(0, 0));

        let path = reconstruct(&m, Point::new(2, 1)).unwrap();
        assert_eq!(
            path,
            vec![
                Point::new(0, 0),
                Point::new(1, 0),
                Point::new(1, 1),
                Point::new(2, 1),
            ]
        );
        for w in path.windows(2) {
            assert_eq!(m.get(w[1]), Some(w[0]));
        }
    }

    #[test]
    fn reconstruct_origin_is_single_point() {
        let m = PredecessorMap::new(Range::square(3), Point::new(1, 1));
        assert_eq!(reconstruct(&m, Point::new(1, 1)), Ok(vec![Point::new(1, 1)]));
    }

    #[test]
    fn reconstruct_unreached_goal_fails() {
        let m = PredecessorMap::new(Range::square(3), Point::new(0, 0));
        assert_eq!(
            reconstruct(&m, Point::new(2, 2)),
            Err(PathError::Unreached(Point::new(2, 2)))
        );
    }

    #[test]
    fn out_of_bounds_entries_are_ignored() {
        let mut m = PredecessorMap::new(Range::square(2), Point::new(0, 0));
        m.set(Point::new(5, 5), Point::new(0, 0));
        assert_eq!(m.get(Point::new(5, 5)), None);
    }
}

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use gridroute_core::{Grid, Point, Range};

use crate::reconstruct::{PredecessorMap, reconstruct};
use crate::traits::AstarPather;
use crate::UNREACHABLE;

/// A minimal-cost route, start and goal inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub points: Vec<Point>,
    /// Sum of the costs of every cell entered after the start.
    pub cost: u32,
}

impl Route {
    /// Number of moves along the route.
    #[inline]
    pub fn steps(&self) -> usize {
        self.points.len().saturating_sub(1)
    }
}

/// Result of one A* search.
///
/// A missing route is a normal outcome, not an error: `visited` still holds
/// the full expansion trace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOutcome {
    pub route: Option<Route>,
    /// Coordinates in the order they were expanded.
    pub visited: Vec<Point>,
}

impl SearchOutcome {
    /// Whether the goal was reached.
    #[inline]
    pub fn found(&self) -> bool {
        self.route.is_some()
    }
}

/// Open-set entry, ordered by the key `(f, x, y)` ascending.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct OpenEntry {
    f: u32,
    pos: Point,
}

impl Ord for OpenEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops the smallest key first.
        (other.f, other.pos).cmp(&(self.f, self.pos))
    }
}

impl PartialOrd for OpenEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Per-call search state. Dropped when the search returns.
struct SearchState {
    g: Vec<u32>,
    f: Vec<u32>,
    came_from: PredecessorMap,
    open: BinaryHeap<OpenEntry>,
    visited: Vec<Point>,
}

impl SearchState {
    fn new(bounds: Range, start: Point) -> Self {
        let len = bounds.len();
        Self {
            g: vec![UNREACHABLE; len],
            f: vec![UNREACHABLE; len],
            came_from: PredecessorMap::new(bounds, start),
            open: BinaryHeap::new(),
            visited: Vec::new(),
        }
    }
}

/// A* route search over any [`AstarPather`].
pub struct PathFinder<'a, P> {
    pather: &'a P,
}

impl<'a, P: AstarPather> PathFinder<'a, P> {
    pub fn new(pather: &'a P) -> Self {
        Self { pather }
    }

    /// Compute a minimal-cost route from `start` to `goal`.
    ///
    /// Expansion order is fully deterministic: ties on `f` are broken by
    /// coordinate, and neighbours are relaxed in the pather's order. The
    /// search only stops once the goal is popped from the open set, which is
    /// what makes the returned route optimal under an admissible, consistent
    /// estimate.
    ///
    /// If either endpoint lies outside the pather's bounds the outcome has no
    /// route and an empty trace.
    pub fn search(&self, start: Point, goal: Point) -> SearchOutcome {
        let bounds = self.pather.bounds();
        let (Some(start_idx), Some(goal_idx)) = (bounds.index(start), bounds.index(goal)) else {
            log::warn!("search endpoints {start} -> {goal} not inside {bounds}");
            return SearchOutcome::default();
        };

        let mut state = SearchState::new(bounds, start);
        state.g[start_idx] = 0;
        state.f[start_idx] = self.pather.estimate(start, goal);
        state.open.push(OpenEntry {
            f: state.f[start_idx],
            pos: start,
        });

        let mut nbuf = Vec::with_capacity(4);

        while let Some(OpenEntry { f, pos }) = state.open.pop() {
            let Some(ci) = bounds.index(pos) else {
                continue;
            };

            // Skip stale entries superseded by a cheaper push.
            if f > state.f[ci] {
                continue;
            }

            state.visited.push(pos);
            log::trace!("expand {pos} g={} f={f}", state.g[ci]);

            if ci == goal_idx {
                // The goal was just popped, so it is the origin or has a
                // recorded predecessor.
                let route = match reconstruct(&state.came_from, goal) {
                    Ok(points) => Some(Route {
                        points,
                        cost: state.g[ci],
                    }),
                    Err(e) => {
                        log::error!("reconstructing expanded goal {goal}: {e}");
                        None
                    }
                };
                log::debug!(
                    "route {start} -> {goal} found: cost {}, {} expansions",
                    state.g[ci],
                    state.visited.len()
                );
                return SearchOutcome {
                    route,
                    visited: state.visited,
                };
            }

            let current_g = state.g[ci];
            nbuf.clear();
            self.pather.neighbors(pos, &mut nbuf);

            for &np in nbuf.iter() {
                let Some(ni) = bounds.index(np) else {
                    continue;
                };
                let tentative_g = current_g.saturating_add(self.pather.cost(pos, np));
                if tentative_g >= state.g[ni] {
                    continue;
                }

                state.came_from.set(np, pos);
                state.g[ni] = tentative_g;
                state.f[ni] = tentative_g.saturating_add(self.pather.estimate(np, goal));
                state.open.push(OpenEntry {
                    f: state.f[ni],
                    pos: np,
                });
            }
        }

        log::debug!(
            "no route {start} -> {goal} after {} expansions",
            state.visited.len()
        );
        SearchOutcome {
            route: None,
            visited: state.visited,
        }
    }
}

/// Search from the grid's start to its goal.
pub fn find_route(grid: &Grid) -> SearchOutcome {
    PathFinder::new(grid).search(grid.start(), grid.goal())
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn outcome_round_trip() {
        let g = Grid::new(3, Point::new(0, 0), Point::new(2, 2)).unwrap();
        let out = find_route(&g);
        let json = serde_json::to_string(&out).unwrap();
        let back: SearchOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(out, back);
    }
}

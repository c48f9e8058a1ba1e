//! Route search on square obstacle grids.
//!
//! - **A\*** minimal-cost search ([`PathFinder::search`], [`find_route`]),
//!   with a fully deterministic expansion order and a recorded trace
//! - **Route reconstruction** from a predecessor map ([`reconstruct`])
//! - **BFS** unweighted step counts ([`bfs_distance`]), used as an
//!   independent optimality check
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`WeightedPather`] : [`Pather`] | — |
//! | [`AstarPather`] : [`WeightedPather`] | A* |
//!
//! [`Grid`](gridroute_core::Grid) implements all three, using Manhattan
//! distance as the estimate.

mod astar;
mod bfs;
mod distance;
mod reconstruct;
mod traits;

pub use astar::{PathFinder, Route, SearchOutcome, find_route};
pub use bfs::bfs_distance;
pub use distance::manhattan;
pub use reconstruct::{PathError, PredecessorMap, reconstruct};
pub use traits::{AstarPather, Pather, WeightedPather};

/// Sentinel score meaning "not reached yet".
pub const UNREACHABLE: u32 = u32::MAX;

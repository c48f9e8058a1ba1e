//! **gridroute-core** — square obstacle grid model (core types).
//!
//! This crate provides the foundational types used across the *gridroute*
//! workspace: geometry primitives, grid cells, the owned [`Grid`] with its
//! start/goal invariants, and [`GridError`].

pub mod cell;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::{Cell, DEFAULT_COST};
pub use error::GridError;
pub use geom::{Point, Range};
pub use grid::{Grid, MAX_SIZE};

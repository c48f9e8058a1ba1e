//! Errors raised by grid construction and mutation.

use std::fmt;

use crate::geom::Point;

/// Errors that can occur when building or editing a [`Grid`](crate::Grid).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Invalid size, start, goal or cost.
    Configuration(String),
    /// Attempted to flag the start or goal cell as an obstacle.
    InvalidOperation(Point),
    /// The coordinate lies outside the grid.
    OutOfBounds(Point),
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(msg) => write!(f, "grid configuration: {msg}"),
            Self::InvalidOperation(p) => {
                write!(f, "cannot place an obstacle on the start or goal cell {p}")
            }
            Self::OutOfBounds(p) => write!(f, "coordinate {p} is outside the grid"),
        }
    }
}

impl std::error::Error for GridError {}

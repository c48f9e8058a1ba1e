use std::fmt;

use gridroute_core::GridError;

/// Errors raised while populating or validating a grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenError {
    /// More obstacles were requested than there are eligible cells.
    InsufficientSpace { requested: usize, available: usize },
    /// No solvable layout was found within the attempt budget.
    Unsolvable { attempts: usize },
    /// The grid rejected a configuration or mutation.
    Grid(GridError),
}

impl fmt::Display for GenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsufficientSpace {
                requested,
                available,
            } => write!(
                f,
                "cannot place {requested} obstacles: only {available} eligible cells"
            ),
            Self::Unsolvable { attempts } => {
                write!(f, "no solvable grid found in {attempts} attempts")
            }
            Self::Grid(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for GenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for GenError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

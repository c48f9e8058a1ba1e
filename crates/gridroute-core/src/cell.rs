//! The [`Cell`] type — a single grid square with its flags and entry cost.

use crate::geom::Point;

/// Cost of entering a cell when nothing else has been configured.
pub const DEFAULT_COST: u32 = 1;

/// A grid square.
///
/// A cell is never both an obstacle and the start or goal; [`Grid`](crate::Grid)
/// enforces this on every mutation.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub pos: Point,
    pub is_obstacle: bool,
    pub is_start: bool,
    pub is_goal: bool,
    /// Cost of moving into this cell. Always > 0.
    pub cost: u32,
}

impl Cell {
    /// An open cell at `pos` with the default cost.
    #[inline]
    pub const fn open(pos: Point) -> Self {
        Self {
            pos,
            is_obstacle: false,
            is_start: false,
            is_goal: false,
            cost: DEFAULT_COST,
        }
    }

    /// Whether the cell is the start or the goal.
    #[inline]
    pub const fn is_endpoint(&self) -> bool {
        self.is_start || self.is_goal
    }

    /// Whether an obstacle may be placed here.
    #[inline]
    pub const fn is_eligible(&self) -> bool {
        !self.is_endpoint() && !self.is_obstacle
    }
}

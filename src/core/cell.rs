//! Cell classification for the cost grid.
//!
//! Cells store a raw `u8` traversal cost. Only the two ends of the range
//! carry special meaning: `0` is known-free floor and `255` has never been
//! observed. Everything in between is an obstacle or an inflated cost
//! around one, which the frontier search treats as a graded field.

use serde::{Deserialize, Serialize};

/// Raw cost of a cell known to be free.
pub const FREE_SPACE: u8 = 0;

/// Raw cost of a cell known to contain an obstacle.
pub const LETHAL_OBSTACLE: u8 = 254;

/// Raw cost of a cell that has not been observed.
pub const NO_INFORMATION: u8 = 255;

/// Semantic cell type derived from a raw cost.
///
/// - `Free` - Cost is exactly [`FREE_SPACE`]
/// - `Occupied` - Any cost in `1..=254` (lethal or inflated)
/// - `Unknown` - Cost is exactly [`NO_INFORMATION`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CellType {
    /// Cell has never been observed
    #[default]
    Unknown,

    /// Observed and clear
    Free,

    /// Observed with a non-zero traversal cost
    Occupied,
}

impl CellType {
    /// Classify a raw cost value.
    #[inline]
    pub fn from_cost(cost: u8) -> Self {
        match cost {
            FREE_SPACE => CellType::Free,
            NO_INFORMATION => CellType::Unknown,
            _ => CellType::Occupied,
        }
    }

    /// Canonical raw cost for this type.
    #[inline]
    pub fn cost(self) -> u8 {
        match self {
            CellType::Free => FREE_SPACE,
            CellType::Occupied => LETHAL_OBSTACLE,
            CellType::Unknown => NO_INFORMATION,
        }
    }

    /// Single character representation for debugging
    pub fn as_char(self) -> char {
        match self {
            CellType::Unknown => '?',
            CellType::Free => '.',
            CellType::Occupied => '#',
        }
    }
}

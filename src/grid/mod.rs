//! Cost grid storage and the read-only accessor used by the frontier search.
//!
//! The mapping subsystem owns the grid and mutates it between searches.
//! The search itself only ever sees a [`GridAccessor`], a narrow read-only
//! capability: classify a cell, report dimensions and resolution, and convert
//! between grid and world frames.
//!
//! ## Layout
//!
//! ```text
//! index = y * width + x
//!
//!   y ▲
//!     │  [12][13][14][15]
//!     │  [ 8][ 9][10][11]
//!     │  [ 4][ 5][ 6][ 7]
//!     │  [ 0][ 1][ 2][ 3]
//!     └──────────────────▶ x
//!   origin = world position of the lower-left corner of cell 0
//! ```
//!
//! ## Sharing
//!
//! [`SharedGrid`] wraps a [`GridStorage`] in an `Arc<RwLock<_>>`. The mapping
//! side takes the write lock to update cells; a frontier search holds the read
//! lock for its whole duration so every cell it observes belongs to the same
//! snapshot.

mod accessor;
mod storage;

use std::sync::Arc;

use parking_lot::RwLock;

pub use accessor::GridAccessor;
pub use storage::{CellCounts, GridError, GridStorage};

/// Grid shared between the mapping subsystem and the frontier search.
pub type SharedGrid = Arc<RwLock<GridStorage>>;

/// Wrap a grid for sharing across threads.
pub fn shared(grid: GridStorage) -> SharedGrid {
    Arc::new(RwLock::new(grid))
}

//! Frontier detection for autonomous exploration.
//!
//! A frontier is a boundary between explored free space and unexplored
//! space. The robot drives to a frontier to see what lies beyond it.
//!
//! # Algorithm
//!
//! ```text
//!   robot cell ──nearest_cell──▶ free seed
//!                                   │
//!                                   ▼
//!          ┌──────── discovery BFS (4-connected) ────────┐
//!          │ flood cells whose cost is <= current cost   │
//!          │ unknown neighbor with a free 4-neighbor? ───┼──▶ build_frontier
//!          └─────────────────────────────────────────────┘    (8-connected BFS)
//!                                                                  │
//!                                         size filter + cost ◀─────┘
//!                                                  │
//!                                        sort ascending by cost
//! ```
//!
//! 1. Map the robot pose to a grid cell (fails if outside the grid)
//! 2. Walk outward to the nearest Free cell; fall back to the robot cell
//!    with a warning if none is found
//! 3. Flood fill from there; every newly seen frontier cell grows a region
//! 4. Keep regions at least `min_frontier_size` meters long, score them, and
//!    sort by cost
//!
//! # Example
//!
//! ```rust
//! use anveshan::{FrontierConfig, FrontierSearch, GridStorage, Pose2D, WorldPoint};
//!
//! let grid = GridStorage::from_ascii(
//!     &[
//!         "?????", //
//!         ".....", //
//!         ".....",
//!     ],
//!     0.25,
//!     WorldPoint::ZERO,
//! )
//! .unwrap();
//!
//! let search = FrontierSearch::new(FrontierConfig::default());
//! let frontiers = search.search_from(&grid, &Pose2D::new(0.6, 0.1, 0.0));
//!
//! assert_eq!(frontiers.len(), 1);
//! assert_eq!(frontiers[0].size, 5);
//! ```

mod cost;
mod error;
pub mod nearest;
pub mod neighbors;
pub mod region;
mod search;
mod types;

pub use cost::frontier_cost;
pub use error::SearchError;
pub use nearest::nearest_cell;
pub use neighbors::{Neighbors, nhood4, nhood8};
pub use region::{build_frontier, is_new_frontier_cell};
pub use search::FrontierSearch;
pub use types::{Frontier, SearchResult, SearchSeed};

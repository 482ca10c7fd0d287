//! # Anveshan
//!
//! Frontier detection on 2D cost grids for autonomous exploration.
//!
//! ## Overview
//!
//! Given a robot pose and a snapshot of the map, Anveshan finds the
//! boundaries between explored free space and unexplored space and returns
//! them ranked by how attractive they are to visit next:
//!
//! - **Distance** - closer frontiers are cheaper
//! - **Size** - longer frontiers promise more new map
//! - **Heading** - frontiers ahead of the robot need less turning
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use anveshan::{AnveshanConfig, FrontierSearch, Pose2D, grid};
//!
//! let config = AnveshanConfig::load_default()?;
//! let search = FrontierSearch::new(config.frontier);
//!
//! // Grid shared with the mapping thread
//! let map = grid::shared(storage);
//! let result = search.search_shared(&map, &Pose2D::new(1.0, 2.0, 0.0))?;
//!
//! if let Some(best) = result.best() {
//!     println!("Explore toward ({:.2}, {:.2})", best.goal().x, best.goal().y);
//! }
//! ```
//!
//! ## Cell Costs
//!
//! Cells store a raw `u8` cost: `0` is free, `255` is unknown, and every
//! value in between is an obstacle or inflated cost. See [`core::CellType`].
//!
//! ## Coordinate System
//!
//! Uses ROS REP-103 convention:
//! - X: Forward (positive ahead of robot)
//! - Y: Left (positive to robot's left)
//! - Theta: Rotation in radians, CCW positive from +X axis

#![warn(missing_docs)]

// Core types
pub mod core;

// Grid storage and accessor
pub mod grid;

// Configuration
pub mod config;

// Frontier detection
pub mod frontier;

// Re-export commonly used types
pub use core::{CellType, GridCoord, Pose2D, WorldPoint};

pub use grid::{CellCounts, GridAccessor, GridError, GridStorage, SharedGrid};

pub use config::{AnveshanConfig, ConfigLoadError, FrontierConfig};

pub use frontier::{Frontier, FrontierSearch, SearchError, SearchResult, SearchSeed};

//! Core types for the Anveshan library.
//!
//! All types follow the ROS REP-103 coordinate convention:
//! - **X-axis**: Forward (positive ahead of robot)
//! - **Y-axis**: Left (positive to robot's left)
//! - **Theta**: Counter-clockwise rotation from +X axis (radians)
//!
//! ## Type Categories
//!
//! ### Coordinates
//! - [`GridCoord`]: Integer cell indices for grid access
//! - [`WorldPoint`]: Floating-point world coordinates in meters
//!
//! ### Robot State
//! - [`Pose2D`]: Robot position (x, y) and heading (theta)
//!
//! ### Grid Cells
//! - [`CellType`]: Classification of a raw cell cost (Free, Occupied, Unknown)
//! - [`FREE_SPACE`], [`LETHAL_OBSTACLE`], [`NO_INFORMATION`]: raw cost values

mod cell;
pub mod math;
mod point;
mod pose;

pub use cell::{CellType, FREE_SPACE, LETHAL_OBSTACLE, NO_INFORMATION};
pub use math::{angle_diff, normalize_angle};
pub use point::{GridCoord, WorldPoint};
pub use pose::Pose2D;

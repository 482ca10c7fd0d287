//! Frontier search errors.

use thiserror::Error;

/// Conditions under which no search could be performed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// The robot pose does not map onto the grid.
    #[error("Robot pose ({x:.3}, {y:.3}) out of grid bounds")]
    PoseOutOfBounds {
        /// Pose X in meters
        x: f32,
        /// Pose Y in meters
        y: f32,
    },
}

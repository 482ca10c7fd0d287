//! Frontier ranking cost.

use crate::config::FrontierConfig;

use super::types::Frontier;

/// Score a completed frontier. Lower is better.
///
/// ```text
/// cost = orientation_scale * angular_distance
///      + potential_scale   * min_distance * resolution
///      - gain_scale        * size         * resolution
/// ```
///
/// Nearby, large frontiers that need little turning rank first.
#[inline]
pub fn frontier_cost(frontier: &Frontier, resolution: f32, config: &FrontierConfig) -> f32 {
    let position = config.potential_scale * frontier.min_distance * resolution;
    let gain = config.gain_scale * frontier.size as f32 * resolution;
    let orientation = config.orientation_scale * frontier.angular_distance;

    orientation + position - gain
}

//! Frontier search configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Weights and size limits for frontier detection.
///
/// Sizes are physical lengths: a frontier of `n` cells on a grid with
/// resolution `r` measures `n * r` meters. Weights are plain tuning knobs
/// and are not range-checked; zero disables a term and a negative value
/// inverts it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FrontierConfig {
    /// Weight of the distance term (`potential`).
    /// Default: 3.0
    #[serde(default = "defaults::potential_scale")]
    pub potential_scale: f32,

    /// Weight of the size term (`gain`), subtracted from the cost.
    /// Default: 1.0
    #[serde(default = "defaults::gain_scale")]
    pub gain_scale: f32,

    /// Weight of the heading term (radians of turning).
    /// Default: 0.0
    #[serde(default)]
    pub orientation_scale: f32,

    /// Frontiers shorter than this are discarded (meters).
    /// Default: 0.75m
    #[serde(default = "defaults::min_frontier_size")]
    pub min_frontier_size: f32,

    /// Region growth stops once a frontier reaches this length (meters).
    /// Values <= 0 leave growth unbounded.
    /// Default: 0.0 (unbounded)
    #[serde(default)]
    pub max_frontier_size: f32,

    /// How far from the robot to look for a free cell to seed the search (meters).
    /// Values <= 0 search the whole grid.
    /// Default: 1.0m
    #[serde(default = "defaults::seed_search_radius")]
    pub seed_search_radius: f32,
}

impl Default for FrontierConfig {
    fn default() -> Self {
        Self {
            potential_scale: defaults::potential_scale(),
            gain_scale: defaults::gain_scale(),
            orientation_scale: 0.0,
            min_frontier_size: defaults::min_frontier_size(),
            max_frontier_size: 0.0,
            seed_search_radius: defaults::seed_search_radius(),
        }
    }
}

impl FrontierConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter for the distance weight.
    pub fn with_potential_scale(mut self, scale: f32) -> Self {
        self.potential_scale = scale;
        self
    }

    /// Builder-style setter for the size weight.
    pub fn with_gain_scale(mut self, scale: f32) -> Self {
        self.gain_scale = scale;
        self
    }

    /// Builder-style setter for the heading weight.
    pub fn with_orientation_scale(mut self, scale: f32) -> Self {
        self.orientation_scale = scale;
        self
    }

    /// Builder-style setter for minimum frontier size.
    pub fn with_min_frontier_size(mut self, meters: f32) -> Self {
        self.min_frontier_size = meters;
        self
    }

    /// Builder-style setter for maximum frontier size.
    pub fn with_max_frontier_size(mut self, meters: f32) -> Self {
        self.max_frontier_size = meters;
        self
    }

    /// Builder-style setter for the seed search radius.
    pub fn with_seed_search_radius(mut self, meters: f32) -> Self {
        self.seed_search_radius = meters;
        self
    }

    /// Seed search radius in cells for a grid of the given resolution.
    ///
    /// Returns `None` when the radius is unbounded.
    pub fn seed_search_radius_cells(&self, resolution: f32) -> Option<u32> {
        if self.seed_search_radius > 0.0 && resolution > 0.0 {
            Some((self.seed_search_radius / resolution).ceil() as u32)
        } else {
            None
        }
    }

    /// Whether region growth is capped.
    #[inline]
    pub fn has_max_frontier_size(&self) -> bool {
        self.max_frontier_size > 0.0
    }
}

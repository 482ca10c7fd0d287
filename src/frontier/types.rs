//! Frontier search result types.

use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, WorldPoint};

/// A connected region of unknown cells bordering free space.
///
/// Built fresh by every search; nothing here refers back to the grid.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frontier {
    /// Number of cells in the region, including the seed cell.
    pub size: usize,

    /// Distance from the reference pose to `middle` (meters).
    pub min_distance: f32,

    /// Ranking cost, lower is better. Assigned once the frontier passes
    /// the minimum size filter.
    pub cost: f32,

    /// World position of the cell that triggered discovery.
    pub initial: WorldPoint,

    /// Member cell closest to the reference pose. This is the goal anchor.
    pub middle: WorldPoint,

    /// Geometric mean of all member cells.
    pub centroid: WorldPoint,

    /// Heading from the reference pose toward `middle` (radians).
    pub orientation: f32,

    /// Absolute turn from the reference heading to `orientation`, in [0, π].
    pub angular_distance: f32,

    /// World positions of member cells in discovery order. The seed cell is
    /// not included, so `points.len() + 1 == size`.
    pub points: Vec<WorldPoint>,
}

impl Frontier {
    /// Point the robot should navigate toward.
    #[inline]
    pub fn goal(&self) -> WorldPoint {
        self.middle
    }

    /// Physical length of the frontier on a grid of the given resolution.
    #[inline]
    pub fn length(&self, resolution: f32) -> f32 {
        self.size as f32 * resolution
    }
}

/// Where the discovery search started.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchSeed {
    /// Nearest Free cell to the robot.
    NearestFree(GridCoord),
    /// No Free cell was found nearby; the robot's own cell was used.
    RawPose(GridCoord),
}

impl SearchSeed {
    /// Grid cell the search started from.
    pub fn coord(&self) -> GridCoord {
        match *self {
            SearchSeed::NearestFree(c) | SearchSeed::RawPose(c) => c,
        }
    }

    /// True if the search fell back to the robot's own cell.
    pub fn is_degraded(&self) -> bool {
        matches!(self, SearchSeed::RawPose(_))
    }
}

/// Output of one frontier search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// Frontiers sorted by ascending cost.
    pub frontiers: Vec<Frontier>,
    /// Cell the discovery search started from.
    pub seed: SearchSeed,
    /// Number of cells expanded by the discovery search.
    pub cells_visited: usize,
}

impl SearchResult {
    /// Lowest-cost frontier, if any.
    pub fn best(&self) -> Option<&Frontier> {
        self.frontiers.first()
    }
}

//! Grid-wide frontier discovery.

use std::collections::VecDeque;

use parking_lot::RwLock;

use crate::config::FrontierConfig;
use crate::core::{CellType, Pose2D};
use crate::grid::GridAccessor;

use super::cost::frontier_cost;
use super::error::SearchError;
use super::nearest::nearest_cell;
use super::neighbors::nhood4;
use super::region::{build_frontier, is_new_frontier_cell};
use super::types::{Frontier, SearchResult, SearchSeed};

/// Frontier search over a cost grid.
///
/// Stateless between calls: every search allocates its own flag arrays and
/// returns fresh [`Frontier`] records.
#[derive(Clone, Debug, Default)]
pub struct FrontierSearch {
    config: FrontierConfig,
}

impl FrontierSearch {
    /// Create a search with the given weights and limits.
    pub fn new(config: FrontierConfig) -> Self {
        Self { config }
    }

    /// Current configuration.
    pub fn config(&self) -> &FrontierConfig {
        &self.config
    }

    /// Find and rank all frontiers reachable from `pose`.
    ///
    /// The only hard failure is a pose outside the grid (or a non-finite
    /// position), logged once at error level. If no Free cell is
    /// found near the pose, the search still runs from the pose cell and the
    /// returned [`SearchSeed`] is [`SearchSeed::RawPose`].
    pub fn search<G: GridAccessor>(
        &self,
        grid: &G,
        pose: &Pose2D,
    ) -> Result<SearchResult, SearchError> {
        let Some(pose_cell) = grid.world_to_map(pose.position()) else {
            let err = SearchError::PoseOutOfBounds {
                x: pose.x,
                y: pose.y,
            };
            log::error!("{}, cannot search for frontiers", err);
            return Err(err);
        };

        let (width, height) = (grid.width(), grid.height());
        let resolution = grid.resolution();
        let pose_index = grid.index_of(pose_cell);

        let radius = self.config.seed_search_radius_cells(resolution);
        let (start, seed) = match nearest_cell(grid, pose_index, CellType::Free, radius) {
            Some(index) => (index, SearchSeed::NearestFree(grid.coord_of(index))),
            None => {
                log::warn!(
                    "Could not find nearby free cell to start search, using robot cell ({}, {})",
                    pose_cell.x,
                    pose_cell.y
                );
                (pose_index, SearchSeed::RawPose(pose_cell))
            }
        };

        let mut frontier_flag = vec![false; grid.cell_count()];
        let mut visited_flag = vec![false; grid.cell_count()];
        let mut frontiers: Vec<Frontier> = Vec::new();
        let mut cells_visited = 0usize;

        let mut queue = VecDeque::new();
        visited_flag[start] = true;
        queue.push_back(start);

        while let Some(index) = queue.pop_front() {
            cells_visited += 1;
            let cost = grid.cost(index);

            for nbr in nhood4(index, width, height) {
                // Descending admissibility: from a non-free seed the flood can
                // still roll downhill into free space.
                if grid.cost(nbr) <= cost && !visited_flag[nbr] {
                    visited_flag[nbr] = true;
                    queue.push_back(nbr);
                } else if is_new_frontier_cell(grid, nbr, &frontier_flag) {
                    frontier_flag[nbr] = true;
                    let mut frontier =
                        build_frontier(grid, nbr, pose, &mut frontier_flag, &self.config);

                    if frontier.length(resolution) >= self.config.min_frontier_size {
                        frontier.cost = frontier_cost(&frontier, resolution, &self.config);
                        frontiers.push(frontier);
                    }
                }
            }
        }

        // Stable: equal costs keep discovery order
        frontiers.sort_by(|a, b| a.cost.total_cmp(&b.cost));

        log::debug!(
            "Frontier search: seed ({}, {}){}, {} cells visited, {} frontiers",
            seed.coord().x,
            seed.coord().y,
            if seed.is_degraded() { " [raw pose]" } else { "" },
            cells_visited,
            frontiers.len()
        );

        Ok(SearchResult {
            frontiers,
            seed,
            cells_visited,
        })
    }

    /// Find and rank frontiers, reporting failures through the log only.
    ///
    /// Returns an empty list if the pose lies outside the grid.
    pub fn search_from<G: GridAccessor>(&self, grid: &G, pose: &Pose2D) -> Vec<Frontier> {
        self.search(grid, pose)
            .map(|result| result.frontiers)
            .unwrap_or_default()
    }

    /// Search a shared grid, holding its read lock for the whole call.
    ///
    /// Writers are blocked until the search returns, so the pose lookup and
    /// every cell read see the same map. The guard is released on every
    /// return path.
    pub fn search_shared<G: GridAccessor>(
        &self,
        grid: &RwLock<G>,
        pose: &Pose2D,
    ) -> Result<SearchResult, SearchError> {
        let guard = grid.read();
        self.search(&*guard, pose)
    }

    /// Lowest-cost frontier reachable from `pose`, if any.
    pub fn best<G: GridAccessor>(&self, grid: &G, pose: &Pose2D) -> Option<Frontier> {
        self.search_from(grid, pose).into_iter().next()
    }

    /// Cost of a frontier under this search's weights.
    pub fn frontier_cost(&self, frontier: &Frontier, resolution: f32) -> f32 {
        frontier_cost(frontier, resolution, &self.config)
    }
}

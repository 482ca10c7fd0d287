//! Frontier cell classification and region growth.

use std::collections::VecDeque;

use crate::config::FrontierConfig;
use crate::core::{CellType, Pose2D, WorldPoint, angle_diff};
use crate::grid::GridAccessor;

use super::neighbors::{nhood4, nhood8};
use super::types::Frontier;

/// Is `index` an Unknown cell, not yet claimed by a frontier, with at least
/// one Free cell in its 4-connected neighborhood?
#[inline]
pub fn is_new_frontier_cell<G: GridAccessor>(grid: &G, index: usize, frontier_flag: &[bool]) -> bool {
    if grid.cell_type(index) != CellType::Unknown || frontier_flag[index] {
        return false;
    }

    nhood4(index, grid.width(), grid.height()).any(|nbr| grid.cell_type(nbr) == CellType::Free)
}

/// Grow one frontier from `initial_cell` over its 8-connected neighborhood.
///
/// Every cell added to the region is marked in `frontier_flag`, which the
/// discovery search shares across regions so no cell is claimed twice.
/// Growth stops as soon as the region reaches `config.max_frontier_size` meters
/// when that limit is positive.
///
/// The returned frontier has `cost` set to zero; scoring is up to the caller.
pub fn build_frontier<G: GridAccessor>(
    grid: &G,
    initial_cell: usize,
    reference: &Pose2D,
    frontier_flag: &mut [bool],
    config: &FrontierConfig,
) -> Frontier {
    let (width, height) = (grid.width(), grid.height());
    let resolution = grid.resolution();
    let robot = reference.position();
    let at_limit = |size: usize| {
        config.has_max_frontier_size() && size as f32 * resolution >= config.max_frontier_size
    };

    frontier_flag[initial_cell] = true;
    let initial = grid.index_to_world(initial_cell);

    // The seed counts toward size and is measured like any other member
    let mut size = 1usize;
    let mut sum = initial;
    let mut min_distance = robot.distance(&initial);
    let mut middle = initial;
    let mut points = Vec::new();

    let mut queue = VecDeque::new();
    queue.push_back(initial_cell);

    'grow: while let Some(index) = queue.pop_front() {
        for nbr in nhood8(index, width, height) {
            if !is_new_frontier_cell(grid, nbr, frontier_flag) {
                continue;
            }

            frontier_flag[nbr] = true;
            let point = grid.index_to_world(nbr);
            points.push(point);
            size += 1;
            sum = sum + point;

            let distance = robot.distance(&point);
            if distance < min_distance {
                min_distance = distance;
                middle = point;
            }

            if at_limit(size) {
                break 'grow;
            }

            queue.push_back(nbr);
        }
    }

    let centroid = WorldPoint::new(sum.x / size as f32, sum.y / size as f32);
    let orientation = robot.angle_to(&middle);
    let angular_distance = angle_diff(reference.theta, orientation).abs();

    Frontier {
        size,
        min_distance,
        cost: 0.0,
        initial,
        middle,
        centroid,
        orientation,
        angular_distance,
        points,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridCoord;
    use crate::grid::GridStorage;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn grid(rows: &[&str]) -> GridStorage {
        GridStorage::from_ascii(rows, 1.0, WorldPoint::ZERO).unwrap()
    }

    fn flags(g: &GridStorage) -> Vec<bool> {
        vec![false; g.cell_count()]
    }

    #[test]
    fn test_frontier_cell_classification() {
        let g = grid(&[
            "??#", //
            "?..", //
            "?#?",
        ]);
        let f = flags(&g);
        let at = |x, y| g.index_of(GridCoord::new(x, y));

        // Unknown next to free
        assert!(is_new_frontier_cell(&g, at(0, 1), &f));
        assert!(is_new_frontier_cell(&g, at(1, 2), &f));
        assert!(is_new_frontier_cell(&g, at(2, 0), &f));
        // Unknown whose only free contact is diagonal
        assert!(!is_new_frontier_cell(&g, at(0, 2), &f));
        // Unknown surrounded by unknown and occupied
        assert!(!is_new_frontier_cell(&g, at(0, 0), &f));
        // Known cells are never frontier cells
        assert!(!is_new_frontier_cell(&g, at(1, 1), &f));
        assert!(!is_new_frontier_cell(&g, at(1, 0), &f));
    }

    #[test]
    fn test_flagged_cell_is_not_new() {
        let g = grid(&["?."]);
        let mut f = flags(&g);
        assert!(is_new_frontier_cell(&g, 0, &f));
        f[0] = true;
        assert!(!is_new_frontier_cell(&g, 0, &f));
    }

    #[test]
    fn test_singleton_region_measures_seed() {
        let g = grid(&[
            "...", //
            "..?", //
            "...",
        ]);
        let mut f = flags(&g);
        let seed = g.index_of(GridCoord::new(2, 1));
        let robot = Pose2D::new(0.5, 1.5, 0.0);

        let frontier = build_frontier(&g, seed, &robot, &mut f, &FrontierConfig::default());

        assert_eq!(frontier.size, 1);
        assert!(frontier.points.is_empty());
        assert_eq!(frontier.initial, WorldPoint::new(2.5, 1.5));
        assert_eq!(frontier.middle, WorldPoint::new(2.5, 1.5));
        assert_eq!(frontier.centroid, WorldPoint::new(2.5, 1.5));
        assert_relative_eq!(frontier.min_distance, 2.0, epsilon = 1e-6);
        assert_relative_eq!(frontier.orientation, 0.0, epsilon = 1e-6);
        assert_relative_eq!(frontier.angular_distance, 0.0, epsilon = 1e-6);
        assert!(f[seed]);
    }

    #[test]
    fn test_region_grows_through_diagonals() {
        // Diagonal staircase of unknown cells, each touching free space
        let g = grid(&[
            "...?", //
            "..?.", //
            ".?..", //
            "?...",
        ]);
        let mut f = flags(&g);
        let seed = g.index_of(GridCoord::new(0, 0));
        let robot = Pose2D::new(3.5, 0.5, 0.0);

        let frontier = build_frontier(&g, seed, &robot, &mut f, &FrontierConfig::default());

        assert_eq!(frontier.size, 4);
        assert_eq!(frontier.points.len(), 3);
        assert_eq!(frontier.points[0], WorldPoint::new(1.5, 1.5));
        assert_eq!(frontier.points[2], WorldPoint::new(3.5, 3.5));
        assert_eq!(f.iter().filter(|&&b| b).count(), 4);

        // Centroid includes the seed
        assert_relative_eq!(frontier.centroid.x, 2.0, epsilon = 1e-6);
        assert_relative_eq!(frontier.centroid.y, 2.0, epsilon = 1e-6);
    }

    #[test]
    fn test_middle_is_closest_member() {
        let g = grid(&[
            "?????", //
            ".....", //
            ".....",
        ]);
        let mut f = flags(&g);
        let seed = g.index_of(GridCoord::new(0, 2));
        let robot = Pose2D::new(3.5, 0.5, FRAC_PI_2);

        let frontier = build_frontier(&g, seed, &robot, &mut f, &FrontierConfig::default());

        assert_eq!(frontier.size, 5);
        assert_eq!(frontier.initial, WorldPoint::new(0.5, 2.5));
        assert_eq!(frontier.middle, WorldPoint::new(3.5, 2.5));
        assert_relative_eq!(frontier.min_distance, 2.0, epsilon = 1e-6);
        assert_relative_eq!(frontier.orientation, FRAC_PI_2, epsilon = 1e-6);
        assert_relative_eq!(frontier.angular_distance, 0.0, epsilon = 1e-6);
        assert_eq!(frontier.goal(), frontier.middle);
        assert_relative_eq!(frontier.centroid.x, 2.5, epsilon = 1e-6);
    }

    #[test]
    fn test_angular_distance_wraps() {
        let g = grid(&[
            "?..", //
            "...",
        ]);
        let mut f = flags(&g);
        let seed = g.index_of(GridCoord::new(0, 1));
        // Robot east of the cell, facing slightly below the -X axis
        let robot = Pose2D::new(2.5, 1.5, -PI + 0.1);

        let frontier = build_frontier(&g, seed, &robot, &mut f, &FrontierConfig::default());

        assert_relative_eq!(frontier.orientation.abs(), PI, epsilon = 1e-5);
        assert_relative_eq!(frontier.angular_distance, 0.1, epsilon = 1e-5);
    }

    #[test]
    fn test_max_size_stops_growth() {
        let g = grid(&[
            "??????????", //
            "..........",
        ]);
        let mut f = flags(&g);
        let seed = g.index_of(GridCoord::new(0, 1));
        let robot = Pose2D::new(0.5, 0.5, 0.0);

        let config = FrontierConfig::new().with_max_frontier_size(4.0);

        let frontier = build_frontier(&g, seed, &robot, &mut f, &config);

        assert_eq!(frontier.size, 4);
        assert_eq!(frontier.points.len(), 3);
        assert_eq!(f.iter().filter(|&&b| b).count(), 4);
        // Cells past the cap stay unclaimed for later regions
        assert!(is_new_frontier_cell(&g, g.index_of(GridCoord::new(4, 1)), &f));
    }

    #[test]
    fn test_shared_flags_prevent_reclaiming() {
        let g = grid(&[
            "????", //
            "....",
        ]);
        let mut f = flags(&g);
        let robot = Pose2D::new(0.5, 0.5, 0.0);

        let seed = g.index_of(GridCoord::new(0, 1));

        let first = build_frontier(&g, seed, &robot, &mut f, &FrontierConfig::default());
        assert_eq!(first.size, 4);

        for x in 0..4 {
            assert!(!is_new_frontier_cell(&g, g.index_of(GridCoord::new(x, 1)), &f));
        }
    }
}

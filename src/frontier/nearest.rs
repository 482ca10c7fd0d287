//! Nearest matching cell search.
//!
//! The robot's own cell is often not Free (sensor noise, localization
//! slack, inflation around nearby walls), so the frontier search first walks
//! outward from it to find the closest Free cell to start from.

use std::collections::VecDeque;

use crate::core::CellType;
use crate::grid::GridAccessor;

use super::neighbors::nhood4;

/// Find the nearest cell of type `target`, searching outward from `start`.
///
/// Breadth-first over the 4-connected neighborhood. The start cell itself is
/// checked first. Traversal ignores cell costs; only the match test looks at
/// the classification.
///
/// `max_radius` bounds the search to a Chebyshev radius (cells) around
/// `start`; `None` searches the whole grid.
///
/// Returns `None` if `start` is out of range or no matching cell is reachable
/// within the radius.
pub fn nearest_cell<G: GridAccessor>(
    grid: &G,
    start: usize,
    target: CellType,
    max_radius: Option<u32>,
) -> Option<usize> {
    let (width, height) = (grid.width(), grid.height());
    if start >= grid.cell_count() {
        return None;
    }

    let origin = grid.coord_of(start);
    let within = |index: usize| match max_radius {
        Some(r) => grid.coord_of(index).chebyshev_distance(&origin) as u32 <= r,
        None => true,
    };

    let mut visited = vec![false; grid.cell_count()];
    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);

    while let Some(index) = queue.pop_front() {
        if grid.cell_type(index) == target {
            return Some(index);
        }

        for nbr in nhood4(index, width, height) {
            if !visited[nbr] && within(nbr) {
                visited[nbr] = true;
                queue.push_back(nbr);
            }
        }
    }

    None
}

//! Test utilities for Anveshan integration tests.
//!
//! Helpers for building maps and poses used across scenario tests.

#![allow(dead_code)]

use anveshan::{CellType, GridCoord, GridStorage, Pose2D, WorldPoint};

/// Build a grid from text rows with origin at (0, 0).
pub fn ascii_grid(rows: &[&str], resolution: f32) -> GridStorage {
    GridStorage::from_ascii(rows, resolution, WorldPoint::ZERO).unwrap()
}

/// Pose at the center of cell (x, y) on a grid with origin (0, 0).
pub fn cell_pose(x: i32, y: i32, resolution: f32, theta: f32) -> Pose2D {
    Pose2D::new(
        (x as f32 + 0.5) * resolution,
        (y as f32 + 0.5) * resolution,
        theta,
    )
}

/// Rectangular room: free interior, lethal walls, unknown outside.
///
/// `doors` lists wall cells to open up, exposing the unknown space behind
/// them.
pub fn room(
    width: usize,
    height: usize,
    resolution: f32,
    room_min: GridCoord,
    room_max: GridCoord,
    doors: &[GridCoord],
) -> GridStorage {
    let mut grid = GridStorage::new(width, height, resolution, WorldPoint::ZERO);
    grid.fill_rect(room_min, room_max, CellType::Occupied);
    grid.fill_rect(
        GridCoord::new(room_min.x + 1, room_min.y + 1),
        GridCoord::new(room_max.x - 1, room_max.y - 1),
        CellType::Free,
    );
    for door in doors {
        grid.set_type(*door, CellType::Free);
    }
    grid
}

/// Partially explored map with a deterministic scatter of cell types.
///
/// Roughly half the cells are free, a tenth are obstacles or graded costs,
/// and the rest stay unknown. The cell under `keep_free` is always free.
pub fn scattered_map(width: usize, height: usize, seed: u64, keep_free: GridCoord) -> GridStorage {
    let mut grid = GridStorage::new(width, height, 0.1, WorldPoint::ZERO);
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1);

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            // Simple LCG, deterministic across runs
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let roll = (state >> 33) % 100;
            let cost = match roll {
                0..=49 => 0,
                50..=54 => 254,
                55..=59 => ((roll - 54) * 40) as u8,
                _ => 255,
            };
            grid.set_cost(GridCoord::new(x, y), cost);
        }
    }

    grid.set_type(keep_free, CellType::Free);
    grid
}

/// Every cell of every frontier, seed included.
pub fn frontier_cells(frontier: &anveshan::Frontier) -> Vec<WorldPoint> {
    let mut cells = vec![frontier.initial];
    cells.extend(frontier.points.iter().copied());
    cells
}

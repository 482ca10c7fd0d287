//! Flat cost grid storage.
//!
//! One `u8` cost per cell in a single contiguous row-major array. The grid
//! is fixed-size; growth and sensor fusion belong to the mapping subsystem
//! that feeds it.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{CellType, FREE_SPACE, GridCoord, NO_INFORMATION, WorldPoint};

use super::GridAccessor;

/// Errors raised while building a grid from text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// No rows, or rows with no cells.
    #[error("grid text is empty")]
    Empty,

    /// A row has a different length than the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Row index in the text (0 = top)
        row: usize,
        /// Width of the first row
        expected: usize,
        /// Width of this row
        found: usize,
    },

    /// A character that does not map to a cell.
    #[error("invalid cell character {ch:?} at row {row}, column {col}")]
    InvalidChar {
        /// Offending character
        ch: char,
        /// Row index in the text (0 = top)
        row: usize,
        /// Column index
        col: usize,
    },
}

/// Cell counts by type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellCounts {
    /// Unknown cells (not yet observed).
    pub unknown: usize,
    /// Free cells (traversable).
    pub free: usize,
    /// Occupied cells (lethal or inflated cost).
    pub occupied: usize,
}

impl CellCounts {
    /// Total known cells.
    pub fn known(&self) -> usize {
        self.free + self.occupied
    }

    /// Total cells.
    pub fn total(&self) -> usize {
        self.unknown + self.known()
    }
}

/// Row-major cost grid.
///
/// The grid uses a coordinate system where:
/// - (0, 0) is at `origin` in world coordinates
/// - Positive X is to the right
/// - Positive Y is up
/// - Cell (x, y) covers the area from (origin + x*resolution) to (origin + (x+1)*resolution)
#[derive(Clone, Debug)]
pub struct GridStorage {
    costs: Vec<u8>,
    width: usize,
    height: usize,
    resolution: f32,
    /// Pre-computed 1.0 / resolution for faster world-to-grid conversion.
    inv_resolution: f32,
    origin: WorldPoint,
}

impl GridStorage {
    // === Constructors ===

    /// Create a new grid with every cell Unknown.
    pub fn new(width: usize, height: usize, resolution: f32, origin: WorldPoint) -> Self {
        Self::filled(width, height, resolution, origin, NO_INFORMATION)
    }

    /// Create a new grid with every cell set to `cost`.
    pub fn filled(
        width: usize,
        height: usize,
        resolution: f32,
        origin: WorldPoint,
        cost: u8,
    ) -> Self {
        Self {
            costs: vec![cost; width * height],
            width,
            height,
            resolution,
            inv_resolution: 1.0 / resolution,
            origin,
        }
    }

    /// Create an Unknown grid centered at the world origin.
    pub fn centered(width: usize, height: usize, resolution: f32) -> Self {
        let half_width = (width as f32 * resolution) / 2.0;
        let half_height = (height as f32 * resolution) / 2.0;
        Self::new(
            width,
            height,
            resolution,
            WorldPoint::new(-half_width, -half_height),
        )
    }

    /// Build a grid from rows of text.
    ///
    /// The first row is the top of the map (highest y). Characters:
    /// - `.` free, `#` occupied (lethal), `?` unknown
    /// - `0` free, `1`-`9` graded cost (digit × 25)
    ///
    /// ```
    /// use anveshan::grid::GridStorage;
    /// use anveshan::core::{CellType, GridCoord, WorldPoint};
    ///
    /// let grid = GridStorage::from_ascii(&["??", ".#"], 0.1, WorldPoint::ZERO).unwrap();
    /// assert_eq!(grid.get_type(GridCoord::new(0, 0)), CellType::Free);
    /// assert_eq!(grid.get_type(GridCoord::new(1, 0)), CellType::Occupied);
    /// assert_eq!(grid.get_type(GridCoord::new(0, 1)), CellType::Unknown);
    /// ```
    pub fn from_ascii(
        rows: &[&str],
        resolution: f32,
        origin: WorldPoint,
    ) -> Result<Self, GridError> {
        let width = rows.first().map(|r| r.chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(GridError::Empty);
        }
        let height = rows.len();
        let mut grid = Self::new(width, height, resolution, origin);

        for (row, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }

            let y = height - 1 - row;
            for (col, ch) in line.chars().enumerate() {
                let cost = match ch {
                    '.' | '0' => FREE_SPACE,
                    '#' => CellType::Occupied.cost(),
                    '?' => NO_INFORMATION,
                    '1'..='9' => (ch as u8 - b'0') * 25,
                    _ => return Err(GridError::InvalidChar { ch, row, col }),
                };
                grid.costs[y * width + col] = cost;
            }
        }

        Ok(grid)
    }

    // === Basic Properties ===

    /// World coordinates of cell (0, 0)'s lower-left corner.
    #[inline]
    pub fn origin(&self) -> WorldPoint {
        self.origin
    }

    /// World bounds: (min_point, max_point).
    pub fn bounds(&self) -> (WorldPoint, WorldPoint) {
        let min = self.origin;
        let max = WorldPoint::new(
            self.origin.x + self.width as f32 * self.resolution,
            self.origin.y + self.height as f32 * self.resolution,
        );
        (min, max)
    }

    /// Raw cost array (row-major).
    #[inline]
    pub fn costs(&self) -> &[u8] {
        &self.costs
    }

    // === Coordinate Conversion ===

    /// Convert world coordinates to grid coordinates (may be out of bounds).
    #[inline]
    pub fn world_to_grid(&self, point: WorldPoint) -> GridCoord {
        let x = ((point.x - self.origin.x) * self.inv_resolution).floor() as i32;
        let y = ((point.y - self.origin.y) * self.inv_resolution).floor() as i32;
        GridCoord::new(x, y)
    }

    /// Convert grid coordinates to world coordinates (cell center).
    #[inline]
    pub fn grid_to_world(&self, coord: GridCoord) -> WorldPoint {
        WorldPoint::new(
            self.origin.x + (coord.x as f32 + 0.5) * self.resolution,
            self.origin.y + (coord.y as f32 + 0.5) * self.resolution,
        )
    }

    /// Check if grid coordinates are within bounds.
    #[inline]
    pub fn is_valid_coord(&self, coord: GridCoord) -> bool {
        coord.x >= 0
            && coord.y >= 0
            && (coord.x as usize) < self.width
            && (coord.y as usize) < self.height
    }

    /// Convert grid coordinates to flat array index.
    #[inline]
    pub fn coord_to_index(&self, coord: GridCoord) -> Option<usize> {
        if self.is_valid_coord(coord) {
            Some(coord.y as usize * self.width + coord.x as usize)
        } else {
            None
        }
    }

    // === Cell Access ===

    /// Raw cost at grid coordinates (None if out of bounds).
    #[inline]
    pub fn get_cost(&self, coord: GridCoord) -> Option<u8> {
        self.coord_to_index(coord).map(|i| self.costs[i])
    }

    /// Cell type at grid coordinates (Unknown if out of bounds).
    #[inline]
    pub fn get_type(&self, coord: GridCoord) -> CellType {
        self.get_cost(coord)
            .map(CellType::from_cost)
            .unwrap_or(CellType::Unknown)
    }

    /// Set the raw cost at grid coordinates. Returns false if out of bounds.
    #[inline]
    pub fn set_cost(&mut self, coord: GridCoord, cost: u8) -> bool {
        match self.coord_to_index(coord) {
            Some(i) => {
                self.costs[i] = cost;
                true
            }
            None => false,
        }
    }

    /// Set the cell type (canonical cost) at grid coordinates.
    #[inline]
    pub fn set_type(&mut self, coord: GridCoord, cell_type: CellType) -> bool {
        self.set_cost(coord, cell_type.cost())
    }

    /// Set every cell in the inclusive rectangle `min..=max` to `cell_type`.
    ///
    /// Cells outside the grid are skipped. Returns the number of cells written.
    pub fn fill_rect(&mut self, min: GridCoord, max: GridCoord, cell_type: CellType) -> usize {
        let mut written = 0;
        for y in min.y..=max.y {
            for x in min.x..=max.x {
                if self.set_type(GridCoord::new(x, y), cell_type) {
                    written += 1;
                }
            }
        }
        written
    }

    /// Reset all cells to Unknown.
    pub fn clear(&mut self) {
        self.costs.fill(NO_INFORMATION);
    }

    // === Statistics ===

    /// Count cells by type.
    pub fn count_by_type(&self) -> CellCounts {
        let mut counts = CellCounts::default();
        for &cost in &self.costs {
            match CellType::from_cost(cost) {
                CellType::Unknown => counts.unknown += 1,
                CellType::Free => counts.free += 1,
                CellType::Occupied => counts.occupied += 1,
            }
        }
        counts
    }

    /// Render the grid as text, top row first (inverse of [`from_ascii`](Self::from_ascii)
    /// for `.`, `#` and `?` cells).
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in (0..self.height).rev() {
            for x in 0..self.width {
                out.push(CellType::from_cost(self.costs[y * self.width + x]).as_char());
            }
            out.push('\n');
        }
        out
    }
}

impl GridAccessor for GridStorage {
    #[inline]
    fn width(&self) -> usize {
        self.width
    }

    #[inline]
    fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn resolution(&self) -> f32 {
        self.resolution
    }

    #[inline]
    fn cost(&self, index: usize) -> u8 {
        self.costs[index]
    }

    #[inline]
    fn world_to_map(&self, point: WorldPoint) -> Option<GridCoord> {
        // NaN and infinities would saturate onto the grid edge
        if !point.x.is_finite() || !point.y.is_finite() {
            return None;
        }
        let coord = self.world_to_grid(point);
        self.is_valid_coord(coord).then_some(coord)
    }

    #[inline]
    fn map_to_world(&self, coord: GridCoord) -> WorldPoint {
        self.grid_to_world(coord)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_grid_creation() {
        let grid = GridStorage::new(100, 50, 0.05, WorldPoint::ZERO);
        assert_eq!(grid.width(), 100);
        assert_eq!(grid.height(), 50);
        assert_eq!(grid.resolution(), 0.05);
        assert_eq!(grid.cell_count(), 5000);
        assert_eq!(grid.count_by_type().unknown, 5000);
    }

    #[test]
    fn test_centered_grid() {
        let grid = GridStorage::centered(100, 100, 0.05);
        let (min, max) = grid.bounds();

        assert_relative_eq!(min.x, -2.5, epsilon = 1e-6);
        assert_relative_eq!(min.y, -2.5, epsilon = 1e-6);
        assert_relative_eq!(max.x, 2.5, epsilon = 1e-6);
        assert_relative_eq!(max.y, 2.5, epsilon = 1e-6);
    }

    #[test]
    fn test_world_to_map_bounds() {
        let grid = GridStorage::new(10, 10, 0.1, WorldPoint::ZERO);

        assert_eq!(
            grid.world_to_map(WorldPoint::new(0.05, 0.05)),
            Some(GridCoord::new(0, 0))
        );
        assert_eq!(
            grid.world_to_map(WorldPoint::new(0.95, 0.55)),
            Some(GridCoord::new(9, 5))
        );
        assert_eq!(grid.world_to_map(WorldPoint::new(-0.01, 0.5)), None);
        assert_eq!(grid.world_to_map(WorldPoint::new(1.0, 0.5)), None);
        assert_eq!(grid.world_to_map(WorldPoint::new(0.5, 2.0)), None);
    }

    #[test]
    fn test_world_to_map_rejects_non_finite() {
        let grid = GridStorage::new(10, 10, 0.1, WorldPoint::ZERO);

        assert_eq!(grid.world_to_map(WorldPoint::new(f32::NAN, 0.5)), None);
        assert_eq!(grid.world_to_map(WorldPoint::new(0.5, f32::NAN)), None);
        assert_eq!(grid.world_to_map(WorldPoint::new(f32::INFINITY, 0.5)), None);
        assert_eq!(
            grid.world_to_map(WorldPoint::new(0.5, f32::NEG_INFINITY)),
            None
        );
    }

    #[test]
    fn test_grid_to_world_conversion() {
        let grid = GridStorage::new(100, 100, 0.05, WorldPoint::ZERO);

        let point = grid.grid_to_world(GridCoord::new(0, 0));
        assert_relative_eq!(point.x, 0.025, epsilon = 1e-6);
        assert_relative_eq!(point.y, 0.025, epsilon = 1e-6);
    }

    #[test]
    fn test_index_roundtrip() {
        let grid = GridStorage::new(7, 5, 0.1, WorldPoint::ZERO);
        for index in 0..grid.cell_count() {
            let coord = grid.coord_of(index);
            assert_eq!(grid.index_of(coord), index);
            assert_eq!(grid.coord_to_index(coord), Some(index));
        }
        assert_eq!(grid.coord_to_index(GridCoord::new(7, 0)), None);
    }

    #[test]
    fn test_get_set_cell() {
        let mut grid = GridStorage::new(10, 10, 0.1, WorldPoint::ZERO);

        assert_eq!(grid.get_type(GridCoord::new(5, 5)), CellType::Unknown);

        assert!(grid.set_type(GridCoord::new(5, 5), CellType::Free));
        assert_eq!(grid.get_type(GridCoord::new(5, 5)), CellType::Free);

        assert!(grid.set_cost(GridCoord::new(5, 6), 100));
        assert_eq!(grid.get_type(GridCoord::new(5, 6)), CellType::Occupied);

        assert!(!grid.set_type(GridCoord::new(100, 100), CellType::Free));
        assert_eq!(grid.get_type(GridCoord::new(100, 100)), CellType::Unknown);
    }

    #[test]
    fn test_fill_rect_and_counts() {
        let mut grid = GridStorage::new(10, 10, 0.1, WorldPoint::ZERO);
        let written = grid.fill_rect(GridCoord::new(0, 0), GridCoord::new(4, 9), CellType::Free);
        assert_eq!(written, 50);

        let clipped = grid.fill_rect(GridCoord::new(8, 8), GridCoord::new(12, 12), CellType::Occupied);
        assert_eq!(clipped, 4);

        let counts = grid.count_by_type();
        assert_eq!(counts.free, 50);
        assert_eq!(counts.occupied, 4);
        assert_eq!(counts.unknown, 46);
        assert_eq!(counts.total(), 100);

        grid.clear();
        assert_eq!(grid.count_by_type().unknown, 100);
    }

    #[test]
    fn test_from_ascii() {
        let grid = GridStorage::from_ascii(&["?#.", "..5"], 0.5, WorldPoint::ZERO).unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);

        // Top text row is y = 1
        assert_eq!(grid.get_type(GridCoord::new(0, 1)), CellType::Unknown);
        assert_eq!(grid.get_type(GridCoord::new(1, 1)), CellType::Occupied);
        assert_eq!(grid.get_type(GridCoord::new(2, 1)), CellType::Free);
        assert_eq!(grid.get_cost(GridCoord::new(2, 0)), Some(125));
        assert_eq!(grid.to_ascii(), "?#.\n..#\n");
    }

    #[test]
    fn test_from_ascii_errors() {
        assert_eq!(
            GridStorage::from_ascii(&[], 0.1, WorldPoint::ZERO).unwrap_err(),
            GridError::Empty
        );
        assert_eq!(
            GridStorage::from_ascii(&["...", ".."], 0.1, WorldPoint::ZERO).unwrap_err(),
            GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(
            GridStorage::from_ascii(&[".x."], 0.1, WorldPoint::ZERO).unwrap_err(),
            GridError::InvalidChar {
                ch: 'x',
                row: 0,
                col: 1
            }
        );
    }
}

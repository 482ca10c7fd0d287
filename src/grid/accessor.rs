//! Read-only grid capability consumed by the frontier search.

use crate::core::{CellType, GridCoord, WorldPoint};

/// Read-only view of a row-major 2D cost grid.
///
/// Cells are addressed by a linear index `y * width + x`. Implementors only
/// need to provide dimensions, resolution, raw cost lookup and the two frame
/// conversions; classification and index arithmetic have default
/// implementations.
pub trait GridAccessor {
    /// Grid width in cells.
    fn width(&self) -> usize;

    /// Grid height in cells.
    fn height(&self) -> usize;

    /// Resolution in meters per cell.
    fn resolution(&self) -> f32;

    /// Raw traversal cost of the cell at `index`.
    ///
    /// `index` must be below [`cell_count`](Self::cell_count).
    fn cost(&self, index: usize) -> u8;

    /// Convert a world point to grid coordinates.
    ///
    /// Returns `None` if the point lies outside the grid or is not finite.
    fn world_to_map(&self, point: WorldPoint) -> Option<GridCoord>;

    /// World position of the center of a cell.
    fn map_to_world(&self, coord: GridCoord) -> WorldPoint;

    /// Total number of cells.
    #[inline]
    fn cell_count(&self) -> usize {
        self.width() * self.height()
    }

    /// Classification of the cell at `index`.
    #[inline]
    fn cell_type(&self, index: usize) -> CellType {
        CellType::from_cost(self.cost(index))
    }

    /// Linear index of an in-bounds coordinate.
    #[inline]
    fn index_of(&self, coord: GridCoord) -> usize {
        coord.y as usize * self.width() + coord.x as usize
    }

    /// Grid coordinate of a linear index.
    #[inline]
    fn coord_of(&self, index: usize) -> GridCoord {
        let width = self.width();
        GridCoord::new((index % width) as i32, (index / width) as i32)
    }

    /// World position of the center of the cell at `index`.
    #[inline]
    fn index_to_world(&self, index: usize) -> WorldPoint {
        self.map_to_world(self.coord_of(index))
    }
}

//! Continuous-space collision checks against the grid.

use crate::map::GridMap;

/// Maps world coordinates onto map cells.
///
/// Cell coordinates are `x / tile_size` and `y / tile_size` truncated toward
/// zero. NaN lands on cell 0, which is always border.
#[derive(Debug, Clone, Copy)]
pub struct CollisionProbe<'a> {
    map: &'a GridMap,
    tile_size: f64,
}

impl<'a> CollisionProbe<'a> {
    pub fn new(map: &'a GridMap, tile_size: f64) -> Self {
        Self { map, tile_size }
    }

    pub fn map(&self) -> &'a GridMap {
        self.map
    }

    pub fn tile_size(&self) -> f64 {
        self.tile_size
    }

    #[inline(always)]
    pub fn cell_at(&self, x: f64, y: f64) -> (i32, i32) {
        ((x / self.tile_size) as i32, (y / self.tile_size) as i32)
    }

    #[inline]
    pub fn is_blocked(&self, x: f64, y: f64) -> bool {
        let (col, row) = self.cell_at(x, y);
        self.map.is_solid(col, row)
    }
}

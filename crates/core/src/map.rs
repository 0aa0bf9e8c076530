//! Map module - the static occupancy grid
//!
//! The map is a `width x height` grid where each cell is empty or solid.
//! Uses a flat vector in row-major order; it is never mutated after construction.
//! Coordinates: (col, row) where col grows to the right (+x) and row grows
//! downward (+y), matching world space divided by the tile size.
//!
//! Every constructor requires a solid border, and lookups outside the grid
//! report solid, so rays and collision checks never need their own bounds checks.

use crate::error::MapError;
use crate::types::{DEFAULT_MAP, MAP_HEIGHT, MAP_WIDTH};

/// Occupancy of a single map cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    #[default]
    Empty,
    Solid,
}

impl CellState {
    /// Map glyph: `#` for solid, `.` or space for empty.
    pub fn from_glyph(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(CellState::Solid),
            '.' | ' ' => Some(CellState::Empty),
            _ => None,
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            CellState::Empty => '.',
            CellState::Solid => '#',
        }
    }
}

/// Immutable occupancy grid with a closed border.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<CellState>,
}

impl GridMap {
    /// Build a map from row-major cells.
    pub fn from_cells(
        width: usize,
        height: usize,
        cells: Vec<CellState>,
    ) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::Empty);
        }
        let expected = width * height;
        if cells.len() != expected {
            return Err(MapError::CellCount {
                expected,
                found: cells.len(),
            });
        }

        let map = Self {
            width,
            height,
            cells,
        };
        map.check_border()?;
        Ok(map)
    }

    /// Parse a map from text rows, one string per row.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_raycast_core::GridMap;
    ///
    /// let map = GridMap::from_ascii(&["####", "#..#", "####"]).unwrap();
    /// assert_eq!((map.width(), map.height()), (4, 3));
    /// assert!(!map.is_solid(1, 1));
    /// assert!(map.is_solid(-1, 1));
    /// ```
    pub fn from_ascii<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        let width = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(MapError::Empty);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != width {
                return Err(MapError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, glyph) in line.chars().enumerate() {
                let cell =
                    CellState::from_glyph(glyph).ok_or(MapError::UnknownGlyph { glyph, col, row })?;
                cells.push(cell);
            }
        }

        Self::from_cells(width, rows.len(), cells)
    }

    /// An empty room of the given size enclosed by a one-cell wall.
    pub fn arena(width: usize, height: usize) -> Result<Self, MapError> {
        let mut cells = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                let border = row == 0 || col == 0 || row + 1 == height || col + 1 == width;
                cells.push(if border {
                    CellState::Solid
                } else {
                    CellState::Empty
                });
            }
        }
        Self::from_cells(width, height, cells)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    #[inline(always)]
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || row < 0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(row * self.width + col)
    }

    /// Get cell at (col, row). Returns None if out of bounds.
    pub fn cell(&self, col: i32, row: i32) -> Option<CellState> {
        self.index(col, row).map(|i| self.cells[i])
    }

    /// True for solid cells and for anything outside the grid.
    #[inline]
    pub fn is_solid(&self, col: i32, row: i32) -> bool {
        !matches!(self.cell(col, row), Some(CellState::Empty))
    }

    /// Render the map back to text rows (useful in test failure output).
    pub fn to_ascii(&self) -> Vec<String> {
        self.cells
            .chunks(self.width)
            .map(|row| row.iter().map(CellState::glyph).collect())
            .collect()
    }

    fn check_border(&self) -> Result<(), MapError> {
        for row in 0..self.height {
            for col in 0..self.width {
                let border =
                    row == 0 || col == 0 || row + 1 == self.height || col + 1 == self.width;
                if border && self.cells[row * self.width + col] != CellState::Solid {
                    return Err(MapError::OpenBorder { col, row });
                }
            }
        }
        Ok(())
    }
}

impl Default for GridMap {
    /// The compiled-in arena.
    fn default() -> Self {
        let cells = DEFAULT_MAP
            .iter()
            .flat_map(|row| row.chars())
            // Fail closed on anything unexpected in the constant.
            .map(|ch| CellState::from_glyph(ch).unwrap_or(CellState::Solid))
            .collect();
        Self {
            width: MAP_WIDTH,
            height: MAP_HEIGHT,
            cells,
        }
    }
}

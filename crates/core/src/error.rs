//! Error types for map construction, settings validation, and world setup.
//!
//! The per-frame operations (movement, casting, shading) are total and never
//! return these; they are only produced while building a world.

use thiserror::Error;

/// Reasons a grid cannot become a [`GridMap`](crate::GridMap).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map has no cells")]
    Empty,

    #[error("expected {expected} cells for the declared size, found {found}")]
    CellCount { expected: usize, found: usize },

    #[error("row {row} is {found} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown map glyph {glyph:?} at ({col}, {row})")]
    UnknownGlyph { glyph: char, col: usize, row: usize },

    #[error("border cell ({col}, {row}) is not solid")]
    OpenBorder { col: usize, row: usize },
}

/// A [`Settings`](crate::Settings) value that would break a renderer invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("{name} must be non-zero")]
    Zero { name: &'static str },

    #[error("field of view must be within (0, π) radians, got {0}")]
    FieldOfView(f64),

    #[error("minimum brightness must be within [0, 1], got {0}")]
    BrightnessFloor(f64),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    #[error(transparent)]
    Map(#[from] MapError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error("spawn position ({x}, {y}) is inside a solid cell")]
    SpawnBlocked { x: f64, y: f64 },
}

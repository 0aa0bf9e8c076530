//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, tests).
//!
//! # World Geometry
//!
//! - **Map**: 8x8 cells, border always solid
//! - **Tile size**: 64 world units per cell
//! - **Spawn**: (300, 300) facing angle 0 (east)
//!
//! # View Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 640 | Logical screen width in pixels |
//! | `SCREEN_HEIGHT` | 480 | Logical screen height in pixels |
//! | `FOV` | π/3 | Horizontal field of view (60°) |
//! | `RAY_COUNT` | 120 | Rays cast per frame |
//! | `MAX_DISTANCE` | 800 | Maximum sensing range in world units |
//! | `RAY_STEP` | 1.0 | Linear march step in world units |
//! | `MIN_BRIGHTNESS` | 0.2 | Shading floor for distant walls |
//! | `PROJECTION_CONSTANT` | 200 | Projected wall height scale |
//! | `MIN_DISTANCE` | 1.0 | Distance floor before projection |
//!
//! # Timing
//!
//! `FRAME_MS` = 16 (~60 FPS). Movement speeds are per frame, not per second.
//!
//! # Examples
//!
//! ```
//! use tui_raycast_types::{MoveKey, PlayerCommand, DEFAULT_MAP, MAP_HEIGHT, MAP_WIDTH};
//!
//! assert_eq!(MoveKey::TurnLeft.command(), PlayerCommand::TurnLeft);
//! assert_eq!(MoveKey::ALL[MoveKey::Backward.index()], MoveKey::Backward);
//!
//! assert_eq!(DEFAULT_MAP.len(), MAP_HEIGHT);
//! assert!(DEFAULT_MAP.iter().all(|row| row.len() == MAP_WIDTH));
//! ```

use std::f64::consts::PI;

/// Logical screen width in pixels.
pub const SCREEN_WIDTH: u32 = 640;

/// Logical screen height in pixels.
pub const SCREEN_HEIGHT: u32 = 480;

/// Map width in cells.
pub const MAP_WIDTH: usize = 8;

/// Map height in cells.
pub const MAP_HEIGHT: usize = 8;

/// World units per map cell.
pub const TILE_SIZE: f64 = 64.0;

/// Horizontal field of view in radians.
pub const FOV: f64 = PI / 3.0;

/// Rays cast per frame, one wall sliver each.
pub const RAY_COUNT: u32 = 120;

/// Distance moved per frame while a move key is held.
pub const MOVE_SPEED: f64 = 3.0;

/// Radians turned per frame while a turn key is held.
pub const ROT_SPEED: f64 = 0.05;

/// Maximum sensing range of a ray in world units.
pub const MAX_DISTANCE: f64 = 800.0;

/// Linear step of the ray march in world units.
pub const RAY_STEP: f64 = 1.0;

/// Brightness floor so far walls stay faintly visible.
pub const MIN_BRIGHTNESS: f64 = 0.2;

/// Scale applied to `screen_height / distance` for projected wall height.
pub const PROJECTION_CONSTANT: f64 = 200.0;

/// Distance floor used before dividing in the projection.
pub const MIN_DISTANCE: f64 = 1.0;

/// Target frame interval in milliseconds (16ms ≈ 60 FPS).
pub const FRAME_MS: u64 = 16;

/// Player spawn X in world units.
pub const SPAWN_X: f64 = 300.0;

/// Player spawn Y in world units.
pub const SPAWN_Y: f64 = 300.0;

/// Player spawn heading in radians.
pub const SPAWN_ANGLE: f64 = 0.0;

/// Compiled-in arena: `#` is solid, `.` is empty. Row 0 is the top (smallest y).
pub const DEFAULT_MAP: [&str; MAP_HEIGHT] = [
    "########",
    "#......#",
    "#......#",
    "#......#",
    "#......#",
    "#......#",
    "#......#",
    "########",
];


/// Movement keys the platform reports as held or not held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKey {
    Forward,
    Backward,
    TurnLeft,
    TurnRight,
}

impl MoveKey {
    /// All keys, in the order the game loop reads them.
    pub const ALL: [MoveKey; 4] = [
        MoveKey::Forward,
        MoveKey::Backward,
        MoveKey::TurnLeft,
        MoveKey::TurnRight,
    ];

    /// Stable index into per-key tables.
    pub fn index(&self) -> usize {
        match self {
            MoveKey::Forward => 0,
            MoveKey::Backward => 1,
            MoveKey::TurnLeft => 2,
            MoveKey::TurnRight => 3,
        }
    }

    /// The player command this key drives while held.
    pub fn command(&self) -> PlayerCommand {
        match self {
            MoveKey::Forward => PlayerCommand::MoveForward,
            MoveKey::Backward => PlayerCommand::MoveBackward,
            MoveKey::TurnLeft => PlayerCommand::TurnLeft,
            MoveKey::TurnRight => PlayerCommand::TurnRight,
        }
    }
}

/// Commands applied to the player once per frame.
///
/// Move commands are on the translation axis, turn commands on the rotation
/// axis. At most one command per axis runs in a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCommand {
    /// Step along the heading
    MoveForward,
    /// Step against the heading
    MoveBackward,
    /// Decrease the heading angle
    TurnLeft,
    /// Increase the heading angle
    TurnRight,
}

/// One vertical wall sliver, in logical screen pixels.
///
/// `top` may be negative and `bottom` may exceed the screen height when a
/// wall is close; the backend clips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCommand {
    pub column: i32,
    pub top: i32,
    pub bottom: i32,
    /// Grayscale 0-255, used for all three channels.
    pub intensity: u8,
}

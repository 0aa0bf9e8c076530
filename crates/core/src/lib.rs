//! Core raycasting module - pure, deterministic, and testable
//!
//! This module contains the world model and the per-frame rendering math.
//! It has **zero dependencies** on terminals, windows, or I/O, making it:
//!
//! - **Deterministic**: Same pose and map always produce the same frame
//! - **Testable**: The backend is a trait, so a `Vec` can record a frame
//! - **Portable**: Any backend that can draw a vertical line can host it
//!
//! # Module Structure
//!
//! - [`map`]: immutable occupancy grid, out-of-bounds reads as solid
//! - [`collision`]: world-space point tests against the grid
//! - [`player`]: pose, bump-and-stop movement, angle normalization
//! - [`raycast`]: fixed-step ray march with a sensing range
//! - [`render`]: shading, projection, and the per-frame ray fan
//! - [`platform`]: backend capability traits
//! - [`settings`]: tunables with validation
//!
//! # Example
//!
//! ```
//! use tui_raycast_core::{FrameRenderer, GridMap, Player, Settings};
//! use tui_raycast_core::types::FrameCommand;
//!
//! let map = GridMap::default();
//! let player = Player::new(300.0, 300.0, 0.0);
//! let renderer = FrameRenderer::new(Settings::default());
//!
//! let mut frame: Vec<FrameCommand> = Vec::new();
//! renderer.render(&map, &player, &mut frame);
//! assert_eq!(frame.len(), 120);
//! ```

pub mod collision;
pub mod error;
pub mod map;
pub mod platform;
pub mod player;
pub mod raycast;
pub mod render;
pub mod settings;

pub use tui_raycast_types as types;

// Re-export commonly used types for convenience
pub use collision::CollisionProbe;
pub use error::{CoreError, MapError, SettingsError};
pub use map::{CellState, GridMap};
pub use platform::{DrawTarget, Platform};
pub use player::{normalize_angle, Player};
pub use raycast::{Ray, RayHit, Raycaster};
pub use render::{brightness, intensity, sliver_span, wall_height, FrameRenderer};
pub use settings::Settings;

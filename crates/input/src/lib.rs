//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events onto [`crate::types::MoveKey`] and keeps a held-key
//! snapshot suitable for terminal environments (including terminals without
//! key-release events).

pub mod held;
pub mod map;

pub use tui_raycast_types as types;

pub use held::HeldKeys;
pub use map::{move_key, should_quit};

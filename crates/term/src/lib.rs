//! Terminal backend module.
//!
//! Presents the core's vertical wall slivers in a terminal. It renders into a
//! grayscale canvas, packs two pixels per cell with half blocks, and flushes a
//! framebuffer diff to the terminal.
//!
//! Goals:
//! - Keep `core` free of any terminal dependency
//! - Make the canvas and diff logic testable without a TTY
//! - Scale the fixed logical screen to whatever size the terminal has

pub mod backend;
pub mod canvas;
pub mod fb;
pub mod renderer;

pub use tui_raycast_core as core;
pub use tui_raycast_input as input;
pub use tui_raycast_types as types;

pub use backend::TerminalPlatform;
pub use canvas::{Canvas, ScreenScale, UPPER_HALF_BLOCK};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

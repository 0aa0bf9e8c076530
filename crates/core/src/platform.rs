//! Capability interface of the window/input/render backend.
//!
//! The core never talks to a terminal or graphics library directly; the game
//! loop drives any type implementing [`Platform`]. Tests use a recording fake.

use crate::types::{FrameCommand, MoveKey};

/// Sink for vertical line draw calls.
///
/// Called up to `ray_count` times per frame, between `clear_frame` and
/// `present_frame`. Coordinates are logical screen pixels and may lie outside
/// the screen; implementations clip.
pub trait DrawTarget {
    fn draw_vertical_line(&mut self, x: i32, y_top: i32, y_bottom: i32, intensity: u8);
}

/// Records draw calls as [`FrameCommand`]s.
impl DrawTarget for Vec<FrameCommand> {
    fn draw_vertical_line(&mut self, x: i32, y_top: i32, y_bottom: i32, intensity: u8) {
        self.push(FrameCommand {
            column: x,
            top: y_top,
            bottom: y_bottom,
            intensity,
        });
    }
}

/// Window, input, and presentation backend.
pub trait Platform: DrawTarget {
    type Error;

    /// Drain pending events without blocking. `true` means stop the loop.
    fn poll_quit_requested(&mut self) -> Result<bool, Self::Error>;

    /// Whether `key` is held as of the last poll.
    fn key_held(&self, key: MoveKey) -> bool;

    fn clear_frame(&mut self) -> Result<(), Self::Error>;

    fn present_frame(&mut self) -> Result<(), Self::Error>;
}

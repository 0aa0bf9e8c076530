//! Engine module - the real-time loop around the pure core.
//!
//! Single-threaded and synchronous: the only blocking point is the frame
//! pacing sleep in [`FramePacer::wait`]. The loop checks for quit once per
//! iteration, so shutdown latency is at most one frame interval.

pub mod game_loop;
pub mod pacer;

pub use tui_raycast_core as core;
pub use tui_raycast_types as types;

pub use game_loop::{frame_commands, GameLoop, LoopState};
pub use pacer::FramePacer;

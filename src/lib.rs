//! TUI Raycast (workspace facade crate).
//!
//! Re-exports the member crates as `tui_raycast::{core,engine,input,term,types}`
//! so the binary, benches, and integration tests share one import path.

pub use tui_raycast_core as core;
pub use tui_raycast_engine as engine;
pub use tui_raycast_input as input;
pub use tui_raycast_term as term;
pub use tui_raycast_types as types;

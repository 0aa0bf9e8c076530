//! Recording fake backend shared by the integration tests.

#![allow(dead_code)]

use tui_raycast::core::{DrawTarget, Platform};
use tui_raycast::types::{FrameCommand, MoveKey};

/// Every call the loop makes, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Call {
    Poll,
    Clear,
    Draw,
    Present,
}

/// Scripted platform: quits on a given poll, reports held keys per frame, and
/// records every presented frame.
#[derive(Debug, Default)]
pub struct ScriptedPlatform {
    /// Poll number (1-based) on which quit is reported.
    pub quit_on_poll: Option<usize>,
    /// Held keys for poll N (0-based); polls past the end use `held`.
    pub held_script: Vec<Vec<MoveKey>>,
    pub held: Vec<MoveKey>,
    /// Present number (1-based) that returns an error.
    pub fail_on_present: Option<usize>,

    pub calls: Vec<Call>,
    pub frames: Vec<Vec<FrameCommand>>,
    pub polls: usize,
    pub presents: usize,
    pub current: Vec<FrameCommand>,
}

impl ScriptedPlatform {
    pub fn quitting_after(frames: usize) -> Self {
        Self {
            quit_on_poll: Some(frames + 1),
            ..Self::default()
        }
    }

    pub fn with_held(mut self, keys: &[MoveKey]) -> Self {
        self.held = keys.to_vec();
        self
    }

    pub fn with_script(mut self, script: Vec<Vec<MoveKey>>) -> Self {
        self.held_script = script;
        self
    }

    pub fn polls(&self) -> usize {
        self.polls
    }
}

impl DrawTarget for ScriptedPlatform {
    fn draw_vertical_line(&mut self, x: i32, y_top: i32, y_bottom: i32, intensity: u8) {
        self.calls.push(Call::Draw);
        self.current
            .draw_vertical_line(x, y_top, y_bottom, intensity);
    }
}

impl Platform for ScriptedPlatform {
    type Error = String;

    fn poll_quit_requested(&mut self) -> Result<bool, String> {
        self.calls.push(Call::Poll);
        self.polls += 1;
        Ok(self.quit_on_poll == Some(self.polls))
    }

    fn key_held(&self, key: MoveKey) -> bool {
        let frame = self.polls.saturating_sub(1);
        match self.held_script.get(frame) {
            Some(keys) => keys.contains(&key),
            None => self.held.contains(&key),
        }
    }

    fn clear_frame(&mut self) -> Result<(), String> {
        self.calls.push(Call::Clear);
        self.current.clear();
        Ok(())
    }

    fn present_frame(&mut self) -> Result<(), String> {
        self.calls.push(Call::Present);
        self.presents += 1;
        if self.fail_on_present == Some(self.presents) {
            return Err(format!("present {} failed", self.presents));
        }
        self.frames.push(std::mem::take(&mut self.current));
        Ok(())
    }
}

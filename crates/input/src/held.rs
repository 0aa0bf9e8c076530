//! Held-key tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a key stays held while press/repeat events keep arriving, and drops out once
//! none has been seen for `release_timeout`.

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::move_key;
use crate::types::MoveKey;

// Without release events, a short timeout keeps a single tap from turning into
// a sustained hold. Autorepeat refreshes the key well within this window once
// it starts.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u64 = 150;

// With real release events the timeout is only a guard against a lost release.
pub const ENHANCED_KEY_RELEASE_TIMEOUT_MS: u64 = 2_000;

#[derive(Debug, Clone)]
pub struct HeldKeys {
    last_seen: [Option<Instant>; 4],
    release_timeout: Duration,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            last_seen: [None; 4],
            release_timeout: Duration::from_millis(DEFAULT_KEY_RELEASE_TIMEOUT_MS),
        }
    }

    pub fn with_release_timeout(mut self, timeout: Duration) -> Self {
        self.release_timeout = timeout;
        self
    }

    pub fn release_timeout(&self) -> Duration {
        self.release_timeout
    }

    pub fn set_release_timeout(&mut self, timeout: Duration) {
        self.release_timeout = timeout;
    }

    /// Feed a terminal key event. Returns the movement key it touched, if any.
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Option<MoveKey> {
        self.handle_key_event_at(key, Instant::now())
    }

    pub fn handle_key_event_at(&mut self, key: KeyEvent, now: Instant) -> Option<MoveKey> {
        let mk = move_key(key.code)?;
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => self.press_at(mk, now),
            KeyEventKind::Release => self.release(mk),
        }
        Some(mk)
    }

    pub fn press_at(&mut self, key: MoveKey, now: Instant) {
        self.last_seen[key.index()] = Some(now);
    }

    pub fn release(&mut self, key: MoveKey) {
        self.last_seen[key.index()] = None;
    }

    pub fn release_all(&mut self) {
        self.last_seen = [None; 4];
    }

    pub fn is_held(&self, key: MoveKey) -> bool {
        self.is_held_at(key, Instant::now())
    }

    pub fn is_held_at(&self, key: MoveKey, now: Instant) -> bool {
        match self.last_seen[key.index()] {
            Some(seen) => now.saturating_duration_since(seen) <= self.release_timeout,
            None => false,
        }
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}

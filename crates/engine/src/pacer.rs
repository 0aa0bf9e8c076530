//! Fixed-interval frame pacing.

use std::time::{Duration, Instant};

/// Sleeps out whatever remains of the frame interval since the last tick.
///
/// A frame that overruns the interval is not compensated for; the next
/// frame starts immediately.
#[derive(Debug, Clone)]
pub struct FramePacer {
    interval: Duration,
    last_tick: Instant,
}

impl FramePacer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: Instant::now(),
        }
    }

    /// Time left in the current frame.
    pub fn remaining(&self) -> Duration {
        self.interval
            .checked_sub(self.last_tick.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Start a new frame now without sleeping.
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }

    /// Sleep until the end of the current frame, then start the next one.
    pub fn wait(&mut self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.last_tick = Instant::now();
    }
}

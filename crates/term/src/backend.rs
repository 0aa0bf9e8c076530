//! Crossterm-backed [`Platform`]: raw-mode terminal, held-key input, and
//! half-block presentation of the logical screen.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use tracing::debug;

use crate::canvas::{Canvas, ScreenScale};
use crate::core::{DrawTarget, Platform, Settings};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::input::held::ENHANCED_KEY_RELEASE_TIMEOUT_MS;
use crate::input::{should_quit, HeldKeys};
use crate::renderer::TerminalRenderer;
use crate::types::MoveKey;

pub const HINT: &str = " WASD/arrows move  q quit ";

// Bound the work done per poll if input floods in (e.g. a paste).
const MAX_EVENTS_PER_POLL: usize = 256;

pub struct TerminalPlatform {
    renderer: TerminalRenderer,
    fb: FrameBuffer,
    canvas: Canvas,
    keys: HeldKeys,
    scale: ScreenScale,
    show_hint: bool,
}

impl TerminalPlatform {
    pub fn new(settings: &Settings) -> Self {
        Self {
            renderer: TerminalRenderer::new(),
            fb: FrameBuffer::new(0, 0),
            canvas: Canvas::new(0, 0),
            keys: HeldKeys::new(),
            scale: ScreenScale::from_settings(settings),
            show_hint: true,
        }
    }

    pub fn with_hint(mut self, show_hint: bool) -> Self {
        self.show_hint = show_hint;
        self
    }

    /// Switch the terminal into raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        self.renderer.enter()?;
        if self.renderer.keyboard_enhanced() {
            self.keys
                .set_release_timeout(Duration::from_millis(ENHANCED_KEY_RELEASE_TIMEOUT_MS));
        }
        debug!(
            keyboard_enhanced = self.renderer.keyboard_enhanced(),
            release_timeout_ms = self.keys.release_timeout().as_millis() as u64,
            "terminal entered"
        );
        Ok(())
    }

    /// Restore the terminal. Safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.renderer.exit()
    }
}

impl DrawTarget for TerminalPlatform {
    fn draw_vertical_line(&mut self, x: i32, y_top: i32, y_bottom: i32, intensity: u8) {
        self.canvas
            .draw_sliver(&self.scale, x, y_top, y_bottom, intensity);
    }
}

impl Platform for TerminalPlatform {
    type Error = anyhow::Error;

    fn poll_quit_requested(&mut self) -> Result<bool> {
        let mut quit = false;
        let mut drained = 0;

        while drained < MAX_EVENTS_PER_POLL && event::poll(Duration::ZERO)? {
            drained += 1;
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Release && should_quit(key) {
                        quit = true;
                    } else {
                        self.keys.handle_key_event(key);
                    }
                }
                Event::Resize(..) => self.renderer.invalidate(),
                Event::FocusLost => self.keys.release_all(),
                _ => {}
            }
        }

        Ok(quit)
    }

    fn key_held(&self, key: MoveKey) -> bool {
        self.keys.is_held(key)
    }

    fn clear_frame(&mut self) -> Result<()> {
        let (cols, rows) = terminal::size()?;
        self.canvas.resize(cols, rows.saturating_mul(2));
        self.canvas.clear(0);
        Ok(())
    }

    fn present_frame(&mut self) -> Result<()> {
        self.canvas.compose_into(&mut self.fb);

        let rows = self.fb.height();
        if self.show_hint && rows >= 4 && self.fb.width() as usize >= HINT.len() {
            let style = CellStyle {
                fg: Rgb::new(200, 200, 200),
                bg: Rgb::new(0, 0, 0),
            };
            self.fb.put_str(0, rows - 1, HINT, style);
        }

        self.renderer.draw_swap(&mut self.fb)
    }
}

//! Grayscale pixel canvas backed by half-block terminal cells.
//!
//! One terminal cell holds two vertical pixels: `▀` with the top pixel as the
//! foreground color and the bottom pixel as the background color. The canvas is
//! therefore `cols x (rows * 2)` pixels for a `cols x rows` terminal.

use crate::core::Settings;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub const UPPER_HALF_BLOCK: char = '▀';

/// Maps logical screen pixels (e.g. 640x480) onto canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenScale {
    screen_width: u32,
    screen_height: u32,
    /// Logical columns each sliver covers, so adjacent rays leave no gaps.
    column_span: u32,
}

impl ScreenScale {
    pub fn new(screen_width: u32, screen_height: u32, column_span: u32) -> Self {
        Self {
            screen_width: screen_width.max(1),
            screen_height: screen_height.max(1),
            column_span: column_span.max(1),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            settings.screen_width,
            settings.screen_height,
            settings.column_span(),
        )
    }

    /// Canvas columns `[x0, x1)` covered by a sliver at logical column `x`.
    /// Never empty unless clipped away entirely.
    pub fn columns(&self, x: i32, canvas_width: u16) -> (u16, u16) {
        let w = canvas_width as i64;
        let sw = self.screen_width as i64;
        let x = x as i64;

        let x0 = (x * w).div_euclid(sw);
        let x1 = ((x + self.column_span as i64) * w).div_euclid(sw).max(x0 + 1);
        (clip(x0, w), clip(x1, w))
    }

    /// Canvas rows `[y0, y1)` covered by logical rows `top..=bottom`.
    pub fn rows(&self, top: i32, bottom: i32, canvas_height: u16) -> (u16, u16) {
        let h = canvas_height as i64;
        let sh = self.screen_height as i64;

        let y0 = (top as i64 * h).div_euclid(sh);
        let y1 = (bottom as i64 * h).div_euclid(sh) + 1;
        (clip(y0, h), clip(y1, h))
    }
}

fn clip(v: i64, max: i64) -> u16 {
    v.clamp(0, max) as u16
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u16,
    height: u16,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width as usize * height as usize],
        }
    }

    /// Canvas sized for a terminal of `cols x rows` cells.
    pub fn for_terminal(cols: u16, rows: u16) -> Self {
        Self::new(cols, rows.saturating_mul(2))
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible. Contents are unspecified
    /// until the next [`Canvas::clear`].
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels.resize(width as usize * height as usize, 0);
    }

    pub fn clear(&mut self, value: u8) {
        self.pixels.fill(value);
    }

    pub fn get(&self, x: u16, y: u16) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y as usize * self.width as usize + x as usize])
    }

    /// Fill the half-open rectangle `[x0, x1) x [y0, y1)`, clipped to the canvas.
    pub fn fill_rect(&mut self, x0: u16, x1: u16, y0: u16, y1: u16, value: u8) {
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        for y in y0..y1 {
            let row = y as usize * self.width as usize;
            for x in x0..x1 {
                self.pixels[row + x as usize] = value;
            }
        }
    }

    /// Draw one wall sliver given in logical screen coordinates.
    pub fn draw_sliver(&mut self, scale: &ScreenScale, x: i32, top: i32, bottom: i32, value: u8) {
        if bottom < top {
            return;
        }
        let (x0, x1) = scale.columns(x, self.width);
        let (y0, y1) = scale.rows(top, bottom, self.height);
        self.fill_rect(x0, x1, y0, y1, value);
    }

    /// Write the canvas into `fb` as half-block cells, resizing `fb` to fit.
    pub fn compose_into(&self, fb: &mut FrameBuffer) {
        let rows = self.height.div_ceil(2);
        fb.resize(self.width, rows);

        for cy in 0..rows {
            for x in 0..self.width {
                let top = self.get(x, cy * 2).unwrap_or(0);
                let bottom = self.get(x, cy * 2 + 1).unwrap_or(0);
                fb.set(
                    x,
                    cy,
                    Cell {
                        ch: UPPER_HALF_BLOCK,
                        style: CellStyle {
                            fg: Rgb::gray(top),
                            bg: Rgb::gray(bottom),
                        },
                    },
                );
            }
        }
    }
}

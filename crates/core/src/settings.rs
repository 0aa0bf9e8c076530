//! Renderer and movement settings.
//!
//! Defaults come from the compile-time constants in `tui_raycast_types`.
//! Anything that overrides them must pass [`Settings::validate`] before a
//! world is built.

use std::f64::consts::PI;
use std::time::Duration;

use crate::error::SettingsError;
use crate::types::{
    FOV, FRAME_MS, MAX_DISTANCE, MIN_BRIGHTNESS, MIN_DISTANCE, MOVE_SPEED, PROJECTION_CONSTANT,
    RAY_COUNT, RAY_STEP, ROT_SPEED, SCREEN_HEIGHT, SCREEN_WIDTH, TILE_SIZE,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Logical screen width in pixels.
    pub screen_width: u32,
    /// Logical screen height in pixels.
    pub screen_height: u32,
    /// World units per map cell.
    pub tile_size: f64,
    /// Horizontal field of view in radians.
    pub fov: f64,
    pub ray_count: u32,
    /// World units per frame.
    pub move_speed: f64,
    /// Radians per frame.
    pub rot_speed: f64,
    /// Maximum sensing range of a ray.
    pub max_distance: f64,
    /// Linear march step of a ray.
    pub ray_step: f64,
    pub min_brightness: f64,
    pub projection_constant: f64,
    /// Distance floor applied before the projection divide.
    pub min_distance: f64,
    pub frame_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            tile_size: TILE_SIZE,
            fov: FOV,
            ray_count: RAY_COUNT,
            move_speed: MOVE_SPEED,
            rot_speed: ROT_SPEED,
            max_distance: MAX_DISTANCE,
            ray_step: RAY_STEP,
            min_brightness: MIN_BRIGHTNESS,
            projection_constant: PROJECTION_CONSTANT,
            min_distance: MIN_DISTANCE,
            frame_ms: FRAME_MS,
        }
    }
}

impl Settings {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    /// Logical screen columns covered by one ray's sliver. Rounded up so
    /// adjacent slivers tile the screen.
    pub fn column_span(&self) -> u32 {
        if self.ray_count == 0 {
            return self.screen_width;
        }
        self.screen_width.div_ceil(self.ray_count).max(1)
    }

    /// Check every field the renderer divides by or clamps with.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.screen_width == 0 {
            return Err(SettingsError::Zero {
                name: "screen width",
            });
        }
        if self.screen_height == 0 {
            return Err(SettingsError::Zero {
                name: "screen height",
            });
        }
        if self.ray_count == 0 {
            return Err(SettingsError::Zero { name: "ray count" });
        }

        positive("tile size", self.tile_size)?;
        positive("move speed", self.move_speed)?;
        positive("rotation speed", self.rot_speed)?;
        positive("max distance", self.max_distance)?;
        positive("ray step", self.ray_step)?;
        positive("projection constant", self.projection_constant)?;
        positive("min distance", self.min_distance)?;

        if !(self.fov > 0.0 && self.fov < PI) {
            return Err(SettingsError::FieldOfView(self.fov));
        }
        if !(0.0..=1.0).contains(&self.min_brightness) {
            return Err(SettingsError::BrightnessFloor(self.min_brightness));
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), SettingsError> {
    // Also rejects NaN.
    if value > 0.0 && value.is_finite() {
        Ok(())
    } else {
        Err(SettingsError::NonPositive { name, value })
    }
}

//! Frame renderer - turns one ray fan into vertical wall slivers.
//!
//! For each ray `i` in `[0, N)`:
//!
//! - angle: `heading - fov/2 + fov * i / N` (left to right)
//! - brightness: `clamp(1 - distance / max_distance, min_brightness, 1)`
//! - height: `screen_height / max(distance, min_distance) * projection_constant`
//! - column: `i * screen_width / N`, centered vertically
//!
//! The renderer holds settings only; nothing carries over between frames.
//! Walls are monochrome: the intensity is used for every channel.

use crate::map::GridMap;
use crate::platform::DrawTarget;
use crate::player::Player;
use crate::raycast::{Ray, Raycaster};
use crate::settings::Settings;
use crate::types::FrameCommand;

/// Linear distance falloff with a floor.
#[inline]
pub fn brightness(distance: f64, max_distance: f64, min_brightness: f64) -> f64 {
    // max/min instead of clamp: never panics on an inverted range.
    (1.0 - distance / max_distance).max(min_brightness).min(1.0)
}

/// Projected sliver height in screen pixels.
#[inline]
pub fn wall_height(
    distance: f64,
    screen_height: u32,
    projection_constant: f64,
    min_distance: f64,
) -> f64 {
    screen_height as f64 / distance.max(min_distance) * projection_constant
}

/// Scale a `[0, 1]` brightness to a grayscale byte.
#[inline]
pub fn intensity(brightness: f64) -> u8 {
    // `as` saturates, so out-of-range input still yields 0 or 255.
    (brightness * 255.0) as u8
}

/// Vertical span `(top, bottom)` of a sliver centered on the screen.
#[inline]
pub fn sliver_span(wall_height: f64, screen_height: u32) -> (i32, i32) {
    // Height capped at i32::MAX so the sums below cannot overflow i64.
    let h = (wall_height as i64).clamp(0, i32::MAX as i64);
    let sh = screen_height as i64;
    let top = (sh - h) / 2;
    let bottom = (sh + h) / 2;
    (clamp_i32(top), clamp_i32(bottom))
}

fn clamp_i32(v: i64) -> i32 {
    v.clamp(i32::MIN as i64, i32::MAX as i64) as i32
}

#[derive(Debug, Clone, Copy)]
pub struct FrameRenderer {
    settings: Settings,
}

impl FrameRenderer {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Angle of ray `i` for a player facing `heading`.
    pub fn ray_angle(&self, heading: f64, i: u32) -> f64 {
        let s = &self.settings;
        heading - s.fov / 2.0 + s.fov * i as f64 / s.ray_count as f64
    }

    /// Screen column of ray `i`.
    pub fn column(&self, i: u32) -> i32 {
        let s = &self.settings;
        (i as u64 * s.screen_width as u64 / s.ray_count as u64) as i32
    }

    /// Shade and project ray `i` given its wall distance.
    pub fn command_for(&self, i: u32, distance: f64) -> FrameCommand {
        let s = &self.settings;
        let shade = brightness(distance, s.max_distance, s.min_brightness);
        let height = wall_height(
            distance,
            s.screen_height,
            s.projection_constant,
            s.min_distance,
        );
        let (top, bottom) = sliver_span(height, s.screen_height);

        FrameCommand {
            column: self.column(i),
            top,
            bottom,
            intensity: intensity(shade),
        }
    }

    /// Cast the full fan and hand each sliver to `f`, left to right.
    pub fn for_each_command(
        &self,
        map: &GridMap,
        player: &Player,
        mut f: impl FnMut(FrameCommand),
    ) {
        let caster = Raycaster::from_settings(map, &self.settings);
        for i in 0..self.settings.ray_count {
            let ray = Ray::new(player.x(), player.y(), self.ray_angle(player.angle(), i));
            let hit = caster.cast(ray);
            f(self.command_for(i, hit.distance));
        }
    }

    /// Draw the frame into `target`.
    pub fn render<T: DrawTarget + ?Sized>(&self, map: &GridMap, player: &Player, target: &mut T) {
        self.for_each_command(map, player, |cmd| {
            target.draw_vertical_line(cmd.column, cmd.top, cmd.bottom, cmd.intensity);
        });
    }
}

//! Player pose and movement.

use std::f64::consts::TAU;

use crate::collision::CollisionProbe;

/// Position in world units and heading in radians.
///
/// Heading 0 faces +x, and angles increase toward +y (screen "down" on the
/// map), so turning right adds to the angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Player {
    x: f64,
    y: f64,
    angle: f64,
}

impl Player {
    /// Create a player. The angle is normalized into `[0, 2π)`.
    pub fn new(x: f64, y: f64, angle: f64) -> Self {
        Self {
            x,
            y,
            angle: normalize_angle(angle),
        }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn angle(&self) -> f64 {
        self.angle
    }

    pub fn position(&self) -> (f64, f64) {
        (self.x, self.y)
    }

    /// Unit vector of the current heading.
    pub fn direction(&self) -> (f64, f64) {
        (self.angle.cos(), self.angle.sin())
    }

    /// Step `speed` units along the heading.
    ///
    /// Returns `false` (and leaves the position untouched) if the target
    /// point is blocked.
    pub fn move_forward(&mut self, speed: f64, probe: &CollisionProbe<'_>) -> bool {
        self.try_move(speed, probe)
    }

    /// Step `speed` units against the heading. Same blocking rules as
    /// [`Player::move_forward`].
    pub fn move_backward(&mut self, speed: f64, probe: &CollisionProbe<'_>) -> bool {
        self.try_move(-speed, probe)
    }

    fn try_move(&mut self, distance: f64, probe: &CollisionProbe<'_>) -> bool {
        let (dx, dy) = self.direction();
        let nx = self.x + dx * distance;
        let ny = self.y + dy * distance;

        if probe.is_blocked(nx, ny) {
            return false;
        }
        self.x = nx;
        self.y = ny;
        true
    }

    /// Turn by `delta` radians. Non-finite deltas are ignored.
    pub fn rotate(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.angle = normalize_angle(self.angle + delta);
    }
}

/// Wrap an angle into `[0, 2π)`, for any finite input.
///
/// Non-finite input maps to 0.
///
/// # Examples
///
/// ```
/// use std::f64::consts::TAU;
/// use tui_raycast_core::normalize_angle;
///
/// assert!((normalize_angle(TAU + 0.1) - 0.1).abs() < 1e-12);
/// assert!((normalize_angle(-0.5) - (TAU - 0.5)).abs() < 1e-12);
/// assert_eq!(normalize_angle(TAU), 0.0);
/// ```
pub fn normalize_angle(angle: f64) -> f64 {
    if !angle.is_finite() {
        return 0.0;
    }
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}

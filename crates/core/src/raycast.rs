//! Raycaster - fixed-step march from the player to the nearest wall.
//!
//! Samples are taken at `d = k * step` for k = 0, 1, 2, ... and the first sample
//! that lands in a solid cell ends the ray. The returned distance therefore
//! over-estimates the true wall distance by less than one step.
//!
//! Cost is `O(max_distance / step)` per ray, which makes this the hot loop of
//! a frame. A grid DDA would give exact distances in `O(cells crossed)`.

use crate::collision::CollisionProbe;
use crate::map::GridMap;
use crate::settings::Settings;

/// A ray to be cast. Not stored beyond the frame that creates it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin_x: f64,
    pub origin_y: f64,
    pub angle: f64,
}

impl Ray {
    pub fn new(origin_x: f64, origin_y: f64, angle: f64) -> Self {
        Self {
            origin_x,
            origin_y,
            angle,
        }
    }
}

/// Result of a cast: distance to the first solid sample, or the sensing range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub distance: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct Raycaster<'a> {
    probe: CollisionProbe<'a>,
    max_distance: f64,
    step: f64,
}

impl<'a> Raycaster<'a> {
    pub fn new(probe: CollisionProbe<'a>, max_distance: f64, step: f64) -> Self {
        Self {
            probe,
            max_distance,
            step,
        }
    }

    pub fn from_settings(map: &'a GridMap, settings: &Settings) -> Self {
        Self::new(
            CollisionProbe::new(map, settings.tile_size),
            settings.max_distance,
            settings.ray_step,
        )
    }

    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    pub fn cast(&self, ray: Ray) -> RayHit {
        let (dx, dy) = (ray.angle.cos(), ray.angle.sin());

        // Multiply instead of accumulating so error does not build up per step.
        let mut k: u64 = 0;
        loop {
            let distance = k as f64 * self.step;
            if !(distance < self.max_distance) {
                break;
            }
            let x = ray.origin_x + distance * dx;
            let y = ray.origin_y + distance * dy;
            if self.probe.is_blocked(x, y) {
                return RayHit { distance };
            }
            k += 1;
        }

        RayHit {
            distance: self.max_distance,
        }
    }

    /// Convenience wrapper returning only the distance.
    pub fn distance(&self, origin_x: f64, origin_y: f64, angle: f64) -> f64 {
        self.cast(Ray::new(origin_x, origin_y, angle)).distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn caster(map: &GridMap) -> Raycaster<'_> {
        Raycaster::from_settings(map, &Settings::default())
    }

    #[test]
    fn east_wall_from_spawn() {
        let map = GridMap::default();
        // Interior face of the east wall is at x = 7 * 64 = 448.
        assert_eq!(caster(&map).distance(300.0, 300.0, 0.0), 148.0);
    }

    #[test]
    fn cardinal_directions_from_spawn() {
        let map = GridMap::default();
        let rc = caster(&map);
        // West face at x = 64, north face at y = 64, south face at y = 448.
        assert!((rc.distance(300.0, 300.0, PI) - 236.0).abs() <= 1.0);
        assert!((rc.distance(300.0, 300.0, -FRAC_PI_2) - 236.0).abs() <= 1.0);
        assert!((rc.distance(300.0, 300.0, FRAC_PI_2) - 148.0).abs() <= 1.0);
    }

    #[test]
    fn origin_inside_wall_hits_immediately() {
        let map = GridMap::default();
        assert_eq!(caster(&map).distance(10.0, 10.0, 1.0), 0.0);
    }

    #[test]
    fn open_field_caps_at_max_distance() {
        // 40x3 corridor: looking down the long axis runs past the short range.
        let map = GridMap::arena(40, 3).unwrap();
        let rc = Raycaster::new(CollisionProbe::new(&map, 64.0), 100.0, 1.0);
        assert_eq!(rc.distance(96.0, 96.0, 0.0), 100.0);
    }

    #[test]
    fn coarser_step_stays_within_one_step() {
        let map = GridMap::default();
        let rc = Raycaster::new(CollisionProbe::new(&map, 64.0), 800.0, 8.0);
        let d = rc.distance(300.0, 300.0, 0.0);
        assert!(d >= 148.0 && d < 148.0 + 8.0, "got {d}");
    }
}

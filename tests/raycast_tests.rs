//! Raycaster distance and accuracy tests

use std::f64::consts::{FRAC_PI_4, TAU};

use proptest::prelude::*;

use tui_raycast::core::{CollisionProbe, GridMap, Ray, Raycaster, Settings};
use tui_raycast::types::{MAX_DISTANCE, RAY_STEP, TILE_SIZE};

/// Distance from an interior point of the default arena to the wall along `angle`.
/// The open interior spans [64, 448] on both axes.
fn analytic_distance(ox: f64, oy: f64, angle: f64) -> f64 {
    let (dx, dy) = (angle.cos(), angle.sin());
    let lo = TILE_SIZE;
    let hi = TILE_SIZE * 7.0;

    let tx = if dx > 0.0 {
        (hi - ox) / dx
    } else if dx < 0.0 {
        (lo - ox) / dx
    } else {
        f64::INFINITY
    };
    let ty = if dy > 0.0 {
        (hi - oy) / dy
    } else if dy < 0.0 {
        (lo - oy) / dy
    } else {
        f64::INFINITY
    };
    tx.min(ty)
}

#[test]
fn test_cast_returns_ray_hit() {
    let map = GridMap::default();
    let rc = Raycaster::from_settings(&map, &Settings::default());
    let hit = rc.cast(Ray::new(300.0, 300.0, 0.0));
    assert_eq!(hit.distance, 148.0);
}

#[test]
fn test_diagonal_into_corner() {
    let map = GridMap::default();
    let rc = Raycaster::from_settings(&map, &Settings::default());
    // From (256, 256) at 45°, both faces are 192 units away on each axis.
    let expected = 192.0 * 2f64.sqrt();
    let d = rc.distance(256.0, 256.0, FRAC_PI_4);
    assert!((d - expected).abs() <= RAY_STEP, "got {d}, expected {expected}");
}

#[test]
fn test_pillar_blocks_before_outer_wall() {
    let map = GridMap::from_ascii(&[
        "########", //
        "#......#", //
        "#......#", //
        "#...#..#", //
        "#......#", //
        "#......#", //
        "#......#", //
        "########",
    ])
    .unwrap();
    let rc = Raycaster::from_settings(&map, &Settings::default());

    // Pillar at col 4, row 3 spans x in [256, 320). From x = 100 on row 3's center line.
    let d = rc.distance(100.0, 224.0, 0.0);
    assert_eq!(d, 156.0);

    // One row lower the ray passes under the pillar to the east wall.
    assert_eq!(rc.distance(100.0, 300.0, 0.0), 348.0);
}

#[test]
fn test_short_range_caps_distance() {
    let map = GridMap::default();
    let probe = CollisionProbe::new(&map, TILE_SIZE);
    let rc = Raycaster::new(probe, 50.0, RAY_STEP);
    assert_eq!(rc.distance(300.0, 300.0, 0.0), 50.0);
    assert_eq!(rc.max_distance(), 50.0);
}

proptest! {
    #[test]
    fn cast_is_within_one_step_of_analytic(
        ox in 64.0f64..448.0,
        oy in 64.0f64..448.0,
        angle in 0.0f64..TAU,
    ) {
        let map = GridMap::default();
        let rc = Raycaster::from_settings(&map, &Settings::default());

        let d = rc.distance(ox, oy, angle);
        let expected = analytic_distance(ox, oy, angle);

        prop_assert!(d <= MAX_DISTANCE);
        prop_assert!(
            (d - expected).abs() <= RAY_STEP + 1e-6,
            "origin ({}, {}) angle {}: got {}, expected {}",
            ox, oy, angle, d, expected
        );
    }

    #[test]
    fn coarse_steps_keep_the_bound(
        ox in 64.0f64..448.0,
        oy in 64.0f64..448.0,
        angle in 0.0f64..TAU,
        step in 1.0f64..16.0,
    ) {
        let map = GridMap::default();
        let rc = Raycaster::new(CollisionProbe::new(&map, TILE_SIZE), MAX_DISTANCE, step);

        let d = rc.distance(ox, oy, angle);
        let expected = analytic_distance(ox, oy, angle);
        prop_assert!((d - expected).abs() <= step + 1e-6);
    }
}

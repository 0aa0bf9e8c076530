//! Grid map and collision probe tests

use proptest::prelude::*;

use tui_raycast::core::{CellState, CollisionProbe, GridMap, MapError};
use tui_raycast::types::{MAP_HEIGHT, MAP_WIDTH, TILE_SIZE};

#[test]
fn test_default_map_dimensions() {
    let map = GridMap::default();
    assert_eq!(map.width(), MAP_WIDTH);
    assert_eq!(map.height(), MAP_HEIGHT);
    assert_eq!(map.cells().len(), MAP_WIDTH * MAP_HEIGHT);
}

#[test]
fn test_border_cells_are_solid() {
    let map = GridMap::default();
    for col in 0..MAP_WIDTH as i32 {
        assert!(map.is_solid(col, 0));
        assert!(map.is_solid(col, MAP_HEIGHT as i32 - 1));
    }
    for row in 0..MAP_HEIGHT as i32 {
        assert!(map.is_solid(0, row));
        assert!(map.is_solid(MAP_WIDTH as i32 - 1, row));
    }
}

#[test]
fn test_custom_map_with_pillar() {
    let map = GridMap::from_ascii(&[
        "######", //
        "#....#", //
        "#.##.#", //
        "#....#", //
        "######",
    ])
    .unwrap();

    assert_eq!(map.cell(2, 2), Some(CellState::Solid));
    assert_eq!(map.cell(1, 2), Some(CellState::Empty));

    let probe = CollisionProbe::new(&map, 10.0);
    assert!(probe.is_blocked(25.0, 25.0));
    assert!(!probe.is_blocked(15.0, 25.0));
}

#[test]
fn test_open_border_rejected_on_every_side() {
    for rows in [
        ["#.#", "#.#", "###"],
        ["###", "#..", "###"],
        ["###", "#.#", "#.#"],
        ["###", "..#", "###"],
    ] {
        assert!(matches!(
            GridMap::from_ascii(&rows),
            Err(MapError::OpenBorder { .. })
        ));
    }
}

#[test]
fn test_map_errors_render_readably() {
    let err = GridMap::from_ascii(&["###", "#?#", "###"]).unwrap_err();
    assert_eq!(err.to_string(), "unknown map glyph '?' at (1, 1)");
}

proptest! {
    #[test]
    fn out_of_bounds_cells_are_solid(col in -1000i32..1000, row in -1000i32..1000) {
        let map = GridMap::default();
        let inside = (0..MAP_WIDTH as i32).contains(&col) && (0..MAP_HEIGHT as i32).contains(&row);
        prop_assume!(!inside);
        prop_assert!(map.is_solid(col, row));
    }

    #[test]
    fn probe_agrees_with_truncated_cell(x in -500.0f64..1000.0, y in -500.0f64..1000.0) {
        let map = GridMap::default();
        let probe = CollisionProbe::new(&map, TILE_SIZE);
        let col = (x / TILE_SIZE) as i32;
        let row = (y / TILE_SIZE) as i32;
        prop_assert_eq!(probe.is_blocked(x, y), map.is_solid(col, row));
    }

    #[test]
    fn arena_interior_is_empty(w in 3usize..20, h in 3usize..20) {
        let map = GridMap::arena(w, h).unwrap();
        for row in 1..h as i32 - 1 {
            for col in 1..w as i32 - 1 {
                prop_assert!(!map.is_solid(col, row));
            }
        }
    }
}

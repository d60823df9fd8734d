#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests for mapping primitives and the visor wiring.

use led_visor::led2d::layout::LedLayout;
use led_visor::led2d::{Bitmap, LED_COUNT, PANEL_HEIGHT, PANEL_WIDTH, VISOR_LAYOUT};

const MOUNTED_3X2: LedLayout<6, 3, 2> = LedLayout::serpentine_column_major().rotate_180();
const _: () = assert!(VISOR_LAYOUT.len() == LED_COUNT);

#[test]
fn linear_row_major_3x2_matches_expected() {
    const MAP: LedLayout<6, 3, 2> =
        LedLayout::new([(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    assert_eq!(
        *MAP.index_to_xy(),
        [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1),]
    );
}

#[test]
fn rotate_cw_swaps_dimensions() {
    const MAP: LedLayout<6, 3, 2> =
        LedLayout::new([(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
    let rotated = MAP.rotate_cw();
    assert_eq!(
        *rotated.index_to_xy(),
        [(1, 0), (1, 1), (1, 2), (0, 0), (0, 1), (0, 2),]
    );
    assert_eq!((rotated.width(), rotated.height()), (2, 3));
}

#[test]
fn serpentine_transforms_match_expected() {
    const SERPENTINE: LedLayout<6, 3, 2> = LedLayout::<6, 3, 2>::serpentine_column_major();
    assert_eq!(
        *SERPENTINE.index_to_xy(),
        [(0, 0), (0, 1), (1, 1), (1, 0), (2, 0), (2, 1),]
    );

    let rotated_cw = SERPENTINE.rotate_cw();
    assert_eq!(
        *rotated_cw.index_to_xy(),
        [(1, 0), (0, 0), (0, 1), (1, 1), (1, 2), (0, 2),]
    );

    let rotated_180 = SERPENTINE.rotate_180();
    assert_eq!(
        *rotated_180.index_to_xy(),
        [(2, 1), (2, 0), (1, 0), (1, 1), (0, 1), (0, 0),]
    );
}

#[test]
fn rotate_180_twice_is_identity() {
    const SERPENTINE: LedLayout<6, 3, 2> = LedLayout::serpentine_column_major();
    assert!(SERPENTINE.rotate_180().rotate_180().equals(&SERPENTINE));
    assert!(!SERPENTINE.rotate_180().equals(&SERPENTINE));
}

#[test]
fn map_bitmap_small_panel_matches_expected() {
    // Rotated 180°: "#.." / ".##" becomes "##." / "..#".
    // Column 0 down, column 1 up, column 2 down.
    let bitmap = Bitmap::<3, 2>::from_art(["#..", ".##"]);
    let order = MOUNTED_3X2.map_bitmap(&bitmap);
    assert_eq!(*order, [true, false, false, true, false, true]);
}

#[test]
fn visor_mapping_places_every_cell_by_parity() {
    // After the 180° rotation, cell (row, column) lands on column * H + row for even
    // columns and column * H + (H - 1 - row) for odd ones.
    for row in 0..PANEL_HEIGHT {
        for column in 0..PANEL_WIDTH {
            let mut bitmap = Bitmap::<PANEL_WIDTH, PANEL_HEIGHT>::new();
            bitmap.set(PANEL_WIDTH - 1 - column, PANEL_HEIGHT - 1 - row, true);

            let order = VISOR_LAYOUT.map_bitmap(&bitmap);

            let expected_index = if column % 2 == 0 {
                column * PANEL_HEIGHT + row
            } else {
                column * PANEL_HEIGHT + (PANEL_HEIGHT - 1 - row)
            };
            assert_eq!(order.lit_count(), 1);
            assert!(order[expected_index], "row {row} column {column}");
        }
    }
}

#[test]
fn visor_mapping_length_is_fixed() {
    let blank = Bitmap::<PANEL_WIDTH, PANEL_HEIGHT>::new();
    let mut full = blank;
    for row in 0..PANEL_HEIGHT {
        for column in 0..PANEL_WIDTH {
            full.set(column, row, true);
        }
    }

    let blank_order = VISOR_LAYOUT.map_bitmap(&blank);
    let full_order = VISOR_LAYOUT.map_bitmap(&full);

    assert_eq!(blank_order.len(), LED_COUNT);
    assert_eq!(full_order.len(), LED_COUNT);
    assert_eq!(blank_order.lit_count(), 0);
    assert_eq!(full_order.lit_count(), LED_COUNT);
}

#[test]
fn visor_mapping_is_deterministic() {
    let bitmap = Bitmap::<PANEL_WIDTH, PANEL_HEIGHT>::from_art([
        "#..............................#",
        ".#............................#.",
        "..#..........................#..",
        "...#........................#...",
        "....#......................#....",
        ".....#....................#.....",
        "......#..................#......",
        ".......#................#.......",
        "........#..............#........",
        ".........#............#.........",
        "..........#..........#..........",
        "...........#........#...........",
        "............#......#............",
        ".............#....#.............",
        "..............#..#..............",
        "...............##...............",
    ]);
    assert_eq!(
        VISOR_LAYOUT.map_bitmap(&bitmap),
        VISOR_LAYOUT.map_bitmap(&bitmap)
    );
    assert_eq!(VISOR_LAYOUT.map_bitmap(&bitmap).lit_count(), bitmap.lit_count());
}

#[test]
fn visor_top_left_lands_on_last_led() {
    let mut bitmap = Bitmap::<PANEL_WIDTH, PANEL_HEIGHT>::new();
    bitmap.set(0, 0, true);
    let order = VISOR_LAYOUT.map_bitmap(&bitmap);
    // Rotated to the bottom-right; the last column (odd) runs bottom to top.
    assert!(order[(PANEL_WIDTH - 1) * PANEL_HEIGHT]);
}

#[test]
#[should_panic(expected = "duplicate (col,row) in mapping")]
fn new_panics_on_duplicate_cell() {
    let _ = LedLayout::<3, 3, 1>::new([(0, 0), (1, 0), (1, 0)]);
}

#[test]
#[should_panic(expected = "column out of bounds")]
fn new_panics_on_out_of_bounds_column() {
    let _ = LedLayout::<3, 3, 1>::new([(0, 0), (1, 0), (3, 0)]);
}

#[test]
#[should_panic(expected = "row out of bounds")]
fn new_panics_on_out_of_bounds_row() {
    let _ = LedLayout::<3, 1, 3>::new([(0, 0), (0, 1), (0, 3)]);
}

#[test]
#[should_panic(expected = "W*H must equal N")]
fn new_panics_on_mismatched_dimensions() {
    let _ = LedLayout::<5, 3, 2>::new([(0, 0), (1, 0), (2, 0), (0, 1), (1, 1)]);
}

#[test]
#[should_panic(expected = "art row length must equal W")]
fn from_art_panics_on_short_row() {
    let _ = Bitmap::<3, 2>::from_art(["#..", "##"]);
}

#[test]
#[should_panic(expected = "art rows may only contain '#' and '.'")]
fn from_art_panics_on_unknown_character() {
    let _ = Bitmap::<3, 1>::from_art(["#x."]);
}

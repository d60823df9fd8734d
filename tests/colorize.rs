#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests for coloring masks, strip frames, and the palette.

use led_visor::led_strip::{
    ColorIndex, Frame1d, PALETTE_DEFAULT, PALETTE_LEN, RGB8, colorize, colors,
};
use led_visor::led2d::{Bitmap, Frame2d, PixelOrder, VISOR_LAYOUT};

const OFF: RGB8 = RGB8::new(0, 0, 0);

#[test]
fn colorize_lights_only_lit_entries() {
    let order = PixelOrder([false, true, true, false]);
    let frame = colorize(&order, colors::BLUE);
    assert_eq!(*frame, [OFF, colors::BLUE, colors::BLUE, OFF]);
}

#[test]
fn colorize_with_black_keeps_length_and_order() {
    let order = PixelOrder([true, false, true]);
    let frame = colorize(&order, OFF);
    assert_eq!(frame.len(), 3);
    assert_eq!(*frame, [OFF; 3]);
}

#[test]
fn colorize_all_unlit_is_all_off() {
    let order = PixelOrder([false; 8]);
    assert_eq!(colorize(&order, colors::WHITE), Frame1d::<8>::new());
}

#[test]
fn colorized_face_round_trips_through_the_layout() {
    let bitmap = Bitmap::<32, 16>::from_art([
        "................................",
        "................................",
        ".....##..................##.....",
        "....####................####....",
        "................................",
        "................................",
        "................................",
        "................................",
        "................................",
        "................................",
        "....#......................#....",
        ".....#....................#.....",
        "......##................##......",
        "........################........",
        "................................",
        "................................",
    ]);
    let green = PALETTE_DEFAULT.color(ColorIndex::FIRST);
    let frame = colorize(&VISOR_LAYOUT.map_bitmap(&bitmap), green);

    let panel = Frame2d::from_strip(&*frame, &VISOR_LAYOUT);
    for (y_index, row) in bitmap.rows().iter().enumerate() {
        for (x_index, lit) in row.iter().enumerate() {
            let expected = if *lit { green } else { OFF };
            assert_eq!(panel[(x_index, y_index)], expected, "x {x_index} y {y_index}");
        }
    }
}

#[test]
fn from_pixels_pads_and_truncates() {
    let short = Frame1d::<4>::from_pixels(&[colors::RED, colors::GREEN]);
    assert_eq!(*short, [colors::RED, colors::GREEN, OFF, OFF]);

    let long = Frame1d::<2>::from_pixels(&[colors::RED, colors::GREEN, colors::BLUE]);
    assert_eq!(*long, [colors::RED, colors::GREEN]);
}

#[test]
fn color_index_rejects_out_of_range() {
    assert!(ColorIndex::new(10).is_some());
    assert!(ColorIndex::new(11).is_none());
    assert!(ColorIndex::new(u8::MAX).is_none());
}

#[test]
fn color_index_next_wraps() {
    let mut index = ColorIndex::FIRST;
    for expected in 1..PALETTE_LEN {
        index = index.next();
        assert_eq!(usize::from(index.get()), expected);
    }
    assert_eq!(index.next(), ColorIndex::FIRST);
}

#[test]
fn default_palette_matches_visor_colors() {
    let color = |index| PALETTE_DEFAULT.color(ColorIndex::new(index).expect("index in range"));
    assert_eq!(color(0), RGB8::new(0, 255, 0));
    assert_eq!(color(5), RGB8::new(192, 0, 255));
    assert_eq!(color(6), RGB8::new(255, 0, 0));
    assert_eq!(color(7), RGB8::new(255, 48, 0));
    assert_eq!(color(10), RGB8::new(255, 255, 255));
}

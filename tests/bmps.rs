#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests for BMP face artwork.

use embassy_futures::block_on;
use led_visor::Error;
use led_visor::face::{BmpFaces, FaceId, FaceSource, decode_bmp_bitmap};
use led_visor::led2d::{Bitmap, PANEL_HEIGHT, PANEL_WIDTH, VISOR_LAYOUT};
use led_visor::serial::ScriptedKeycodes;
use led_visor::to_png::PngPanel;
use led_visor::visor::{StopSignal, VISOR_CONFIG_DEFAULT, Visor};
use std::error::Error as StdError;
use std::fs;
use std::io::Cursor;

type PanelBitmap = Bitmap<PANEL_WIDTH, PANEL_HEIGHT>;

const BLACK: [u8; 3] = [0, 0, 0];
const WHITE: [u8; 3] = [255, 255, 255];

const FROWN: [&str; PANEL_HEIGHT] = [
    "................................",
    "................................",
    "...######..............######...",
    "................................",
    "....##....................##....",
    "....##....................##....",
    "................................",
    "................................",
    "................................",
    "................................",
    "................................",
    "........################........",
    ".......#................#.......",
    "......#..................#......",
    "................................",
    "...............................#",
];

/// Encode a 1-bit, bottom-up BMP. Lit cells use color table entry 1.
fn bmp_1bit<const W: usize, const H: usize>(
    bitmap: &Bitmap<W, H>,
    color_table: [[u8; 3]; 2],
) -> Vec<u8> {
    let row_size = W.div_ceil(32) * 4;
    let pixel_offset: u32 = 14 + 40 + 8;
    let image_size = (row_size * H) as u32;

    let mut bytes = Vec::new();
    // BITMAPFILEHEADER
    bytes.extend_from_slice(b"BM");
    bytes.extend_from_slice(&(pixel_offset + image_size).to_le_bytes());
    bytes.extend_from_slice(&0u32.to_le_bytes());
    bytes.extend_from_slice(&pixel_offset.to_le_bytes());
    // BITMAPINFOHEADER
    bytes.extend_from_slice(&40u32.to_le_bytes());
    bytes.extend_from_slice(&(W as i32).to_le_bytes());
    bytes.extend_from_slice(&(H as i32).to_le_bytes());
    bytes.extend_from_slice(&1u16.to_le_bytes()); // planes
    bytes.extend_from_slice(&1u16.to_le_bytes()); // bits per pixel
    bytes.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
    bytes.extend_from_slice(&image_size.to_le_bytes());
    bytes.extend_from_slice(&2835i32.to_le_bytes());
    bytes.extend_from_slice(&2835i32.to_le_bytes());
    bytes.extend_from_slice(&2u32.to_le_bytes()); // colors used
    bytes.extend_from_slice(&0u32.to_le_bytes());
    for [red, green, blue] in color_table {
        bytes.extend_from_slice(&[blue, green, red, 0]);
    }
    for y_index in (0..H).rev() {
        let mut row = vec![0u8; row_size];
        for x_index in 0..W {
            if bitmap.is_lit(x_index, y_index) {
                row[x_index / 8] |= 0x80 >> (x_index % 8);
            }
        }
        bytes.extend_from_slice(&row);
    }
    bytes
}

#[test]
fn one_bit_face_loads_as_drawn() -> Result<(), Box<dyn StdError>> {
    let dir = tempfile::tempdir()?;
    let expected = PanelBitmap::from_art(FROWN);
    let faces = BmpFaces::new(dir.path());
    assert_eq!(faces.path_for(FaceId::Angry), dir.path().join("11_angry.bmp"));
    fs::write(faces.path_for(FaceId::Angry), bmp_1bit(&expected, [BLACK, WHITE]))?;

    let bitmap: PanelBitmap = faces.load(FaceId::Angry)?;

    assert_eq!(bitmap, expected);
    Ok(())
}

#[test]
fn color_table_decides_which_cells_are_lit() -> Result<(), Box<dyn StdError>> {
    // Bit 1 is black here, so the drawn cells come out dark.
    let drawn = Bitmap::<3, 2>::from_art(["#..", ".##"]);
    let data = bmp_1bit(&drawn, [WHITE, BLACK]);
    let bitmap: Bitmap<3, 2> = decode_bmp_bitmap(Cursor::new(data), FaceId::Flat)?;
    assert_eq!(bitmap, Bitmap::from_art([".##", "#.."]));

    // Dark red falls below the threshold; light gray does not.
    let data = bmp_1bit(&drawn, [[200, 200, 200], [128, 0, 0]]);
    let bitmap: Bitmap<3, 2> = decode_bmp_bitmap(Cursor::new(data), FaceId::Flat)?;
    assert_eq!(bitmap, Bitmap::from_art([".##", "#.."]));
    Ok(())
}

#[test]
fn wrong_size_bmp_is_rejected() -> Result<(), Box<dyn StdError>> {
    let data = bmp_1bit(&Bitmap::<16, 16>::new(), [BLACK, WHITE]);
    let result: Result<PanelBitmap, Error> = decode_bmp_bitmap(Cursor::new(data), FaceId::Wink);

    match result {
        Err(Error::FaceDimensions {
            face,
            expected,
            actual,
        }) => {
            assert_eq!(face, FaceId::Wink);
            assert_eq!(expected, (32, 16));
            assert_eq!(actual, (16, 16));
        }
        other => panic!("expected FaceDimensions, got {other:?}"),
    }
    Ok(())
}

#[test]
fn malformed_bmp_is_a_decoding_error() {
    let result: Result<PanelBitmap, Error> =
        decode_bmp_bitmap(Cursor::new(b"BM not a bitmap".to_vec()), FaceId::Dead);
    assert!(matches!(result, Err(Error::BmpDecoding(_))));
}

#[test]
fn missing_bmp_file_is_an_io_error() -> Result<(), Box<dyn StdError>> {
    let dir = tempfile::tempdir()?;
    let result: Result<PanelBitmap, Error> = BmpFaces::new(dir.path()).load(FaceId::Dead);
    assert!(matches!(result, Err(Error::Io(_))));
    Ok(())
}

#[test]
fn preview_session_from_bmp_faces() -> Result<(), Box<dyn StdError>> {
    let faces_dir = tempfile::tempdir()?;
    let output_dir = tempfile::tempdir()?;
    let frown = PanelBitmap::from_art(FROWN);
    let faces = BmpFaces::new(faces_dir.path());
    for face in [FaceId::Happy, FaceId::Angry] {
        fs::write(faces.path_for(face), bmp_1bit(&frown, [BLACK, WHITE]))?;
    }

    let stop = StopSignal::new();
    let mut keycodes = ScriptedKeycodes::from_bytes(&[0x0B], &stop);
    let panel = PngPanel::new(VISOR_LAYOUT, output_dir.path()).with_max_dimension(64);
    let mut visor = Visor::new(&VISOR_LAYOUT, &VISOR_CONFIG_DEFAULT, faces, panel);

    block_on(async {
        visor.start().await?;
        visor.run(&mut keycodes, &stop).await
    })?;

    let panel = visor.display();
    assert_eq!(panel.rendered_count(), 2);
    let lit = panel
        .last_frame()
        .ok_or("no frame rendered")?
        .iter()
        .filter(|pixel| **pixel != Default::default())
        .count();
    assert_eq!(lit, frown.lit_count());
    // The bottom-right cell of the art lands on LED 0 once rotated.
    assert_ne!(panel.last_frame().map(|frame| frame[0]), Some(Default::default()));
    Ok(())
}

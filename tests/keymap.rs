#![cfg(feature = "host")]
#![allow(missing_docs)]
//! Host-level tests for the keymap and the built-in faces.

use led_visor::Error;
use led_visor::face::{
    BUILTIN_FACES, BuiltinFaces, CYCLE_CODE_DEFAULT, FaceId, FaceSource, KEYMAP_DEFAULT, Keymap,
    RELEASE_CODE_DEFAULT,
};
use led_visor::led2d::{Bitmap, PANEL_HEIGHT, PANEL_WIDTH};
use led_visor::led_strip::ColorIndex;

const _: () = assert!(KEYMAP_DEFAULT.release_code() == 0x00);
const _: () = assert!(KEYMAP_DEFAULT.cycle_code() == 0x0C);

#[test]
fn default_keymap_faces_match_keypad() {
    let faces: Vec<(u8, FaceId)> = KEYMAP_DEFAULT.face_keys().collect();
    assert_eq!(
        faces,
        [
            (0x01, FaceId::Happy),
            (0x02, FaceId::Wide),
            (0x03, FaceId::Sleepy),
            (0x04, FaceId::Wink),
            (0x05, FaceId::Boop),
            (0x06, FaceId::Dizzy),
            (0x07, FaceId::Flat),
            (0x08, FaceId::Small),
            (0x09, FaceId::Hearts),
            (0x0A, FaceId::Dead),
            (0x0B, FaceId::Angry),
            (0x0D, FaceId::Beep),
            (0x0E, FaceId::Awoo),
            (0x0F, FaceId::No),
            (0x10, FaceId::Face),
        ]
    );
}

#[test]
fn default_keymap_presets_match_keypad() {
    let presets: Vec<(u8, u8)> = KEYMAP_DEFAULT
        .preset_keys()
        .map(|(keycode, color_index)| (keycode, color_index.get()))
        .collect();
    assert_eq!(
        presets,
        [
            (0x09, 5),
            (0x0A, 6),
            (0x0B, 6),
            (0x0D, 0),
            (0x0E, 7),
            (0x0F, 6),
            (0x10, 2),
        ]
    );
}

#[test]
fn default_keymap_special_codes() {
    assert_eq!(KEYMAP_DEFAULT.default_face(), FaceId::Happy);
    for keycode in [RELEASE_CODE_DEFAULT, CYCLE_CODE_DEFAULT, 0x11, 0xFF] {
        assert_eq!(KEYMAP_DEFAULT.face_for(keycode), None);
        assert_eq!(KEYMAP_DEFAULT.preset_for(keycode), None);
    }
}

#[test]
fn every_face_has_a_keycode() {
    for face in FaceId::ALL {
        assert!(
            KEYMAP_DEFAULT.face_keys().any(|(_, mapped)| mapped == face),
            "{face:?}"
        );
    }
}

#[test]
fn face_file_names_are_numbered_in_catalog_order() {
    assert_eq!(FaceId::Happy.file_name(), "01_happy.bmp");
    assert_eq!(FaceId::Face.file_name(), "15_face.bmp");
    for (position, face) in FaceId::ALL.into_iter().enumerate() {
        let stem = format!("{:02}_{}", position + 1, face.name());
        assert_eq!(face.file_stem(), stem);
        assert_eq!(face.file_name(), format!("{stem}.bmp"));
    }
}

#[test]
fn builtin_faces_cover_the_catalog() {
    for face in FaceId::ALL {
        let bitmap: Bitmap<PANEL_WIDTH, PANEL_HEIGHT> =
            BUILTIN_FACES.load(face).expect("built-in face");
        assert!(bitmap.lit_count() > 0, "{face:?} is blank");
    }
}

#[test]
fn builtin_faces_are_distinct() {
    let bitmaps: Vec<Bitmap<PANEL_WIDTH, PANEL_HEIGHT>> = FaceId::ALL
        .into_iter()
        .map(|face| BUILTIN_FACES.load(face).expect("built-in face"))
        .collect();
    for (i, first) in bitmaps.iter().enumerate() {
        for second in &bitmaps[i + 1..] {
            assert_ne!(first, second);
        }
    }
}

#[test]
fn missing_builtin_face_is_an_error() {
    static ONLY_HAPPY: [(FaceId, Bitmap<3, 1>); 1] = [(FaceId::Happy, Bitmap::from_art(["#.#"]))];
    let faces = BuiltinFaces::new(&ONLY_HAPPY);

    assert!(faces.load(FaceId::Happy).is_ok());
    assert!(matches!(
        faces.load(FaceId::Dead),
        Err(Error::FaceMissing(FaceId::Dead))
    ));
}

#[test]
fn custom_keymap_lookups() {
    const KEYMAP: Keymap = Keymap::new(
        &[(0x20, FaceId::Wink), (0x21, FaceId::Dead)],
        &[(0x21, 6), (0x22, 3)],
        0xFF,
        0x30,
    );
    assert_eq!(KEYMAP.default_face(), FaceId::Wink);
    assert_eq!(KEYMAP.face_for(0x21), Some(FaceId::Dead));
    assert_eq!(KEYMAP.preset_for(0x21), ColorIndex::new(6));
    // A preset key need not select a face.
    assert_eq!(KEYMAP.face_for(0x22), None);
    assert_eq!(KEYMAP.preset_for(0x22), ColorIndex::new(3));
}

#[test]
#[should_panic(expected = "duplicate face keycode")]
fn keymap_panics_on_duplicate_face_key() {
    let _ = Keymap::new(&[(0x01, FaceId::Happy), (0x01, FaceId::Wide)], &[], 0x00, 0x0C);
}

#[test]
#[should_panic(expected = "duplicate preset keycode")]
fn keymap_panics_on_duplicate_preset_key() {
    let _ = Keymap::new(&[(0x01, FaceId::Happy)], &[(0x02, 1), (0x02, 3)], 0x00, 0x0C);
}

#[test]
#[should_panic(expected = "preset index outside the palette")]
fn keymap_panics_on_preset_outside_palette() {
    let _ = Keymap::new(&[(0x01, FaceId::Happy)], &[(0x01, 11)], 0x00, 0x0C);
}

#[test]
#[should_panic(expected = "release code collides with a catalog key")]
fn keymap_panics_on_release_collision() {
    let _ = Keymap::new(&[(0x00, FaceId::Happy)], &[], 0x00, 0x0C);
}

#[test]
#[should_panic(expected = "cycle code collides with a catalog key")]
fn keymap_panics_on_cycle_collision() {
    let _ = Keymap::new(&[(0x01, FaceId::Happy)], &[(0x0C, 2)], 0x00, 0x0C);
}

#[test]
#[should_panic(expected = "keymap needs at least one face")]
fn keymap_panics_without_faces() {
    let _ = Keymap::new(&[], &[], 0x00, 0x0C);
}

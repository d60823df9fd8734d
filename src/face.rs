//! Face catalog: which faces exist, which keycodes select them, and where their bitmaps
//! come from.
//!
//! A [`Keymap`] is a pair of 256-entry lookup tables built and checked at compile time.
//! Bitmaps come from a [`FaceSource`]: [`BUILTIN_FACES`] on the Pico, or
//! [`BmpFaces`] and [`PngFaces`] (host) when previewing artwork from disk.
//!
//! # Example
//!
//! ```rust
//! use led_visor::face::{FaceId, KEYMAP_DEFAULT};
//! use led_visor::led_strip::ColorIndex;
//!
//! assert_eq!(KEYMAP_DEFAULT.face_for(0x09), Some(FaceId::Hearts));
//! assert_eq!(KEYMAP_DEFAULT.preset_for(0x09), ColorIndex::new(5));
//! assert_eq!(KEYMAP_DEFAULT.face_for(0x0C), None);
//! ```

mod builtin;
#[cfg(feature = "host")]
mod bmp_faces;
#[cfg(feature = "host")]
mod png_faces;

#[cfg(feature = "host")]
pub use bmp_faces::{BmpFaces, decode_bmp_bitmap};
#[cfg(feature = "host")]
pub use png_faces::{PngFaces, decode_bitmap};

use crate::led2d::{Bitmap, PANEL_HEIGHT, PANEL_WIDTH};
use crate::led_strip::ColorIndex;
use crate::{Error, Result};

/// Luma at or above this value is a lit cell in face artwork loaded from disk.
#[cfg(feature = "host")]
const LIT_THRESHOLD: u8 = 128;

/// ITU-R 601 luma of an 8-bit RGB pixel.
#[cfg(feature = "host")]
fn rgb_luma(red: u8, green: u8, blue: u8) -> u8 {
    let weighted = 299 * u32::from(red) + 587 * u32::from(green) + 114 * u32::from(blue);
    (weighted / 1000) as u8
}

/// Number of faces in [`FaceId::ALL`].
pub const FACE_COUNT: usize = 15;

/// One of the faces the visor can show.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, defmt::Format)]
pub enum FaceId {
    /// Happy face; also the startup face of [`KEYMAP_DEFAULT`]. Key `0x01`.
    Happy,
    /// Wide-eyed face. Key `0x02`.
    Wide,
    /// Sleepy, half-closed eyes. Key `0x03`.
    Sleepy,
    /// Winking face. Key `0x04`.
    Wink,
    /// Squinting `> <` eyes. Key `0x05`.
    Boop,
    /// Dizzy, spiral eyes. Key `0x06`.
    Dizzy,
    /// Flat, expressionless face. Key `0x07`.
    Flat,
    /// Small eyes and mouth. Key `0x08`.
    Small,
    /// Heart eyes (preset pink). Key `0x09`.
    Hearts,
    /// Crossed-out eyes (preset red). Key `0x0A`.
    Dead,
    /// Angry face (preset red). Key `0x0B`.
    Angry,
    /// Robot beep face (preset green). Key `0x0D`.
    Beep,
    /// Howling face (preset orange). Key `0x0E`.
    Awoo,
    /// Refusal face (preset red). Key `0x0F`.
    No,
    /// Plain face outline (preset light blue). Key `0x10`.
    Face,
}

impl FaceId {
    /// Every face, in catalog order.
    pub const ALL: [Self; FACE_COUNT] = [
        Self::Happy,
        Self::Wide,
        Self::Sleepy,
        Self::Wink,
        Self::Boop,
        Self::Dizzy,
        Self::Flat,
        Self::Small,
        Self::Hearts,
        Self::Dead,
        Self::Angry,
        Self::Beep,
        Self::Awoo,
        Self::No,
        Self::Face,
    ];

    /// Lower-case name, e.g. `"happy"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Happy => "happy",
            Self::Wide => "wide",
            Self::Sleepy => "sleepy",
            Self::Wink => "wink",
            Self::Boop => "boop",
            Self::Dizzy => "dizzy",
            Self::Flat => "flat",
            Self::Small => "small",
            Self::Hearts => "hearts",
            Self::Dead => "dead",
            Self::Angry => "angry",
            Self::Beep => "beep",
            Self::Awoo => "awoo",
            Self::No => "no",
            Self::Face => "face",
        }
    }

    /// Artwork file name used by [`BmpFaces`](crate::face::BmpFaces), e.g. `"01_happy.bmp"`.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Happy => "01_happy.bmp",
            Self::Wide => "02_wide.bmp",
            Self::Sleepy => "03_sleepy.bmp",
            Self::Wink => "04_wink.bmp",
            Self::Boop => "05_boop.bmp",
            Self::Dizzy => "06_dizzy.bmp",
            Self::Flat => "07_flat.bmp",
            Self::Small => "08_small.bmp",
            Self::Hearts => "09_hearts.bmp",
            Self::Dead => "10_dead.bmp",
            Self::Angry => "11_angry.bmp",
            Self::Beep => "12_beep.bmp",
            Self::Awoo => "13_awoo.bmp",
            Self::No => "14_no.bmp",
            Self::Face => "15_face.bmp",
        }
    }

    /// File name without its extension, e.g. `"01_happy"`.
    ///
    /// [`PngFaces`](crate::face::PngFaces) looks for `<file_stem>.png`.
    #[must_use]
    pub const fn file_stem(self) -> &'static str {
        match self {
            Self::Happy => "01_happy",
            Self::Wide => "02_wide",
            Self::Sleepy => "03_sleepy",
            Self::Wink => "04_wink",
            Self::Boop => "05_boop",
            Self::Dizzy => "06_dizzy",
            Self::Flat => "07_flat",
            Self::Small => "08_small",
            Self::Hearts => "09_hearts",
            Self::Dead => "10_dead",
            Self::Angry => "11_angry",
            Self::Beep => "12_beep",
            Self::Awoo => "13_awoo",
            Self::No => "14_no",
            Self::Face => "15_face",
        }
    }
}

// ============================================================================
// Keymap
// ============================================================================

/// Maps keycodes to faces and color presets.
///
/// Built by [`Keymap::new`], which rejects bad tables at **compile time** when used in a
/// `const`:
/// - a key listed twice in the face entries or twice in the preset entries
/// - a preset index outside the palette
/// - a release or cycle code that is also a face or preset key
/// - equal release and cycle codes
/// - an empty face list
///
/// A keycode may be both a face key and a preset key; it then selects the face and fixes
/// its color. The first face entry is the startup face.
///
/// ```rust
/// use led_visor::face::{FaceId, Keymap};
///
/// const KEYMAP: Keymap = Keymap::new(
///     &[(0x01, FaceId::Happy), (0x02, FaceId::Hearts)],
///     &[(0x02, 6)],
///     0x00,
///     0x0C,
/// );
/// assert_eq!(KEYMAP.default_face(), FaceId::Happy);
/// assert!(KEYMAP.preset_for(0x01).is_none());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keymap {
    faces: [Option<FaceId>; 256],
    presets: [Option<ColorIndex>; 256],
    release_code: u8,
    cycle_code: u8,
    default_face: FaceId,
}

impl Keymap {
    /// Build a keymap from `(keycode, face)` and `(keycode, palette index)` entries.
    #[must_use]
    pub const fn new(
        face_entries: &[(u8, FaceId)],
        preset_entries: &[(u8, u8)],
        release_code: u8,
        cycle_code: u8,
    ) -> Self {
        assert!(!face_entries.is_empty(), "keymap needs at least one face");
        assert!(release_code != cycle_code, "release and cycle codes must differ");

        let mut faces = [None; 256];
        let mut i = 0;
        while i < face_entries.len() {
            let (keycode, face) = face_entries[i];
            assert!(faces[keycode as usize].is_none(), "duplicate face keycode");
            faces[keycode as usize] = Some(face);
            i += 1;
        }

        let mut presets = [None; 256];
        let mut i = 0;
        while i < preset_entries.len() {
            let (keycode, index) = preset_entries[i];
            assert!(presets[keycode as usize].is_none(), "duplicate preset keycode");
            let Some(color_index) = ColorIndex::new(index) else {
                panic!("preset index outside the palette");
            };
            presets[keycode as usize] = Some(color_index);
            i += 1;
        }

        assert!(
            faces[release_code as usize].is_none() && presets[release_code as usize].is_none(),
            "release code collides with a catalog key"
        );
        assert!(
            faces[cycle_code as usize].is_none() && presets[cycle_code as usize].is_none(),
            "cycle code collides with a catalog key"
        );

        Self {
            faces,
            presets,
            release_code,
            cycle_code,
            default_face: face_entries[0].1,
        }
    }

    /// Face selected by `keycode`, if any.
    #[must_use]
    pub const fn face_for(&self, keycode: u8) -> Option<FaceId> {
        self.faces[keycode as usize]
    }

    /// Fixed color of `keycode`, if it is a preset key.
    #[must_use]
    pub const fn preset_for(&self, keycode: u8) -> Option<ColorIndex> {
        self.presets[keycode as usize]
    }

    /// Keycode that is ignored without a redisplay.
    #[must_use]
    pub const fn release_code(&self) -> u8 {
        self.release_code
    }

    /// Keycode that advances the base color.
    #[must_use]
    pub const fn cycle_code(&self) -> u8 {
        self.cycle_code
    }

    /// Face shown at startup.
    #[must_use]
    pub const fn default_face(&self) -> FaceId {
        self.default_face
    }

    /// All `(keycode, face)` entries in keycode order.
    pub fn face_keys(&self) -> impl Iterator<Item = (u8, FaceId)> + '_ {
        (0..=u8::MAX).filter_map(|keycode| self.face_for(keycode).map(|face| (keycode, face)))
    }

    /// All `(keycode, color)` preset entries in keycode order.
    pub fn preset_keys(&self) -> impl Iterator<Item = (u8, ColorIndex)> + '_ {
        (0..=u8::MAX).filter_map(|keycode| self.preset_for(keycode).map(|color| (keycode, color)))
    }
}

const FACE_KEYS_DEFAULT: [(u8, FaceId); FACE_COUNT] = [
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
];

const PRESET_KEYS_DEFAULT: [(u8, u8); 7] = [
    (0x09, 5),  // hearts: pink
    (0x0A, 6),  // dead: red
    (0x0B, 6),  // angry: red
    (0x0D, 0),  // beep: green
    (0x0E, 7),  // awoo: orange
    (0x0F, 6),  // no: red
    (0x10, 2),  // face: light blue
];

/// Keycode that releases a key without changing the display (`0x00`).
pub const RELEASE_CODE_DEFAULT: u8 = 0x00;
/// Keycode that cycles the base color (`0x0C`).
pub const CYCLE_CODE_DEFAULT: u8 = 0x0C;

/// The visor keypad layout.
pub const KEYMAP_DEFAULT: Keymap = Keymap::new(
    &FACE_KEYS_DEFAULT,
    &PRESET_KEYS_DEFAULT,
    RELEASE_CODE_DEFAULT,
    CYCLE_CODE_DEFAULT,
);

// ============================================================================
// Face sources
// ============================================================================

/// Where face bitmaps come from.
pub trait FaceSource<const W: usize, const H: usize> {
    /// Load the bitmap for `face`.
    ///
    /// # Errors
    ///
    /// Returns an error if the face is unavailable or unreadable. The visor keeps the
    /// previous frame in that case.
    fn load(&self, face: FaceId) -> Result<Bitmap<W, H>>;
}

impl<const W: usize, const H: usize, T: FaceSource<W, H>> FaceSource<W, H> for &T {
    fn load(&self, face: FaceId) -> Result<Bitmap<W, H>> {
        (**self).load(face)
    }
}

/// Faces compiled into the binary.
#[derive(Clone, Copy, Debug)]
pub struct BuiltinFaces<const W: usize, const H: usize> {
    faces: &'static [(FaceId, Bitmap<W, H>)],
}

impl<const W: usize, const H: usize> BuiltinFaces<W, H> {
    /// Wrap a static table of bitmaps.
    #[must_use]
    pub const fn new(faces: &'static [(FaceId, Bitmap<W, H>)]) -> Self {
        Self { faces }
    }
}

impl<const W: usize, const H: usize> FaceSource<W, H> for BuiltinFaces<W, H> {
    fn load(&self, face: FaceId) -> Result<Bitmap<W, H>> {
        self.faces
            .iter()
            .find(|(id, _)| *id == face)
            .map(|(_, bitmap)| *bitmap)
            .ok_or(Error::FaceMissing(face))
    }
}

/// All 15 visor faces drawn for the 32×16 panel.
pub const BUILTIN_FACES: BuiltinFaces<PANEL_WIDTH, PANEL_HEIGHT> =
    BuiltinFaces::new(&builtin::FACES);

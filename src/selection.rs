//! Which face is shown and in which color.
//!
//! The base color is changed only by the cycle key. Preset keys override it while they
//! are the most recent key; the next ordinary key brings the base color back.
//!
//! ```rust
//! use led_visor::face::{FaceId, KEYMAP_DEFAULT};
//! use led_visor::led_strip::ColorIndex;
//! use led_visor::selection::SelectionState;
//!
//! let mut state = SelectionState::new(FaceId::Happy);
//!
//! // Hearts is a preset: pink.
//! let selection = state.apply(0x09, &KEYMAP_DEFAULT).unwrap();
//! assert_eq!(selection.face, FaceId::Hearts);
//! assert_eq!(selection.color_index, ColorIndex::new(5).unwrap());
//!
//! // Wink is not: back to the base color.
//! let selection = state.apply(0x04, &KEYMAP_DEFAULT).unwrap();
//! assert_eq!(selection.color_index, ColorIndex::FIRST);
//! ```

use crate::face::{FaceId, Keymap};
use crate::led_strip::ColorIndex;

/// A face and the palette entry to draw it with.
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub struct Selection {
    /// Face to show.
    pub face: FaceId,
    /// Color of its lit pixels.
    pub color_index: ColorIndex,
}

/// Current selection plus the base color to restore after a preset.
///
/// `previous_color_index` is written only when a preset key follows a non-preset key,
/// so a run of presets never loses the base color.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SelectionState {
    face: FaceId,
    color_index: ColorIndex,
    previous_color_index: ColorIndex,
    color_was_preset: bool,
}

impl SelectionState {
    /// Start on `default_face` with the first palette color.
    #[must_use]
    pub const fn new(default_face: FaceId) -> Self {
        Self::with_color(default_face, ColorIndex::FIRST)
    }

    /// Start on `face` with `color_index` as the base color.
    #[must_use]
    pub const fn with_color(face: FaceId, color_index: ColorIndex) -> Self {
        Self {
            face,
            color_index,
            previous_color_index: color_index,
            color_was_preset: false,
        }
    }

    /// Face currently selected.
    #[must_use]
    pub const fn face(&self) -> FaceId {
        self.face
    }

    /// Palette index of the current color.
    #[must_use]
    pub const fn color_index(&self) -> ColorIndex {
        self.color_index
    }

    /// Base color saved by the first preset in a run, restored by the next non-preset key.
    #[must_use]
    pub const fn previous_color_index(&self) -> ColorIndex {
        self.previous_color_index
    }

    /// Whether the current color came from a preset key.
    #[must_use]
    pub const fn color_was_preset(&self) -> bool {
        self.color_was_preset
    }

    /// What should be on the display now.
    #[must_use]
    pub const fn selection(&self) -> Selection {
        Selection {
            face: self.face,
            color_index: self.color_index,
        }
    }

    /// Update the state for one keycode and return what to display.
    ///
    /// - release code: nothing changes and `None` is returned
    /// - cycle code: the color advances (wrapping) and the face stays
    /// - preset key: the base color is saved if the current one was not a preset, then
    ///   the preset color is used
    /// - any other key: the base color comes back
    ///
    /// Mapped keys also switch the face. Unmapped keys keep the face but still restore
    /// the base color and redisplay.
    pub fn apply(&mut self, keycode: u8, keymap: &Keymap) -> Option<Selection> {
        if keycode == keymap.release_code() {
            return None;
        }

        if keycode == keymap.cycle_code() {
            self.color_index = self.color_index.next();
        } else {
            if let Some(preset) = keymap.preset_for(keycode) {
                if !self.color_was_preset {
                    self.previous_color_index = self.color_index;
                }
                self.color_was_preset = true;
                self.color_index = preset;
            } else {
                self.color_was_preset = false;
                self.color_index = self.previous_color_index;
            }

            if let Some(face) = keymap.face_for(keycode) {
                self.face = face;
            }
        }

        Some(self.selection())
    }
}

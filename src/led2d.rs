//! Rectangular panel geometry: face bitmaps, strip-ordered masks, and RGB previews.
//!
//! A face starts as a [`Bitmap`] in screen coordinates. An [`LedLayout`] reorders it into
//! a [`PixelOrder`] that follows the strip wiring, which [`colorize`](crate::led_strip::colorize)
//! then turns into a strip frame.
//!
//! # Example
//!
//! ```rust
//! use led_visor::led2d::{Bitmap, VISOR_LAYOUT, PANEL_HEIGHT, PANEL_WIDTH, LED_COUNT};
//!
//! let mut bitmap = Bitmap::<PANEL_WIDTH, PANEL_HEIGHT>::new();
//! bitmap.set(0, 0, true);
//!
//! let order = VISOR_LAYOUT.map_bitmap(&bitmap);
//! assert_eq!(order.len(), LED_COUNT);
//! assert_eq!(order.lit_count(), 1);
//! ```

pub mod layout;

pub use layout::LedLayout;

use core::ops::{Deref, DerefMut, Index, IndexMut};
use smart_leds::RGB8;

/// Columns on the visor panel.
pub const PANEL_WIDTH: usize = 32;
/// Rows on the visor panel.
pub const PANEL_HEIGHT: usize = 16;
/// LEDs on the visor strip (`PANEL_WIDTH × PANEL_HEIGHT`).
pub const LED_COUNT: usize = PANEL_WIDTH * PANEL_HEIGHT;

/// Wiring of the visor panel: the strip snakes down its columns and the panel is
/// mounted upside down, so images are rotated 180° before the serpentine walk.
pub const VISOR_LAYOUT: LedLayout<LED_COUNT, PANEL_WIDTH, PANEL_HEIGHT> =
    LedLayout::serpentine_column_major().rotate_180();

/// Monochrome face image, `H` rows of `W` cells, origin top-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bitmap<const W: usize, const H: usize>([[bool; W]; H]);

impl<const W: usize, const H: usize> Bitmap<W, H> {
    /// Create a bitmap with every cell unlit.
    #[must_use]
    pub const fn new() -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        Self([[false; W]; H])
    }

    /// Build a bitmap from text rows, `#` for lit and `.` for unlit.
    ///
    /// Panics (at compile time when used in a `const`) if a row is not exactly `W`
    /// characters or contains anything else.
    ///
    /// ```rust
    /// use led_visor::led2d::Bitmap;
    ///
    /// const ARROW: Bitmap<3, 2> = Bitmap::from_art([".#.", "###"]);
    /// assert!(ARROW.is_lit(1, 0));
    /// assert_eq!(ARROW.lit_count(), 4);
    /// ```
    #[must_use]
    pub const fn from_art(rows: [&str; H]) -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        let mut cells = [[false; W]; H];
        let mut y_index = 0;
        while y_index < H {
            let row = rows[y_index].as_bytes();
            assert!(row.len() == W, "art row length must equal W");
            let mut x_index = 0;
            while x_index < W {
                cells[y_index][x_index] = match row[x_index] {
                    b'#' => true,
                    b'.' => false,
                    _ => panic!("art rows may only contain '#' and '.'"),
                };
                x_index += 1;
            }
            y_index += 1;
        }
        Self(cells)
    }

    /// Whether the cell at column `x_index`, row `y_index` is lit.
    #[must_use]
    pub const fn is_lit(&self, x_index: usize, y_index: usize) -> bool {
        self.0[y_index][x_index]
    }

    /// Light or clear one cell.
    pub fn set(&mut self, x_index: usize, y_index: usize, lit: bool) {
        self[(x_index, y_index)] = lit;
    }

    /// Number of lit cells.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.0.iter().flatten().filter(|lit| **lit).count()
    }

    /// Rows of the bitmap, top to bottom.
    #[must_use]
    pub const fn rows(&self) -> &[[bool; W]; H] {
        &self.0
    }
}

impl<const W: usize, const H: usize> Default for Bitmap<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> Index<(usize, usize)> for Bitmap<W, H> {
    type Output = bool;

    fn index(&self, (x_index, y_index): (usize, usize)) -> &Self::Output {
        assert!(x_index < W, "x_index must be within width");
        assert!(y_index < H, "y_index must be within height");
        &self.0[y_index][x_index]
    }
}

impl<const W: usize, const H: usize> IndexMut<(usize, usize)> for Bitmap<W, H> {
    fn index_mut(&mut self, (x_index, y_index): (usize, usize)) -> &mut Self::Output {
        assert!(x_index < W, "x_index must be within width");
        assert!(y_index < H, "y_index must be within height");
        &mut self.0[y_index][x_index]
    }
}

/// Lit/unlit mask in strip order, one entry per LED.
///
/// Produced by [`LedLayout::map_bitmap`]. Every bitmap of the same size yields a mask of
/// the same length and traversal; only the lit values differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelOrder<const N: usize>(pub [bool; N]);

impl<const N: usize> PixelOrder<N> {
    /// Number of lit LEDs.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.0.iter().filter(|lit| **lit).count()
    }
}

impl<const N: usize> Deref for PixelOrder<N> {
    type Target = [bool; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// RGB image in panel coordinates, used for previews.
///
/// `frame[(x, y)]` is the pixel at column `x`, row `y`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame2d<const W: usize, const H: usize>(pub [[RGB8; W]; H]);

impl<const W: usize, const H: usize> Frame2d<W, H> {
    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([[RGB8::new(0, 0, 0); W]; H])
    }

    /// Put strip-ordered pixels back where the layout shows them on the panel.
    ///
    /// Pixels beyond the layout length are ignored; cells without a pixel stay black.
    #[must_use]
    pub fn from_strip<const N: usize>(strip: &[RGB8], led_layout: &LedLayout<N, W, H>) -> Self {
        let mut frame = Self::new();
        for (pixel, &(x_index, y_index)) in strip.iter().zip(led_layout.index_to_xy()) {
            frame[(usize::from(x_index), usize::from(y_index))] = *pixel;
        }
        frame
    }
}

impl<const W: usize, const H: usize> Deref for Frame2d<W, H> {
    type Target = [[RGB8; W]; H];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const W: usize, const H: usize> DerefMut for Frame2d<W, H> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const W: usize, const H: usize> Index<(usize, usize)> for Frame2d<W, H> {
    type Output = RGB8;

    fn index(&self, (x_index, y_index): (usize, usize)) -> &Self::Output {
        assert!(x_index < W, "x_index must be within width");
        assert!(y_index < H, "y_index must be within height");
        &self.0[y_index][x_index]
    }
}

impl<const W: usize, const H: usize> IndexMut<(usize, usize)> for Frame2d<W, H> {
    fn index_mut(&mut self, (x_index, y_index): (usize, usize)) -> &mut Self::Output {
        assert!(x_index < W, "x_index must be within width");
        assert!(y_index < H, "y_index must be within height");
        &mut self.0[y_index][x_index]
    }
}

impl<const W: usize, const H: usize> Default for Frame2d<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

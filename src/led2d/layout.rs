//! Compile-time description of panel geometry and wiring.
//!
//! See [`LedLayout`] for examples including serpentine panels and the
//! upside-down visor mount.

use super::{Bitmap, PixelOrder};

/// Compile-time description of panel geometry and wiring.
///
/// `LedLayout` defines how a rectangular `(x, y)` panel of LEDs maps to the linear
/// order of LEDs on a NeoPixel-style (WS2812) strip. Entry `i` of the layout is the
/// `(x, y)` cell that LED `i` lights up.
///
/// Coordinates use a screen-style convention: `(0, 0)` is the top-left corner,
/// `x` increases to the right, and `y` increases downward.
///
/// Layouts are validated at **compile time**:
/// - coordinates must be in-bounds
/// - every `(x, y)` cell must appear exactly once
///
/// # Example
///
/// The visor panel snakes down its columns and is mounted upside down:
///
/// ```rust
/// use led_visor::led2d::layout::LedLayout;
///
/// const MOUNTED: LedLayout<6, 3, 2> = LedLayout::serpentine_column_major().rotate_180();
/// const EXPECTED: LedLayout<6, 3, 2> =
///     LedLayout::new([(2, 1), (2, 0), (1, 0), (1, 1), (0, 1), (0, 0)]);
/// const _: () = assert!(MOUNTED.equals(&EXPECTED)); // Compile-time assert
/// ```
///
/// ```text
/// Serpentine 3×2, then rotated 180°:
///
///   Before:              After:
///     LED0  LED3  LED4     LED5  LED2  LED1
///     LED1  LED2  LED5     LED4  LED3  LED0
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedLayout<const N: usize, const W: usize, const H: usize> {
    map: [(u16, u16); N],
}

impl<const N: usize, const W: usize, const H: usize> LedLayout<N, W, H> {
    /// Return the array mapping LED wiring order to `(x, y)` coordinates.
    #[must_use]
    pub const fn index_to_xy(&self) -> &[(u16, u16); N] {
        &self.map
    }

    /// Number of columns in the layout.
    #[must_use]
    pub const fn width(&self) -> usize {
        W
    }

    /// Number of rows in the layout.
    #[must_use]
    pub const fn height(&self) -> usize {
        H
    }

    /// Total number of LEDs in the layout.
    #[must_use]
    pub const fn len(&self) -> usize {
        N
    }

    /// Const equality helper for compile-time checks.
    #[must_use]
    pub const fn equals(&self, other: &Self) -> bool {
        let mut i = 0;
        while i < N {
            if self.map[i].0 != other.map[i].0 || self.map[i].1 != other.map[i].1 {
                return false;
            }
            i += 1;
        }
        true
    }

    /// Constructor: verifies the mapping covers every cell of the W×H panel exactly once.
    ///
    /// ```rust
    /// use led_visor::led2d::layout::LedLayout;
    ///
    /// // 3×2 panel wired down column 0, up column 1, and down column 2.
    /// const MAP: LedLayout<6, 3, 2> =
    ///     LedLayout::new([(0, 0), (0, 1), (1, 1), (1, 0), (2, 0), (2, 1)]);
    /// const _: () = assert!(MAP.equals(&LedLayout::serpentine_column_major()));
    /// ```
    #[must_use]
    pub const fn new(map: [(u16, u16); N]) -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut seen = [false; N];

        let mut i = 0;
        while i < N {
            let (c, r) = map[i];
            let c = c as usize;
            let r = r as usize;

            assert!(c < W, "column out of bounds");
            assert!(r < H, "row out of bounds");

            let cell = r * W + c;
            assert!(!seen[cell], "duplicate (col,row) in mapping");
            seen[cell] = true;

            i += 1;
        }

        let mut k = 0;
        while k < N {
            assert!(seen[k], "mapping does not cover every cell");
            k += 1;
        }

        Self { map }
    }

    /// Serpentine column-major mapping: column 0 top-to-bottom, column 1
    /// bottom-to-top, and so on.
    ///
    /// ```text
    /// Strip snakes down columns (3×2 example):
    ///   LED0  LED3  LED4
    ///   LED1  LED2  LED5
    /// ```
    #[must_use]
    pub const fn serpentine_column_major() -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut mapping = [(0_u16, 0_u16); N];
        let mut y_index = 0;
        while y_index < H {
            let mut x_index = 0;
            while x_index < W {
                let led_index = if x_index % 2 == 0 {
                    x_index * H + y_index
                } else {
                    x_index * H + (H - 1 - y_index)
                };
                mapping[led_index] = (x_index as u16, y_index as u16);
                x_index += 1;
            }
            y_index += 1;
        }
        Self::new(mapping)
    }

    /// Rotate 90° clockwise (dims swap).
    #[must_use]
    pub const fn rotate_cw(self) -> LedLayout<N, H, W> {
        let mut out = [(0u16, 0u16); N];
        let mut i = 0;
        while i < N {
            let (c, r) = self.map[i];
            let c = c as usize;
            let r = r as usize;
            out[i] = ((H - 1 - r) as u16, c as u16);
            i += 1;
        }
        LedLayout::<N, H, W>::new(out)
    }

    /// Rotate 180°, for panels mounted upside down. Each LED moves from
    /// `(x, y)` to `(W-1-x, H-1-y)`.
    #[must_use]
    pub const fn rotate_180(self) -> Self {
        self.rotate_cw().rotate_cw()
    }

    /// Reorder a face bitmap into strip order: entry `i` of the result is the
    /// bitmap cell that LED `i` shows.
    ///
    /// With [`VISOR_LAYOUT`](super::VISOR_LAYOUT) this rotates the bitmap 180° and then
    /// reads column 0 top-to-bottom, column 1 bottom-to-top, and so on.
    ///
    /// ```rust
    /// use led_visor::led2d::{Bitmap, layout::LedLayout};
    ///
    /// const MOUNTED: LedLayout<6, 3, 2> = LedLayout::serpentine_column_major().rotate_180();
    /// let bitmap = Bitmap::<3, 2>::from_art(["#..", "..."]);
    ///
    /// // The top-left cell ends up on the last LED of the strip.
    /// let order = MOUNTED.map_bitmap(&bitmap);
    /// assert_eq!(*order, [false, false, false, false, false, true]);
    /// ```
    #[must_use]
    pub const fn map_bitmap(&self, bitmap: &Bitmap<W, H>) -> PixelOrder<N> {
        let mut order = [false; N];
        let mut led_index = 0;
        while led_index < N {
            let (x_index, y_index) = self.map[led_index];
            order[led_index] = bitmap.is_lit(x_index as usize, y_index as usize);
            led_index += 1;
        }
        PixelOrder(order)
    }
}

//! NeoPixel-style (WS2812) strip frames, the color palette, and the display side of the visor.
//!
//! [`colorize`] turns a strip-ordered mask into a [`Frame1d`]; a [`FrameSink`] writes it out.
//! On the Pico the sink is [`PioPanel`]; on the host it is
//! [`PngPanel`](crate::to_png::PngPanel).
//!
//! # Example: Color a Mask
//!
//! ```rust
//! use led_visor::led2d::PixelOrder;
//! use led_visor::led_strip::{PALETTE_DEFAULT, ColorIndex, RGB8, colorize};
//!
//! let order = PixelOrder([true, false, true]);
//! let red = PALETTE_DEFAULT.color(ColorIndex::new(6).unwrap());
//! let frame = colorize(&order, red);
//!
//! assert_eq!(*frame, [red, RGB8::new(0, 0, 0), red]);
//! ```

/// Predefined RGB color constants from the `smart_leds` crate.
///
/// Common colors include `RED`, `GREEN`, `BLUE`, `YELLOW`, `WHITE`, `BLACK`.
#[doc(inline)]
pub use smart_leds::colors;

/// RGB color type used by strip frames.
pub use smart_leds::RGB8;

use core::ops::{Deref, DerefMut};

#[cfg(not(feature = "host"))]
use embassy_rp::pio::Instance;
#[cfg(not(feature = "host"))]
use embassy_rp::pio_programs::ws2812::{PioWs2812, RgbColorOrder};
use embassy_time::Duration;
#[cfg(not(feature = "host"))]
use embassy_time::Timer;

use crate::Result;
use crate::led2d::PixelOrder;

/// Pause after every strip write so the WS2812 chain latches the frame (`300 ms`).
pub const SETTLE_DELAY_DEFAULT: Duration = Duration::from_millis(300);

// ============================================================================
// Frames
// ============================================================================

/// [`RGB8`] pixel data for an LED strip, in wiring order.
///
/// Frames deref to `[RGB8; N]`, so pixels can be read and changed directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame1d<const N: usize>(pub [RGB8; N]);

impl<const N: usize> Frame1d<N> {
    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([RGB8::new(0, 0, 0); N])
    }

    /// Copy `pixels` onto a blank frame.
    ///
    /// A short slice leaves the remaining LEDs off; pixels past `N` are dropped.
    #[must_use]
    pub fn from_pixels(pixels: &[RGB8]) -> Self {
        let mut frame = Self::new();
        for (slot, pixel) in frame.iter_mut().zip(pixels) {
            *slot = *pixel;
        }
        frame
    }
}

impl<const N: usize> Deref for Frame1d<N> {
    type Target = [RGB8; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame1d<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> Default for Frame1d<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Light every lit entry of `order` with `color` and turn every other LED off.
///
/// The result has the same length and order as the mask, whatever the color,
/// including black.
#[must_use]
pub fn colorize<const N: usize>(order: &PixelOrder<N>, color: RGB8) -> Frame1d<N> {
    let mut frame = Frame1d::new();
    for (pixel, lit) in frame.iter_mut().zip(order.iter()) {
        if *lit {
            *pixel = color;
        }
    }
    frame
}

// ============================================================================
// Palette
// ============================================================================

/// Number of colors in a [`Palette`].
pub const PALETTE_LEN: usize = 11;

/// Position in a [`Palette`], always `< PALETTE_LEN`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, defmt::Format)]
pub struct ColorIndex(u8);

impl ColorIndex {
    /// The first palette entry.
    pub const FIRST: Self = Self(0);

    /// Wrap a raw index, or `None` if it is outside the palette.
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < PALETTE_LEN {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Raw index.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The next palette entry; the last entry wraps to the first.
    #[must_use]
    pub const fn next(self) -> Self {
        if self.0 as usize + 1 == PALETTE_LEN {
            Self::FIRST
        } else {
            Self(self.0 + 1)
        }
    }
}

/// The fixed set of colors the visor can show.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette(pub [RGB8; PALETTE_LEN]);

impl Palette {
    /// Color at `index`.
    #[must_use]
    pub const fn color(&self, index: ColorIndex) -> RGB8 {
        self.0[index.0 as usize]
    }
}

/// Default visor palette, in cycling order.
pub const PALETTE_DEFAULT: Palette = Palette([
    RGB8::new(0, 255, 0),     // Green
    RGB8::new(0, 255, 128),   // Turquoise
    RGB8::new(0, 64, 255),    // Light blue
    RGB8::new(0, 0, 255),     // Blue
    RGB8::new(48, 0, 255),    // Purple
    RGB8::new(192, 0, 255),   // Pink
    RGB8::new(255, 0, 0),     // Red
    RGB8::new(255, 48, 0),    // Orange
    RGB8::new(255, 192, 0),   // Yellow
    RGB8::new(64, 255, 0),    // Lime
    RGB8::new(255, 255, 255), // White
]);

// ============================================================================
// Display collaborator
// ============================================================================

/// Something that can show a strip frame.
///
/// `render` is synchronous from the caller's point of view: it returns only after the
/// whole frame is written and any settle delay has passed, so renders never overlap.
pub trait FrameSink {
    /// Write all pixels and wait until the strip shows them.
    ///
    /// Buffers shorter than the strip leave the remaining LEDs off; extra pixels are
    /// dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the frame could not be written.
    async fn render(&mut self, pixels: &[RGB8]) -> Result<()>;

    /// Tear the display down after a fatal error.
    ///
    /// # Errors
    ///
    /// Returns an error if the final write failed.
    async fn shutdown(&mut self) -> Result<()>;
}

/// WS2812 panel driven from a PIO state machine.
///
/// Every render writes the full strip: a short buffer is zero-padded to `LEN`.
#[cfg(not(feature = "host"))]
pub struct PioPanel<'d, PIO: Instance, const SM: usize, const LEN: usize, ORDER>
where
    ORDER: RgbColorOrder,
{
    driver: PioWs2812<'d, PIO, SM, LEN, ORDER>,
    settle_delay: Duration,
}

#[cfg(not(feature = "host"))]
impl<'d, PIO: Instance, const SM: usize, const LEN: usize, ORDER> PioPanel<'d, PIO, SM, LEN, ORDER>
where
    ORDER: RgbColorOrder,
{
    /// Wrap a PIO WS2812 driver; `settle_delay` is waited after every write.
    #[must_use]
    pub const fn new(driver: PioWs2812<'d, PIO, SM, LEN, ORDER>, settle_delay: Duration) -> Self {
        Self {
            driver,
            settle_delay,
        }
    }
}

#[cfg(not(feature = "host"))]
impl<PIO: Instance, const SM: usize, const LEN: usize, ORDER> FrameSink
    for PioPanel<'_, PIO, SM, LEN, ORDER>
where
    ORDER: RgbColorOrder,
{
    async fn render(&mut self, pixels: &[RGB8]) -> Result<()> {
        let frame = Frame1d::<LEN>::from_pixels(pixels);
        self.driver.write(&frame).await;
        Timer::after(self.settle_delay).await;
        Ok(())
    }

    async fn shutdown(&mut self) -> Result<()> {
        defmt::info!("PioPanel: shutting down, clearing {} LEDs", LEN);
        self.driver.write(&Frame1d::<LEN>::new()).await;
        Timer::after(self.settle_delay).await;
        Ok(())
    }
}

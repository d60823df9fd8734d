//! The visor: keycodes in, colored faces out.
//!
//! [`Visor`] ties a [`FaceSource`], a [`FrameSink`], and a [`SelectionState`] together.
//! [`Visor::run`] is the input loop: read a keycode, update the selection, map and color
//! the face, write it out, repeat until the [`StopSignal`] is raised or the serial link
//! fails.
//!
//! # Example
//!
//! ```rust
//! use embassy_futures::block_on;
//! use led_visor::face::BUILTIN_FACES;
//! use led_visor::led2d::VISOR_LAYOUT;
//! use led_visor::serial::ScriptedKeycodes;
//! use led_visor::to_png::PngPanel;
//! use led_visor::visor::{StopSignal, VISOR_CONFIG_DEFAULT, Visor};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let output_dir = tempfile::tempdir()?;
//! let panel = PngPanel::new(VISOR_LAYOUT, output_dir.path());
//! let mut visor = Visor::new(&VISOR_LAYOUT, &VISOR_CONFIG_DEFAULT, BUILTIN_FACES, panel);
//!
//! let stop = StopSignal::new();
//! let mut keycodes = ScriptedKeycodes::from_bytes(&[0x09, 0x00, 0x0C], &stop);
//! block_on(async {
//!     visor.start().await?;
//!     visor.run(&mut keycodes, &stop).await
//! })?;
//!
//! // Startup, hearts, and the color cycle each rendered once; the release did not.
//! assert_eq!(visor.display().rendered_count(), 3);
//! # Ok(())
//! # }
//! ```

use defmt::{debug, info, warn};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::Duration;

use crate::face::{FaceSource, KEYMAP_DEFAULT, Keymap};
use crate::led2d::{Bitmap, LedLayout};
use crate::led_strip::{
    ColorIndex, FrameSink, PALETTE_DEFAULT, Palette, SETTLE_DELAY_DEFAULT, colorize,
};
use crate::selection::{Selection, SelectionState};
use crate::serial::{BAUD_RATE_DEFAULT, KeycodeSource, READ_TIMEOUT_DEFAULT};
use crate::{Error, Result};

/// Cooperative stop request, checked by [`Visor::run`] between reads.
pub type StopSignal = Signal<CriticalSectionRawMutex, ()>;

/// Everything about the visor that is fixed at build time.
#[derive(Clone, Copy, Debug)]
pub struct VisorConfig {
    /// Keycodes for faces, presets, release, and cycle.
    pub keymap: Keymap,
    /// Colors that [`ColorIndex`] values select.
    pub palette: Palette,
    /// Base color at startup.
    pub initial_color: ColorIndex,
    /// Serial link speed in baud.
    pub baud_rate: u32,
    /// Longest wait for a keycode before the loop checks for a stop request.
    pub read_timeout: Duration,
    /// Pause after each hardware frame write.
    pub settle_delay: Duration,
}

impl VisorConfig {
    /// The stock keypad, palette, and serial settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            keymap: KEYMAP_DEFAULT,
            palette: PALETTE_DEFAULT,
            initial_color: ColorIndex::FIRST,
            baud_rate: BAUD_RATE_DEFAULT,
            read_timeout: READ_TIMEOUT_DEFAULT,
            settle_delay: SETTLE_DELAY_DEFAULT,
        }
    }
}

impl Default for VisorConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// [`VisorConfig::new`] as a constant, for `'static` borrows in firmware.
pub const VISOR_CONFIG_DEFAULT: VisorConfig = VisorConfig::new();

/// Outcome of [`Visor::handle_keycode`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, defmt::Format)]
pub enum Render {
    /// The release code: nothing changed.
    Ignored,
    /// The selection was drawn.
    Rendered(Selection),
    /// The selection changed but its face could not be loaded; the old frame stays up.
    Skipped(Selection),
}

/// A face visor on an `N`-LED, `W×H` panel.
pub struct Visor<'a, const N: usize, const W: usize, const H: usize, F, D>
where
    F: FaceSource<W, H>,
    D: FrameSink,
{
    led_layout: &'a LedLayout<N, W, H>,
    keymap: &'a Keymap,
    palette: &'a Palette,
    faces: F,
    display: D,
    state: SelectionState,
}

impl<'a, const N: usize, const W: usize, const H: usize, F, D> Visor<'a, N, W, H, F, D>
where
    F: FaceSource<W, H>,
    D: FrameSink,
{
    /// Create a visor showing nothing yet; call [`start`](Self::start) next.
    #[must_use]
    pub const fn new(
        led_layout: &'a LedLayout<N, W, H>,
        config: &'a VisorConfig,
        faces: F,
        display: D,
    ) -> Self {
        Self {
            led_layout,
            keymap: &config.keymap,
            palette: &config.palette,
            faces,
            display,
            state: SelectionState::with_color(
                config.keymap.default_face(),
                config.initial_color,
            ),
        }
    }

    /// Draw the startup face.
    ///
    /// # Errors
    ///
    /// Returns an error if the startup face cannot be loaded or drawn. Unlike later
    /// faces this is not skipped, since there is no previous frame to keep.
    pub async fn start(&mut self) -> Result<()> {
        let selection = self.state.selection();
        info!(
            "Visor: starting with face {} color {}",
            selection.face,
            selection.color_index.get()
        );
        let bitmap = self.faces.load(selection.face)?;
        self.show(&bitmap, selection).await
    }

    /// Apply one keycode and redraw if needed.
    ///
    /// # Errors
    ///
    /// Returns an error only if the display fails. A face that cannot be loaded is
    /// logged and reported as [`Render::Skipped`].
    pub async fn handle_keycode(&mut self, keycode: u8) -> Result<Render> {
        let Some(selection) = self.state.apply(keycode, self.keymap) else {
            debug!("Visor: keycode {=u8:#x} ignored", keycode);
            return Ok(Render::Ignored);
        };
        info!(
            "Visor: keycode {=u8:#x} -> face {} color {}",
            keycode,
            selection.face,
            selection.color_index.get()
        );

        match self.faces.load(selection.face) {
            Ok(bitmap) => {
                self.show(&bitmap, selection).await?;
                Ok(Render::Rendered(selection))
            }
            Err(err) => {
                warn!(
                    "Visor: keeping previous frame, {}",
                    defmt::Display2Format(&err)
                );
                Ok(Render::Skipped(selection))
            }
        }
    }

    /// Read and handle keycodes until `stop` is raised or the link fails.
    ///
    /// `stop` is checked before every read, so a read already waiting finishes first
    /// (at most one read timeout later). On stop the source is closed, the display keeps
    /// its last frame, and `Ok(())` is returned. On an error the source is closed and the
    /// display is shut down.
    ///
    /// # Errors
    ///
    /// Returns the serial or display error that ended the loop.
    pub async fn run<S: KeycodeSource>(&mut self, source: &mut S, stop: &StopSignal) -> Result<()> {
        loop {
            if stop.signaled() {
                info!("Visor: stop requested");
                source.close();
                return Ok(());
            }

            let keycode = match source.read_keycode().await {
                Ok(Some(keycode)) => keycode,
                Ok(None) => continue,
                Err(err) => return self.fail(source, err).await,
            };

            if let Err(err) = self.handle_keycode(keycode).await {
                return self.fail(source, err).await;
            }
        }
    }

    /// Selection state as of the last keycode.
    #[must_use]
    pub const fn state(&self) -> &SelectionState {
        &self.state
    }

    /// The display this visor draws on.
    #[must_use]
    pub const fn display(&self) -> &D {
        &self.display
    }

    /// Give back the display.
    #[must_use]
    pub fn into_display(self) -> D {
        self.display
    }

    async fn show(&mut self, bitmap: &Bitmap<W, H>, selection: Selection) -> Result<()> {
        let order = self.led_layout.map_bitmap(bitmap);
        let frame = colorize(&order, self.palette.color(selection.color_index));
        self.display.render(&*frame).await
    }

    async fn fail<S: KeycodeSource>(&mut self, source: &mut S, err: Error) -> Result<()> {
        warn!("Visor: stopping after {}", defmt::Display2Format(&err));
        source.close();
        if let Err(shutdown_err) = self.display.shutdown().await {
            warn!(
                "Visor: display shutdown failed, {}",
                defmt::Display2Format(&shutdown_err)
            );
        }
        Err(err)
    }
}

//! PNG previews of panel frames (host only).
//!
//! [`write_frame_png`] draws each LED as a square block. [`PngPanel`] is a
//! [`FrameSink`] that saves every rendered frame this way, so the visor can be exercised
//! without hardware.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use png::{BitDepth, ColorType, Encoder};

use crate::Result;
use crate::led2d::{Frame2d, LedLayout};
use crate::led_strip::{Frame1d, FrameSink, RGB8};

/// Longest side of a preview image, in pixels.
pub const PREVIEW_MAX_DIMENSION_DEFAULT: u32 = 640;

/// Render a `Frame2d` into a PNG file no larger than `target_max_dimension` on its
/// longest side (but at least one pixel per LED).
///
/// # Errors
///
/// Returns an error if the file cannot be created or encoded.
pub fn write_frame_png<const W: usize, const H: usize>(
    frame: &Frame2d<W, H>,
    output_path: impl AsRef<Path>,
    target_max_dimension: u32,
) -> Result<()> {
    let output_path = output_path.as_ref();
    let cell_size = select_cell_size(W, H, target_max_dimension);
    let (width, height, pixels) = panel_pixels(frame, cell_size);

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(output_path)?;
    let mut encoder = Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&pixels)?;
    writer.finish()?;
    println!("wrote PNG to {}", output_path.display());
    Ok(())
}

/// A [`FrameSink`] that writes `frame_0000.png`, `frame_0001.png`, … into a directory.
///
/// Strip-ordered pixels are put back in panel coordinates through the layout, so the
/// images look like the mounted visor. Like the hardware panel, a short buffer leaves
/// the remaining LEDs off and extra pixels are dropped.
pub struct PngPanel<const N: usize, const W: usize, const H: usize> {
    led_layout: LedLayout<N, W, H>,
    output_dir: PathBuf,
    target_max_dimension: u32,
    rendered_count: usize,
    last_frame: Option<Frame1d<N>>,
    is_shut_down: bool,
}

impl<const N: usize, const W: usize, const H: usize> PngPanel<N, W, H> {
    /// Previews of `led_layout` saved into `output_dir`.
    #[must_use]
    pub fn new(led_layout: LedLayout<N, W, H>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            led_layout,
            output_dir: output_dir.into(),
            target_max_dimension: PREVIEW_MAX_DIMENSION_DEFAULT,
            rendered_count: 0,
            last_frame: None,
            is_shut_down: false,
        }
    }

    /// Change the longest side of the saved images.
    #[must_use]
    pub fn with_max_dimension(mut self, target_max_dimension: u32) -> Self {
        self.target_max_dimension = target_max_dimension;
        self
    }

    /// Path the next render is written to.
    #[must_use]
    pub fn next_path(&self) -> PathBuf {
        self.output_dir.join(format!("frame_{:04}.png", self.rendered_count))
    }

    /// Number of frames rendered so far.
    #[must_use]
    pub const fn rendered_count(&self) -> usize {
        self.rendered_count
    }

    /// The most recently rendered frame, in strip order.
    #[must_use]
    pub const fn last_frame(&self) -> Option<&Frame1d<N>> {
        self.last_frame.as_ref()
    }

    /// Whether [`shutdown`](FrameSink::shutdown) was called.
    #[must_use]
    pub const fn is_shut_down(&self) -> bool {
        self.is_shut_down
    }
}

impl<const N: usize, const W: usize, const H: usize> FrameSink for PngPanel<N, W, H> {
    async fn render(&mut self, pixels: &[RGB8]) -> Result<()> {
        let frame = Frame1d::<N>::from_pixels(pixels);
        let panel_frame = Frame2d::from_strip(&*frame, &self.led_layout);
        write_frame_png(&panel_frame, self.next_path(), self.target_max_dimension)?;
        self.rendered_count += 1;
        self.last_frame = Some(frame);
        Ok(())
    }

    async fn shutdown(&mut self) -> Result<()> {
        println!(
            "PngPanel: shut down after {} frames in {}",
            self.rendered_count,
            self.output_dir.display()
        );
        self.is_shut_down = true;
        Ok(())
    }
}

fn select_cell_size(panel_width: usize, panel_height: usize, target_max_dimension: u32) -> usize {
    let longest = panel_width.max(panel_height).max(1);
    (target_max_dimension as usize / longest).max(1)
}

fn panel_pixels<const W: usize, const H: usize>(
    frame: &Frame2d<W, H>,
    cell_size: usize,
) -> (u32, u32, Vec<u8>) {
    // A one-pixel dark gap separates neighboring LEDs once cells are 4 pixels or more.
    let gap = usize::from(cell_size >= 4);
    let width = W * cell_size;
    let height = H * cell_size;
    let mut bytes = Vec::with_capacity(width * height * 3);
    for row in frame.iter() {
        for local_y in 0..cell_size {
            for pixel in row {
                for local_x in 0..cell_size {
                    let in_led = local_x + gap < cell_size && local_y + gap < cell_size;
                    let color = if in_led { *pixel } else { RGB8::default() };
                    bytes.extend_from_slice(&[color.r, color.g, color.b]);
                }
            }
        }
    }
    (width as u32, height as u32, bytes)
}

//! Face bitmaps loaded from PNG files (host only).

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use png::{ColorType, Decoder, Transformations};

use super::{FaceId, FaceSource, LIT_THRESHOLD, rgb_luma};
use crate::led2d::Bitmap;
use crate::{Error, Result};

/// Loads `<dir>/<FaceId::file_stem>.png` on every request.
///
/// Files are read fresh each time, so artwork can be edited while a preview runs.
#[derive(Clone, Debug)]
pub struct PngFaces {
    dir: PathBuf,
}

impl PngFaces {
    /// Faces stored in `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory the faces are read from.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Full path of the image for `face`.
    #[must_use]
    pub fn path_for(&self, face: FaceId) -> PathBuf {
        self.dir.join(face.file_stem()).with_extension("png")
    }
}

impl<const W: usize, const H: usize> FaceSource<W, H> for PngFaces {
    fn load(&self, face: FaceId) -> Result<Bitmap<W, H>> {
        let file = File::open(self.path_for(face))?;
        decode_bitmap(BufReader::new(file), face)
    }
}

/// Decode a PNG into a bitmap.
///
/// Palette, grayscale, alpha, and 16-bit images are all reduced to 8-bit channels first.
/// A pixel is lit when its luma is at least 128; alpha is ignored.
///
/// # Errors
///
/// Returns [`Error::PngDecoding`] for malformed data and [`Error::FaceDimensions`] when
/// the image is not exactly `W×H`.
pub fn decode_bitmap<const W: usize, const H: usize>(
    reader: impl Read,
    face: FaceId,
) -> Result<Bitmap<W, H>> {
    let mut decoder = Decoder::new(reader);
    decoder.set_transformations(Transformations::EXPAND | Transformations::STRIP_16);
    let mut png_reader = decoder.read_info()?;
    let mut buffer = vec![0u8; png_reader.output_buffer_size()];
    let info = png_reader.next_frame(&mut buffer)?;

    let actual = (info.width as usize, info.height as usize);
    if actual != (W, H) {
        return Err(Error::FaceDimensions {
            face,
            expected: (W, H),
            actual,
        });
    }

    let samples = info.color_type.samples();
    let mut bitmap = Bitmap::new();
    for (y_index, line) in buffer.chunks_exact(info.line_size).take(H).enumerate() {
        for (x_index, pixel) in line.chunks_exact(samples).take(W).enumerate() {
            bitmap.set(x_index, y_index, luma(pixel, info.color_type) >= LIT_THRESHOLD);
        }
    }
    Ok(bitmap)
}

fn luma(pixel: &[u8], color_type: ColorType) -> u8 {
    match (color_type, pixel) {
        (ColorType::Rgb | ColorType::Rgba, [red, green, blue, ..]) => {
            rgb_luma(*red, *green, *blue)
        }
        (_, [gray, ..]) => *gray,
        (_, []) => 0,
    }
}

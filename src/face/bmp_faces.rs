//! Face bitmaps loaded from BMP artwork (host only).

use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::{Path, PathBuf};

use image::DynamicImage;
use image::codecs::bmp::BmpDecoder;

use super::{FaceId, FaceSource, LIT_THRESHOLD, rgb_luma};
use crate::led2d::Bitmap;
use crate::{Error, Result};

/// Loads `<dir>/<FaceId::file_name>` (`01_happy.bmp` … `15_face.bmp`) on every request.
///
/// This is the layout of the visor's original artwork folder, so it can be previewed
/// as is.
#[derive(Clone, Debug)]
pub struct BmpFaces {
    dir: PathBuf,
}

impl BmpFaces {
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
        self.dir.join(face.file_name())
    }
}

impl<const W: usize, const H: usize> FaceSource<W, H> for BmpFaces {
    fn load(&self, face: FaceId) -> Result<Bitmap<W, H>> {
        let file = File::open(self.path_for(face))?;
        decode_bmp_bitmap(BufReader::new(file), face)
    }
}

/// Decode a BMP into a bitmap.
///
/// Any bit depth the decoder accepts works; 1-bit and other palette images are looked up
/// through their color table. A pixel is lit when its luma is at least 128.
///
/// # Errors
///
/// Returns [`Error::BmpDecoding`] for malformed data and [`Error::FaceDimensions`] when
/// the image is not exactly `W×H`.
pub fn decode_bmp_bitmap<const W: usize, const H: usize>(
    reader: impl BufRead + Seek,
    face: FaceId,
) -> Result<Bitmap<W, H>> {
    let decoder = BmpDecoder::new(reader)?;
    let image = DynamicImage::from_decoder(decoder)?.into_rgb8();

    let actual = (image.width() as usize, image.height() as usize);
    if actual != (W, H) {
        return Err(Error::FaceDimensions {
            face,
            expected: (W, H),
            actual,
        });
    }

    let mut bitmap = Bitmap::new();
    for (x_index, y_index, pixel) in image.enumerate_pixels() {
        let [red, green, blue] = pixel.0;
        bitmap.set(
            x_index as usize,
            y_index as usize,
            rgb_luma(red, green, blue) >= LIT_THRESHOLD,
        );
    }
    Ok(bitmap)
}

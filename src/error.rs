//! Crate-wide error type.

use derive_more::{Display, Error, From};

use crate::face::FaceId;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Everything that can go wrong while loading faces, reading keycodes, or rendering.
#[derive(Debug, Display, Error, From)]
pub enum Error {
    /// The face source has no bitmap for this face.
    #[display("no bitmap for face {_0:?}")]
    FaceMissing(#[error(not(source))] FaceId),

    /// A face image does not match the panel geometry.
    #[display("face {face:?} is {actual:?} but the panel is {expected:?} (width, height)")]
    FaceDimensions {
        /// The face that failed to load.
        face: FaceId,
        /// Panel `(width, height)`.
        expected: (usize, usize),
        /// Image `(width, height)`.
        actual: (usize, usize),
    },

    /// The serial link reported a hard failure (for example a line break).
    #[display("serial link disconnected")]
    SerialDisconnected,

    /// The keycode source was read after it was closed.
    #[display("serial link already closed")]
    SerialClosed,

    /// The embassy executor could not spawn a task.
    #[cfg(not(feature = "host"))]
    #[display("task spawn failed: {_0:?}")]
    #[from]
    TaskSpawn(#[error(not(source))] embassy_executor::SpawnError),

    /// File system failure while reading or writing images.
    #[cfg(feature = "host")]
    #[display("i/o error: {_0}")]
    #[from]
    Io(std::io::Error),

    /// A PNG face image could not be decoded.
    #[cfg(feature = "host")]
    #[display("png decoding error: {_0}")]
    #[from]
    PngDecoding(png::DecodingError),

    /// A BMP face image could not be decoded.
    #[cfg(feature = "host")]
    #[display("bmp decoding error: {_0}")]
    #[from]
    BmpDecoding(image::ImageError),

    /// A preview image could not be encoded.
    #[cfg(feature = "host")]
    #[display("png encoding error: {_0}")]
    #[from]
    PngEncoding(png::EncodingError),
}

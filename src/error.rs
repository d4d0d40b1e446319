//! Shared error type for both utilities.
//!
//! A failure is a rejected parameter, a QR payload that cannot be encoded,
//! an input image that cannot be read or decoded, an output image that
//! cannot be encoded, or a filesystem refusal around the write (directory
//! creation, temp file, rename). Logo problems are not represented here:
//! the QR generator downgrades them to a warning and keeps going.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The payload cannot be represented as a QR symbol (e.g. too long for
    /// version 40 at the High error-correction level).
    #[error("QR encoding error: {0}")]
    Encode(#[from] qrcode::types::QrError),

    /// An input image is missing, unreadable, or not a decodable raster.
    #[error("failed to read image {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: image::ImageError,
    },

    /// The output image could not be encoded as PNG.
    #[error("failed to encode image {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },

    /// Filesystem failure while placing the output file.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: io::Error,
    },

    /// A caller-supplied parameter is out of range.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, Error>;

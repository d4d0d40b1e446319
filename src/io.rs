//! PNG write helpers shared by both utilities.
//!
//! Output files never go through a partially-written state: the PNG is
//! encoded fully in memory, written to a temp file in the destination
//! directory, and renamed over the final path only once complete.

use std::fs;
use std::io::{Cursor, Write};
use std::path::Path;

use image::{DynamicImage, ImageFormat};

use crate::error::{Error, Result};

/// Creates every missing parent directory of `path`.
pub fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

/// Writes `image` as a PNG to `path` without ever exposing a partial file.
///
/// Fails with [`Error::Write`] if encoding fails and [`Error::Io`] if the
/// temp file cannot be created or renamed; in both cases `path` is left
/// untouched. The destination directory must exist.
pub fn save_png(image: &DynamicImage, path: &Path) -> Result<()> {
    let mut encoded = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut encoded), ImageFormat::Png)
        .map_err(|source| Error::Write {
            path: path.to_path_buf(),
            source,
        })?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let io_err = |source| Error::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut tmp = tempfile::Builder::new()
        .prefix(".qrlogo-")
        .suffix(".png")
        .tempfile_in(dir)
        .map_err(io_err)?;
    tmp.write_all(&encoded).map_err(io_err)?;
    tmp.persist(path).map_err(|err| io_err(err.error))?;
    Ok(())
}

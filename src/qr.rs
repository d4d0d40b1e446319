//! QR code generation with optional centered logo embedding.
//!
//! URLs are encoded at error-correction level High (≈30% damage tolerance)
//! into the smallest QR version that fits, then rendered module-by-module
//! onto a white canvas. A logo, when given, is shrunk to at most a fifth of
//! the image width and alpha-blended over the center; the redundancy of the
//! High level is what keeps the symbol readable underneath it.

use std::fs;
use std::path::{Path, PathBuf};

use image::imageops::{self, FilterType};
use image::{DynamicImage, Rgb, RgbImage, RgbaImage};
use qrcode::{Color, EcLevel, QrCode};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::io::{ensure_parent_dir, save_png};

/// Rendering options for [`generate`].
#[derive(Clone, Debug)]
pub struct QrOptions {
    /// Pixel width and height of one QR module.
    pub box_size: u32,
    /// Quiet-zone padding around the symbol, in module widths.
    pub border: u32,
    /// Optional logo composited at the center of the symbol. A path that
    /// does not exist is skipped; one that exists but fails to load or
    /// composite degrades to a plain QR code with a warning.
    pub logo: Option<PathBuf>,
}

impl Default for QrOptions {
    fn default() -> Self {
        Self {
            box_size: 10,
            border: 4,
            logo: None,
        }
    }
}

/// Location and pixel dimensions of a written QR image.
#[derive(Clone, Debug)]
pub struct GeneratedQr {
    /// Resolved absolute path of the output file.
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Generates a QR code PNG for `url` at `output`.
///
/// Missing parent directories of `output` are created. The write is atomic:
/// a failure at any stage leaves no file (and no leftover temp) at `output`.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use qrlogo::qr::{generate, QrOptions};
///
/// let options = QrOptions {
///     logo: Some("logo.png".into()),
///     ..QrOptions::default()
/// };
/// let report = generate("https://example.com", Path::new("out/qr_code.png"), &options)?;
/// println!("{}x{} px at {}", report.width, report.height, report.path.display());
/// # Ok::<(), qrlogo::Error>(())
/// ```
pub fn generate(url: &str, output: &Path, options: &QrOptions) -> Result<GeneratedQr> {
    let mut image = render(url, options.box_size, options.border)?;

    match options.logo.as_deref() {
        Some(logo) if logo.exists() => {
            image = embed_logo(image, logo);
        }
        Some(logo) => {
            debug!("logo {} not found, generating without it", logo.display());
        }
        None => {}
    }

    ensure_parent_dir(output)?;
    let (width, height) = image.dimensions();
    save_png(&DynamicImage::ImageRgb8(image), output)?;

    let path = fs::canonicalize(output).unwrap_or_else(|_| output.to_path_buf());
    Ok(GeneratedQr {
        path,
        width,
        height,
    })
}

/// Encodes `url` at error-correction level High and renders the symbol to
/// an in-memory RGB image.
///
/// Every module becomes a `box_size × box_size` block of black or white
/// pixels, surrounded by `border` modules of white quiet zone on all sides,
/// so the image is `(modules + 2 × border) × box_size` pixels square.
pub fn render(url: &str, box_size: u32, border: u32) -> Result<RgbImage> {
    if box_size == 0 {
        return Err(Error::InvalidInput(
            "box size must be at least 1 pixel".into(),
        ));
    }

    let code = QrCode::with_error_correction_level(url, EcLevel::H)?;
    let modules = code.width() as u32;
    debug!("encoded {} bytes into {modules}x{modules} modules", url.len());

    let size = (modules + 2 * border) * box_size;
    let mut image = RgbImage::from_pixel(size, size, Rgb([255, 255, 255]));
    for y in 0..modules {
        for x in 0..modules {
            if code[(x as usize, y as usize)] == Color::Dark {
                for dy in 0..box_size {
                    for dx in 0..box_size {
                        image.put_pixel(
                            (x + border) * box_size + dx,
                            (y + border) * box_size + dy,
                            Rgb([0, 0, 0]),
                        );
                    }
                }
            }
        }
    }
    Ok(image)
}

/// Composites the logo at `path` over the center of `qr`.
///
/// Failures here are non-fatal: the plain image is returned unchanged and a
/// warning is logged.
fn embed_logo(qr: RgbImage, path: &Path) -> RgbImage {
    let logo = match load_logo(path, qr.width() / 5) {
        Ok(logo) => logo,
        Err(err) => {
            warn!("logo embedding failed, keeping plain QR image: {err}");
            return qr;
        }
    };

    // Opaque canvas with the QR image at the origin; the logo's own alpha
    // channel is the compositing mask, so its transparent parts leave the
    // modules underneath visible.
    let mut canvas = DynamicImage::ImageRgb8(qr).to_rgba8();
    let x = (canvas.width() - logo.width()) / 2;
    let y = (canvas.height() - logo.height()) / 2;
    imageops::overlay(&mut canvas, &logo, i64::from(x), i64::from(y));
    DynamicImage::ImageRgba8(canvas).to_rgb8()
}

/// Loads a logo and shrinks it to fit within `max_side` pixels on its longer
/// dimension, preserving aspect ratio. Smaller logos are never upscaled.
fn load_logo(path: &Path, max_side: u32) -> Result<RgbaImage> {
    let logo = image::open(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let logo = if logo.width().max(logo.height()) > max_side {
        logo.resize(max_side, max_side, FilterType::Lanczos3)
    } else {
        logo
    };
    Ok(logo.to_rgba8())
}

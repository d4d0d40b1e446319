//! White-background removal.
//!
//! Turns near-white pixels fully transparent so a logo exported on a white
//! card can sit on any backdrop. "Near-white" is a strict per-channel test,
//! not a luminance one: red, green, and blue must each exceed the threshold,
//! so a saturated tint (say pure red at full intensity) is never mistaken
//! for background.

use std::path::{Path, PathBuf};

use image::{DynamicImage, Rgba, RgbaImage};
use tracing::debug;

use crate::error::{Error, Result};
use crate::io::save_png;

/// Default per-channel cutoff above which a pixel counts as background.
pub const DEFAULT_THRESHOLD: u8 = 200;

/// Paths and pixel dimensions of a processed image.
#[derive(Clone, Debug)]
pub struct CleanedImage {
    pub input: PathBuf,
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// Loads `input`, makes its near-white background transparent, and writes
/// the result as a PNG to `output`.
///
/// Pixels without an alpha channel are treated as fully opaque. Unlike the
/// QR generator this does not create directories: the output's parent must
/// already exist. The write is atomic, so on failure nothing is left at
/// `output`.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use qrlogo::background::{remove_white_background, DEFAULT_THRESHOLD};
///
/// remove_white_background(
///     Path::new("logo_white.png"),
///     Path::new("logo.png"),
///     DEFAULT_THRESHOLD,
/// )?;
/// # Ok::<(), qrlogo::Error>(())
/// ```
pub fn remove_white_background(input: &Path, output: &Path, threshold: u8) -> Result<CleanedImage> {
    let mut image = image::open(input)
        .map_err(|source| Error::Read {
            path: input.to_path_buf(),
            source,
        })?
        .to_rgba8();
    debug!(
        "loaded {} ({}x{})",
        input.display(),
        image.width(),
        image.height()
    );

    make_white_transparent(&mut image, threshold);

    let (width, height) = image.dimensions();
    save_png(&DynamicImage::ImageRgba8(image), output)?;

    Ok(CleanedImage {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        width,
        height,
    })
}

/// Replaces every pixel whose red, green, and blue are all strictly greater
/// than `threshold` with transparent white `(255, 255, 255, 0)`. All other
/// pixels keep their channels, alpha included.
pub fn make_white_transparent(image: &mut RgbaImage, threshold: u8) {
    for pixel in image.pixels_mut() {
        let Rgba([r, g, b, _]) = *pixel;
        if r > threshold && g > threshold && b > threshold {
            *pixel = Rgba([255, 255, 255, 0]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_strictly_greater_on_every_channel() {
        let mut img = RgbaImage::new(3, 1);
        img.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        img.put_pixel(1, 0, Rgba([201, 201, 201, 255]));
        img.put_pixel(2, 0, Rgba([200, 200, 200, 255]));

        make_white_transparent(&mut img, 200);

        assert_eq!(*img.get_pixel(0, 0), Rgba([255, 255, 255, 0]));
        assert_eq!(*img.get_pixel(1, 0), Rgba([255, 255, 255, 0]));
        // 200 is not strictly greater than 200.
        assert_eq!(*img.get_pixel(2, 0), Rgba([200, 200, 200, 255]));
    }

    #[test]
    fn tinted_pixels_survive_any_threshold() {
        let mut img = RgbaImage::from_pixel(1, 1, Rgba([255, 0, 0, 255]));
        make_white_transparent(&mut img, 0);
        assert_eq!(*img.get_pixel(0, 0), Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn kept_pixels_preserve_their_alpha() {
        let mut img = RgbaImage::from_pixel(1, 1, Rgba([255, 255, 128, 77]));
        make_white_transparent(&mut img, 200);
        assert_eq!(*img.get_pixel(0, 0), Rgba([255, 255, 128, 77]));
    }

    #[test]
    fn near_white_conversion_ignores_existing_alpha() {
        let mut img = RgbaImage::from_pixel(1, 1, Rgba([250, 250, 250, 128]));
        make_white_transparent(&mut img, 200);
        assert_eq!(*img.get_pixel(0, 0), Rgba([255, 255, 255, 0]));
    }

    #[test]
    fn max_threshold_converts_nothing() {
        let mut img = RgbaImage::from_pixel(2, 2, Rgba([255, 255, 255, 255]));
        make_white_transparent(&mut img, 255);
        assert_eq!(*img.get_pixel(1, 1), Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn transform_is_idempotent() {
        let mut once = RgbaImage::new(2, 2);
        once.put_pixel(0, 0, Rgba([255, 255, 255, 255]));
        once.put_pixel(1, 0, Rgba([210, 220, 230, 10]));
        once.put_pixel(0, 1, Rgba([200, 255, 255, 255]));
        once.put_pixel(1, 1, Rgba([0, 0, 0, 255]));

        make_white_transparent(&mut once, 200);
        let mut twice = once.clone();
        make_white_transparent(&mut twice, 200);

        assert_eq!(once, twice);
    }
}

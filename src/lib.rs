//! # qrlogo
//!
//! Two small image utilities behind one library: generate a QR code PNG for
//! a URL with an optional centered logo, and turn the near-white background
//! of a logo image transparent.
//!
//! Each operation is a single synchronous pass (validate the inputs,
//! transform the pixels, write one PNG) with no shared state between runs.
//! The crate ships matching binaries, `generate-qr` and `remove-bg`.
//!
//! ## Features
//!
//! - Encode any URL or text at error-correction level High (≈30% damage
//!   tolerance), auto-selecting the smallest QR version that fits.
//! - Render modules at a configurable pixel size with a configurable
//!   quiet-zone border.
//! - Composite a logo at the symbol center, shrunk to a fifth of the image
//!   width and blended through its own alpha channel; a missing or broken
//!   logo degrades to a plain QR code instead of failing the run.
//! - Convert near-white pixels to transparency with a strict per-channel
//!   threshold, preserving tinted highlights and existing alpha.
//! - Atomic PNG writes: a failed save never leaves a truncated file.
//!
//! ## Example
//!
//! Generate a QR code with an embedded logo:
//!
//! ```no_run
//! use std::path::Path;
//! use qrlogo::{generate, QrOptions};
//!
//! let options = QrOptions {
//!     logo: Some("logo.png".into()),
//!     ..QrOptions::default()
//! };
//! let report = generate("https://example.com", Path::new("out/qr_code.png"), &options)?;
//! println!("{}x{} px at {}", report.width, report.height, report.path.display());
//! # Ok::<(), qrlogo::Error>(())
//! ```
//!
//! Make a logo's white background transparent:
//!
//! ```no_run
//! use std::path::Path;
//! use qrlogo::{remove_white_background, DEFAULT_THRESHOLD};
//!
//! remove_white_background(Path::new("logo_white.png"), Path::new("logo.png"), DEFAULT_THRESHOLD)?;
//! # Ok::<(), qrlogo::Error>(())
//! ```
//!
//! ## Modules
//!
//! - [`qr`]: QR code generation and logo compositing.
//! - [`background`]: white-background removal.
//! - [`error`]: the shared error type.
//! - [`io`]: atomic PNG write helpers.

pub mod background;
pub mod error;
pub mod io;
pub mod qr;

pub use crate::background::{remove_white_background, CleanedImage, DEFAULT_THRESHOLD};
pub use crate::error::{Error, Result};
pub use crate::qr::{generate, GeneratedQr, QrOptions};

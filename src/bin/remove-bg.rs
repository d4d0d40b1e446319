//! Turn the near-white background of an image transparent.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use qrlogo::{remove_white_background, DEFAULT_THRESHOLD};

#[derive(Parser, Debug)]
#[command(
    name = "remove-bg",
    version,
    about = "Turn the near-white background of an image transparent"
)]
struct Args {
    /// Input image (any raster format the image crate can decode)
    input: PathBuf,

    /// Output PNG path; its directory must already exist
    output: PathBuf,

    /// Per-channel cutoff (0-255); pixels with red, green, and blue all
    /// strictly above it become transparent
    #[arg(short, long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: u8,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "qrlogo=info".into()),
        )
        .init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("✗ {err:#}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let report = remove_white_background(&args.input, &args.output, args.threshold)?;

    println!("✓ background removed");
    println!("  input  {}", report.input.display());
    println!("  output {}", report.output.display());
    println!("  size   {}x{} px", report.width, report.height);
    Ok(())
}

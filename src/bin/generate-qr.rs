//! Generate a QR code PNG for a URL, optionally stamped with a centered logo.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use qrlogo::{generate, QrOptions};

#[derive(Parser, Debug)]
#[command(
    name = "generate-qr",
    version,
    about = "Generate a QR code PNG for a URL, optionally with a centered logo"
)]
struct Args {
    /// URL (or any text) to encode
    url: String,

    /// Output PNG path; parent directories are created as needed
    #[arg(short, long, default_value = "qr_code.png")]
    output: PathBuf,

    /// Logo image to composite at the center of the QR code
    #[arg(short, long)]
    logo: Option<PathBuf>,

    /// Pixel size of one QR module
    #[arg(long, default_value_t = 10)]
    box_size: u32,

    /// Quiet-zone width around the symbol, in modules
    #[arg(long, default_value_t = 4)]
    border: u32,
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
    let options = QrOptions {
        box_size: args.box_size,
        border: args.border,
        logo: args.logo,
    };
    let report = generate(&args.url, &args.output, &options)?;

    println!("✓ QR code generated");
    println!("  saved to {}", report.path.display());
    println!("  size {}x{} px", report.width, report.height);
    Ok(())
}

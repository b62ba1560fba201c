//! PDF text extractor - entry point
//!
//! Extracts text from a PDF into a UTF-8 `.txt` file with `\n` newlines.
//!
//! Examples:
//!     extract-pdf-text path/to/paper.pdf
//!     extract-pdf-text path/to/paper.pdf --out tmp/paper.txt

use clap::Parser;
use papersite_tools::extract::{
    default_output_path, extract_text, normalize_newlines, validate_pdf_path, write_text,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Extract PDF text into a .txt file
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    /// Path to a PDF file
    pdf: PathBuf,

    /// Output .txt path (defaults to tmp/<pdf>.txt)
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "papersite_tools=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(err) = validate_pdf_path(&cli.pdf) {
        eprintln!("ERROR: {}", err);
        std::process::exit(err.exit_code());
    }

    let out_path = cli.out.unwrap_or_else(|| default_output_path(&cli.pdf));

    let extracted = match extract_text(&cli.pdf) {
        Ok(extracted) => extracted,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(err.exit_code());
        }
    };

    // Written with \n line endings regardless of what the backend produced
    let text = normalize_newlines(&extracted.text);

    match write_text(&out_path, &text) {
        Ok(size) => {
            println!(
                "Wrote {} ({} bytes) using {}.",
                out_path.display(),
                size,
                extracted.backend
            );
        }
        Err(err) => {
            eprintln!("ERROR: {}", err);
            std::process::exit(err.exit_code());
        }
    }
}

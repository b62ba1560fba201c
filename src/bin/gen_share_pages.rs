//! Share page generator - entry point
//!
//! Reads `papers/manifest.json` and writes one standardized share page per
//! entry into `p/`. Run from the site root.

use papersite_tools::share::{self, load_manifest, validate_output_dir, write_share_page};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "papersite_tools=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run() {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> papersite_tools::Result<()> {
    let manifest_path = Path::new(share::MANIFEST_PATH);
    let out_dir = Path::new(share::OUTPUT_DIR);

    let entries = load_manifest(manifest_path)?;
    validate_output_dir(out_dir)?;

    println!("Updating {} paper share pages...", entries.len());

    for (id, entry) in &entries {
        let path = write_share_page(out_dir, *id, entry)?;
        println!("  ✓ Updated {}", path.display());
    }

    println!();
    println!("Successfully updated {} paper share pages.", entries.len());

    Ok(())
}

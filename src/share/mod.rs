//! Share page generation layer
//!
//! Renders one static HTML page per manifest entry, used for social-media
//! link previews of the interactive paper explainers.

mod manifest;
mod template;

pub use manifest::{load_manifest, PaperEntry};
pub use template::{render_share_page, short_description};

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Manifest location, relative to the site root
pub const MANIFEST_PATH: &str = "papers/manifest.json";

/// Output directory for the generated pages, relative to the site root
pub const OUTPUT_DIR: &str = "p";

/// Check that the output directory exists before anything is written.
pub fn validate_output_dir(out_dir: &Path) -> Result<()> {
    if !out_dir.is_dir() {
        return Err(Error::OutputDirNotFound {
            path: out_dir.display().to_string(),
        });
    }
    Ok(())
}

/// Render and write a single share page, overwriting any existing file.
/// Returns the written path.
pub fn write_share_page(out_dir: &Path, id: u32, entry: &PaperEntry) -> Result<PathBuf> {
    let description = short_description(&entry.summary);
    let html = render_share_page(id, &entry.title, &description);

    let path = out_dir.join(format!("{}.html", id));
    std::fs::write(&path, html)?;

    Ok(path)
}

//! External extraction backend: Poppler's `pdftotext`

use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Run `pdftotext -layout <pdf> -` and capture standard output.
///
/// `-layout` keeps columns somewhat readable for tables. Writing to stdout
/// avoids encoding surprises in intermediate files; the captured bytes are
/// decoded lossily so a stray non-UTF-8 sequence cannot fail the run.
pub fn extract(path: &Path) -> Result<String> {
    let output = Command::new("pdftotext")
        .arg("-layout")
        .arg(path)
        .arg("-")
        .output()
        .map_err(|e| Error::Pdftotext {
            reason: format!("failed to spawn (is Poppler installed?): {}", e),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::Pdftotext {
            reason: format!("exited with {}: {}", output.status, stderr.trim()),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

//! PDF text extraction layer
//!
//! Tries the in-process PDFium backend first and falls back to Poppler's
//! `pdftotext`, accumulating the failure reason of each attempt.

mod pdfium;
mod poppler;

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// An interchangeable strategy for extracting text from a PDF.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// In-process extraction via the PDFium library
    Pdfium,
    /// External `pdftotext` subprocess (Poppler)
    Pdftotext,
}

impl Backend {
    /// Name of this backend (for diagnostics and the success line)
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Pdfium => "pdfium",
            Backend::Pdftotext => "pdftotext",
        }
    }
}

impl std::fmt::Display for Backend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Text produced by a successful extraction, tagged with the backend used
#[derive(Debug, Clone)]
pub struct ExtractedText {
    pub text: String,
    pub backend: Backend,
}

/// Validate an extractor input path: must exist, be a regular file, and
/// carry a `.pdf` extension (case-insensitive).
pub fn validate_pdf_path(path: &Path) -> Result<()> {
    if !path.is_file() {
        return Err(Error::PdfNotFound {
            path: path.display().to_string(),
        });
    }

    let is_pdf = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("pdf"))
        .unwrap_or(false);
    if !is_pdf {
        return Err(Error::NotAPdf {
            path: path.display().to_string(),
        });
    }

    Ok(())
}

/// Extract text from a PDF, trying each backend in fixed priority order.
///
/// Backend failures are collected; if none succeeds the aggregate
/// [`Error::NoBackend`] lists every attempt plus remediation hints.
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<ExtractedText> {
    let path = path.as_ref();
    let mut attempts: Vec<String> = Vec::new();

    match pdfium::extract(path) {
        Ok(text) => {
            return Ok(ExtractedText {
                text,
                backend: Backend::Pdfium,
            })
        }
        Err(err) => {
            tracing::warn!("pdfium backend failed, falling back: {}", err);
            attempts.push(err.to_string());
        }
    }

    match poppler::extract(path) {
        Ok(text) => {
            return Ok(ExtractedText {
                text,
                backend: Backend::Pdftotext,
            })
        }
        Err(err) => {
            tracing::warn!("pdftotext backend failed: {}", err);
            attempts.push(err.to_string());
        }
    }

    Err(Error::NoBackend { attempts })
}

/// Normalize line endings: CRLF and lone CR both become LF.
pub fn normalize_newlines(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Default output path: `tmp/<input stem>.txt` under the working directory.
pub fn default_output_path(pdf_path: &Path) -> PathBuf {
    let stem = pdf_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    Path::new("tmp").join(format!("{}.txt", stem))
}

/// Write extracted text as UTF-8 with LF-only line endings, creating parent
/// directories as needed. Returns the byte size written.
///
/// Callers normalize first; nothing is written unless extraction fully
/// succeeded.
pub fn write_text(path: &Path, text: &str) -> Result<u64> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, text.as_bytes())?;
    Ok(text.len() as u64)
}

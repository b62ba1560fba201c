//! Error types for the site utilities

use thiserror::Error;

/// Result type alias for the site utilities
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the site utilities
#[derive(Error, Debug)]
pub enum Error {
    /// PDF file not found (or not a regular file)
    #[error("PDF not found: {path}")]
    PdfNotFound { path: String },

    /// Input path does not carry a .pdf extension
    #[error("Not a .pdf file: {path}")]
    NotAPdf { path: String },

    /// PDFium backend error
    #[error("pdfium: {reason}")]
    Pdfium { reason: String },

    /// pdftotext backend error
    #[error("pdftotext: {reason}")]
    Pdftotext { reason: String },

    /// Every extraction backend failed
    #[error(
        "No PDF text extraction backend succeeded.\nTried:\n- {}\n\nInstall one of:\n- the PDFium shared library (place libpdfium next to the binary or under /opt/pdfium/lib)\n- Poppler `pdftotext` (ensure `pdftotext` is on PATH)",
        .attempts.join("\n- ")
    )]
    NoBackend { attempts: Vec<String> },

    /// Manifest file not found
    #[error("manifest not found: {path}")]
    ManifestNotFound { path: String },

    /// Share page output directory not found
    #[error("output directory not found: {path}")]
    OutputDirNotFound { path: String },

    /// Manifest key is not a string-encoded integer
    #[error("manifest key is not numeric: {key:?}")]
    ManifestKey { key: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest parse error
    #[error("manifest parse error: {0}")]
    ManifestParse(#[from] serde_json::Error),
}

impl Error {
    /// Process exit code for the extractor CLI.
    /// 2 marks input validation failures, 3 marks extraction failures.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::PdfNotFound { .. } | Error::NotAPdf { .. } => 2,
            _ => 3,
        }
    }
}

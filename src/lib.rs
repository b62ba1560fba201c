//! Build utilities for the LLM Paper Explainers static site
//!
//! Two independent command-line tools share this library:
//! - `extract-pdf-text`: extract a PDF into normalized UTF-8 text, trying
//!   the in-process PDFium backend before falling back to `pdftotext`
//! - `gen-share-pages`: render one static share page per entry of the
//!   paper manifest

pub mod error;
pub mod extract;
pub mod share;

pub use error::{Error, Result};

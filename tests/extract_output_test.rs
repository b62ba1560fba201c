//! Integration tests for the PDF text extractor
//!
//! Backend success paths need a PDFium library or a `pdftotext` binary on
//! the machine, so these tests exercise the parts with fixed behavior:
//! validation, failure aggregation, and the normalize-then-write pipeline.

use papersite_tools::extract::{
    default_output_path, extract_text, normalize_newlines, validate_pdf_path, write_text,
};
use papersite_tools::Error;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

#[test]
fn test_validate_rejects_missing_path() {
    let err = validate_pdf_path(Path::new("/nonexistent/paper.pdf")).unwrap_err();
    assert!(matches!(err, Error::PdfNotFound { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_validate_rejects_wrong_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("paper.docx");
    fs::write(&path, b"data").unwrap();

    let err = validate_pdf_path(&path).unwrap_err();
    assert!(matches!(err, Error::NotAPdf { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_garbage_pdf_fails_with_aggregate_error() {
    // Not a real PDF: pdfium cannot parse it and pdftotext (if present)
    // exits non-zero, so every backend attempt must end up in the message.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.pdf");
    fs::write(&path, b"this is not a pdf").unwrap();

    let err = extract_text(&path).unwrap_err();
    assert!(matches!(err, Error::NoBackend { .. }));
    assert_eq!(err.exit_code(), 3);

    let msg = err.to_string();
    assert!(msg.contains("pdfium"), "message must name pdfium: {msg}");
    assert!(msg.contains("pdftotext"), "message must name pdftotext: {msg}");
}

#[test]
fn test_no_output_written_when_extraction_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("garbage.pdf");
    fs::write(&path, b"%PDF-bogus").unwrap();

    let _ = extract_text(&path);

    let out = default_output_path(&path);
    assert!(!out.exists(), "failed extraction must not leave output");
}

#[test]
fn test_normalize_then_write_produces_lf_only_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("tmp/paper.txt");

    let text = normalize_newlines("a\r\nb\rc");
    let size = write_text(&out, &text).unwrap();

    assert_eq!(size, 5);
    let bytes = fs::read(&out).unwrap();
    assert_eq!(bytes, b"a\nb\nc");
    assert!(!bytes.contains(&b'\r'));
}

#[test]
fn test_default_output_path_lands_in_tmp() {
    let out = default_output_path(Path::new("papers/deep/scaling-laws.pdf"));
    assert_eq!(out, Path::new("tmp/scaling-laws.txt"));
}

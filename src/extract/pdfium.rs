//! In-process extraction backend backed by PDFium

use crate::error::{Error, Result};
use pdfium_render::prelude::*;
use std::path::Path;

/// Get PDFium instance (creates new instance each time - PDFium is not thread-safe)
fn create_pdfium() -> Result<Pdfium> {
    // Try to bind to system library or use static linking
    let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| {
            Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(
                "/opt/pdfium/lib",
            ))
        })
        .or_else(|_| Pdfium::bind_to_system_library())
        .map_err(|e| Error::Pdfium {
            reason: format!("Failed to initialize PDFium: {}", e),
        })?;

    Ok(Pdfium::new(bindings))
}

/// Extract the full document text, joining non-empty pages with a blank line.
pub fn extract(path: &Path) -> Result<String> {
    let data = std::fs::read(path).map_err(|e| Error::Pdfium {
        reason: format!("Failed to read {}: {}", path.display(), e),
    })?;

    if data.len() < 4 || &data[0..4] != b"%PDF" {
        return Err(Error::Pdfium {
            reason: "Not a valid PDF file".to_string(),
        });
    }

    let pdfium = create_pdfium()?;

    let document = pdfium
        .load_pdf_from_byte_slice(&data, None)
        .map_err(|e| Error::Pdfium {
            reason: format!("{}", e),
        })?;

    let pages = document.pages();
    let mut parts: Vec<String> = Vec::with_capacity(pages.len() as usize);

    for index in 0..pages.len() {
        let page = pages.get(index).map_err(|e| Error::Pdfium {
            reason: format!("Failed to get page {}: {}", index + 1, e),
        })?;

        // Pages with no text layer contribute nothing
        let text = match page.text() {
            Ok(t) => t.all(),
            Err(_) => String::new(),
        };
        if !text.is_empty() {
            parts.push(text);
        }
    }

    Ok(parts.join("\n\n"))
}

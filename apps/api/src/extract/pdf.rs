use std::panic::{catch_unwind, AssertUnwindSafe};

use tracing::{debug, warn};

use crate::extract::{finish_text, DocumentKind, ExtractionError};

/// Extracts the text layer of every page, in page order, newline-joined.
///
/// Pages without a text layer (scanned images) contribute an empty string.
/// pdf-extract can panic on malformed fonts, so the parse runs under
/// `catch_unwind` and a panic is reported as a parse failure.
pub fn extract_pdf_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let pages = match catch_unwind(AssertUnwindSafe(|| {
        pdf_extract::extract_text_from_mem_by_pages(bytes)
    })) {
        Ok(Ok(pages)) => pages,
        Ok(Err(e)) => {
            warn!("PDF extraction failed: {e}");
            return Err(ExtractionError::Parse {
                kind: DocumentKind::Pdf,
                detail: e.to_string(),
            });
        }
        Err(_panic) => {
            warn!("PDF extraction panicked, likely a malformed font or glyph table");
            return Err(ExtractionError::Parse {
                kind: DocumentKind::Pdf,
                detail: "the PDF parser could not read this document".to_string(),
            });
        }
    };

    debug!("PDF parsed: {} pages", pages.len());
    finish_text(pages, DocumentKind::Pdf)
}

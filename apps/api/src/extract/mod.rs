//! Document intake: content sniffing and per-format text extraction.
//!
//! Flow: raw bytes → `sniff()` → `DocumentKind` → `extractor_for()` → plain text.
//! Nothing here trusts the filename or the declared content type.

use std::fmt;

use thiserror::Error;

pub mod docx;
pub mod pdf;
pub mod sniff;

#[cfg(test)]
pub(crate) mod fixtures;

pub use sniff::sniff;

/// Classification of an uploaded document, derived from its bytes alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    Unknown,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Docx => "DOCX",
            DocumentKind::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ExtractionError {
    #[error("Error extracting text from {kind}: {detail}")]
    Parse { kind: DocumentKind, detail: String },

    #[error("Error extracting text from {kind}: no readable text found")]
    Empty { kind: DocumentKind },
}

/// A format-specific text extractor.
pub type Extractor = fn(&[u8]) -> Result<String, ExtractionError>;

/// Picks the extractor for `kind`. `None` means the format is unsupported.
pub fn extractor_for(kind: DocumentKind) -> Option<Extractor> {
    match kind {
        DocumentKind::Pdf => Some(pdf::extract_pdf_text),
        DocumentKind::Docx => Some(docx::extract_docx_text),
        DocumentKind::Unknown => None,
    }
}

/// Joins per-page or per-paragraph text with newlines and trims the result.
/// An empty result is an extraction failure.
fn finish_text(parts: Vec<String>, kind: DocumentKind) -> Result<String, ExtractionError> {
    let text = parts.join("\n").trim().to_string();
    if text.is_empty() {
        return Err(ExtractionError::Empty { kind });
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_kind_display_labels() {
        assert_eq!(DocumentKind::Pdf.to_string(), "PDF");
        assert_eq!(DocumentKind::Docx.to_string(), "DOCX");
        assert_eq!(DocumentKind::Unknown.to_string(), "Unknown");
    }

    #[test]
    fn test_finish_text_joins_with_newlines_and_trims() {
        let parts = vec!["  first".to_string(), "second".to_string(), "   ".to_string()];
        let text = finish_text(parts, DocumentKind::Pdf).unwrap();
        assert_eq!(text, "first\nsecond");
    }

    #[test]
    fn test_finish_text_whitespace_only_is_empty_failure() {
        let parts = vec![" ".to_string(), "\n\t".to_string()];
        let err = finish_text(parts, DocumentKind::Docx).unwrap_err();
        assert_eq!(err, ExtractionError::Empty { kind: DocumentKind::Docx });
        assert_eq!(
            err.to_string(),
            "Error extracting text from DOCX: no readable text found"
        );
    }

    #[test]
    fn test_unknown_kind_has_no_extractor() {
        assert!(extractor_for(DocumentKind::Unknown).is_none());
    }

    #[test]
    fn test_extractor_for_dispatches_by_kind() {
        let docx = fixtures::docx_with_paragraphs(&["Rust developer"]);
        let extract = extractor_for(DocumentKind::Docx).unwrap();
        assert_eq!(extract(&docx).unwrap(), "Rust developer");

        let pdf = fixtures::pdf_with_pages(&["Resume"]);
        let extract = extractor_for(DocumentKind::Pdf).unwrap();
        assert!(extract(&pdf).unwrap().contains("Resume"));
    }
}

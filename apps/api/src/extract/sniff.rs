//! Magic-byte sniffing. Classifies uploads by content, never by filename or MIME type.

use std::io::Cursor;

use tracing::debug;
use zip::ZipArchive;

use crate::extract::DocumentKind;

const PDF_MAGIC: &[u8] = b"%PDF";
const ZIP_LOCAL_HEADER: &[u8] = b"PK\x03\x04";
/// Every Word document carries its body in this archive entry.
const DOCX_BODY_ENTRY: &str = "word/document.xml";

/// Classifies `bytes` as PDF, DOCX or Unknown. Never fails.
pub fn sniff(bytes: &[u8]) -> DocumentKind {
    if bytes.starts_with(PDF_MAGIC) {
        return DocumentKind::Pdf;
    }

    if bytes.starts_with(ZIP_LOCAL_HEADER) && has_docx_body(bytes) {
        return DocumentKind::Docx;
    }

    DocumentKind::Unknown
}

fn has_docx_body(bytes: &[u8]) -> bool {
    match ZipArchive::new(Cursor::new(bytes)) {
        Ok(archive) => archive.file_names().any(|name| name == DOCX_BODY_ENTRY),
        Err(e) => {
            debug!("ZIP signature present but archive is unreadable: {e}");
            false
        }
    }
}

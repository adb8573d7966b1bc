use docx_rs::{DocumentChild, Paragraph, ParagraphChild, RunChild};
use tracing::{debug, warn};

use crate::extract::{finish_text, DocumentKind, ExtractionError};

/// Extracts body paragraphs in document order, newline-joined.
///
/// Paragraph → Run → Text is the path through the docx-rs tree; runs inside
/// hyperlinks are included so linked portfolio URLs survive extraction.
pub fn extract_docx_text(bytes: &[u8]) -> Result<String, ExtractionError> {
    let docx = docx_rs::read_docx(bytes).map_err(|e| {
        warn!("DOCX extraction failed: {e}");
        ExtractionError::Parse {
            kind: DocumentKind::Docx,
            detail: e.to_string(),
        }
    })?;

    let paragraphs: Vec<String> = docx
        .document
        .children
        .iter()
        .filter_map(|child| match child {
            DocumentChild::Paragraph(para) => Some(paragraph_text(para)),
            _ => None,
        })
        .collect();

    debug!("DOCX parsed: {} paragraphs", paragraphs.len());
    finish_text(paragraphs, DocumentKind::Docx)
}

fn paragraph_text(para: &Paragraph) -> String {
    let mut text = String::new();
    push_runs(&para.children, &mut text);
    text
}

fn push_runs(children: &[ParagraphChild], out: &mut String) {
    for child in children {
        match child {
            ParagraphChild::Run(run) => {
                for run_child in &run.children {
                    if let RunChild::Text(t) = run_child {
                        out.push_str(&t.text);
                    }
                }
            }
            ParagraphChild::Hyperlink(link) => push_runs(&link.children, out),
            _ => {}
        }
    }
}

//! Resume Analysis: orchestrates a single evaluation request.
//!
//! Flow: validate upload → sniff → extract (blocking pool) → build prompt →
//!       model call → trimmed evaluation text.
//!
//! Failures are carried as `AnalysisError` and only flattened to the
//! user-facing string at the HTTP / form boundary.

use std::sync::Arc;

use bytes::Bytes;
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::extract::{extractor_for, sniff, ExtractionError};
use crate::llm_client::{LlmError, TextGenerator};

pub mod prompts;

use prompts::build_analysis_prompt;

/// Returned as a successful result when the model answers with no text.
pub const NO_RESPONSE_TEXT: &str = "No response generated.";

/// One uploaded resume plus the two form selections.
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    pub document: Bytes,
    pub target_company: String,
    /// Opaque here; the form offers Technical / Behavioral / Mixed.
    pub interview_type: String,
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Please upload a resume file.")]
    EmptyUpload,

    #[error("Unsupported file format. Please upload a PDF or DOCX file.")]
    UnsupportedFormat,

    #[error("{0}")]
    Extraction(#[from] ExtractionError),

    #[error("Error generating AI response: {0}")]
    Generation(#[from] LlmError),

    /// Not one of the user-facing outcomes; the boundary turns this into a 500.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AnalysisError {
    /// Stable machine-readable label for the outcome.
    pub fn kind(&self) -> &'static str {
        match self {
            AnalysisError::EmptyUpload => "validation",
            AnalysisError::UnsupportedFormat => "unsupported_format",
            AnalysisError::Extraction(_) => "extraction",
            AnalysisError::Generation(_) => "generation",
            AnalysisError::Internal(_) => "internal",
        }
    }
}

/// The analysis orchestrator. Stateless apart from the shared model handle,
/// so one instance serves every request concurrently.
#[derive(Clone)]
pub struct Analyzer {
    generator: Arc<dyn TextGenerator>,
}

impl Analyzer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    pub async fn analyze(&self, request: &AnalysisRequest) -> Result<String, AnalysisError> {
        let request_id = Uuid::new_v4();

        if request.document.is_empty() {
            info!(%request_id, "Rejected empty upload");
            return Err(AnalysisError::EmptyUpload);
        }

        let kind = sniff(&request.document);
        info!(
            %request_id,
            bytes = request.document.len(),
            "Sniffed upload as {kind}"
        );
        let extract = extractor_for(kind).ok_or(AnalysisError::UnsupportedFormat)?;

        let document = request.document.clone();
        let resume_text = tokio::task::spawn_blocking(move || extract(&document))
            .await
            .map_err(|e| AnalysisError::Internal(format!("extraction task failed: {e}")))?
            .map_err(|e| {
                warn!(%request_id, "Extraction failed: {e}");
                e
            })?;
        info!(%request_id, chars = resume_text.len(), "Extracted resume text");

        let prompt = build_analysis_prompt(
            &resume_text,
            &request.target_company,
            &request.interview_type,
        );

        let response = self.generator.generate(&prompt).await.map_err(|e| {
            warn!(%request_id, "Model call failed: {e}");
            AnalysisError::Generation(e)
        })?;

        let evaluation = response
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| NO_RESPONSE_TEXT.to_string());

        info!(%request_id, chars = evaluation.len(), "Analysis complete");
        Ok(evaluation)
    }
}

/// Flattens an analysis outcome into the `(outcome label, text)` pair shown to users.
pub fn flatten(result: Result<String, AnalysisError>) -> (&'static str, String) {
    match result {
        Ok(text) => ("ok", text),
        Err(e) => (e.kind(), e.to_string()),
    }
}

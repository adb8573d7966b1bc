//! Axum route handler for resume analysis uploads.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::Serialize;
use tracing::debug;

use crate::analysis::{flatten, AnalysisError, AnalysisRequest};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AnalyzeResponse {
    /// The evaluation text, or the user-facing error message.
    pub result: String,
    /// `ok`, or the error kind: validation | unsupported_format | extraction | generation
    pub outcome: &'static str,
}

/// POST /api/analyze
///
/// Multipart fields: `file`, `target_company`, `interview_type`.
/// Analysis failures are returned as 200 with the message in `result`;
/// only failures outside the analysis contract become HTTP errors.
pub async fn handle_analyze(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let request = read_analyze_form(&mut multipart).await?;
    analysis_response(state.analyzer.analyze(&request).await)
}

/// Maps an analysis outcome to the HTTP reply. User-facing outcomes are 200s;
/// `Internal` escapes the analysis contract and becomes a 500.
fn analysis_response(
    result: Result<String, AnalysisError>,
) -> Result<Json<AnalyzeResponse>, AppError> {
    let (outcome, result) = match result {
        Err(AnalysisError::Internal(msg)) => return Err(AppError::Internal(msg)),
        other => flatten(other),
    };

    Ok(Json(AnalyzeResponse { result, outcome }))
}

/// Collects the upload form. A missing `file` part is treated as an empty
/// upload so it surfaces as the analyzer's validation message.
async fn read_analyze_form(multipart: &mut Multipart) -> Result<AnalysisRequest, AppError> {
    let mut document = Bytes::new();
    let mut target_company: Option<String> = None;
    let mut interview_type: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                debug!(
                    "Received upload: filename={:?} content_type={:?}",
                    field.file_name(),
                    field.content_type()
                );
                document = field.bytes().await?;
            }
            "target_company" => target_company = Some(field.text().await?),
            "interview_type" => interview_type = Some(field.text().await?),
            other => debug!("Ignoring unexpected form field '{other}'"),
        }
    }

    Ok(AnalysisRequest {
        document,
        target_company: target_company.ok_or_else(|| missing_field("target_company"))?,
        interview_type: interview_type.ok_or_else(|| missing_field("interview_type"))?,
    })
}

fn missing_field(name: &str) -> AppError {
    AppError::UnprocessableEntity(format!("Missing form field '{name}'"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{DocumentKind, ExtractionError};
    use crate::llm_client::LlmError;
    use axum::{
        body::to_bytes,
        http::StatusCode,
        response::{IntoResponse, Response},
    };
    use serde_json::Value;

    async fn status_and_body(response: Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_internal_failure_is_500_with_error_envelope() {
        let response = analysis_response(Err(AnalysisError::Internal(
            "extraction task failed: cancelled".to_string(),
        )))
        .into_response();

        let (status, body) = status_and_body(response).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
        assert!(body.get("result").is_none());
    }

    #[tokio::test]
    async fn test_user_facing_outcomes_are_200_with_outcome_label() {
        let cases = vec![
            (Ok("Score: 8/10".to_string()), "ok", "Score: 8/10"),
            (
                Err(AnalysisError::EmptyUpload),
                "validation",
                "Please upload a resume file.",
            ),
            (
                Err(AnalysisError::UnsupportedFormat),
                "unsupported_format",
                "Unsupported file format. Please upload a PDF or DOCX file.",
            ),
            (
                Err(AnalysisError::Extraction(ExtractionError::Empty {
                    kind: DocumentKind::Pdf,
                })),
                "extraction",
                "Error extracting text from PDF: no readable text found",
            ),
            (
                Err(AnalysisError::Generation(LlmError::Timeout { secs: 60 })),
                "generation",
                "Error generating AI response: request timed out after 60s",
            ),
        ];

        for (result, outcome, text) in cases {
            let (status, body) = status_and_body(analysis_response(result).into_response()).await;
            assert_eq!(status, StatusCode::OK, "outcome {outcome}");
            assert_eq!(body["outcome"], outcome);
            assert_eq!(body["result"], text);
        }
    }
}

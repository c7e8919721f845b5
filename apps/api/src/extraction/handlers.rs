use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::debug;

use crate::errors::AppError;
use crate::extraction::pdf;
use crate::models::resume::ArchivedResume;
use crate::state::AppState;

/// POST /parse-resume
///
/// Accepts a multipart upload with a single `file` field holding a PDF,
/// runs the extraction pipeline, and returns the newly archived record.
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ArchivedResume>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart request: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let content_type = field.content_type().map(str::to_string);
        let filename = field
            .file_name()
            .map(str::to_string)
            .unwrap_or_else(|| "resume.pdf".to_string());
        let data: Bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;

        let record = process_resume(&state, content_type.as_deref(), &filename, &data).await?;
        return Ok(Json(record));
    }

    Err(AppError::Validation(
        "Missing 'file' field in multipart request".to_string(),
    ))
}

/// Runs the pipeline for one upload: content-type gate, PDF text extraction,
/// LLM structuring, archival. Nothing is persisted on any failure.
pub async fn process_resume(
    state: &AppState,
    content_type: Option<&str>,
    filename: &str,
    data: &[u8],
) -> Result<ArchivedResume, AppError> {
    if content_type != Some("application/pdf") {
        return Err(AppError::Validation(
            "Invalid file type. Please upload a PDF.".to_string(),
        ));
    }

    // A broken byte stream is an unexpected failure, not a client error.
    let text = pdf::extract_text(data).map_err(|e| AppError::Internal(anyhow::anyhow!(e)))?;
    debug!("extracted {} chars of text from {filename}", text.len());

    extract_and_archive(state, filename, &text).await
}

/// Structures extracted text via the backend and archives the result.
pub(crate) async fn extract_and_archive(
    state: &AppState,
    filename: &str,
    text: &str,
) -> Result<ArchivedResume, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(
            "Could not extract text from PDF.".to_string(),
        ));
    }

    let parsed = state.extractor.extract(text).await?;
    let record = state.archive.create(parsed, filename)?;
    Ok(record)
}

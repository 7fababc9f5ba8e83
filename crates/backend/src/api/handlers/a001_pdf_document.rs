use axum::body::Bytes;
use axum::extract::multipart::MultipartError;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

use crate::shared::api_error::ApiError;
use crate::state::AppState;
use contracts::domain::a001_pdf_document::UploadResponse;

const FILE_FIELD: &str = "file";

fn size_exceeded(max: usize) -> ApiError {
    ApiError::BadRequest(format!(
        "File size exceeds maximum allowed size of {} bytes",
        max
    ))
}

fn multipart_error(e: MultipartError, max: usize) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        size_exceeded(max)
    } else {
        ApiError::BadRequest(format!("Invalid multipart body: {}", e.body_text()))
    }
}

/// POST /api/upload
pub async fn upload(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let max = state.config.upload.max_upload_size;

    let mut upload: Option<(String, Bytes)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(e, max))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let content = field.bytes().await.map_err(|e| multipart_error(e, max))?;
        upload = Some((filename, content));
        break;
    }

    let (filename, content) = upload
        .ok_or_else(|| ApiError::Unprocessable(format!("Field '{}' is required", FILE_FIELD)))?;

    if !filename.ends_with(".pdf") {
        return Err(ApiError::BadRequest("Only PDF files are supported".into()));
    }
    if content.len() > max {
        return Err(size_exceeded(max));
    }

    let document = state
        .documents
        .save_and_process(&filename, content.to_vec())
        .await
        .map_err(|e| ApiError::Internal(format!("Error processing PDF: {}", e)))?;

    Ok(Json(UploadResponse {
        text_length: document.text_length(),
        document_id: document.document_id,
        filename: document.filename,
        page_count: document.page_count,
        message: "PDF uploaded and processed successfully".to_string(),
    }))
}

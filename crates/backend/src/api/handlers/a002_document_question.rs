use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use crate::shared::api_error::ApiError;
use crate::state::AppState;
use contracts::domain::a002_document_question::{QuestionRequest, QuestionResponse};

/// POST /api/ask
pub async fn ask(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<QuestionResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::Unprocessable(e.body_text()))?;
    request.validate().map_err(ApiError::Unprocessable)?;

    let document_text = state
        .documents
        .get_document_text(&request.document_id)
        .await
        .ok_or_else(|| {
            ApiError::NotFound(format!(
                "Document with ID {} not found",
                request.document_id
            ))
        })?;

    let result = state
        .qa
        .answer_question(&request.question, &document_text, &request.document_id)
        .await
        .map_err(|e| ApiError::Internal(format!("Error generating answer: {}", e)))?;

    Ok(Json(QuestionResponse {
        question: request.question,
        answer: result.answer,
        document_id: result.document_id,
        context_used: Some(result.context_used),
    }))
}

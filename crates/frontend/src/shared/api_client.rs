//! HTTP-клиент backend API
//!
//! Three calls: document upload, question, health check. Non-success
//! responses are turned into [`ApiError::RequestFailed`] carrying the
//! backend's `detail` when there is one.

use contracts::domain::a001_pdf_document::UploadResponse;
use contracts::domain::a002_document_question::{QuestionRequest, QuestionResponse};
use contracts::shared::api::HealthResponse;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use super::api_error::ApiError;
use super::api_utils::api_url;

const UPLOAD_FAILED: &str = "Upload failed";
const QUESTION_FAILED: &str = "Question failed";
const HEALTH_FAILED: &str = "Health check failed";

/// Загрузить PDF на backend (multipart, поле `file`)
pub async fn upload_document(file: &web_sys::File) -> Result<UploadResponse, ApiError> {
    let form = web_sys::FormData::new()
        .map_err(|e| ApiError::Network(format!("Failed to create form data: {:?}", e)))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|e| ApiError::Network(format!("Failed to attach file: {:?}", e)))?;

    let response = Request::post(&api_url("/upload"))
        .body(form)
        .map_err(|e| ApiError::Network(format!("Failed to build request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(response, UPLOAD_FAILED).await
}

/// Задать вопрос по загруженному документу
pub async fn ask_question(document_id: &str, question: &str) -> Result<QuestionResponse, ApiError> {
    let request = QuestionRequest::new(document_id, question);

    let response = Request::post(&api_url("/ask"))
        .json(&request)
        .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    read_json(response, QUESTION_FAILED).await
}

/// Проверить доступность backend
pub async fn check_health() -> Result<HealthResponse, ApiError> {
    let response = Request::get(&api_url("/health"))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    // тело ошибки health не разбираем
    if !response.ok() {
        return Err(ApiError::RequestFailed {
            status: response.status(),
            message: HEALTH_FAILED.to_string(),
        });
    }

    read_json(response, HEALTH_FAILED).await
}

async fn read_json<T: DeserializeOwned>(response: Response, fallback: &str) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::from_error_body(status, &body, fallback));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::InvalidResponse(e.to_string()))
}

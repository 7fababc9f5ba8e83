use serde::{Deserialize, Serialize};

/// Ответ backend на успешную загрузку PDF
///
/// `document_id` is opaque to the client; it only scopes later questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub document_id: String,
    pub filename: String,
    pub page_count: u32,
    pub text_length: u64,
    pub message: String,
}

use contracts::shared::api::ErrorResponse;
use thiserror::Error;

/// Ошибки обращения к backend
///
/// `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Backend answered with a non-success status
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// No response at all (server down, CORS, DNS...)
    #[error("Could not reach the server")]
    Network(String),

    /// Success status, but the body is not what the contract says
    #[error("Unexpected response from the server")]
    InvalidResponse(String),
}

impl ApiError {
    /// Build `RequestFailed` from a failed response body.
    ///
    /// Uses the `detail` field when the body is a JSON `ErrorResponse` with a
    /// non-blank detail, otherwise `fallback`.
    pub fn from_error_body(status: u16, body: &str, fallback: &str) -> Self {
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .map(|e| e.detail)
            .filter(|detail| !detail.trim().is_empty())
            .unwrap_or_else(|| fallback.to_string());
        ApiError::RequestFailed { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Technical details for the browser console
    pub fn log_details(&self) -> String {
        match self {
            ApiError::RequestFailed { status, message } => format!("HTTP {}: {}", status, message),
            ApiError::Network(e) => format!("network: {}", e),
            ApiError::InvalidResponse(e) => format!("invalid response: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detail_is_used() {
        let err = ApiError::from_error_body(500, r#"{"detail":"LLM unavailable"}"#, "Question failed");
        assert_eq!(
            err,
            ApiError::RequestFailed {
                status: 500,
                message: "LLM unavailable".into()
            }
        );
        assert_eq!(err.to_string(), "LLM unavailable");
        assert_eq!(err.status(), Some(500));
    }

    #[test]
    fn test_fallback_when_body_is_not_error_response() {
        let err = ApiError::from_error_body(502, "<html>Bad Gateway</html>", "Upload failed");
        assert_eq!(err.to_string(), "Upload failed");

        let err = ApiError::from_error_body(400, r#"{"detail":"  "}"#, "Upload failed");
        assert_eq!(err.to_string(), "Upload failed");
    }

    #[test]
    fn test_network_failure_is_distinct() {
        let err = ApiError::Network("TypeError: Failed to fetch".into());
        assert_eq!(err.status(), None);
        assert_eq!(err.to_string(), "Could not reach the server");
        assert!(err.log_details().contains("Failed to fetch"));
    }
}

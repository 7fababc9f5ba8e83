//! API utilities for frontend-backend communication
//!
//! The backend base URL is baked in at build time from `PDFQA_API_URL`.

/// Base URL used when `PDFQA_API_URL` is not set during the build
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Get the base URL for API requests, without a trailing slash
///
/// # Example
/// ```text
/// PDFQA_API_URL=https://qa.example.com/api trunk build
/// api_base() == "https://qa.example.com/api"
/// ```
pub fn api_base() -> String {
    option_env!("PDFQA_API_URL")
        .filter(|url| !url.trim().is_empty())
        .unwrap_or(DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Build a full API URL from an endpoint path
///
/// # Example
/// ```text
/// api_url("/upload") == "http://localhost:8000/api/upload"
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8000/api", "/upload"),
            "http://localhost:8000/api/upload"
        );
        assert_eq!(
            join_url("http://localhost:8000/api/", "ask"),
            "http://localhost:8000/api/ask"
        );
    }

    #[test]
    fn test_api_base_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
    }
}

use axum::Json;
use contracts::shared::api::{ApiEndpoints, ApiInfo, HealthResponse};

/// GET /api/
pub async fn info() -> Json<ApiInfo> {
    Json(ApiInfo {
        message: "AI-Driven PDF Question Answering API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        endpoints: ApiEndpoints {
            upload: "/api/upload".to_string(),
            ask: "/api/ask".to_string(),
        },
    })
}

/// GET /api/health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
    })
}

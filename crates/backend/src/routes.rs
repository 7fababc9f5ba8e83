use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;

use crate::api::handlers;
use crate::state::AppState;
use crate::system;

/// Запас на заголовки multipart сверх максимального размера файла
const MULTIPART_OVERHEAD: usize = 64 * 1024;

fn cors_layer(state: &AppState) -> CorsLayer {
    let origins: Vec<HeaderValue> = state
        .config
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("Ignoring invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
}

/// Конфигурация всех роутов приложения
pub fn configure_routes(state: Arc<AppState>) -> Router {
    let body_limit = state.config.upload.max_upload_size + MULTIPART_OVERHEAD;
    let static_dir = state.config.server.static_dir.clone();
    let cors = cors_layer(&state);

    Router::new()
        .route("/api", get(handlers::system::info))
        .route("/api/", get(handlers::system::info))
        .route("/api/health", get(handlers::system::health))
        .route(
            "/api/upload",
            post(handlers::a001_pdf_document::upload)
                .layer(DefaultBodyLimit::max(body_limit)),
        )
        .route("/api/ask", post(handlers::a002_document_question::ask))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(system::middleware::request_logger))
        .layer(cors)
        .with_state(state)
}

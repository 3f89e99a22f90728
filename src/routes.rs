// src/routes.rs

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::{
    handlers::{exam, page, template, upload},
    state::AppState,
};

/// Assembles the application router.
///
/// * The page itself and its two form targets.
/// * Template downloads for bulk uploads.
/// * Request tracing on every route.
pub fn create_router(state: AppState) -> Router {
    let upload_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/", get(page::show_page))
        .route("/exams", post(exam::submit_exam))
        .route("/bulk-upload", post(upload::bulk_upload).layer(upload_limit))
        .route("/template.xlsx", get(template::download_xlsx))
        .route("/template.csv", get(template::download_csv))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

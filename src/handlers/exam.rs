// src/handlers/exam.rs

use std::sync::Arc;

use axum::{
    Form,
    extract::State,
    http::HeaderMap,
    response::Response,
};

use crate::{
    config::Config,
    error::AppError,
    handlers::page::page_response,
    models::exam_record::ExamRecordFields,
    session::ViewSessions,
    utils::cookie::session_id,
};

/// Entry form submission.
///
/// * Sends the record to the ranking API once.
/// * Re-fetches exam data and rankings whether or not that worked.
/// * Renders the page with an empty form and, on failure, the reason.
pub async fn submit_exam(
    State(sessions): State<Arc<ViewSessions>>,
    State(config): State<Config>,
    headers: HeaderMap,
    Form(fields): Form<ExamRecordFields>,
) -> Response {
    let (id, view) = sessions.resume(session_id(&headers));

    let mut view = view.lock().await;
    // Let the mount of a freshly opened view land before the new write.
    view.settle().await;

    match view.submit_record(fields).await {
        Ok(record) => tracing::info!("Exam record {} created", record.id),
        Err(AppError::BadRequest(reason)) => {
            tracing::debug!("Exam form incomplete: {}", reason)
        }
        // Already logged and shown as the form message.
        Err(_) => {}
    }
    view.settle().await;

    page_response(id, &view, &config)
}

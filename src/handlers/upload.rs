// src/handlers/upload.rs

use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::HeaderMap,
    response::Response,
};

use crate::{
    config::Config,
    error::AppError,
    handlers::page::page_response,
    models::upload::SelectedFile,
    session::ViewSessions,
    utils::cookie::session_id,
};

/// Multipart field carrying the spreadsheet.
pub const FILE_FIELD: &str = "file";

/// Bulk upload submission.
///
/// An empty file input keeps the file held from a failed attempt, so the
/// retry sends it again. With nothing held the panel asks for a file and no
/// request reaches the ranking API.
pub async fn bulk_upload(
    State(sessions): State<Arc<ViewSessions>>,
    State(config): State<Config>,
    headers: HeaderMap,
    multipart: Multipart,
) -> Result<Response, AppError> {
    let file = read_file_field(multipart).await?;
    let (id, view) = sessions.resume(session_id(&headers));

    let mut view = view.lock().await;
    view.settle().await;

    view.select_file(file);
    match view.upload().await {
        Ok(result) => tracing::info!("Bulk upload created {} records", result.count),
        Err(AppError::NoFileSelected) => tracing::debug!("Upload attempted without a file"),
        // Already logged and shown by the panel.
        Err(_) => {}
    }
    view.settle().await;

    Ok(page_response(id, &view, &config))
}

/// Reads the `file` part, skipping any other fields.
async fn read_file_field(mut multipart: Multipart) -> Result<Option<SelectedFile>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed upload: {}", e)))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let file_name = field.file_name().map(str::to_owned);
        let content_type = field.content_type().map(str::to_owned);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Could not read upload: {}", e)))?;

        return Ok(SelectedFile::from_part(file_name, content_type, bytes.to_vec()));
    }

    Ok(None)
}

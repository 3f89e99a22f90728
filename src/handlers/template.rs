// src/handlers/template.rs

use axum::{http::header, response::IntoResponse};

use crate::{
    error::AppError,
    utils::template::{
        CSV_TEMPLATE_FILE_NAME, XLSX_CONTENT_TYPE, XLSX_TEMPLATE_FILE_NAME, build_csv_template,
        build_xlsx_template,
    },
};

/// Downloads the spreadsheet template for bulk uploads.
pub async fn download_xlsx() -> Result<impl IntoResponse, AppError> {
    let bytes = build_xlsx_template()?;

    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, attachment(XLSX_TEMPLATE_FILE_NAME)),
        ],
        bytes,
    ))
}

/// Downloads the header-only CSV template.
pub async fn download_csv() -> Result<impl IntoResponse, AppError> {
    let bytes = build_csv_template()?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, attachment(CSV_TEMPLATE_FILE_NAME)),
        ],
        bytes,
    ))
}

fn attachment(file_name: &str) -> String {
    format!("attachment; filename=\"{}\"", file_name)
}

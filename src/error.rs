// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::models::upload::NO_FILE_MESSAGE;

/// Global Application Error Enum.
/// Centralizes error handling and mapping to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    // 502: the ranking API could not be reached
    NetworkError(String),

    // 422: the ranking API rejected the submitted fields
    ValidationError(String),

    // 400: an upload was attempted without choosing a file
    NoFileSelected,

    // 502: the ranking API answered with an unexpected status
    UpstreamError { status: u16, message: String },

    // 502: the ranking API answered with a body we could not read
    DecodeError(String),

    // 400 Bad Request
    BadRequest(String),

    // 500 Internal Server Error
    InternalServerError(String),

    // Startup only
    Config(String),
}

impl AppError {
    /// Short text suitable for showing to the person using the page.
    pub fn user_message(&self) -> String {
        match self {
            AppError::NetworkError(_) => "The ranking service could not be reached.".to_string(),
            AppError::ValidationError(msg) => msg.clone(),
            AppError::NoFileSelected => NO_FILE_MESSAGE.to_string(),
            AppError::UpstreamError { status, .. } => {
                format!("The ranking service answered with status {}.", status)
            }
            AppError::DecodeError(_) => {
                "The ranking service sent a response that could not be read.".to_string()
            }
            AppError::BadRequest(msg) => msg.clone(),
            AppError::InternalServerError(_) | AppError::Config(_) => {
                "Something went wrong. Please try again.".to_string()
            }
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::error::Error for AppError {}

/// Implements `IntoResponse` for `AppError`.
/// Converts the error into a JSON response with appropriate HTTP status code.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::NetworkError(msg) | AppError::DecodeError(msg) => {
                tracing::error!("Ranking API failure: {}", msg);
                StatusCode::BAD_GATEWAY
            }
            AppError::UpstreamError { status, message } => {
                tracing::error!("Ranking API answered {}: {}", status, message);
                StatusCode::BAD_GATEWAY
            }
            AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NoFileSelected | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::InternalServerError(msg) | AppError::Config(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = Json(json!({
            "error": self.user_message(),
        }));

        (status, body).into_response()
    }
}

/// Sorts `reqwest::Error` into transport, status and decoding failures.
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            AppError::DecodeError(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::UpstreamError {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            AppError::NetworkError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::DecodeError(err.to_string())
    }
}

impl From<zip::result::ZipError> for AppError {
    fn from(err: zip::result::ZipError) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

impl From<csv::Error> for AppError {
    fn from(err: csv::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

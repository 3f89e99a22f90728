// src/api/client.rs

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    Client, Response, StatusCode,
    multipart::{Form, Part},
};
use serde::de::DeserializeOwned;
use url::Url;

use super::{
    BULK_UPLOAD_PATH, CERTIFICATIONS_PATH, COURSE_TYPES_PATH, EXAM_DATA_PATH, RANKINGS_PATH,
    RankingApi,
};
use crate::{
    error::AppError,
    models::{
        exam_record::{ExamRecord, ExamRecordFields},
        ranking::RankingEntry,
        upload::{BulkUploadResult, SelectedFile},
    },
};

/// HTTP implementation of [`RankingApi`].
///
/// The base URL is handed in at construction; nothing is read from the
/// environment here.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::InternalServerError(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends `path` to the base URL, keeping any path prefix the base has.
    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.as_str().trim_end_matches('/'), path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, AppError> {
        let response = self.client.get(self.endpoint(path)).send().await?;
        let response = ensure_success(response).await?;

        Ok(response.json::<T>().await?)
    }

    /// Fetches a JSON array, dropping entries that do not decode so one bad
    /// row does not blank the whole table.
    async fn get_rows<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, AppError> {
        let rows: Vec<serde_json::Value> = self.get_json(path).await?;
        Ok(decode_rows(path, rows))
    }
}

fn decode_rows<T: DeserializeOwned>(path: &str, rows: Vec<serde_json::Value>) -> Vec<T> {
    rows.into_iter()
        .enumerate()
        .filter_map(|(index, row)| match serde_json::from_value(row) {
            Ok(decoded) => Some(decoded),
            Err(e) => {
                tracing::warn!("Skipping entry {} from {}: {}", index, path, e);
                None
            }
        })
        .collect()
}

/// Turns a non-success response into an error.
/// 400 and 422 are the API rejecting the submitted data.
async fn ensure_success(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    let message = rejection_message(&body).unwrap_or_else(|| status.to_string());

    if status == StatusCode::BAD_REQUEST || status == StatusCode::UNPROCESSABLE_ENTITY {
        Err(AppError::ValidationError(message))
    } else {
        Err(AppError::UpstreamError {
            status: status.as_u16(),
            message,
        })
    }
}

/// Pulls a readable message out of an error body such as
/// `{"error": "..."}` or `{"message": "..."}`.
fn rejection_message(body: &str) -> Option<String> {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return Some(text.to_string());
            }
        }
    }

    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[async_trait]
impl RankingApi for ApiClient {
    async fn list_exam_records(&self) -> Result<Vec<ExamRecord>, AppError> {
        self.get_rows(EXAM_DATA_PATH).await
    }

    async fn list_rankings(&self) -> Result<Vec<RankingEntry>, AppError> {
        self.get_rows(RANKINGS_PATH).await
    }

    async fn list_certifications(&self) -> Result<Vec<String>, AppError> {
        self.get_json(CERTIFICATIONS_PATH).await
    }

    async fn list_course_types(&self) -> Result<Vec<String>, AppError> {
        self.get_json(COURSE_TYPES_PATH).await
    }

    async fn create_exam_record(&self, fields: &ExamRecordFields) -> Result<ExamRecord, AppError> {
        let response = self
            .client
            .post(self.endpoint(EXAM_DATA_PATH))
            .json(fields)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        Ok(response.json::<ExamRecord>().await?)
    }

    async fn bulk_create_exam_records(
        &self,
        file: &SelectedFile,
    ) -> Result<BulkUploadResult, AppError> {
        let mut part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        if let Some(content_type) = &file.content_type {
            part = part
                .mime_str(content_type)
                .map_err(|e| AppError::BadRequest(format!("Invalid file type: {}", e)))?;
        }
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(self.endpoint(BULK_UPLOAD_PATH))
            .multipart(form)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        Ok(response.json::<BulkUploadResult>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(Url::parse(base).unwrap(), Duration::from_secs(1)).unwrap()
    }

    #[test]
    fn endpoint_keeps_base_path_prefix() {
        assert_eq!(
            client("http://ranking.local/v1/").endpoint(RANKINGS_PATH),
            "http://ranking.local/v1/api/rankings"
        );
        assert_eq!(
            client("http://ranking.local").endpoint(EXAM_DATA_PATH),
            "http://ranking.local/api/examdata"
        );
    }

    #[test]
    fn undecodable_rows_are_skipped() {
        let rows = vec![
            serde_json::json!({"_id": "r1", "rank": 1, "name": "Ada"}),
            serde_json::json!({"_id": "r2", "rank": 0, "name": "Zero"}),
            serde_json::json!("not an object"),
            serde_json::json!({"_id": "r3", "rank": 2, "name": "Grace", "score": "88"}),
        ];

        let decoded: Vec<RankingEntry> = decode_rows(RANKINGS_PATH, rows);

        let names: Vec<&str> = decoded.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Grace"]);
        assert_eq!(decoded[1].score, Some(88.0));
    }

    #[test]
    fn rejection_message_prefers_error_field() {
        assert_eq!(
            rejection_message(r#"{"error":"name is required"}"#).as_deref(),
            Some("name is required")
        );
        assert_eq!(
            rejection_message(r#"{"message":"bad date"}"#).as_deref(),
            Some("bad date")
        );
        assert_eq!(rejection_message("  plain text  ").as_deref(), Some("plain text"));
        assert_eq!(rejection_message(""), None);
    }
}

// src/api/mod.rs

pub mod client;

use async_trait::async_trait;

use crate::{
    error::AppError,
    models::{
        exam_record::{ExamRecord, ExamRecordFields},
        ranking::RankingEntry,
        upload::{BulkUploadResult, SelectedFile},
    },
};

pub use client::ApiClient;

pub const EXAM_DATA_PATH: &str = "/api/examdata";
pub const RANKINGS_PATH: &str = "/api/rankings";
pub const CERTIFICATIONS_PATH: &str = "/api/certifications";
pub const COURSE_TYPES_PATH: &str = "/api/coursetypes";
pub const BULK_UPLOAD_PATH: &str = "/api/bulkupload";

/// Operations offered by the ranking API.
///
/// Reads are idempotent. Nothing is retried: every call is sent once and
/// its error handed back to the caller.
#[async_trait]
pub trait RankingApi: Send + Sync {
    async fn list_exam_records(&self) -> Result<Vec<ExamRecord>, AppError>;

    /// Leaderboard in rank order, truncated to the top 30 by the API.
    async fn list_rankings(&self) -> Result<Vec<RankingEntry>, AppError>;

    async fn list_certifications(&self) -> Result<Vec<String>, AppError>;

    async fn list_course_types(&self) -> Result<Vec<String>, AppError>;

    /// Fails with `ValidationError` when the API rejects the fields and with
    /// `NetworkError` when it cannot be reached.
    async fn create_exam_record(&self, fields: &ExamRecordFields) -> Result<ExamRecord, AppError>;

    async fn bulk_create_exam_records(
        &self,
        file: &SelectedFile,
    ) -> Result<BulkUploadResult, AppError>;
}

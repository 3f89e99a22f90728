// src/session/upload.rs

use crate::{
    api::RankingApi,
    error::AppError,
    models::upload::{BulkUploadResult, NO_FILE_MESSAGE, SelectedFile},
};

pub const UPLOAD_FAILED_MESSAGE: &str = "Error uploading file. Please try again.";

pub fn upload_success_message(count: u64) -> String {
    format!("Successfully uploaded {} records.", count)
}

/// Whether the upload panel currently holds a file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum UploadState {
    #[default]
    Idle,
    FileSelected(SelectedFile),
}

/// Bulk upload panel: holds the picked file and the last message shown.
#[derive(Debug, Clone, Default)]
pub struct UploadPanel {
    state: UploadState,
    message: Option<String>,
}

impl UploadPanel {
    pub fn state(&self) -> &UploadState {
        &self.state
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// File picker contents on submit. A real file replaces whatever was
    /// held; an empty picker leaves the state alone, since a browser never
    /// re-fills the input with a file held from an earlier attempt.
    pub fn select_file(&mut self, file: Option<SelectedFile>) {
        if let Some(file) = file {
            self.state = UploadState::FileSelected(file);
        }
    }

    /// Sends the held file to the bulk upload endpoint.
    ///
    /// * `Idle`: no request is made and the panel asks for a file.
    /// * success: reports the count and returns to `Idle`.
    /// * failure: reports a generic error and keeps the file for another try.
    pub async fn upload(&mut self, api: &dyn RankingApi) -> Result<BulkUploadResult, AppError> {
        let file = match &self.state {
            UploadState::Idle => {
                self.message = Some(NO_FILE_MESSAGE.to_string());
                return Err(AppError::NoFileSelected);
            }
            UploadState::FileSelected(file) => file,
        };

        tracing::info!(
            "Uploading {} ({} bytes) for bulk creation",
            file.file_name,
            file.bytes.len()
        );

        match api.bulk_create_exam_records(file).await {
            Ok(result) => {
                self.message = Some(upload_success_message(result.count));
                self.state = UploadState::Idle;
                Ok(result)
            }
            Err(e) => {
                tracing::warn!("Bulk upload failed: {}", e);
                self.message = Some(UPLOAD_FAILED_MESSAGE.to_string());
                Err(e)
            }
        }
    }
}

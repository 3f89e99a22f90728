// src/models/upload.rs

use serde::{Deserialize, Serialize};

/// File types offered by the upload picker.
pub const ACCEPTED_UPLOAD_TYPES: &str = ".csv,.xlsx,.xls";

/// Shown when an upload is attempted with nothing picked.
pub const NO_FILE_MESSAGE: &str = "Please select a file to upload.";

/// A spreadsheet chosen for bulk upload, held in memory until sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Returns `None` for the empty part a browser sends when no file was picked.
    pub fn from_part(
        file_name: Option<String>,
        content_type: Option<String>,
        bytes: Vec<u8>,
    ) -> Option<Self> {
        let file_name = file_name.unwrap_or_default();
        if file_name.trim().is_empty() && bytes.is_empty() {
            return None;
        }

        Some(Self {
            file_name,
            content_type,
            bytes,
        })
    }
}

/// Response of the bulk upload endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkUploadResult {
    pub count: u64,
}

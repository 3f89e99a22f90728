// src/models/exam_record.rs

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use validator::Validate;

/// Outcome of an exam attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExamStatus {
    Passed,
    Failed,
}

impl ExamStatus {
    pub const ALL: [ExamStatus; 2] = [ExamStatus::Passed, ExamStatus::Failed];

    pub const fn as_str(&self) -> &'static str {
        match self {
            ExamStatus::Passed => "Passed",
            ExamStatus::Failed => "Failed",
        }
    }
}

impl fmt::Display for ExamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One exam attempt as stored by the ranking API.
/// The id is assigned by the API and treated as opaque.
///
/// Fields are display-only, so a record with a missing or oddly typed field
/// still decodes: text falls back to empty and unreadable numbers to `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExamRecord {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,

    pub name: String,

    /// ISO-like date string as sent by the API.
    pub date: String,

    pub certification: String,

    pub course_type: String,

    /// Usually `Passed` or `Failed`; shown as sent.
    pub status: String,

    #[serde(deserialize_with = "number_or_text")]
    pub score: Option<f64>,

    #[serde(deserialize_with = "number_or_text")]
    pub total_score: Option<f64>,

    pub session_link: String,
}

/// Accepts `85`, `"85"` or anything else (read as `None`).
pub(crate) fn number_or_text<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// DTO for creating an exam record from the entry form.
///
/// Keys serialize to exactly the form field names. Values are sent as the
/// strings the browser posted; the ranking API coerces them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ExamRecordFields {
    #[validate(length(min = 1, message = "Name is required."))]
    pub name: String,
    #[validate(length(min = 1, message = "Date is required."))]
    pub date: String,
    #[validate(length(min = 1, message = "Certification is required."))]
    pub certification: String,
    #[validate(length(min = 1, message = "Course level is required."))]
    pub course_type: String,
    #[validate(length(min = 1, message = "Status is required."))]
    pub status: String,
    #[validate(length(min = 1, message = "Score is required."))]
    pub score: String,
    #[validate(length(min = 1, message = "Total score is required."))]
    pub total_score: String,
    #[validate(length(min = 1, message = "Session link is required."))]
    pub session_link: String,
}

impl ExamRecordFields {
    /// Looks a value up by its form field name.
    pub fn value_of(&self, field_name: &str) -> Option<&str> {
        let value = match field_name {
            "name" => &self.name,
            "date" => &self.date,
            "certification" => &self.certification,
            "courseType" => &self.course_type,
            "status" => &self.status,
            "score" => &self.score,
            "totalScore" => &self.total_score,
            "sessionLink" => &self.session_link,
            _ => return None,
        };
        Some(value.as_str())
    }
}

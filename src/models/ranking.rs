// src/models/ranking.rs

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::models::exam_record::number_or_text;

/// One leaderboard row, computed entirely by the ranking API.
/// The client displays `rank` as given and never recomputes it. Only the
/// id and rank are required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub rank: NonZeroU32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub certification: String,
    #[serde(default)]
    pub course_type: String,
    #[serde(default, deserialize_with = "number_or_text")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "number_or_text")]
    pub total_score: Option<f64>,
}

// src/view/tables.rs

use chrono::Locale;

use crate::{
    config::RANKING_WINDOW,
    models::{exam_record::ExamRecord, ranking::RankingEntry},
    utils::date::format_exam_date,
    view::primitives::{external_link, message, row, table, td, text_td},
};

pub const EXAM_DATA_HEADERS: [&str; 8] = [
    "Name",
    "Date",
    "Certification",
    "Course Level",
    "Status",
    "Score",
    "Total Score",
    "Session Link",
];

pub const RANKING_HEADERS: [&str; 6] = [
    "Rank",
    "Name",
    "Certification",
    "Course Level",
    "Score",
    "Total Score",
];

pub const TOP_RANKINGS_NOTE: &str = "Showing top 30 rankings. More may be available.";

/// Scores print like the API sent them: `85`, not `85.0`. A missing score
/// is an empty cell.
fn score_cell(value: Option<f64>) -> String {
    text_td(&value.map(format_score).unwrap_or_default())
}

pub fn format_score(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Exam records in the order the API returned them.
pub fn render_exam_data(records: &[ExamRecord], locale: Locale) -> String {
    let rows: Vec<String> = records
        .iter()
        .map(|exam| {
            row(&[
                text_td(&exam.name),
                text_td(&format_exam_date(&exam.date, locale)),
                text_td(&exam.certification),
                text_td(&exam.course_type),
                text_td(&exam.status),
                score_cell(exam.score),
                score_cell(exam.total_score),
                td(&external_link(&exam.session_link, "View Session")),
            ])
        })
        .collect();

    table(&EXAM_DATA_HEADERS, &rows)
}

/// Leaderboard rows as computed by the API. When a full window came back
/// there may be more entries than are shown; no paging is offered.
pub fn render_rankings(rankings: &[RankingEntry]) -> String {
    let rows: Vec<String> = rankings
        .iter()
        .map(|ranking| {
            row(&[
                text_td(&ranking.rank.to_string()),
                text_td(&ranking.name),
                text_td(&ranking.certification),
                text_td(&ranking.course_type),
                score_cell(ranking.score),
                score_cell(ranking.total_score),
            ])
        })
        .collect();

    let mut html = table(&RANKING_HEADERS, &rows);
    if rankings.len() == RANKING_WINDOW {
        html.push_str(&message(TOP_RANKINGS_NOTE));
    }
    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integral_scores_have_no_fraction() {
        assert_eq!(format_score(85.0), "85");
        assert_eq!(format_score(-3.0), "-3");
        assert_eq!(format_score(72.5), "72.5");
    }
}

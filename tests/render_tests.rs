// tests/render_tests.rs

use std::num::NonZeroU32;

use chrono::Locale;
use skill_ranking::{
    models::{
        exam_record::{ExamRecord, ExamStatus},
        form::{field_names, resolve_fields},
        ranking::RankingEntry,
    },
    utils::html::escape,
    view::{
        form::render_record_form,
        tables::{TOP_RANKINGS_NOTE, render_exam_data, render_rankings},
    },
};

fn exam(name: &str, date: &str) -> ExamRecord {
    ExamRecord {
        id: format!("id-{}", name),
        name: name.to_string(),
        date: date.to_string(),
        certification: "AWS SAA".to_string(),
        course_type: "Beginner".to_string(),
        status: ExamStatus::Failed.to_string(),
        score: Some(42.0),
        total_score: Some(100.0),
        session_link: "https://sessions.example.com/7".to_string(),
    }
}

fn rankings(count: u32) -> Vec<RankingEntry> {
    (1..=count)
        .map(|rank| RankingEntry {
            id: format!("r{}", rank),
            rank: NonZeroU32::new(rank).unwrap(),
            name: format!("Learner {}", rank),
            certification: "CKA".to_string(),
            course_type: "Advanced".to_string(),
            score: Some(f64::from(100 - rank)),
            total_score: Some(100.0),
        })
        .collect()
}

#[test]
fn form_has_one_required_control_per_field_in_order() {
    let html = render_record_form(&resolve_fields(&[], &[]), None);

    let mut last = 0;
    for name in field_names() {
        let at = html
            .find(&format!("name=\"{}\"", name))
            .unwrap_or_else(|| panic!("no control for {}", name));
        assert!(at >= last, "{} rendered out of order", name);
        last = at;
    }
    assert_eq!(html.matches(" required").count(), 8);
    assert!(html.contains("type=\"date\" name=\"date\""));
    assert!(html.contains("type=\"number\" name=\"score\""));
}

#[test]
fn selects_start_with_an_empty_placeholder() {
    let course_types = vec!["Beginner".to_string()];
    let html = render_record_form(&resolve_fields(&course_types, &[]), None);

    let expected = format!(
        "<option value=\"\">{}</option>\n<option value=\"{}\">{}</option>",
        escape("Select Course Level"),
        escape("Beginner"),
        escape("Beginner")
    );
    assert!(html.contains(&expected));
    assert!(html.contains(&format!("<option value=\"\">{}</option>", escape("Select Status"))));
    assert!(html.contains("<option value=\"Passed\">Passed</option>"));
    assert!(html.contains("<option value=\"Failed\">Failed</option>"));
}

#[test]
fn certifications_become_suggestions() {
    let certifications = vec!["CKA".to_string()];
    let html = render_record_form(&resolve_fields(&[], &certifications), None);

    assert!(html.contains("list=\"certification-options\""));
    assert!(html.contains("<datalist id=\"certification-options\">"));
    assert!(html.contains("<option value=\"CKA\"></option>"));
}

#[test]
fn exam_rows_show_localized_dates_and_external_links() {
    let records = vec![
        exam("Ada", "2024-03-05T00:00:00.000Z"),
        exam("Grace", "2023-12-31"),
    ];

    let html = render_exam_data(&records, Locale::en_US);

    assert!(html.contains(&escape("03/05/2024")));
    assert!(html.contains(&escape("12/31/2023")));
    assert!(!html.contains("2024-03-05"));
    assert!(!html.contains("2023-12-31"));
    assert!(html.contains("target=\"_blank\" rel=\"noopener noreferrer\""));
    assert_eq!(html.matches(&escape("View Session")).count(), 2);
    // Rows stay in the order the API sent them.
    assert!(html.find("Ada").unwrap() < html.find("Grace").unwrap());
}

#[test]
fn unreadable_dates_are_not_echoed() {
    let html = render_exam_data(&[exam("Ada", "last tuesday")], Locale::en_US);

    assert!(!html.contains(&escape("last tuesday")));
    assert!(html.contains(&escape("Invalid Date")));
}

#[test]
fn dates_follow_the_configured_locale() {
    let html = render_exam_data(&[exam("Ada", "2024-03-05")], Locale::de_DE);

    assert!(html.contains("05.03.2024"));
}

#[test]
fn record_text_is_escaped() {
    let html = render_exam_data(&[exam("<script>alert(1)</script>", "2024-03-05")], Locale::en_US);

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
}

#[test]
fn only_web_session_links_become_anchors() {
    let mut script = exam("Mallory", "2024-03-05");
    script.session_link = "javascript:alert(document.cookie)".to_string();
    let mut data = exam("Eve", "2024-03-05");
    data.session_link = "data:text/html,<b>hi</b>".to_string();
    let plain = exam("Ada", "2024-03-05");

    let html = render_exam_data(&[script, data, plain], Locale::en_US);

    assert!(!html.contains("href=\"javascript:"));
    assert!(!html.contains("href=\"data:"));
    assert!(html.contains(&escape("javascript:alert(document.cookie)")));
    assert_eq!(html.matches("<a ").count(), 1);
    assert!(html.contains(&format!("href=\"{}\"", escape("https://sessions.example.com/7"))));
}

#[test]
fn missing_values_render_as_empty_cells() {
    let mut record = exam("Ada", "2024-03-05");
    record.score = None;
    record.status = "Pending".to_string();
    record.session_link = String::new();

    let html = render_exam_data(&[record], Locale::en_US);

    assert!(html.contains("<td class=\"td\">Pending</td>"));
    assert!(html.contains("<td class=\"td\"></td>"));
    assert!(!html.contains("<a "));
}

#[test]
fn ranking_note_only_for_exactly_thirty_rows() {
    for (count, expect_note) in [(0, false), (29, false), (30, true)] {
        let html = render_rankings(&rankings(count));
        assert_eq!(
            html.contains(&escape(TOP_RANKINGS_NOTE)),
            expect_note,
            "{} rankings",
            count
        );
        assert_eq!(html.matches("<tr>").count(), count as usize + 1);
    }
}

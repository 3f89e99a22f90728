// src/view/page.rs

use chrono::Locale;

use crate::{
    models::form::resolve_fields,
    session::RankingSystemView,
    view::{
        form::render_record_form,
        primitives::{container, document, sub_title, title},
        tables::{render_exam_data, render_rankings},
        upload::render_upload_panel,
    },
};

pub const PAGE_TITLE: &str = "Skill Ranking System";

/// Renders the whole page from the view's current state.
pub fn render_page(view: &RankingSystemView, locale: Locale) -> String {
    let state = view.snapshot();
    let fields = resolve_fields(&state.course_types, &state.certifications);

    let mut body = title(PAGE_TITLE);

    body.push_str(&sub_title("Add New Exam Data"));
    body.push_str(&render_record_form(&fields, view.form_message()));

    body.push_str(&render_upload_panel(view.upload_panel()));

    body.push_str(&sub_title("Exam Data"));
    body.push_str(&render_exam_data(&state.exam_data, locale));

    body.push_str(&sub_title("Rankings (Top 30)"));
    body.push_str(&render_rankings(&state.rankings));

    document(PAGE_TITLE, &container(&body))
}

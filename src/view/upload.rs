// src/view/upload.rs

use crate::{
    models::upload::ACCEPTED_UPLOAD_TYPES,
    session::{UploadPanel, UploadState},
    view::primitives::{alert, download_button, message, submit_button, sub_title},
};

pub const UPLOAD_FORM_ACTION: &str = "/bulk-upload";
pub const XLSX_TEMPLATE_HREF: &str = "/template.xlsx";
pub const CSV_TEMPLATE_HREF: &str = "/template.csv";

pub fn render_upload_panel(panel: &UploadPanel) -> String {
    let mut html = sub_title("Bulk Upload");
    html.push_str(&download_button(
        XLSX_TEMPLATE_HREF,
        "Download Bulk Upload Template",
    ));
    html.push_str(&download_button(CSV_TEMPLATE_HREF, "Download CSV Template"));

    html.push_str(&format!(
        "<form class=\"form\" method=\"post\" action=\"{}\" enctype=\"multipart/form-data\">\n",
        UPLOAD_FORM_ACTION
    ));
    html.push_str(&format!(
        "<input class=\"input\" type=\"file\" name=\"file\" accept=\"{}\" aria-label=\"Spreadsheet\">\n",
        ACCEPTED_UPLOAD_TYPES
    ));
    html.push_str(&submit_button("Upload"));
    html.push_str("</form>\n");

    // Browsers never re-fill a file input, so say which file is still held.
    if let UploadState::FileSelected(file) = panel.state() {
        html.push_str(&message(&format!("Selected file: {}", file.file_name)));
    }
    if let Some(text) = panel.message() {
        html.push_str(&alert(text));
    }

    html
}

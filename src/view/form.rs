// src/view/form.rs

use crate::{
    models::form::{FieldKind, FormFieldDescriptor},
    utils::html::escape,
    view::primitives::{error_alert, submit_button},
};

pub const EXAM_FORM_ACTION: &str = "/exams";

/// Renders the entry form: one control per descriptor, in order.
/// Controls always start empty; the form is reset after every submit.
pub fn render_record_form(fields: &[FormFieldDescriptor], feedback: Option<&str>) -> String {
    let mut html = format!(
        "<form class=\"form\" method=\"post\" action=\"{}\">\n",
        EXAM_FORM_ACTION
    );

    for field in fields {
        html.push_str(&render_field(field));
    }
    html.push_str(&submit_button("Add Exam Data"));
    html.push_str("</form>\n");

    if let Some(text) = feedback {
        html.push_str(&error_alert(text));
    }

    html
}

fn render_field(field: &FormFieldDescriptor) -> String {
    let required = if field.required { " required" } else { "" };

    match field.kind {
        FieldKind::Select => {
            let mut html = format!(
                "<select class=\"select\" name=\"{}\" aria-label=\"{}\"{}>\n",
                field.name,
                escape(field.placeholder),
                required
            );
            html.push_str(&format!(
                "<option value=\"\">{}</option>\n",
                escape(field.placeholder)
            ));
            for option in field.options.iter().flatten() {
                html.push_str(&format!(
                    "<option value=\"{}\">{}</option>\n",
                    escape(&option.value),
                    escape(&option.label)
                ));
            }
            html.push_str("</select>\n");
            html
        }
        kind => {
            let list_id = format!("{}-options", field.name);
            let list = match &field.options {
                Some(_) => format!(" list=\"{}\"", list_id),
                None => String::new(),
            };
            let mut html = format!(
                "<input class=\"input\" type=\"{}\" name=\"{}\" placeholder=\"{}\" aria-label=\"{}\"{}{}>\n",
                kind.input_type().unwrap_or("text"),
                field.name,
                escape(field.placeholder),
                escape(field.placeholder),
                list,
                required
            );
            if let Some(options) = &field.options {
                html.push_str(&format!("<datalist id=\"{}\">\n", list_id));
                for option in options {
                    html.push_str(&format!(
                        "<option value=\"{}\"></option>\n",
                        escape(&option.value)
                    ));
                }
                html.push_str("</datalist>\n");
            }
            html
        }
    }
}

// src/models/form.rs

use serde::Serialize;

use crate::models::exam_record::ExamStatus;

/// Input control used to render a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    Text,
    Date,
    Number,
    Select,
    File,
}

impl FieldKind {
    /// Value of the HTML `type` attribute. Selects are not `<input>`s.
    pub fn input_type(&self) -> Option<&'static str> {
        match self {
            FieldKind::Text => Some("text"),
            FieldKind::Date => Some("date"),
            FieldKind::Number => Some("number"),
            FieldKind::File => Some("file"),
            FieldKind::Select => None,
        }
    }
}

/// Where a select field takes its options from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionSource {
    None,
    /// Fixed labels; value and label are identical.
    Static(&'static [&'static str]),
    /// Course types fetched from the ranking API.
    CourseTypes,
    /// Certifications fetched from the ranking API. On a text field these
    /// are suggestions, not a closed list.
    Certifications,
}

/// Static description of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
    pub required: bool,
    pub options: OptionSource,
}

static STATUS_OPTIONS: [&str; 2] = [ExamStatus::Passed.as_str(), ExamStatus::Failed.as_str()];

/// The entry form, in display order. Also the column order of the
/// bulk upload template.
pub static FORM_SCHEMA: [FieldSpec; 8] = [
    FieldSpec {
        name: "name",
        kind: FieldKind::Text,
        placeholder: "Name",
        required: true,
        options: OptionSource::None,
    },
    FieldSpec {
        name: "date",
        kind: FieldKind::Date,
        placeholder: "Date",
        required: true,
        options: OptionSource::None,
    },
    FieldSpec {
        name: "certification",
        kind: FieldKind::Text,
        placeholder: "Certification",
        required: true,
        options: OptionSource::Certifications,
    },
    FieldSpec {
        name: "courseType",
        kind: FieldKind::Select,
        placeholder: "Select Course Level",
        required: true,
        options: OptionSource::CourseTypes,
    },
    FieldSpec {
        name: "status",
        kind: FieldKind::Select,
        placeholder: "Select Status",
        required: true,
        options: OptionSource::Static(&STATUS_OPTIONS),
    },
    FieldSpec {
        name: "score",
        kind: FieldKind::Number,
        placeholder: "Score",
        required: true,
        options: OptionSource::None,
    },
    FieldSpec {
        name: "totalScore",
        kind: FieldKind::Number,
        placeholder: "Total Score",
        required: true,
        options: OptionSource::None,
    },
    FieldSpec {
        name: "sessionLink",
        kind: FieldKind::Text,
        placeholder: "Session Link",
        required: true,
        options: OptionSource::None,
    },
];

/// One `<option>` of a select field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn same(text: &str) -> Self {
        Self {
            value: text.to_string(),
            label: text.to_string(),
        }
    }
}

/// A field ready to render, with its options resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormFieldDescriptor {
    pub name: &'static str,
    pub kind: FieldKind,
    pub placeholder: &'static str,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<SelectOption>>,
}

/// Field names in schema order.
pub fn field_names() -> impl Iterator<Item = &'static str> {
    FORM_SCHEMA.iter().map(|spec| spec.name)
}

/// Builds the descriptor list for one render, merging the fetched course
/// types and certifications into their fields. The static schema is never
/// touched.
pub fn resolve_fields(course_types: &[String], certifications: &[String]) -> Vec<FormFieldDescriptor> {
    FORM_SCHEMA
        .iter()
        .map(|spec| {
            let options = match spec.options {
                OptionSource::None => None,
                OptionSource::Static(labels) => {
                    Some(labels.iter().map(|label| SelectOption::same(label)).collect())
                }
                OptionSource::CourseTypes => Some(
                    course_types
                        .iter()
                        .map(|course_type| SelectOption::same(course_type))
                        .collect(),
                ),
                OptionSource::Certifications => Some(
                    certifications
                        .iter()
                        .map(|certification| SelectOption::same(certification))
                        .collect(),
                ),
            };

            FormFieldDescriptor {
                name: spec.name,
                kind: spec.kind,
                placeholder: spec.placeholder,
                required: spec.required,
                options,
            }
        })
        .collect()
}

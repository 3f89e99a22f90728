// src/utils/template.rs

use std::io::{Cursor, Write};

use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::{error::AppError, models::form::field_names};

pub const TEMPLATE_SHEET_NAME: &str = "Template";
pub const XLSX_TEMPLATE_FILE_NAME: &str = "BulkUploadTemplate.xlsx";
pub const CSV_TEMPLATE_FILE_NAME: &str = "BulkUploadTemplate.csv";
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const SPREADSHEET_NS: &str = "http://schemas.openxmlformats.org/spreadsheetml/2006/main";
const RELATIONSHIP_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
const PACKAGE_RELATIONSHIP_NS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";
const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Column headers of the bulk upload template, in form order.
pub fn template_columns() -> Vec<&'static str> {
    field_names().collect()
}

/// Builds `BulkUploadTemplate.xlsx`: one sheet whose first row holds the
/// form field names and whose second row holds one empty cell per column.
pub fn build_xlsx_template() -> Result<Vec<u8>, AppError> {
    let columns = template_columns();

    let entries = [
        ("[Content_Types].xml", content_types_xml()),
        ("_rels/.rels", root_rels_xml()),
        ("xl/workbook.xml", workbook_xml()),
        ("xl/_rels/workbook.xml.rels", workbook_rels_xml()),
        ("xl/styles.xml", styles_xml()),
        ("xl/sharedStrings.xml", shared_strings_xml(&columns)),
        ("xl/worksheets/sheet1.xml", sheet_xml(columns.len())),
    ];

    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let opts = FileOptions::default().compression_method(CompressionMethod::Deflated);

    for (path, body) in entries {
        zip.start_file(path, opts)?;
        zip.write_all(body.as_bytes())?;
    }

    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

/// Builds `BulkUploadTemplate.csv`: just the header row.
pub fn build_csv_template() -> Result<Vec<u8>, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(template_columns())?;

    writer
        .into_inner()
        .map_err(|e| AppError::InternalServerError(e.to_string()))
}

/// Spreadsheet column letters: 0 -> A, 25 -> Z, 26 -> AA.
fn column_letter(index: usize) -> String {
    let mut letters = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

fn content_types_xml() -> String {
    format!(
        concat!(
            "{decl}",
            r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
            r#"<Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
            r#"<Default Extension="xml" ContentType="application/xml"/>"#,
            r#"<Override PartName="/xl/workbook.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml"/>"#,
            r#"<Override PartName="/xl/worksheets/sheet1.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml"/>"#,
            r#"<Override PartName="/xl/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml"/>"#,
            r#"<Override PartName="/xl/sharedStrings.xml" ContentType="application/vnd.openxmlformats-officedocument.spreadsheetml.sharedStrings+xml"/>"#,
            "</Types>"
        ),
        decl = XML_DECL
    )
}

fn root_rels_xml() -> String {
    format!(
        r#"{XML_DECL}<Relationships xmlns="{PACKAGE_RELATIONSHIP_NS}"><Relationship Id="rId1" Type="{RELATIONSHIP_NS}/officeDocument" Target="xl/workbook.xml"/></Relationships>"#
    )
}

fn workbook_xml() -> String {
    format!(
        r#"{XML_DECL}<workbook xmlns="{SPREADSHEET_NS}" xmlns:r="{RELATIONSHIP_NS}"><sheets><sheet name="{TEMPLATE_SHEET_NAME}" sheetId="1" r:id="rId1"/></sheets></workbook>"#
    )
}

fn workbook_rels_xml() -> String {
    format!(
        concat!(
            r#"{decl}<Relationships xmlns="{pkg}">"#,
            r#"<Relationship Id="rId1" Type="{rel}/worksheet" Target="worksheets/sheet1.xml"/>"#,
            r#"<Relationship Id="rId2" Type="{rel}/styles" Target="styles.xml"/>"#,
            r#"<Relationship Id="rId3" Type="{rel}/sharedStrings" Target="sharedStrings.xml"/>"#,
            "</Relationships>"
        ),
        decl = XML_DECL,
        pkg = PACKAGE_RELATIONSHIP_NS,
        rel = RELATIONSHIP_NS
    )
}

fn styles_xml() -> String {
    format!(
        concat!(
            r#"{decl}<styleSheet xmlns="{ns}">"#,
            r#"<fonts count="1"><font><sz val="11"/><name val="Calibri"/></font></fonts>"#,
            r#"<fills count="2"><fill><patternFill patternType="none"/></fill><fill><patternFill patternType="gray125"/></fill></fills>"#,
            r#"<borders count="1"><border><left/><right/><top/><bottom/><diagonal/></border></borders>"#,
            r#"<cellStyleXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0"/></cellStyleXfs>"#,
            r#"<cellXfs count="1"><xf numFmtId="0" fontId="0" fillId="0" borderId="0" xfId="0"/></cellXfs>"#,
            r#"<cellStyles count="1"><cellStyle name="Normal" xfId="0" builtinId="0"/></cellStyles>"#,
            "</styleSheet>"
        ),
        decl = XML_DECL,
        ns = SPREADSHEET_NS
    )
}

/// Shared string table: the column names, then one empty string used by
/// every cell of the blank row. Field names are plain identifiers, so they
/// need no XML escaping.
fn shared_strings_xml(columns: &[&str]) -> String {
    let mut items: String = columns
        .iter()
        .map(|name| format!("<si><t>{}</t></si>", name))
        .collect();
    items.push_str("<si><t></t></si>");

    format!(
        r#"{XML_DECL}<sst xmlns="{SPREADSHEET_NS}" count="{count}" uniqueCount="{unique}">{items}</sst>"#,
        count = columns.len() * 2,
        unique = columns.len() + 1,
    )
}

fn sheet_xml(column_count: usize) -> String {
    let empty_index = column_count;
    let header: String = (0..column_count)
        .map(|i| format!(r#"<c r="{}1" t="s"><v>{}</v></c>"#, column_letter(i), i))
        .collect();
    let blank: String = (0..column_count)
        .map(|i| format!(r#"<c r="{}2" t="s"><v>{}</v></c>"#, column_letter(i), empty_index))
        .collect();
    let last = column_letter(column_count.saturating_sub(1));

    format!(
        r#"{XML_DECL}<worksheet xmlns="{SPREADSHEET_NS}"><dimension ref="A1:{last}2"/><sheetData><row r="1">{header}</row><row r="2">{blank}</row></sheetData></worksheet>"#
    )
}

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use std::io::{Read, Seek};
use std::path::Path;

use super::types::*;

/// Decode the first sheet of a workbook file into a preview table.
///
/// The first row is taken as the header unconditionally. Rows whose cells
/// are all empty are dropped; the order of the remaining rows is preserved.
pub fn decode_workbook(path: &str) -> Result<PreviewTable, PreviewError> {
    if !Path::new(path).exists() {
        return Err(PreviewError::file_not_found(path));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| PreviewError::invalid_format(format!("Failed to open workbook: {}", e)))?;

    decode_first_sheet(&mut workbook)
}

/// Decode a workbook from an in-memory buffer (anything `Read + Seek`).
pub fn decode_workbook_from<RS: Read + Seek + Clone>(reader: RS) -> Result<PreviewTable, PreviewError> {
    let mut workbook = open_workbook_auto_from_rs(reader)
        .map_err(|e| PreviewError::invalid_format(format!("Failed to open workbook: {}", e)))?;

    decode_first_sheet(&mut workbook)
}

fn decode_first_sheet<RS: Read + Seek>(
    workbook: &mut Sheets<RS>,
) -> Result<PreviewTable, PreviewError> {
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(PreviewError::empty_workbook)?;

    let range = workbook.worksheet_range(&sheet_name).map_err(|e| {
        PreviewError::invalid_format(format!("Failed to read sheet '{}': {}", sheet_name, e))
    })?;

    decode_range(&range)
}

fn decode_range(range: &Range<Data>) -> Result<PreviewTable, PreviewError> {
    let mut rows = range.rows();

    let header_row = rows.next().ok_or_else(PreviewError::empty_workbook)?;
    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| convert_cell(cell).unwrap_or_default())
        .collect();

    // Fully-blank rows are spreadsheet padding, not data. Stable filter.
    let data_rows: Vec<Vec<PreviewCell>> = rows
        .map(|row| row.iter().map(convert_cell).collect::<Vec<PreviewCell>>())
        .filter(|row| row.iter().any(|cell| cell.is_some()))
        .collect();

    Ok(PreviewTable {
        headers,
        rows: data_rows,
    })
}

/// Convert a calamine cell to its display string, or `None` when empty.
///
/// Decoding and display coercion are the same step: the preview never needs
/// the typed values back, so numbers and dates are stringified here.
fn convert_cell(cell: &Data) -> PreviewCell {
    match cell {
        Data::Empty => None,
        Data::String(s) => {
            if s.is_empty() {
                None
            } else {
                Some(s.clone())
            }
        }
        Data::Float(f) => Some(format_number(*f)),
        Data::Int(i) => Some(i.to_string()),
        Data::Bool(b) => Some(if *b { "TRUE".to_string() } else { "FALSE".to_string() }),
        Data::DateTime(dt) => Some(format_excel_date(dt.as_f64())),
        Data::DateTimeIso(s) => Some(reformat_iso_date(s)),
        Data::DurationIso(s) => Some(s.clone()),
        Data::Error(e) => Some(format!("{:?}", e)),
    }
}

/// Format a float the way a spreadsheet displays it: no trailing `.0` on
/// integral values.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Format an Excel serial date (days since 1899-12-30) as MM/DD/YYYY.
fn format_excel_date(serial: f64) -> String {
    let days = serial.floor() as i64;
    let epoch = match chrono::NaiveDate::from_ymd_opt(1899, 12, 30) {
        Some(d) => d,
        None => return serial.to_string(),
    };
    let date = epoch + chrono::Duration::days(days);
    date.format("%m/%d/%Y").to_string()
}

/// Reformat an ISO date/datetime string as MM/DD/YYYY; pass through
/// anything that does not parse.
fn reformat_iso_date(value: &str) -> String {
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return dt.format("%m/%d/%Y").to_string();
    }
    if let Ok(d) = chrono::NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return d.format("%m/%d/%Y").to_string();
    }
    value.to_string()
}

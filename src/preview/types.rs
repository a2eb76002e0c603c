use serde::{Deserialize, Serialize};

/// A decoded preview cell. `None` means the cell was absent or empty in the
/// sheet; everything else is already coerced to its display string form.
pub type PreviewCell = Option<String>;

/// Transient, display-only representation of a workbook's first sheet.
///
/// Row 0 of the sheet is taken as the header unconditionally, regardless of
/// its content. Data rows are matched to headers positionally, so a row may
/// be shorter or longer than the header; extra cells are ignored at display
/// time and missing cells render as a placeholder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<PreviewCell>>,
}

impl PreviewTable {
    /// Number of retained (non-blank) data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Project every row into its display form, one formatted string per
    /// header column. Cells beyond the header width are ignored; missing
    /// cells render as the placeholder dash. The underlying rows are left
    /// untouched.
    pub fn display_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .enumerate()
                    .map(|(i, column)| {
                        super::format::format_cell(
                            row.get(i).and_then(|cell| cell.as_deref()),
                            column,
                        )
                    })
                    .collect()
            })
            .collect()
    }
}

/// Preview-specific errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewError {
    pub message: String,
    pub error_type: PreviewErrorType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PreviewErrorType {
    FileNotFound,
    InvalidFormat,
    EmptyWorkbook,
}

impl std::fmt::Display for PreviewError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for PreviewError {}

impl PreviewError {
    pub fn new(message: impl Into<String>, error_type: PreviewErrorType) -> Self {
        PreviewError {
            message: message.into(),
            error_type,
        }
    }

    pub fn file_not_found(path: &str) -> Self {
        PreviewError::new(
            format!("File not found: {}", path),
            PreviewErrorType::FileNotFound,
        )
    }

    pub fn invalid_format(message: impl Into<String>) -> Self {
        PreviewError::new(message, PreviewErrorType::InvalidFormat)
    }

    pub fn empty_workbook() -> Self {
        PreviewError::new("The spreadsheet file is empty", PreviewErrorType::EmptyWorkbook)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_rows_align_to_header_width() {
        let table = PreviewTable {
            headers: vec![
                "PlateNumber".to_string(),
                "Debit".to_string(),
                "Date".to_string(),
            ],
            rows: vec![
                // Short row: missing Date cell
                vec![Some("ABC-123".to_string()), Some("1234.5".to_string())],
                // Long row: extra trailing cell is ignored
                vec![
                    Some("DEF-456".to_string()),
                    None,
                    Some("01/05/2024".to_string()),
                    Some("extra".to_string()),
                ],
            ],
        };

        let display = table.display_rows();
        assert_eq!(display[0], vec!["ABC-123", "₱1,234.50", "-"]);
        assert_eq!(display[1], vec!["DEF-456", "-", "1/5/2024"]);
    }
}

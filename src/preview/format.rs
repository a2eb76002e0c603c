/// Columns formatted as currency in the preview. "FinalTotal" and
/// "Final Total" both appear in real sheets, so both spellings are matched.
const CURRENCY_COLUMNS: &[&str] = &["Debit", "Credit", "FinalTotal", "Final Total", "Price"];

/// Placeholder shown for absent or empty cells.
pub const PLACEHOLDER: &str = "-";

/// Render a single preview cell for display, given its column name.
///
/// Currency columns are formatted as Philippine peso; the Date column is
/// reformatted to M/D/YYYY; everything else is shown as-is. This is a pure
/// projection over the decoded cell, never a mutation of the row.
pub fn format_cell(value: Option<&str>, column: &str) -> String {
    let value = match value {
        Some(v) if !v.is_empty() => v,
        _ => return PLACEHOLDER.to_string(),
    };

    if CURRENCY_COLUMNS.contains(&column) {
        if let Ok(amount) = value.parse::<f64>() {
            return format_currency(amount);
        }
    }

    if column == "Date" {
        if let Some(formatted) = reformat_date(value) {
            return formatted;
        }
    }

    value.to_string()
}

/// Format an amount as Philippine peso with two decimals and thousands
/// grouping, e.g. `1234.5` -> `₱1,234.50`.
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u128;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}₱{}.{:02}", sign, grouped, fraction)
}

/// Reformat a date string as M/D/YYYY (no zero padding), accepting the
/// textual forms the decoder and real sheets produce. Returns `None` when
/// the value does not parse, in which case it is displayed as-is.
fn reformat_date(value: &str) -> Option<String> {
    let formats = ["%m/%d/%Y", "%Y-%m-%d", "%m-%d-%Y"];
    for fmt in formats {
        if let Ok(date) = chrono::NaiveDate::parse_from_str(value, fmt) {
            return Some(date.format("%-m/%-d/%Y").to_string());
        }
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.format("%-m/%-d/%Y").to_string());
    }
    None
}

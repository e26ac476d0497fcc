//! Shared presentation helpers: truncation, capitalization, timestamp
//! localization, and the terminal table adapter.

use super::row::{DisplayRow, BLANK};
use crate::error::ShapeError;
use chrono::{DateTime, Local, NaiveDate, TimeZone};
use comfy_table::Table;

/// Truncate to `max` characters, ellipsis included: longer values keep
/// the first `max - 3` characters and end in `...`.
pub(crate) fn truncate(value: &str, max: usize) -> String {
    if value.chars().count() > max {
        let mut truncated: String = value.chars().take(max - 3).collect();
        truncated.push_str("...");
        truncated
    } else {
        value.to_string()
    }
}

/// Upper-case the first character, leave the rest as-is. Status words
/// arrive from the API in lower case ("active", "completed").
pub(crate) fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "True"/"False" as strings; table cells are never booleans.
pub(crate) fn bool_cell(value: bool) -> &'static str {
    if value {
        "True"
    } else {
        "False"
    }
}

/// Parse an ISO-8601 timestamp and convert it to a calendar date in the
/// given timezone.
pub(crate) fn local_date_in<Tz: TimeZone>(iso: &str, tz: &Tz) -> Result<NaiveDate, ShapeError> {
    let parsed = DateTime::parse_from_rfc3339(iso).map_err(|source| ShapeError::Timestamp {
        value: iso.to_string(),
        source,
    })?;
    Ok(parsed.with_timezone(tz).date_naive())
}

/// Local-timezone calendar date of an ISO-8601 timestamp.
pub(crate) fn local_date(iso: &str) -> Result<NaiveDate, ShapeError> {
    local_date_in(iso, &Local)
}

/// Render rows as a terminal table. The first row fixes the column set;
/// later rows missing one of its columns render that cell blank.
pub fn render_table(rows: &[DisplayRow]) -> String {
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    let Some(first) = rows.first() else {
        return table.to_string();
    };
    let columns: Vec<&str> = first.columns().collect();
    table.set_header(columns.clone());
    for row in rows {
        let cells: Vec<&str> = columns
            .iter()
            .map(|column| row.get(column).unwrap_or(BLANK))
            .collect();
        table.add_row(cells);
    }
    table.to_string()
}

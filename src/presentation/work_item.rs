//! Work item table rows.

use super::row::{DisplayRow, BLANK};
use super::shared::truncate;
use crate::records::WorkItem;

const TITLE_TRUNCATION_LENGTH: usize = 70;

/// One table row per work item; input order is preserved.
pub fn work_item_rows(items: &[WorkItem]) -> Vec<DisplayRow> {
    items.iter().map(work_item_row).collect()
}

/// Columns: ID, Type, Assigned To, State, Title.
///
/// When the record has no `fields` mapping at all, the Type column is
/// omitted while the other three still render blank. Downstream consumers
/// depend on that exact column set, so it is kept as-is.
pub fn work_item_row(item: &WorkItem) -> DisplayRow {
    let mut row = DisplayRow::new();
    row.push("ID", item.id.to_string());
    match &item.fields {
        Some(fields) => {
            row.push("Type", field_or_blank(&fields.work_item_type));
            row.push("Assigned To", field_or_blank(&fields.assigned_to));
            row.push("State", field_or_blank(&fields.state));
            let title = fields
                .title
                .as_deref()
                .map(|title| truncate(title, TITLE_TRUNCATION_LENGTH))
                .unwrap_or_else(|| BLANK.to_string());
            row.push("Title", title);
        }
        None => {
            row.push("Assigned To", BLANK);
            row.push("State", BLANK);
            row.push("Title", BLANK);
        }
    }
    row
}

fn field_or_blank(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| BLANK.to_string())
}

//! Pull request table rows.

use super::row::DisplayRow;
use super::shared::{capitalize, local_date, truncate};
use crate::error::ShapeError;
use crate::records::PullRequest;

const TITLE_TRUNCATION_LENGTH: usize = 50;

/// One table row per pull request; input order is preserved.
pub fn pull_request_rows(items: &[PullRequest]) -> Result<Vec<DisplayRow>, ShapeError> {
    items.iter().map(pull_request_row).collect()
}

/// Columns: ID, Created, Creator, Title, Status, Repository.
pub fn pull_request_row(item: &PullRequest) -> Result<DisplayRow, ShapeError> {
    let created = local_date(&item.creation_date)?;
    let mut row = DisplayRow::new();
    row.push("ID", item.pull_request_id.to_string());
    row.push("Created", created.to_string());
    row.push("Creator", item.created_by.unique_name.clone());
    row.push("Title", truncate(&item.title, TITLE_TRUNCATION_LENGTH));
    row.push("Status", capitalize(&item.status));
    row.push("Repository", item.repository.name.clone());
    Ok(row)
}

//! Reviewer table rows.

use super::row::{composite_sort_key, DisplayRow, BLANK};
use super::shared::bool_cell;
use crate::records::Reviewer;

/// Group identities carry a `vstfs:///` resource URI in `uniqueName`
/// rather than an email address.
const GROUP_UNIQUE_NAME_PREFIX: &str = "vstfs:///";

fn vote_label(vote: i32) -> &'static str {
    match vote {
        10 => "Approved",
        5 => "Approved with suggestions",
        -5 => "Waiting for author",
        -10 => "Rejected",
        _ => BLANK,
    }
}

/// Required reviewers first, then optional; alphabetical by display name
/// within each group.
pub fn reviewer_rows(items: &[Reviewer]) -> Vec<DisplayRow> {
    let mut ordered: Vec<&Reviewer> = items.iter().collect();
    ordered.sort_by_key(|item| composite_sort_key(item.is_required, &item.display_name));
    ordered.into_iter().map(reviewer_row).collect()
}

/// Columns: Name, Email, ID, Vote, Required.
pub fn reviewer_row(item: &Reviewer) -> DisplayRow {
    let mut row = DisplayRow::new();
    row.push("Name", item.display_name.clone());
    let email = if item.unique_name.starts_with(GROUP_UNIQUE_NAME_PREFIX) {
        BLANK
    } else {
        item.unique_name.as_str()
    };
    row.push("Email", email);
    row.push("ID", item.id.clone());
    row.push("Vote", vote_label(item.vote));
    row.push("Required", bool_cell(item.is_required));
    row
}

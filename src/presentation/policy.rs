//! Policy evaluation table rows.
//!
//! Two sequential passes over the batch: the first collects the identity
//! id of every single-reviewer policy so the name cache can be primed
//! with one batched read, the second builds rows with the resolved names
//! in hand.

use super::row::{composite_sort_key, DisplayRow, BLANK};
use super::shared::{bool_cell, capitalize};
use crate::client::IdentityReader;
use crate::error::ServiceError;
use crate::identity::IdentityCache;
use crate::records::PolicyEvaluation;

/// Batch transform. Output is sorted blocking policies first, then by
/// the computed Policy label within each group.
pub fn policy_rows(
    items: &[PolicyEvaluation],
    cache: &mut IdentityCache,
    reader: &dyn IdentityReader,
    instance: &str,
) -> Result<Vec<DisplayRow>, ServiceError> {
    let reviewer_ids: Vec<String> = items
        .iter()
        .filter_map(|item| item.single_required_reviewer())
        .map(str::to_string)
        .collect();
    cache.ensure_display_names(reader, instance, &reviewer_ids)?;

    let mut rows: Vec<DisplayRow> = items
        .iter()
        .map(|item| {
            let display_name = item
                .single_required_reviewer()
                .and_then(|id| cache.display_name(id));
            build_row(item, display_name)
        })
        .collect();
    rows.sort_by_key(|row| {
        let blocking = row.get("Blocking") == Some("True");
        composite_sort_key(blocking, row.get("Policy").unwrap_or(BLANK))
    });
    Ok(rows)
}

/// Single-record variant: no batch, no name resolution.
pub fn policy_row(item: &PolicyEvaluation) -> DisplayRow {
    build_row(item, None)
}

fn build_row(item: &PolicyEvaluation, reviewer_display_name: Option<&str>) -> DisplayRow {
    let mut row = DisplayRow::new();
    row.push("Evaluation ID", item.evaluation_id.clone());
    row.push("Policy", policy_label(item, reviewer_display_name));
    row.push("Blocking", bool_cell(item.configuration.is_blocking));
    row.push("Status", status_cell(&item.status));
    let context = item.context.as_ref();
    let expired = context
        .and_then(|context| context.is_expired)
        .map(bool_cell)
        .unwrap_or(BLANK);
    row.push("Expired", expired);
    let build_id = context
        .and_then(|context| context.build_id)
        .map(|id| id.to_string())
        .unwrap_or_else(|| BLANK.to_string());
    row.push("Build ID", build_id);
    row
}

/// Policy display label: the configuration type's name, qualified by
/// whichever settings the policy carries.
fn policy_label(item: &PolicyEvaluation, reviewer_display_name: Option<&str>) -> String {
    let settings = &item.configuration.settings;
    let mut label = item.configuration.policy_type.display_name.clone();
    if let Some(name) = &settings.display_name {
        label.push_str(&format!(" ({})", name));
    }
    if let Some(count) = settings.minimum_approver_count {
        label.push_str(&format!(" ({})", count));
    }
    if let Some(resolved) = reviewer_display_name {
        if let Some(ids) = &settings.required_reviewer_ids {
            if ids.len() > 1 {
                label.push_str(&format!(" ({})", ids.len()));
            } else if ids.len() == 1 {
                label.push_str(&format!(" ({})", resolved));
            }
        }
    }
    label
}

/// A queued evaluation has not produced a verdict yet; render it blank.
fn status_cell(status: &str) -> String {
    if status == "queued" {
        BLANK.to_string()
    } else {
        capitalize(status)
    }
}

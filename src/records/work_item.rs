//! Work item records from the work item tracking REST API.

use crate::error::ShapeError;
use serde::Deserialize;
use serde_json::Value;

/// A work item. The interesting data lives in the `fields` sub-mapping,
/// which the API omits entirely for some query shapes.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkItem {
    pub id: i64,
    #[serde(default)]
    pub fields: Option<WorkItemFields>,
}

/// The `System.*` fields a work item row displays. Any of them can be
/// absent from a given record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkItemFields {
    #[serde(default, rename = "System.WorkItemType")]
    pub work_item_type: Option<String>,
    #[serde(default, rename = "System.AssignedTo")]
    pub assigned_to: Option<String>,
    #[serde(default, rename = "System.State")]
    pub state: Option<String>,
    #[serde(default, rename = "System.Title")]
    pub title: Option<String>,
}

impl WorkItem {
    pub fn from_value(value: Value) -> Result<Self, ShapeError> {
        super::decode("work item", value)
    }

    pub fn batch_from_values(values: Vec<Value>) -> Result<Vec<Self>, ShapeError> {
        super::decode_batch("work item", values)
    }
}

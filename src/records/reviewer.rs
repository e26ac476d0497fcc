//! Reviewer records from the git REST API.

use crate::error::ShapeError;
use serde::Deserialize;
use serde_json::Value;

/// A pull request reviewer with vote state.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reviewer {
    pub display_name: String,
    /// Email for person identities; a `vstfs:///` resource URI for
    /// group identities.
    pub unique_name: String,
    pub id: String,
    pub vote: i32,
    pub is_required: bool,
}

impl Reviewer {
    pub fn from_value(value: Value) -> Result<Self, ShapeError> {
        super::decode("reviewer", value)
    }

    pub fn batch_from_values(values: Vec<Value>) -> Result<Vec<Self>, ShapeError> {
        super::decode_batch("reviewer", values)
    }
}

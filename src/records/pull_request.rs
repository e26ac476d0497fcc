//! Pull request records from the git REST API.

use crate::error::ShapeError;
use serde::Deserialize;
use serde_json::Value;

/// Creator reference embedded in a pull request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRef {
    pub unique_name: String,
}

/// Repository reference embedded in a pull request.
#[derive(Debug, Clone, Deserialize)]
pub struct RepositoryRef {
    pub name: String,
}

/// A pull request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    pub pull_request_id: i64,
    /// ISO-8601 creation timestamp, as sent on the wire.
    pub creation_date: String,
    pub created_by: IdentityRef,
    pub title: String,
    pub status: String,
    pub repository: RepositoryRef,
}

impl PullRequest {
    pub fn from_value(value: Value) -> Result<Self, ShapeError> {
        super::decode("pull request", value)
    }

    pub fn batch_from_values(values: Vec<Value>) -> Result<Vec<Self>, ShapeError> {
        super::decode_batch("pull request", values)
    }
}

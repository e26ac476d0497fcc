//! Typed API response records.
//!
//! The REST SDK hands over loosely-typed JSON; each record kind gets an
//! explicit struct here with optional keys modeled as `Option`. Decoding
//! is the single place a malformed response can fail: a required field
//! missing from a record is a [`ShapeError`] and aborts the command.

mod policy;
mod pull_request;
mod reviewer;
mod work_item;

pub use policy::{PolicyConfiguration, PolicyContext, PolicyEvaluation, PolicySettings, PolicyType};
pub use pull_request::{IdentityRef, PullRequest, RepositoryRef};
pub use reviewer::Reviewer;
pub use work_item::{WorkItem, WorkItemFields};

use crate::error::ShapeError;
use serde::de::DeserializeOwned;
use serde_json::Value;

fn decode<T: DeserializeOwned>(kind: &'static str, value: Value) -> Result<T, ShapeError> {
    serde_json::from_value(value).map_err(|source| ShapeError::Decode { kind, source })
}

fn decode_batch<T: DeserializeOwned>(
    kind: &'static str,
    values: Vec<Value>,
) -> Result<Vec<T>, ShapeError> {
    values.into_iter().map(|value| decode(kind, value)).collect()
}

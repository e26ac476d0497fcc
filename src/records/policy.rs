//! Policy evaluation records from the policy REST API.

use crate::error::ShapeError;
use serde::Deserialize;
use serde_json::Value;

/// One policy evaluation for a pull request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyEvaluation {
    pub evaluation_id: String,
    pub configuration: PolicyConfiguration,
    pub status: String,
    #[serde(default)]
    pub context: Option<PolicyContext>,
}

/// The policy configuration the evaluation ran against.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyConfiguration {
    #[serde(rename = "type")]
    pub policy_type: PolicyType,
    pub is_blocking: bool,
    pub settings: PolicySettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyType {
    pub display_name: String,
}

/// Per-policy settings; which keys are present depends on the policy
/// type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicySettings {
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub minimum_approver_count: Option<i64>,
    #[serde(default)]
    pub required_reviewer_ids: Option<Vec<String>>,
}

/// Evaluation context; build policies carry a build id, expirable
/// policies an expiry flag.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyContext {
    #[serde(default)]
    pub is_expired: Option<bool>,
    #[serde(default)]
    pub build_id: Option<i64>,
}

impl PolicyEvaluation {
    pub fn from_value(value: Value) -> Result<Self, ShapeError> {
        super::decode("policy evaluation", value)
    }

    pub fn batch_from_values(values: Vec<Value>) -> Result<Vec<Self>, ShapeError> {
        super::decode_batch("policy evaluation", values)
    }

    /// The single unambiguous required reviewer, when the policy lists
    /// exactly one.
    pub fn single_required_reviewer(&self) -> Option<&str> {
        match self.configuration.settings.required_reviewer_ids.as_deref() {
            Some([id]) => Some(id.as_str()),
            _ => None,
        }
    }
}

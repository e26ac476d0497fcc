//! Error types for the Azure DevOps CLI extension core.

use thiserror::Error;

/// A response record did not match the shape the upstream API contract
/// guarantees. Fatal for the current command invocation; never retried.
#[derive(Debug, Error)]
pub enum ShapeError {
    #[error("Malformed {kind} record: {source}")]
    Decode {
        kind: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unparseable timestamp {value:?}: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Errors surfaced by the REST client SDK boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Identity read failed: {0}")]
    IdentityReadFailed(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Service request failed: {0}")]
    RequestFailed(String),
}

/// Top-level command error: every service call and decode step funnels
/// into this for the host shell to print.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Usage(String),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}

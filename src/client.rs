//! REST client SDK boundary.
//!
//! Transport, authentication, retries, and pagination live in the
//! vendored SDK; this module pins down the traits and wire-shaped models
//! the rest of the crate consumes. Tests substitute in-memory doubles.

use crate::error::ServiceError;
use serde::{Deserialize, Serialize};

/// A team as returned by the core REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebApiTeam {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub project_name: Option<String>,
}

/// Fields accepted by team create and update calls.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TeamPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

/// A member of a team.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub display_name: String,
    pub unique_name: String,
}

/// An identity as returned by the identity REST API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    #[serde(default)]
    pub provider_display_name: Option<String>,
    #[serde(default)]
    pub custom_display_name: Option<String>,
}

impl Identity {
    /// Preferred display name: a custom name set on the identity wins
    /// over the provider-supplied one.
    pub fn display_name(&self) -> Option<&str> {
        self.custom_display_name
            .as_deref()
            .or(self.provider_display_name.as_deref())
    }
}

/// Core (project/team) client surface consumed by the team commands.
///
/// `instance` is the organization URI the call is routed to; the SDK owns
/// credential resolution for it.
pub trait CoreClient {
    fn create_team(
        &self,
        instance: &str,
        team: &TeamPatch,
        project: &str,
    ) -> Result<WebApiTeam, ServiceError>;

    fn delete_team(&self, instance: &str, team: &str, project: &str) -> Result<(), ServiceError>;

    fn get_team(
        &self,
        instance: &str,
        team: &str,
        project: &str,
    ) -> Result<WebApiTeam, ServiceError>;

    fn get_teams(
        &self,
        instance: &str,
        project: &str,
        top: Option<u32>,
        skip: Option<u32>,
    ) -> Result<Vec<WebApiTeam>, ServiceError>;

    fn get_team_members(
        &self,
        instance: &str,
        team: &str,
        project: &str,
        top: Option<u32>,
        skip: Option<u32>,
    ) -> Result<Vec<TeamMember>, ServiceError>;

    fn update_team(
        &self,
        instance: &str,
        team: &str,
        patch: &TeamPatch,
        project: &str,
    ) -> Result<WebApiTeam, ServiceError>;
}

/// Batched identity read surface consumed by the display-name cache.
pub trait IdentityReader {
    /// Read identities by id. Ids the service does not know are simply
    /// absent from the result; that is not an error.
    fn read_identities(
        &self,
        instance: &str,
        ids: &[String],
    ) -> Result<Vec<Identity>, ServiceError>;
}

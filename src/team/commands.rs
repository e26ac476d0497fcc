//! Team command service: single entry point per team CLI command variant.
//!
//! Pure pass-throughs: resolve the organization and project, call the
//! SDK, translate service failures into the uniform CLI error. No
//! formatting and no transport concerns here.

use crate::client::{CoreClient, TeamMember, TeamPatch, WebApiTeam};
use crate::config::DevOpsConfig;
use crate::error::CliError;
use tracing::debug;

pub struct TeamCommandService<'a> {
    client: &'a dyn CoreClient,
    config: &'a DevOpsConfig,
}

/// Common per-command scope arguments: explicit organization/project and
/// whether unsupplied values may be detected from configuration.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scope<'a> {
    pub organization: Option<&'a str>,
    pub project: Option<&'a str>,
    pub detect: bool,
}

impl<'a> TeamCommandService<'a> {
    pub fn new(client: &'a dyn CoreClient, config: &'a DevOpsConfig) -> Self {
        Self { client, config }
    }

    fn resolve(&self, scope: Scope<'_>) -> Result<(String, String), CliError> {
        self.config
            .resolve_instance_and_project(scope.organization, scope.project, scope.detect)
    }

    /// Create a team.
    pub fn create(
        &self,
        name: &str,
        description: Option<&str>,
        scope: Scope<'_>,
    ) -> Result<WebApiTeam, CliError> {
        let (instance, project) = self.resolve(scope)?;
        debug!(%instance, %project, team = name, "creating team");
        let patch = TeamPatch {
            name: Some(name.to_string()),
            description: description.map(str::to_string),
        };
        Ok(self.client.create_team(&instance, &patch, &project)?)
    }

    /// Delete a team by name or id.
    pub fn delete(&self, team: &str, scope: Scope<'_>) -> Result<(), CliError> {
        let (instance, project) = self.resolve(scope)?;
        debug!(%instance, %project, team, "deleting team");
        Ok(self.client.delete_team(&instance, team, &project)?)
    }

    /// Show a single team.
    pub fn show(&self, team: &str, scope: Scope<'_>) -> Result<WebApiTeam, CliError> {
        let (instance, project) = self.resolve(scope)?;
        Ok(self.client.get_team(&instance, team, &project)?)
    }

    /// List the teams of a project.
    pub fn list(
        &self,
        top: Option<u32>,
        skip: Option<u32>,
        scope: Scope<'_>,
    ) -> Result<Vec<WebApiTeam>, CliError> {
        let (instance, project) = self.resolve(scope)?;
        Ok(self.client.get_teams(&instance, &project, top, skip)?)
    }

    /// List the members of a team.
    pub fn list_members(
        &self,
        team: &str,
        top: Option<u32>,
        skip: Option<u32>,
        scope: Scope<'_>,
    ) -> Result<Vec<TeamMember>, CliError> {
        let (instance, project) = self.resolve(scope)?;
        Ok(self
            .client
            .get_team_members(&instance, team, &project, top, skip)?)
    }

    /// Update a team's name and/or description.
    pub fn update(
        &self,
        team: &str,
        name: Option<&str>,
        description: Option<&str>,
        scope: Scope<'_>,
    ) -> Result<WebApiTeam, CliError> {
        if name.is_none() && description.is_none() {
            return Err(CliError::Usage(
                "Either name or description argument must be provided.".to_string(),
            ));
        }
        let (instance, project) = self.resolve(scope)?;
        debug!(%instance, %project, team, "updating team");
        let patch = TeamPatch {
            name: name.map(str::to_string),
            description: description.map(str::to_string),
        };
        Ok(self.client.update_team(&instance, team, &patch, &project)?)
    }
}

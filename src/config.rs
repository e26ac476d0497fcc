//! Configuration System
//!
//! Resolves the active organization and project for a command invocation.
//! Layered: defaults, then the global config file
//! (`~/.config/azdo/config.toml`), then `AZDO_*` environment variables,
//! then explicit command arguments.

use crate::error::CliError;
use crate::logging::LoggingConfig;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DevOpsConfig {
    /// Organization URL, e.g. https://dev.azure.com/MyOrganization/
    pub organization: Option<String>,

    /// Default project name or id.
    pub project: Option<String>,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("azdo")
            .join("config.toml")
    })
}

impl DevOpsConfig {
    /// Load configuration from the global config file (when present)
    /// with `AZDO_*` environment overrides on top.
    pub fn load() -> Result<Self, CliError> {
        let mut builder = Config::builder();

        if let Some(path) = global_config_path() {
            if path.exists() {
                builder = builder.add_source(File::from(path).required(false));
            } else {
                debug!(
                    config_path = %path.display(),
                    "global configuration file not found"
                );
            }
        }
        builder = builder.add_source(Environment::with_prefix("AZDO"));

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Load configuration from an explicit file, environment overrides on
    /// top. Mainly for tests and host shells with a `--config` flag.
    pub fn load_from_file(path: &Path) -> Result<Self, CliError> {
        let builder = Config::builder()
            .add_source(File::from(path.to_path_buf()))
            .add_source(Environment::with_prefix("AZDO"));
        Ok(builder.build()?.try_deserialize()?)
    }

    /// Active service instance (organization) URI.
    pub fn current_instance_uri(&self) -> Result<String, CliError> {
        self.organization.clone().ok_or_else(|| {
            CliError::Config(
                "No organization configured. Set AZDO_ORGANIZATION or add 'organization' \
                 to ~/.config/azdo/config.toml."
                    .to_string(),
            )
        })
    }

    /// Resolve organization and project for a command. Explicit arguments
    /// win; with `detect` on, unsupplied values fall back to the
    /// configured defaults.
    pub fn resolve_instance_and_project(
        &self,
        organization: Option<&str>,
        project: Option<&str>,
        detect: bool,
    ) -> Result<(String, String), CliError> {
        let organization = match organization {
            Some(org) => org.to_string(),
            None if detect => self.current_instance_uri()?,
            None => {
                return Err(CliError::Config(
                    "--organization must be specified when detection is off".to_string(),
                ))
            }
        };
        let project = match project {
            Some(project) => project.to_string(),
            None if detect => self.project.clone().ok_or_else(|| {
                CliError::Config(
                    "No project configured. Set AZDO_PROJECT or add 'project' to \
                     ~/.config/azdo/config.toml."
                        .to_string(),
                )
            })?,
            None => {
                return Err(CliError::Config(
                    "--project must be specified when detection is off".to_string(),
                ))
            }
        };
        Ok((organization, project))
    }
}

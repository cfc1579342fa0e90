//! # ds-config
//!
//! Layered configuration loading for dsgen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DSGEN_*` prefix, `__` as separator)
//! 2. Project-level `.dsgen/config.toml`
//! 3. User-level `~/.config/dsgen/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `DSGEN_GIT__HOST` -> `git.host`, `DSGEN_ENVIRONMENT__MANAGER` ->
//! `environment.manager`, and so on.
//!
//! ```no_run
//! use std::path::Path;
//!
//! use ds_config::DsConfig;
//!
//! let config = DsConfig::load_for(Path::new(".")).expect("config");
//! println!("pushing to {}", config.git.host);
//! ```

mod environment;
mod error;
mod git;
mod project;

pub use environment::EnvironmentConfig;
pub use error::ConfigError;
pub use git::GitConfig;
pub use project::ProjectConfig;

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Project-local config file, relative to the project root.
pub const LOCAL_CONFIG_PATH: &str = ".dsgen/config.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DsConfig {
    #[serde(default)]
    pub git: GitConfig,
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub environment: EnvironmentConfig,
}

impl DsConfig {
    /// Load configuration for the project rooted at `project_root`.
    ///
    /// Does NOT read `.env`; callers load it first if they want its variables.
    pub fn load_for(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer extra providers.
    #[must_use]
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = project_root.join(LOCAL_CONFIG_PATH);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("DSGEN_").split("__"))
    }

    /// Reject values that would make a flow impossible to complete.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.git.validate()?;
        self.project.validate()?;
        self.environment.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dsgen").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = DsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.git.host, "github.com");
        assert_eq!(config.project.path_limit, 100);
    }

    #[test]
    fn figment_builds_without_files() {
        let figment = DsConfig::figment(Path::new("/nonexistent/project"));
        let config: DsConfig = figment.extract().expect("should extract defaults");
        assert_eq!(config.environment.manager, "conda");
    }
}

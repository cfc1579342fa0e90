//! Prompt defaults and limits for the generated project.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_owner() -> String {
    "James Bond".to_string()
}

fn default_ignore_file() -> String {
    ".gitignore".to_string()
}

const fn default_name_limit() -> usize {
    100
}

const fn default_owner_limit() -> usize {
    30
}

const fn default_path_limit() -> usize {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectConfig {
    /// Default repository name. Falls back to the project directory name.
    #[serde(default)]
    pub repository_name: Option<String>,

    #[serde(default = "default_owner")]
    pub repository_owner: String,

    /// File (relative to the project root) that receives data-link ignore rules.
    #[serde(default = "default_ignore_file")]
    pub ignore_file: String,

    #[serde(default = "default_name_limit")]
    pub name_limit: usize,

    #[serde(default = "default_owner_limit")]
    pub owner_limit: usize,

    #[serde(default = "default_path_limit")]
    pub path_limit: usize,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            repository_name: None,
            repository_owner: default_owner(),
            ignore_file: default_ignore_file(),
            name_limit: default_name_limit(),
            owner_limit: default_owner_limit(),
            path_limit: default_path_limit(),
        }
    }
}

impl ProjectConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (field, limit) in [
            ("project.name_limit", self.name_limit),
            ("project.owner_limit", self.owner_limit),
            ("project.path_limit", self.path_limit),
        ] {
            if limit < 2 {
                return Err(ConfigError::invalid(field, "must be at least 2"));
            }
        }
        if self.ignore_file.trim().is_empty() {
            return Err(ConfigError::invalid(
                "project.ignore_file",
                "must not be empty",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ProjectConfig::default();
        assert!(config.repository_name.is_none());
        assert_eq!(config.repository_owner, "James Bond");
        assert_eq!(config.ignore_file, ".gitignore");
        assert_eq!(config.name_limit, 100);
        assert_eq!(config.owner_limit, 30);
    }

    #[test]
    fn tiny_limit_is_rejected() {
        let config = ProjectConfig {
            owner_limit: 1,
            ..ProjectConfig::default()
        };
        assert!(config.validate().is_err());
    }
}

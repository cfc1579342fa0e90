//! Remote repository linking configuration.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_host() -> String {
    "github.com".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_branch() -> String {
    "master".to_string()
}

fn default_commit_message() -> String {
    "Initialization 🚀".to_string()
}

fn default_committer_name() -> String {
    "james-bond".to_string()
}

fn default_committer_email() -> String {
    "jamesbond@cookiecutter.org".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitConfig {
    /// SSH host of the remote, as in `git@<host>:owner/name.git`.
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_remote")]
    pub remote: String,

    /// Branch pushed after the initial commit.
    #[serde(default = "default_branch")]
    pub branch: String,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    /// Temporary identity for the initial commit; unset again afterwards.
    #[serde(default = "default_committer_name")]
    pub committer_name: String,

    #[serde(default = "default_committer_email")]
    pub committer_email: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            remote: default_remote(),
            branch: default_branch(),
            commit_message: default_commit_message(),
            committer_name: default_committer_name(),
            committer_email: default_committer_email(),
        }
    }
}

impl GitConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("git.host", &self.host),
            ("git.remote", &self.remote),
            ("git.branch", &self.branch),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::invalid(field, "must not be empty"));
            }
        }
        if self.host.contains(':') || self.host.contains('/') {
            return Err(ConfigError::invalid(
                "git.host",
                "must be a bare host name without ':' or '/'",
            ));
        }
        Ok(())
    }
}

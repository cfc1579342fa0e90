use std::path::Path;

use ds_config::GitConfig;

use crate::error::HookError;
use crate::runner::{CommandRunner, ExternalStep, run_best_effort};

/// Remote repository the project gets linked to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSpec {
    pub host: String,
    pub owner: String,
    pub name: String,
}

impl RemoteSpec {
    pub fn new(host: impl Into<String>, owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            owner: owner.into(),
            name: name.into(),
        }
    }

    /// SSH remote URL, `git@<host>:<owner>/<name>.git`.
    #[must_use]
    pub fn url(&self) -> String {
        format!("git@{}:{}/{}.git", self.host, self.owner, self.name)
    }
}

/// Git invocations that initialise the repository, push a first commit, and
/// drop the temporary committer identity again.
#[must_use]
pub fn remote_link_steps(spec: &RemoteSpec, git: &GitConfig) -> Vec<ExternalStep> {
    let url = spec.url();
    vec![
        ExternalStep::new("git", ["init"]),
        ExternalStep::new("git", ["config", "user.name", git.committer_name.as_str()]),
        ExternalStep::new("git", ["config", "user.email", git.committer_email.as_str()]),
        ExternalStep::new("git", ["remote", "add", git.remote.as_str(), url.as_str()]),
        ExternalStep::new("git", ["add", "-A"]),
        ExternalStep::new("git", ["commit", "-m", git.commit_message.as_str()]),
        ExternalStep::new("git", ["push", "-u", git.remote.as_str(), git.branch.as_str()]),
        ExternalStep::new("git", ["config", "--unset", "user.name"]),
        ExternalStep::new("git", ["config", "--unset", "user.email"]),
    ]
}

/// Run [`remote_link_steps`] in `project_root`.
///
/// Every step runs even when an earlier one exits non-zero; those exits come
/// back as warnings. The identity is unset whether or not the push succeeded.
pub fn link_remote<C: CommandRunner + ?Sized>(
    runner: &mut C,
    project_root: &Path,
    spec: &RemoteSpec,
    git: &GitConfig,
) -> Result<Vec<String>, HookError> {
    tracing::info!(url = %spec.url(), "linking remote repository");
    run_best_effort(runner, &remote_link_steps(spec, git), project_root)
}

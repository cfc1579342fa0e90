//! Reports returned by the post-generation hook.
//!
//! These are plain records of what happened; the hook prints its own console
//! messages as it goes and the CLI can render the report afterwards.

use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    DataLink,
    RemoteLink,
    Environment,
}

impl StepKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DataLink => "data_link",
            Self::RemoteLink => "remote_link",
            Self::Environment => "environment",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    /// The user declined, or a precondition was missing.
    Skipped,
    /// Every action ran. Individual commands may still have exited non-zero,
    /// see `warnings`.
    Completed,
    /// The flow stopped on an error it could not work around.
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: StepKind,
    pub status: StepStatus,
    pub detail: Option<String>,
    pub warnings: Vec<String>,
}

impl StepReport {
    #[must_use]
    pub const fn skipped(step: StepKind) -> Self {
        Self {
            step,
            status: StepStatus::Skipped,
            detail: None,
            warnings: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    #[must_use]
    pub fn completed(step: StepKind, warnings: Vec<String>) -> Self {
        Self {
            step,
            status: StepStatus::Completed,
            detail: None,
            warnings,
        }
    }

    #[must_use]
    pub fn failed(step: StepKind, detail: impl Into<String>, warnings: Vec<String>) -> Self {
        Self {
            step,
            status: StepStatus::Failed,
            detail: Some(detail.into()),
            warnings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PostGenReport {
    pub project_root: PathBuf,
    pub steps: Vec<StepReport>,
    /// Directory the hook hands back to the caller once it is done.
    pub exit_dir: PathBuf,
}

impl PostGenReport {
    #[must_use]
    pub fn step(&self, kind: StepKind) -> Option<&StepReport> {
        self.steps.iter().find(|step| step.step == kind)
    }

    #[must_use]
    pub fn any_failed(&self) -> bool {
        self.steps
            .iter()
            .any(|step| step.status == StepStatus::Failed)
    }
}

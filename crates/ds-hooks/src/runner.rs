use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::HookError;

/// One external program invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalStep {
    pub program: String,
    pub args: Vec<String>,
}

impl ExternalStep {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for ExternalStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub success: bool,
    /// `None` when the process was terminated by a signal.
    pub code: Option<i32>,
}

impl CommandStatus {
    pub const SUCCESS: Self = Self {
        success: true,
        code: Some(0),
    };

    #[must_use]
    pub const fn failed(code: i32) -> Self {
        Self {
            success: false,
            code: Some(code),
        }
    }
}

/// Runs external programs on behalf of the hook flows.
pub trait CommandRunner {
    /// Run `step` in `cwd` to completion with inherited stdio.
    ///
    /// Returns `Err` only when the program could not be started.
    fn run(&mut self, step: &ExternalStep, cwd: &Path) -> Result<CommandStatus, HookError>;

    /// Look `program` up on the search path.
    fn find_executable(&self, program: &str) -> Option<PathBuf>;
}

/// Runs programs as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, step: &ExternalStep, cwd: &Path) -> Result<CommandStatus, HookError> {
        let status = Command::new(&step.program)
            .args(&step.args)
            .current_dir(cwd)
            .status()
            .map_err(|source| HookError::Spawn {
                program: step.program.clone(),
                source,
            })?;
        Ok(CommandStatus {
            success: status.success(),
            code: status.code(),
        })
    }

    fn find_executable(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }
}

/// Run `steps` in order without stopping on non-zero exits.
///
/// Each non-zero exit becomes a warning. A program that cannot be started
/// ends the sequence with `Err`.
pub(crate) fn run_best_effort<C: CommandRunner + ?Sized>(
    runner: &mut C,
    steps: &[ExternalStep],
    cwd: &Path,
) -> Result<Vec<String>, HookError> {
    let mut warnings = Vec::new();
    for step in steps {
        tracing::debug!(command = %step, cwd = %cwd.display(), "running external command");
        let status = runner.run(step, cwd)?;
        if status.success {
            continue;
        }
        let warning = status.code.map_or_else(
            || format!("'{step}' was terminated by a signal"),
            |code| format!("'{step}' exited with status {code}"),
        );
        tracing::warn!(command = %step, code = ?status.code, "external command failed");
        warnings.push(warning);
    }
    Ok(warnings)
}

use std::path::{Path, PathBuf};

use ds_config::EnvironmentConfig;

use crate::error::HookError;
use crate::runner::{CommandRunner, ExternalStep, run_best_effort};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvOutcome {
    /// The manager executable is not on the search path; nothing ran.
    ManagerMissing,
    Created {
        manager: PathBuf,
        warnings: Vec<String>,
    },
}

/// Build target that creates the environment, then the prompt-name setting.
#[must_use]
pub fn environment_steps(env: &EnvironmentConfig) -> Vec<ExternalStep> {
    vec![
        ExternalStep::new(env.make_program.as_str(), [env.make_target.as_str()]),
        ExternalStep::new(
            env.manager.as_str(),
            ["config", "--set", "env_prompt", env.env_prompt.as_str()],
        ),
    ]
}

pub fn create_environment<C: CommandRunner + ?Sized>(
    runner: &mut C,
    project_root: &Path,
    env: &EnvironmentConfig,
) -> Result<EnvOutcome, HookError> {
    let Some(manager) = runner.find_executable(&env.manager) else {
        tracing::info!(manager = %env.manager, "environment manager not found on PATH");
        return Ok(EnvOutcome::ManagerMissing);
    };

    tracing::info!(manager = %manager.display(), "creating project environment");
    let warnings = run_best_effort(runner, &environment_steps(env), project_root)?;
    Ok(EnvOutcome::Created { manager, warnings })
}

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::{Path, PathBuf};

use ds_hooks::{CommandRunner, CommandStatus, ExternalStep, HookError};

/// Records every invocation instead of spawning processes.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    pub calls: Vec<(String, PathBuf)>,
    /// Programs reported as present on the search path.
    pub on_path: HashSet<String>,
    /// Rendered command -> exit code for commands that should fail.
    pub exit_codes: HashMap<String, i32>,
    /// Programs that cannot be started at all.
    pub unspawnable: HashSet<String>,
}

impl ScriptedRunner {
    pub fn with_on_path(programs: &[&str]) -> Self {
        Self {
            on_path: programs.iter().map(ToString::to_string).collect(),
            ..Self::default()
        }
    }

    pub fn commands(&self) -> Vec<&str> {
        self.calls.iter().map(|(cmd, _)| cmd.as_str()).collect()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&mut self, step: &ExternalStep, cwd: &Path) -> Result<CommandStatus, HookError> {
        let rendered = step.to_string();
        if self.unspawnable.contains(&step.program) {
            return Err(HookError::Spawn {
                program: step.program.clone(),
                source: io::Error::new(io::ErrorKind::NotFound, "not found"),
            });
        }
        self.calls.push((rendered.clone(), cwd.to_path_buf()));
        Ok(self
            .exit_codes
            .get(&rendered)
            .map_or(CommandStatus::SUCCESS, |code| CommandStatus::failed(*code)))
    }

    fn find_executable(&self, program: &str) -> Option<PathBuf> {
        self.on_path
            .contains(program)
            .then(|| PathBuf::from("/usr/bin").join(program))
    }
}

use std::path::PathBuf;

use ds_config::DsConfig;
use ds_core::{PostGenReport, StepKind, StepReport};
use ds_prompt::{AnswerSource, Prompter, YesNo};

use crate::data_link::link_data_dir;
use crate::environment::{EnvOutcome, create_environment};
use crate::error::HookError;
use crate::remote::{RemoteSpec, link_remote};
use crate::runner::CommandRunner;

/// Interactive post-generation hook for one project directory.
///
/// The flows run in a fixed order and each is skipped unless the user says
/// yes. Only prompt failures abort [`PostGen::run`]; everything else ends up
/// in the returned report.
pub struct PostGen<S, C> {
    project_root: PathBuf,
    config: DsConfig,
    prompter: Prompter<S>,
    runner: C,
}

impl<S: AnswerSource, C: CommandRunner> PostGen<S, C> {
    pub fn new(
        project_root: impl Into<PathBuf>,
        config: DsConfig,
        prompter: Prompter<S>,
        runner: C,
    ) -> Self {
        Self {
            project_root: project_root.into(),
            config,
            prompter,
            runner,
        }
    }

    pub fn into_parts(self) -> (Prompter<S>, C) {
        (self.prompter, self.runner)
    }

    pub fn run(&mut self) -> Result<PostGenReport, HookError> {
        tracing::info!(root = %self.project_root.display(), "starting post-generation setup");

        let steps = vec![
            self.data_link_step()?,
            self.remote_link_step()?,
            self.environment_step()?,
        ];
        for step in &steps {
            tracing::info!(step = step.step.as_str(), status = ?step.status, "step finished");
        }

        // `cd ..` at the filesystem root stays put.
        let exit_dir = self
            .project_root
            .parent()
            .unwrap_or(&self.project_root)
            .to_path_buf();

        Ok(PostGenReport {
            project_root: self.project_root.clone(),
            steps,
            exit_dir,
        })
    }

    fn data_link_step(&mut self) -> Result<StepReport, HookError> {
        let wanted = self.prompter.ask_yes_no(
            "Would you like to link to a data directory on your machine?",
            Some(YesNo::No),
        )?;
        if !wanted {
            return Ok(StepReport::skipped(StepKind::DataLink));
        }

        let data_dir = loop {
            let answer = self.prompter.ask_field(
                "At which path is your data directory located?",
                None,
                self.config.project.path_limit,
            )?;
            let candidate = self.project_root.join(&answer);
            if candidate.is_dir() {
                break candidate;
            }
            self.prompter.say(&format!(
                "The path {answer} does not exist or is not a directory. Please enter a valid path."
            ))?;
        };

        self.prompter.say("Ok, creating the link.")?;
        match link_data_dir(
            &self.project_root,
            &data_dir,
            &self.config.project.ignore_file,
        ) {
            Ok(link) => Ok(StepReport::completed(StepKind::DataLink, Vec::new()).with_detail(
                format!("{} -> {}", link.link.display(), link.target.display()),
            )),
            Err(error) => {
                tracing::warn!(%error, "data link creation failed");
                self.prompter
                    .say(&format!("Data link creation failed: {error}"))?;
                Ok(StepReport::failed(
                    StepKind::DataLink,
                    error.to_string(),
                    Vec::new(),
                ))
            }
        }
    }

    fn remote_link_step(&mut self) -> Result<StepReport, HookError> {
        let host = self.config.git.host.clone();
        let wanted = self.prompter.ask_yes_no(
            &format!("Would you like to link this repository to a repository on {host}?"),
            Some(YesNo::No),
        )?;
        if !wanted {
            return Ok(StepReport::skipped(StepKind::RemoteLink));
        }

        let default_name = self
            .config
            .project
            .repository_name
            .clone()
            .or_else(|| self.directory_name());
        let name = self.prompter.ask_field(
            &format!("What is name of the {host} repository you wish to link to?"),
            default_name.as_deref(),
            self.config.project.name_limit,
        )?;
        let owner = self.prompter.ask_field(
            "What is the name of the owner (user/organisation) of the repository?",
            Some(self.config.project.repository_owner.as_str()),
            self.config.project.owner_limit,
        )?;

        let spec = RemoteSpec::new(host.as_str(), owner, name);
        let url = spec.url();
        self.prompter.say(&format!("Linking to {url}."))?;

        match link_remote(
            &mut self.runner,
            &self.project_root,
            &spec,
            &self.config.git,
        ) {
            Ok(warnings) => {
                Ok(StepReport::completed(StepKind::RemoteLink, warnings).with_detail(url))
            }
            Err(error) => {
                tracing::warn!(%error, "remote link failed");
                self.prompter.say(&format!(
                    "Link to {host} failed. Please link the repo manually."
                ))?;
                self.prompter.say(&error.to_string())?;
                Ok(StepReport::failed(
                    StepKind::RemoteLink,
                    error.to_string(),
                    Vec::new(),
                ))
            }
        }
    }

    fn environment_step(&mut self) -> Result<StepReport, HookError> {
        let env = self.config.environment.clone();
        let wanted = self.prompter.ask_yes_no(
            &format!(
                "Would you like to create a project environment using {}?",
                env.manager
            ),
            Some(YesNo::No),
        )?;
        if !wanted {
            return Ok(StepReport::skipped(StepKind::Environment));
        }

        match create_environment(&mut self.runner, &self.project_root, &env) {
            Ok(EnvOutcome::ManagerMissing) => {
                let guidance = format!(
                    "\u{1F635} No {manager} executable found. Please first install {manager} on \
                     your machine and add it to the PATH. Then call `{make} {target}`.",
                    manager = env.manager,
                    make = env.make_program,
                    target = env.make_target,
                );
                self.prompter.say(&guidance)?;
                Ok(StepReport::skipped(StepKind::Environment)
                    .with_detail(format!("{} not found on PATH", env.manager)))
            }
            Ok(EnvOutcome::Created { manager, warnings }) => {
                Ok(StepReport::completed(StepKind::Environment, warnings)
                    .with_detail(format!("created with {}", manager.display())))
            }
            Err(error) => {
                tracing::warn!(%error, "environment creation failed");
                self.prompter.say(
                    "Environment creation failed. Please create environment manually",
                )?;
                self.prompter.say(&error.to_string())?;
                Ok(StepReport::failed(
                    StepKind::Environment,
                    error.to_string(),
                    Vec::new(),
                ))
            }
        }
    }

    fn directory_name(&self) -> Option<String> {
        self.project_root
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
    }
}

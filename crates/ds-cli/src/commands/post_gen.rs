use std::path::Path;

use anyhow::Context;
use ds_config::DsConfig;
use ds_hooks::{PostGen, SystemRunner, leave_project_dir};
use ds_prompt::Prompter;

use crate::cli::root_commands::PostGenArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::output::output;

/// Handle `dsgen post-gen`.
pub fn handle(
    args: &PostGenArgs,
    project_root: &Path,
    config: DsConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut hook = PostGen::new(project_root, config, Prompter::stdio(), SystemRunner);
    let report = hook.run().context("post-generation setup aborted")?;

    if args.report {
        match flags.format {
            OutputFormat::Table => output(&report.steps, flags.format)?,
            OutputFormat::Json | OutputFormat::Raw => output(&report, flags.format)?,
        }
    }
    if report.any_failed() {
        tracing::warn!("post-generation setup finished with failed steps");
    }

    leave_project_dir(&report.exit_dir).with_context(|| {
        format!("failed to change directory to {}", report.exit_dir.display())
    })
}

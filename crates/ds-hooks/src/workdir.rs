use std::path::Path;

use crate::error::HookError;

/// Move the process out of the project directory once the hook is done.
pub fn leave_project_dir(exit_dir: &Path) -> Result<(), HookError> {
    std::env::set_current_dir(exit_dir)?;
    tracing::debug!(dir = %exit_dir.display(), "changed working directory");
    Ok(())
}

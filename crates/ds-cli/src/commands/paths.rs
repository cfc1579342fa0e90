use std::path::Path;

use ds_core::ProjectPaths;

use crate::cli::GlobalFlags;
use crate::output::output;

/// Handle `dsgen paths`.
pub fn handle(project_root: &Path, flags: &GlobalFlags) -> anyhow::Result<()> {
    let paths = ProjectPaths::from_project_root(project_root);
    output(&paths, flags.format)
}

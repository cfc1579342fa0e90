use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Component, Path, PathBuf};

use ds_core::CoreError;

use crate::error::HookError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataLink {
    /// Base name of the data directory as typed, also the link name.
    pub name: String,
    /// Link created inside the project.
    pub link: PathBuf,
    /// Canonical data directory the link points at.
    pub target: PathBuf,
}

/// Ignore rules appended for a linked data directory called `name`.
#[must_use]
pub fn ignore_block(name: &str) -> String {
    format!("\n\n# Ignore data folder\n{name}\n{name}/\n.{name}/\n")
}

/// Link `data_dir` into `project_root` under its base name and append ignore
/// rules for it to `project_root/ignore_file`.
///
/// The name comes from `data_dir` as given, so a path that is itself a
/// symlink keeps its own name; only the link target is canonicalised.
pub fn link_data_dir(
    project_root: &Path,
    data_dir: &Path,
    ignore_file: &str,
) -> Result<DataLink, HookError> {
    let target = fs::canonicalize(data_dir)?;
    let name = typed_base_name(data_dir)
        .or_else(|| {
            target
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
        })
        .ok_or_else(|| CoreError::NoBaseName(target.clone()))?;

    let link = project_root.join(&name);
    if link.symlink_metadata().is_ok() {
        return Err(HookError::LinkExists(link));
    }
    create_dir_symlink(&target, &link)?;
    tracing::info!(link = %link.display(), target = %target.display(), "linked data directory");

    let mut ignore = OpenOptions::new()
        .create(true)
        .append(true)
        .open(project_root.join(ignore_file))?;
    ignore.write_all(ignore_block(&name).as_bytes())?;

    Ok(DataLink { name, link, target })
}

/// Last name left after dropping `.` and resolving `..` without touching the
/// filesystem.
fn typed_base_name(path: &Path) -> Option<String> {
    let mut names = Vec::new();
    for component in path.components() {
        match component {
            Component::Normal(name) => names.push(name),
            Component::ParentDir => {
                names.pop();
            }
            Component::CurDir | Component::RootDir | Component::Prefix(_) => {}
        }
    }
    names.last().map(|name| name.to_string_lossy().to_string())
}

fn create_dir_symlink(target: &Path, link: &Path) -> std::io::Result<()> {
    #[cfg(unix)]
    {
        std::os::unix::fs::symlink(target, link)
    }
    #[cfg(windows)]
    {
        std::os::windows::fs::symlink_dir(target, link)
    }
}

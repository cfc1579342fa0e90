use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::cli::GlobalFlags;

/// Absolute project root: `--project` if given, else the current directory.
pub fn resolve_project_root(flags: &GlobalFlags) -> anyhow::Result<PathBuf> {
    let root = match flags.project.as_deref() {
        Some(path) => PathBuf::from(path),
        None => std::env::current_dir().context("failed to read current directory")?,
    };

    if !root.is_dir() {
        anyhow::bail!("invalid --project '{}': directory does not exist", root.display());
    }

    let root = root
        .canonicalize()
        .with_context(|| format!("failed to resolve project root {}", root.display()))?;
    tracing::debug!(root = %root.display(), "resolved project root");
    Ok(root)
}

pub fn load_config(project_root: &Path) -> anyhow::Result<ds_config::DsConfig> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        tracing::debug!(path = %env_path.display(), "loaded project .env");
    } else {
        dotenvy::dotenv().ok();
    }

    let config =
        ds_config::DsConfig::load_for(project_root).context("failed to load dsgen configuration")?;
    tracing::debug!(
        host = %config.git.host,
        manager = %config.environment.manager,
        "loaded configuration"
    );
    Ok(config)
}

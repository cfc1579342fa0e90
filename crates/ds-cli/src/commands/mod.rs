use std::path::Path;

use ds_config::DsConfig;

use crate::cli::{Commands, GlobalFlags};

mod paths;
mod post_gen;

pub fn dispatch(
    command: Commands,
    project_root: &Path,
    config: DsConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::PostGen(args) => post_gen::handle(&args, project_root, config, flags),
        Commands::Paths => paths::handle(project_root, flags),
    }
}

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HookError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Prompt(#[from] ds_prompt::PromptError),
    #[error(transparent)]
    Core(#[from] ds_core::CoreError),
    #[error("failed to run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("link target already exists: {0}")]
    LinkExists(PathBuf),
}

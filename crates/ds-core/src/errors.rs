//! Cross-cutting error types for dsgen.
//!
//! Prompt, configuration, and hook errors live in their own crates. They all
//! converge on `anyhow` inside `ds-cli`.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can be raised by any dsgen crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A path had no parent where one was required.
    #[error("Path has no parent directory: {0}")]
    NoParent(PathBuf),

    /// A path had no final component to name a link after.
    #[error("Path has no base name: {0}")]
    NoBaseName(PathBuf),
}

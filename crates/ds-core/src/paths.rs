//! Directory layout of a generated project.
//!
//! The layout is fixed relative to the project's source directory:
//!
//! ```text
//! <project>/
//!   src/              <- source
//!   data/
//!     raw/
//!     processed/
//! ```
//!
//! The set is computed once and passed around as a value. Nothing here touches
//! the filesystem.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::errors::CoreError;

pub const SRC_DIR: &str = "src";
pub const DATA_DIR: &str = "data";
pub const RAW_DIR: &str = "raw";
pub const PROCESSED_DIR: &str = "processed";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectPaths {
    pub src: PathBuf,
    pub project: PathBuf,
    pub data: PathBuf,
    pub raw: PathBuf,
    pub processed: PathBuf,
}

impl ProjectPaths {
    /// Derive the layout from the source directory. Its parent is the project root.
    pub fn from_source_dir(src: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let src = src.into();
        let project = src
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| CoreError::NoParent(src.clone()))?;
        Ok(Self::with_root(src, project))
    }

    /// Derive the layout from the project root, assuming the conventional `src/`.
    #[must_use]
    pub fn from_project_root(root: impl Into<PathBuf>) -> Self {
        let project = root.into();
        Self::with_root(project.join(SRC_DIR), project)
    }

    fn with_root(src: PathBuf, project: PathBuf) -> Self {
        let data = project.join(DATA_DIR);
        let raw = data.join(RAW_DIR);
        let processed = data.join(PROCESSED_DIR);
        Self {
            src,
            project,
            data,
            raw,
            processed,
        }
    }

    /// Symbolic name / path pairs in declaration order.
    #[must_use]
    pub fn entries(&self) -> [(&'static str, &Path); 5] {
        [
            ("src", self.src.as_path()),
            ("project", self.project.as_path()),
            ("data", self.data.as_path()),
            ("raw", self.raw.as_path()),
            ("processed", self.processed.as_path()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn source_dir_parent_is_project_root() {
        let paths = ProjectPaths::from_source_dir("/work/churn/src").expect("has parent");
        assert_eq!(paths.project, PathBuf::from("/work/churn"));
        assert_eq!(paths.data, PathBuf::from("/work/churn/data"));
        assert_eq!(paths.raw, PathBuf::from("/work/churn/data/raw"));
        assert_eq!(paths.processed, PathBuf::from("/work/churn/data/processed"));
    }

    #[test]
    fn project_root_and_source_dir_agree() {
        let from_root = ProjectPaths::from_project_root("/work/churn");
        let from_src = ProjectPaths::from_source_dir("/work/churn/src").expect("has parent");
        assert_eq!(from_root, from_src);
    }

    #[test]
    fn root_without_parent_is_rejected() {
        let err = ProjectPaths::from_source_dir("/").expect_err("root has no parent");
        assert!(matches!(err, CoreError::NoParent(_)));
    }

    #[test]
    fn does_not_require_directories_to_exist() {
        let paths = ProjectPaths::from_project_root("/definitely/not/here");
        assert!(!paths.raw.exists());
        assert_eq!(paths.entries()[3], ("raw", Path::new("/definitely/not/here/data/raw")));
    }
}

//! # ds-core
//!
//! Core types shared by the dsgen crates.
//!
//! - [`ProjectPaths`]: the fixed directory layout of a generated project
//! - Step and run reports produced by the post-generation hook
//! - Cross-cutting error types

pub mod errors;
pub mod paths;
pub mod report;

pub use errors::CoreError;
pub use paths::ProjectPaths;
pub use report::{PostGenReport, StepKind, StepReport, StepStatus};

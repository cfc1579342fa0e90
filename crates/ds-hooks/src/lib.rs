//! # ds-hooks
//!
//! The post-generation hook run inside a freshly scaffolded project.
//!
//! Three independent flows, each gated by a yes/no prompt:
//! - link a local data directory into the project (symlink + ignore rules)
//! - link the project to a remote git repository and push an initial commit
//! - create the project environment through the environment manager
//!
//! External programs run through the [`CommandRunner`] seam. Failures of the
//! remote and environment flows are reported, never propagated.

mod data_link;
mod environment;
mod error;
mod post_gen;
mod remote;
mod runner;
mod workdir;

pub use data_link::{DataLink, ignore_block, link_data_dir};
pub use environment::{EnvOutcome, create_environment, environment_steps};
pub use error::HookError;
pub use post_gen::PostGen;
pub use remote::{RemoteSpec, link_remote, remote_link_steps};
pub use runner::{CommandRunner, CommandStatus, ExternalStep, SystemRunner};
pub use workdir::leave_project_dir;

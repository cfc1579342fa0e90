use clap::{Args, Subcommand};

#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the interactive post-generation setup.
    PostGen(PostGenArgs),
    /// Print the project's directory layout.
    Paths,
}

impl Default for Commands {
    fn default() -> Self {
        Self::PostGen(PostGenArgs::default())
    }
}

#[derive(Clone, Debug, Default, Args)]
pub struct PostGenArgs {
    /// Print a summary of every step once setup finishes.
    #[arg(long)]
    pub report: bool,
}

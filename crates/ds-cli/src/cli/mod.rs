use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `dsgen` binary.
#[derive(Debug, Parser)]
#[command(
    name = "dsgen",
    version,
    about = "Post-generation setup for data-science project scaffolds"
)]
pub struct Cli {
    /// Defaults to `post-gen`.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (errors only in logs)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project root (defaults to the current directory)
    #[arg(short, long, global = true)]
    pub project: Option<String>,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            project: self.project.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_post_gen() {
        let cli = Cli::try_parse_from(["dsgen"]).expect("cli should parse");
        assert!(cli.command.is_none());
        assert!(matches!(
            cli.command.unwrap_or_default(),
            Commands::PostGen(args) if !args.report
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["dsgen", "paths", "--format", "json", "--project", "/tmp/p"])
            .expect("cli should parse");
        assert!(matches!(cli.command, Some(Commands::Paths)));
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.global_flags().project.as_deref(), Some("/tmp/p"));
    }

    #[test]
    fn post_gen_report_flag() {
        let cli = Cli::try_parse_from(["dsgen", "-v", "post-gen", "--report"])
            .expect("cli should parse");
        assert!(cli.verbose);
        assert!(matches!(cli.command, Some(Commands::PostGen(args)) if args.report));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        assert!(Cli::try_parse_from(["dsgen", "--format", "xml", "paths"]).is_err());
    }
}

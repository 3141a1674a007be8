use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub mod root_commands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `scout` binary.
#[derive(Debug, Parser)]
#[command(name = "scout", version, about = "Scout - technical screening assistant")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, text, raw
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file used instead of `.scout/config.toml`
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            config: self.config.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::root_commands::SchemaTarget;
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["scout", "--format", "json", "--verbose", "keygen"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Keygen));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["scout", "keygen", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
    }

    #[test]
    fn text_is_the_default_format() {
        let cli = Cli::try_parse_from(["scout", "keygen"]).expect("cli should parse");
        assert_eq!(cli.format, OutputFormat::Text);
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["scout", "--format", "table", "keygen"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn questions_requires_a_stack() {
        assert!(Cli::try_parse_from(["scout", "questions"]).is_err());

        let cli = Cli::try_parse_from([
            "scout",
            "questions",
            "--stack",
            "Python, Django",
            "--name",
            "Ada",
            "--years",
            "4",
        ])
        .expect("cli should parse");
        let Commands::Questions(args) = cli.command else {
            panic!("expected questions");
        };
        assert_eq!(args.stack, "Python, Django");
        assert_eq!(args.name.as_deref(), Some("Ada"));
        assert_eq!(args.years, 4);
        assert_eq!(args.desired, "");
    }

    #[test]
    fn decrypt_takes_a_positional_file() {
        let cli = Cli::try_parse_from(["scout", "decrypt", "submissions/submission_x.enc"])
            .expect("cli should parse");
        let Commands::Decrypt(args) = cli.command else {
            panic!("expected decrypt");
        };
        assert_eq!(args.file.to_str(), Some("submissions/submission_x.enc"));
    }

    #[test]
    fn schema_defaults_to_record() {
        let cli = Cli::try_parse_from(["scout", "schema"]).expect("cli should parse");
        let Commands::Schema(args) = cli.command else {
            panic!("expected schema");
        };
        assert_eq!(args.target, SchemaTarget::Record);
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from(["scout", "--config", "/tmp/scout.toml", "keygen"])
            .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(
            flags.config.as_deref().and_then(|p| p.to_str()),
            Some("/tmp/scout.toml")
        );
    }
}

use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat, SourceArg};
pub use root_commands::Commands;

/// Top-level CLI parser for the `roster` binary.
#[derive(Debug, Parser)]
#[command(name = "roster", version, about = "Fellows and alumni roster queries")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max records to print
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Record source (overrides `[general] source`)
    #[arg(short, long, global = true)]
    pub source: Option<SourceArg>,

    /// Evaluate dates as of this day (YYYY-MM-DD) instead of the clock
    #[arg(long, global = true)]
    pub today: Option<String>,

    /// Fetch once more if the first load fails
    #[arg(long, global = true)]
    pub retry: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            source: self.source.map(Into::into),
            today: self.today.clone(),
            retry: self.retry,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use roster_config::SourceKind;

    use super::subcommands::{AlumniCommands, FellowCommands};
    use super::{Cli, Commands, GlobalFlags, OutputFormat};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "roster",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "fellows",
            "stats",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Fellows {
                action: FellowCommands::Stats
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["roster", "alumni", "stats", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Alumni {
                action: AlumniCommands::Stats
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["roster", "--format", "xml", "fellows", "stats"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn source_rejects_unknown_backend() {
        let parsed = Cli::try_parse_from(["roster", "--source", "sheets", "fellows", "stats"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from([
            "roster",
            "--source",
            "airtable",
            "--today",
            "2026-02-01",
            "--retry",
            "analytics",
        ])
        .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.source, Some(SourceKind::Airtable));
        assert_eq!(flags.today.as_deref(), Some("2026-02-01"));
        assert!(flags.retry);
    }

    #[test]
    fn source_defaults_to_config() {
        let cli = Cli::try_parse_from(["roster", "analytics"]).expect("cli should parse");
        assert_eq!(cli.global_flags().source, None);
    }
}

//! Clap argument definitions for the `gc` CLI.

use clap::{Args, Parser, Subcommand};
use gc_catalog::ResultKind;

/// Parse a result kind from a string.
fn parse_kind(s: &str) -> Result<ResultKind, String> {
    s.parse()
}

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "gc")]
#[command(about = "GharConnect - society catalog search")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Shared output mode flags.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for `gc search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Search query (multiple words are joined with spaces)
    #[arg(required = true)]
    pub query: Vec<String>,

    /// Maximum results to return [default: 20]
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Keep only results of this type: service, delivery, rent,
    /// landlord, vendor, apartment
    #[arg(long = "type", value_parser = parse_kind)]
    pub kind: Option<ResultKind>,

    /// Disable direct-redirect shortcuts and always rank
    #[arg(long)]
    pub no_redirect: bool,

    /// Show the scoring signals behind each result
    #[arg(long)]
    pub explain: bool,

    /// Society slug substituted into result URLs (overrides config)
    #[arg(short = 's', long)]
    pub society: Option<String>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `gc catalog`.
#[derive(Args, Debug, Clone)]
pub struct CatalogCommand {
    /// Keep only entries of this type
    #[arg(long = "type", value_parser = parse_kind)]
    pub kind: Option<ResultKind>,

    /// Society slug substituted into result URLs (overrides config)
    #[arg(short = 's', long)]
    pub society: Option<String>,

    #[command(flatten)]
    /// Output formatting flags.
    pub output: OutputArgs,
}

/// Arguments for `gc init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Create global ~/.gharconnect.toml instead
    #[arg(long)]
    pub global: bool,

    /// Overwrite existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Supported `gc` subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Search the aggregated catalog
    #[command(after_help = "\
SHORTCUTS:
  Well-known intents skip scoring and redirect straight to a category
  page: \"plumber\", \"milk\", \"2 bhk\", \"medicine\", and similar.
  Use --no-redirect to rank the catalog instead.

EXAMPLES:
  gc search plumber
  gc search '2 bhk' --no-redirect
  gc search tap repair --explain
  gc search doctor --type vendor --json")]
    Search(SearchCommand),

    /// Show the full aggregated catalog
    Catalog(CatalogCommand),

    /// Show status and validate configuration
    Status,

    /// Show effective configuration settings
    Config,

    /// Initialize gc configuration in current directory
    Init(InitCommand),
}

/// Parses CLI arguments.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_kind_accepts_all_labels() {
        for label in ["service", "delivery", "rent", "landlord", "vendor", "apartment"] {
            assert!(parse_kind(label).is_ok(), "{label} should parse");
        }
        assert!(parse_kind("marketplace").is_err());
    }
}

//! CLI adapter for termsift
//!
//! Provides a command-line front end over the core search helpers. It is a
//! caller of the core like any web handler would be: it supplies the raw
//! query and field list and decides what an empty query means.
//!
//! # Architecture
//!
//! ```text
//!              +------------------+
//!              |     core/        |
//!              |  (domain logic)  |
//!              +--------+---------+
//!                       |
//!                       v
//!              +------------------+
//!              |      cli/        |
//!              | (clap adapter)   |
//!              +------------------+
//! ```

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

/// termsift - search query normalizer and filter builder
///
/// Split free-text search input into terms and build AND-of-OR filter
/// expressions over a list of fields. Quote phrases to keep them together.
#[derive(Parser, Debug)]
#[command(name = "termsift")]
#[command(version)]
#[command(about = "Search query normalizer and filter builder", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Split a query into normalized terms
    Normalize(commands::NormalizeArgs),

    /// Build the filter expression for a query
    Build(commands::BuildArgs),

    /// Filter JSON records with a query
    Filter(commands::FilterArgs),

    /// Lower a query into a parameterized SQL statement
    Sql(commands::SqlArgs),

    /// Show current configuration
    #[command(name = "show-config")]
    ShowConfig(commands::ConfigArgs),

    /// Generate shell completion scripts
    ///
    /// Output completion script to stdout. To install:
    ///
    ///   bash:  termsift completions bash > ~/.local/share/bash-completion/completions/termsift
    ///   zsh:   termsift completions zsh > ~/.zfunc/_termsift
    ///   fish:  termsift completions fish > ~/.config/fish/completions/termsift.fish
    Completions(commands::CompletionsArgs),
}

/// Run the CLI with the provided arguments
pub fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    use crate::core::config::Config;
    use crate::core::xdg::XdgDirs;

    // Handle completions command early (doesn't need config)
    if let Commands::Completions(args) = cli.command {
        return commands::completions::execute(args);
    }

    let xdg = XdgDirs::new();
    xdg.log_paths();

    let config = Config::load_with_xdg(&xdg)?;
    config.log_config();

    match cli.command {
        Commands::Normalize(args) => commands::normalize::execute(args, &config, cli.format),
        Commands::Build(args) => commands::build::execute(args, &config, cli.format),
        Commands::Filter(args) => commands::filter::execute(args, &config, cli.format),
        Commands::Sql(args) => commands::sql::execute(args, &config, cli.format),
        Commands::ShowConfig(args) => commands::config::execute(args, &config, cli.format),
        Commands::Completions(_) => unreachable!(), // Handled above
    }
}

//! Completions command - generate shell completion scripts

use crate::cli::Cli;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io::{self, Write};

/// Arguments for the completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,

    /// Command name the script completes (when installed under an alias)
    #[arg(long)]
    pub bin_name: Option<String>,
}

/// Write the completion script for `shell` into `out`
pub fn write_completions(shell: Shell, bin_name: Option<&str>, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = bin_name.map_or_else(|| cmd.get_name().to_string(), str::to_string);
    generate(shell, &mut cmd, name, out);
}

/// Execute the completions command
pub fn execute(args: CompletionsArgs) -> Result<(), Box<dyn std::error::Error>> {
    write_completions(args.shell, args.bin_name.as_deref(), &mut io::stdout());
    Ok(())
}

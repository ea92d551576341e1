//! Config command - show current configuration

use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::xdg::XdgDirs;
use clap::Args;
use serde::Serialize;

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {}

/// Configuration response
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    pub config_file: String,
    pub config: Config,
}

/// Execute the config command
pub fn execute(
    _args: ConfigArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let xdg = XdgDirs::new();

    let response = ConfigResponse {
        config_file: xdg.config_file().to_string_lossy().into_owned(),
        config: config.clone(),
    };

    match format {
        OutputFormat::Human => {
            output::print_header("Configuration:");
            println!("  config_file: {}", response.config_file);
            println!("  search:");
            let fields: Vec<String> = response
                .config
                .search
                .default_fields
                .iter()
                .map(|f| colors::field(f).to_string())
                .collect();
            println!("    default_fields: [{}]", fields.join(", "));
            println!("  sql:");
            println!("    table: {}", response.config.sql.table);
            println!("    dialect: {}", response.config.sql.dialect);
            println!("    limit: {}", response.config.sql.limit);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

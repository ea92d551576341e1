//! Normalize command - show the terms a query splits into

use crate::cli::output::{colors, format_term};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::search::{normalize_query, Term};
use clap::Args;
use serde::Serialize;

/// Arguments for the normalize command
#[derive(Args, Debug)]
pub struct NormalizeArgs {
    /// Raw search query (quote phrases to keep them together)
    pub query: String,
}

/// Normalize response
#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub query: String,
    pub total_terms: usize,
    pub terms: Vec<Term>,
}

/// Tokenize the query
pub fn respond(args: &NormalizeArgs) -> NormalizeResponse {
    let terms = normalize_query(&args.query);
    NormalizeResponse {
        query: args.query.clone(),
        total_terms: terms.len(),
        terms,
    }
}

/// Execute the normalize command
pub fn execute(
    args: NormalizeArgs,
    _config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = respond(&args);

    match format {
        OutputFormat::Human => {
            if response.terms.is_empty() {
                println!("No terms found in '{}'", colors::label(&response.query));
            } else {
                println!(
                    "Found {} term(s):\n",
                    colors::number(&response.total_terms.to_string())
                );
                for (i, term) in response.terms.iter().enumerate() {
                    println!(
                        "[{}] {}",
                        colors::rank(&(i + 1).to_string()),
                        colors::term(&format_term(term))
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

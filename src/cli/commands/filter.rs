//! Filter command - run a query over JSON records in memory

use crate::cli::commands::resolve_fields;
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::records::load_records;
use crate::core::search::{build_search_query, filter_records};
use clap::Args;
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

/// Arguments for the filter command
#[derive(Args, Debug)]
pub struct FilterArgs {
    /// Raw search query (quote phrases to keep them together)
    pub query: String,

    /// JSON array or JSON Lines file with records (`-` for stdin)
    #[arg(long, short = 'i')]
    pub input: PathBuf,

    /// Field path to search (repeatable, `__` traverses relations)
    #[arg(long = "field", short = 'f')]
    pub fields: Vec<String>,

    /// Maximum number of records to print
    #[arg(long, short = 'k')]
    pub limit: Option<usize>,
}

/// Filter response
#[derive(Debug, Serialize)]
pub struct FilterResponse {
    pub query: String,
    pub fields: Vec<String>,
    pub total_records: usize,
    pub total_matches: usize,
    /// False when the query had no terms and every record was kept
    pub filtered: bool,
    pub results: Vec<Value>,
}

/// Filter `records` with the query from `args`.
///
/// A query without terms builds no expression; this front end treats that
/// as "every record matches".
pub fn respond(args: &FilterArgs, config: &Config, records: &[Value]) -> FilterResponse {
    let fields = resolve_fields(&args.fields, config);
    let query = build_search_query(&args.query, &fields);

    let matches: Vec<&Value> = match &query {
        Some(query) => filter_records(records, query),
        None => {
            tracing::debug!("Query has no terms, keeping all {} record(s)", records.len());
            records.iter().collect()
        }
    };

    let total_matches = matches.len();
    let limit = args.limit.unwrap_or(usize::MAX);

    FilterResponse {
        query: args.query.clone(),
        fields,
        total_records: records.len(),
        total_matches,
        filtered: query.is_some(),
        results: matches.into_iter().take(limit).cloned().collect(),
    }
}

/// One-line summary shown above the human-readable results
pub fn headline(response: &FilterResponse) -> String {
    if response.total_matches == 0 {
        format!(
            "No records matched '{}' in {} record(s)",
            response.query, response.total_records
        )
    } else {
        format!(
            "Matched {} of {} record(s):",
            response.total_matches, response.total_records
        )
    }
}

/// Execute the filter command
pub fn execute(
    args: FilterArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let records = load_records(&args.input)?;
    let response = respond(&args, config, &records);

    match format {
        OutputFormat::Human => {
            if !response.filtered {
                output::print_warning("Query produced no terms; showing all records");
            }

            if response.total_matches == 0 {
                println!("{}", headline(&response));
            } else {
                output::print_success(&format!("{}\n", headline(&response)));
                for (i, record) in response.results.iter().enumerate() {
                    let line = serde_json::to_string(record)?;
                    println!(
                        "[{}] {}",
                        colors::rank(&(i + 1).to_string()),
                        output::truncate(&line, 120)
                    );
                }
                if response.results.len() < response.total_matches {
                    println!(
                        "{}",
                        colors::dim(&format!(
                            "... {} more not shown",
                            response.total_matches - response.results.len()
                        ))
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

//! Build command - show the filter expression for a query

use crate::cli::commands::resolve_fields;
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::search::{build_search_query, normalize_query, QueryExpression, Term};
use clap::Args;
use serde::Serialize;

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Raw search query (quote phrases to keep them together)
    pub query: String,

    /// Field path to search (repeatable, `__` traverses relations)
    #[arg(long = "field", short = 'f')]
    pub fields: Vec<String>,
}

/// Build response
#[derive(Debug, Serialize)]
pub struct BuildResponse {
    pub query: String,
    pub fields: Vec<String>,
    pub terms: Vec<Term>,
    pub expression: Option<QueryExpression>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rendered: Option<String>,
}

/// Build the expression for the query
pub fn respond(args: &BuildArgs, config: &Config) -> BuildResponse {
    let fields = resolve_fields(&args.fields, config);
    let expression = build_search_query(&args.query, &fields);

    BuildResponse {
        query: args.query.clone(),
        terms: normalize_query(&args.query),
        rendered: expression.as_ref().map(ToString::to_string),
        expression,
        fields,
    }
}

/// Execute the build command
pub fn execute(
    args: BuildArgs,
    config: &Config,
    format: OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let response = respond(&args, config);

    match format {
        OutputFormat::Human => match &response.rendered {
            Some(rendered) => {
                output::print_header("Expression:");
                println!("  {rendered}");
                println!(
                    "{}",
                    colors::dim(&format!(
                        "({} term(s) across {} field(s))",
                        response.terms.len(),
                        response.fields.len()
                    ))
                );
            }
            None => output::print_warning(
                "Query produced no terms; no filter expression was built",
            ),
        },
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

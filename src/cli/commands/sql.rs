//! Sql command - lower a query into a parameterized SELECT

use crate::cli::commands::resolve_fields;
use crate::cli::output::{self, colors};
use crate::cli::OutputFormat;
use crate::core::config::Config;
use crate::core::error::Result;
use crate::core::search::{build_search_query, build_select, SqlDialect, SqlParam};
use clap::Args;
use serde::Serialize;

/// Arguments for the sql command
#[derive(Args, Debug)]
pub struct SqlArgs {
    /// Raw search query (quote phrases to keep them together)
    pub query: String,

    /// Field path to search (repeatable, `__` becomes `relation.column`)
    #[arg(long = "field", short = 'f')]
    pub fields: Vec<String>,

    /// Table to select from (defaults to config)
    #[arg(long, short = 't')]
    pub table: Option<String>,

    /// SQL dialect: sqlite or postgres (defaults to config)
    #[arg(long, short = 'd')]
    pub dialect: Option<SqlDialect>,

    /// Row limit, at least 1 (defaults to config)
    #[arg(long, short = 'k', value_parser = clap::value_parser!(i64).range(1..))]
    pub limit: Option<i64>,
}

/// Sql response
#[derive(Debug, Serialize)]
pub struct SqlResponse {
    pub query: String,
    pub dialect: SqlDialect,
    pub sql: String,
    pub params: Vec<SqlParam>,
}

/// Lower the query into a SELECT statement
pub fn respond(args: &SqlArgs, config: &Config) -> Result<SqlResponse> {
    let fields = resolve_fields(&args.fields, config);
    let table = args.table.as_deref().unwrap_or(&config.sql.table);
    let dialect = args.dialect.unwrap_or(config.sql.dialect);
    let limit = args.limit.unwrap_or(config.sql.limit);

    let expression = build_search_query(&args.query, &fields);
    if expression.is_none() {
        tracing::debug!("Query has no terms, selecting without a WHERE clause");
    }
    let (sql, params) = build_select(table, expression.as_ref(), dialect, limit)?;

    Ok(SqlResponse {
        query: args.query.clone(),
        dialect,
        sql,
        params,
    })
}

/// Execute the sql command
pub fn execute(
    args: SqlArgs,
    config: &Config,
    format: OutputFormat,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let response = respond(&args, config)?;

    match format {
        OutputFormat::Human => {
            output::print_header(&format!("SQL ({}):", response.dialect));
            println!("  {}", response.sql);
            output::print_header("Params:");
            for (i, param) in response.params.iter().enumerate() {
                let value = match param {
                    SqlParam::Text(text) => format!("'{text}'"),
                    SqlParam::Integer(n) => n.to_string(),
                };
                println!(
                    "  {} {}",
                    colors::rank(&format!("{}.", i + 1)),
                    colors::number(&value)
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
    }

    Ok(())
}

//! SQL lowering for query expressions.
//!
//! Converts a [`QueryExpression`] into a parameterized `WHERE` clause.
//! Terms are always bound as parameters, never inlined.
//!
//! Field paths map to `relation.column`: `brand__title` becomes
//! `brand.title`. Every segment must be a plain identifier since it is
//! spliced into the statement text.

use super::expr::{QueryExpression, WalkEvent};
use super::matcher::LOOKUP_SEP;
use crate::core::error::{Result, TermsiftError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap());

/// SQL parameter value for prepared statements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SqlParam {
    /// Text parameter (LIKE patterns)
    Text(String),
    /// Integer parameter (limits)
    Integer(i64),
}

/// Target SQL dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    /// `LOWER(col) LIKE ?` with `?` placeholders.
    ///
    /// SQLite's `LOWER` only folds ASCII unless the ICU extension is loaded.
    #[default]
    Sqlite,
    /// `col ILIKE $n` with numbered placeholders
    #[serde(alias = "postgresql")]
    Postgres,
}

impl SqlDialect {
    fn placeholder(&self, index: usize) -> String {
        match self {
            SqlDialect::Sqlite => "?".to_string(),
            SqlDialect::Postgres => format!("${index}"),
        }
    }

    fn contains_clause(&self, column: &str, placeholder: &str) -> String {
        match self {
            SqlDialect::Sqlite => format!("LOWER({column}) LIKE {placeholder} ESCAPE '\\'"),
            SqlDialect::Postgres => format!("{column} ILIKE {placeholder} ESCAPE '\\'"),
        }
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlDialect::Sqlite => f.write_str("sqlite"),
            SqlDialect::Postgres => f.write_str("postgres"),
        }
    }
}

impl std::str::FromStr for SqlDialect {
    type Err = TermsiftError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "sqlite" => Ok(SqlDialect::Sqlite),
            "postgres" | "postgresql" => Ok(SqlDialect::Postgres),
            other => Err(TermsiftError::ConfigError(format!(
                "Unknown SQL dialect '{other}' (expected 'sqlite' or 'postgres')"
            ))),
        }
    }
}

/// A lowered `WHERE` clause body and its bind parameters, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SqlFragment {
    pub clause: String,
    pub params: Vec<SqlParam>,
}

/// Lower an expression into a parameterized SQL condition.
///
/// # Examples
///
/// ```
/// use termsift::core::search::{build_search_query, lower_to_sql, SqlDialect, SqlParam};
///
/// let expr = build_search_query("red", &["title", "brand__title"]).unwrap();
/// let fragment = lower_to_sql(&expr, SqlDialect::Sqlite).unwrap();
/// assert_eq!(
///     fragment.clause,
///     "(LOWER(title) LIKE ? ESCAPE '\\' OR LOWER(brand.title) LIKE ? ESCAPE '\\')"
/// );
/// assert_eq!(fragment.params[0], SqlParam::Text("%red%".to_string()));
/// ```
pub fn lower_to_sql(expr: &QueryExpression, dialect: SqlDialect) -> Result<SqlFragment> {
    let mut clause = String::new();
    let mut params = Vec::new();

    for event in expr.walk() {
        match event {
            WalkEvent::Leaf { field, term } => {
                let column = field_to_column(field)?;
                params.push(SqlParam::Text(contains_pattern(term)));
                let placeholder = dialect.placeholder(params.len());
                clause.push_str(&dialect.contains_clause(&column, &placeholder));
            }
            WalkEvent::Open { .. } => clause.push('('),
            WalkEvent::Infix(op) => {
                clause.push(' ');
                clause.push_str(&op.to_string());
                clause.push(' ');
            }
            WalkEvent::Close { .. } => clause.push(')'),
        }
    }

    Ok(SqlFragment { clause, params })
}

/// Build a complete `SELECT` over `table`.
///
/// `None` means the caller decided the empty query matches everything, so
/// no `WHERE` clause is emitted. The limit is bound as the last parameter
/// and must be positive: SQLite reads a negative `LIMIT` as "no limit".
pub fn build_select(
    table: &str,
    expr: Option<&QueryExpression>,
    dialect: SqlDialect,
    limit: i64,
) -> Result<(String, Vec<SqlParam>)> {
    if !IDENTIFIER.is_match(table) {
        return Err(TermsiftError::InvalidField {
            field: table.to_string(),
            message: "table name must be a plain identifier".to_string(),
        });
    }
    if limit < 1 {
        return Err(TermsiftError::InvalidLimit(limit));
    }

    let (where_clause, mut params) = match expr {
        Some(expr) => {
            let fragment = lower_to_sql(expr, dialect)?;
            (format!(" WHERE {}", fragment.clause), fragment.params)
        }
        None => (String::new(), Vec::new()),
    };

    params.push(SqlParam::Integer(limit));
    let limit_placeholder = dialect.placeholder(params.len());

    let sql = format!("SELECT * FROM {table}{where_clause} LIMIT {limit_placeholder}");
    Ok((sql, params))
}

/// Map a `__`-separated field path to a dotted column reference.
pub fn field_to_column(field: &str) -> Result<String> {
    let segments: Vec<&str> = field.split(LOOKUP_SEP).collect();
    if let Some(bad) = segments.iter().find(|s| !IDENTIFIER.is_match(s)) {
        return Err(TermsiftError::InvalidField {
            field: field.to_string(),
            message: format!("segment '{bad}' is not an identifier"),
        });
    }
    Ok(segments.join("."))
}

/// Turn a term into a `%term%` LIKE pattern.
///
/// - `%`, `_`, `\` in the term are escaped with `\`
/// - The term is lowercased to line up with `LOWER(col)`
fn contains_pattern(term: &str) -> String {
    let mut result = String::with_capacity(term.len() + 4);
    result.push('%');
    for c in term.to_lowercase().chars() {
        match c {
            '%' | '_' | '\\' => {
                result.push('\\');
                result.push(c);
            }
            _ => result.push(c),
        }
    }
    result.push('%');
    result
}

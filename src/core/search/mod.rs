//! Search module - query normalizing, expression building and lowering.
//!
//! This module turns free-text search input into a boolean filter
//! expression and provides adapters that evaluate it in memory or lower
//! it into SQL.

mod builder;
mod expr;
mod matcher;
mod normalize;
mod sql;

pub use builder::{build_search_query, SearchQueryBuilder, DEFAULT_SEARCH_FIELDS};
pub use expr::QueryExpression;
pub use matcher::{filter_records, icontains, ContainsMatcher, LOOKUP_SEP};
pub use normalize::{normalize_query, Term};
pub use sql::{build_select, field_to_column, lower_to_sql, SqlDialect, SqlFragment, SqlParam};

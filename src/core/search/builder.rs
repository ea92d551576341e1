//! Search query builder.
//!
//! Combines per-field containment predicates into a disjunction per term
//! and a conjunction across terms:
//!
//! ```text
//! "red car", [title, brand__title]
//!   => (title ~ red OR brand__title ~ red) AND (title ~ car OR brand__title ~ car)
//! ```
//!
//! When the raw query yields no terms the builder returns `None`. Whether
//! that means "match everything" or "match nothing" is left to the caller.

use super::expr::QueryExpression;
use super::normalize::normalize_query;

/// Field searched when the caller names none
pub const DEFAULT_SEARCH_FIELDS: &[&str] = &["title"];

/// Build the AND-of-ORs expression for `raw` over `fields`.
///
/// An empty field list produces no OR group for any term and therefore
/// always returns `None`. No error is raised for any input.
///
/// # Examples
///
/// ```
/// use termsift::core::search::build_search_query;
///
/// let expr = build_search_query("red car", &["title", "brand__title"]).unwrap();
/// assert_eq!(
///     expr.to_string(),
///     "(title icontains 'red' OR brand__title icontains 'red') AND \
///      (title icontains 'car' OR brand__title icontains 'car')"
/// );
///
/// assert!(build_search_query("", &["title"]).is_none());
/// ```
pub fn build_search_query<S: AsRef<str>>(raw: &str, fields: &[S]) -> Option<QueryExpression> {
    let terms = normalize_query(raw);

    let query = terms.iter().fold(None, |query: Option<QueryExpression>, term| {
        let or_query = fields.iter().fold(None, |or_query: Option<QueryExpression>, field| {
            let predicate = QueryExpression::contains(field.as_ref(), term.as_str());
            Some(match or_query {
                Some(prev) => prev | predicate,
                None => predicate,
            })
        });

        match (query, or_query) {
            (Some(prev), Some(group)) => Some(prev & group),
            (None, group) => group,
            (prev, None) => prev,
        }
    });

    tracing::debug!(
        terms = terms.len(),
        fields = fields.len(),
        matched = query.is_some(),
        "Built search query"
    );

    query
}

/// Reusable builder holding the searched field list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQueryBuilder {
    fields: Vec<String>,
}

impl SearchQueryBuilder {
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn build(&self, raw: &str) -> Option<QueryExpression> {
        build_search_query(raw, &self.fields)
    }
}

impl Default for SearchQueryBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_SEARCH_FIELDS.iter().copied())
    }
}

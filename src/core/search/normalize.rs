//! Free-text query tokenizing.
//!
//! A raw search string is split into [`Term`]s: double-quoted runs become
//! single phrase terms, everything else splits on whitespace. Each term has
//! its internal whitespace runs collapsed, is trimmed and lowercased.
//!
//! Malformed quoting is never an error. A quote without a partner is just
//! another non-whitespace character and ends up inside a word term.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

// Regex patterns compiled once at startup
static TERM_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r#""([^"]+)"|(\S+)"#).unwrap());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s{2,}").unwrap());

/// A normalized search token: a single word or a quoted phrase.
///
/// Never empty, never carries leading/trailing whitespace, never contains
/// two consecutive whitespace characters, always lowercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Term(String);

impl Term {
    /// Normalize a raw token into a term.
    ///
    /// Returns `None` when nothing is left after trimming.
    pub fn normalize(token: &str) -> Option<Self> {
        let collapsed = WHITESPACE_RUN.replace_all(token, " ");
        let trimmed = collapsed.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Term(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// True for quoted phrases that kept an inner space
    pub fn is_phrase(&self) -> bool {
        self.0.chars().any(char::is_whitespace)
    }
}

impl AsRef<str> for Term {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<str> for Term {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Term {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Split a raw search string into normalized terms.
///
/// Terms keep the order in which they appear in the input. The function is
/// total: empty input, whitespace-only input and unbalanced quotes all give
/// a well-defined (possibly empty) result.
///
/// # Examples
///
/// ```
/// use termsift::core::search::normalize_query;
///
/// let terms = normalize_query(r#"  some random  words "with   quotes  " and   spaces"#);
/// assert_eq!(terms, vec!["some", "random", "words", "with quotes", "and", "spaces"]);
///
/// assert!(normalize_query("").is_empty());
/// ```
pub fn normalize_query(raw: &str) -> Vec<Term> {
    TERM_PATTERN
        .captures_iter(raw)
        .filter_map(|caps| {
            let token = caps.get(1).or_else(|| caps.get(2))?;
            Term::normalize(token.as_str())
        })
        .collect()
}

//! Tests for CLI output formatting helpers

use termsift::cli::output::{format_term, truncate};
use termsift::core::search::normalize_query;

#[test]
fn test_format_term_quotes_phrases_only() {
    let terms = normalize_query("plain \"two   words\"");
    let shown: Vec<String> = terms.iter().map(format_term).collect();
    assert_eq!(shown, vec!["plain", "\"two words\""]);
}

#[test]
fn test_truncate_edge_cases() {
    assert_eq!(truncate("", 5), "");
    assert_eq!(truncate("abc", 3), "abc");
    assert_eq!(truncate("abcd", 3), "...");
    assert_eq!(truncate("日本語テキスト", 6), "日本語...");
}

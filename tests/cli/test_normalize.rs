//! Tests for the normalize CLI command

use termsift::cli::commands::normalize::{execute, respond, NormalizeArgs};
use termsift::cli::OutputFormat;
use termsift::Config;

#[test]
fn test_normalize_response() {
    let args = NormalizeArgs {
        query: "Red  \"Sports   Car\"".to_string(),
    };
    let response = respond(&args);
    assert_eq!(response.total_terms, 2);
    assert_eq!(response.terms, vec!["red", "sports car"]);
}

#[test]
fn test_normalize_human_and_json() {
    for format in [OutputFormat::Human, OutputFormat::Json] {
        let args = NormalizeArgs {
            query: "hello world".to_string(),
        };
        let result = execute(args, &Config::default(), format);
        assert!(result.is_ok(), "normalize should succeed: {:?}", result.err());
    }
}

#[test]
fn test_normalize_empty_query_succeeds() {
    let args = NormalizeArgs {
        query: "   ".to_string(),
    };
    assert!(respond(&args).terms.is_empty());
    assert!(execute(args, &Config::default(), OutputFormat::Human).is_ok());
}

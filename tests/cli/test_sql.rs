//! Tests for the sql CLI command

use termsift::cli::commands::sql::{execute, respond, SqlArgs};
use termsift::cli::OutputFormat;
use termsift::core::search::{SqlDialect, SqlParam};
use termsift::Config;

fn args(query: &str) -> SqlArgs {
    SqlArgs {
        query: query.to_string(),
        fields: vec![],
        table: None,
        dialect: None,
        limit: None,
    }
}

#[test]
fn test_sql_defaults_from_config() {
    let response = respond(&args("lamp"), &Config::default()).expect("sql");
    assert_eq!(response.dialect, SqlDialect::Sqlite);
    assert_eq!(
        response.sql,
        "SELECT * FROM records WHERE LOWER(title) LIKE ? ESCAPE '\\' LIMIT ?"
    );
    assert_eq!(
        response.params,
        vec![
            SqlParam::Text("%lamp%".to_string()),
            SqlParam::Integer(100)
        ]
    );
}

#[test]
fn test_sql_arguments_override_config() {
    let mut args = args("lamp");
    args.fields = vec!["name".to_string()];
    args.table = Some("products".to_string());
    args.dialect = Some(SqlDialect::Postgres);
    args.limit = Some(7);

    let response = respond(&args, &Config::default()).expect("sql");
    assert_eq!(
        response.sql,
        "SELECT * FROM products WHERE name ILIKE $1 ESCAPE '\\' LIMIT $2"
    );
    assert_eq!(response.params.last(), Some(&SqlParam::Integer(7)));
}

#[test]
fn test_sql_empty_query_selects_everything() {
    let response = respond(&args(""), &Config::default()).expect("sql");
    assert_eq!(response.sql, "SELECT * FROM records LIMIT ?");
}

#[test]
fn test_sql_bad_field_is_error() {
    let mut args = args("lamp");
    args.fields = vec!["name--".to_string()];
    assert!(respond(&args, &Config::default()).is_err());
    assert!(execute(args, &Config::default(), OutputFormat::Human).is_err());
}

#[test]
fn test_sql_non_positive_limit_is_error() {
    for limit in [0, -5] {
        let mut args = args("red");
        args.limit = Some(limit);
        assert!(respond(&args, &Config::default()).is_err());
    }
}

#[test]
fn test_sql_very_long_query() {
    let mut args = args(&"w ".repeat(60_000));
    args.fields = vec!["title".to_string(), "body".to_string()];

    let response = respond(&args, &Config::default()).expect("sql");
    assert_eq!(response.params.len(), 120_001);
    assert!(response.sql.ends_with(" LIMIT ?"));
}

#[test]
fn test_sql_execute_formats() {
    for format in [OutputFormat::Human, OutputFormat::Json] {
        let result = execute(args("red car"), &Config::default(), format);
        assert!(result.is_ok(), "sql should succeed: {:?}", result.err());
    }
}

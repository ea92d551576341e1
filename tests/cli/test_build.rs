//! Tests for the build CLI command

use termsift::cli::commands::build::{execute, respond, BuildArgs};
use termsift::cli::OutputFormat;
use termsift::Config;

#[test]
fn test_build_uses_config_default_fields() {
    let mut config = Config::default();
    config.search.default_fields = vec!["name".to_string(), "brand__name".to_string()];

    let args = BuildArgs {
        query: "oak".to_string(),
        fields: vec![],
    };
    let response = respond(&args, &config);
    assert_eq!(response.fields, vec!["name", "brand__name"]);
    assert_eq!(
        response.rendered.as_deref(),
        Some("name icontains 'oak' OR brand__name icontains 'oak'")
    );
}

#[test]
fn test_build_explicit_fields_override_config() {
    let args = BuildArgs {
        query: "red car".to_string(),
        fields: vec!["title".to_string(), "brand__title".to_string()],
    };
    let response = respond(&args, &Config::default());
    assert_eq!(response.terms, vec!["red", "car"]);
    assert_eq!(
        response.rendered.as_deref(),
        Some(
            "(title icontains 'red' OR brand__title icontains 'red') AND \
             (title icontains 'car' OR brand__title icontains 'car')"
        )
    );
}

#[test]
fn test_build_empty_query_has_no_expression() {
    let args = BuildArgs {
        query: String::new(),
        fields: vec![],
    };
    let response = respond(&args, &Config::default());
    assert!(response.expression.is_none());
    assert!(response.rendered.is_none());

    let json = serde_json::to_value(&response).expect("serialize");
    assert!(json["expression"].is_null());
    assert!(json.get("rendered").is_none());
}

#[test]
fn test_build_execute_formats() {
    for format in [OutputFormat::Human, OutputFormat::Json] {
        for query in ["red car", ""] {
            let args = BuildArgs {
                query: query.to_string(),
                fields: vec![],
            };
            let result = execute(args, &Config::default(), format);
            assert!(result.is_ok(), "build should succeed: {:?}", result.err());
        }
    }
}

#[test]
fn test_build_very_long_query() {
    let args = BuildArgs {
        query: "w ".repeat(60_000),
        fields: vec!["title".to_string(), "body".to_string()],
    };
    let response = respond(&args, &Config::default());
    assert_eq!(response.terms.len(), 60_000);
    assert!(response.rendered.is_some());

    let json = serde_json::to_string(&response).expect("serialize");
    assert!(json.contains("\"operands\""));
}

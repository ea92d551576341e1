// Integration tests for SQL lowering

use termsift::core::search::{
    build_search_query, build_select, lower_to_sql, QueryExpression, SqlDialect, SqlParam,
};
use termsift::TermsiftError;

#[test]
fn test_sqlite_select_red_car() {
    let expr = build_search_query("red car", &["title", "brand__title"]).expect("expression");
    let (sql, params) =
        build_select("products", Some(&expr), SqlDialect::Sqlite, 20).expect("sql");

    assert_eq!(
        sql,
        "SELECT * FROM products WHERE \
         ((LOWER(title) LIKE ? ESCAPE '\\' OR LOWER(brand.title) LIKE ? ESCAPE '\\') AND \
         (LOWER(title) LIKE ? ESCAPE '\\' OR LOWER(brand.title) LIKE ? ESCAPE '\\')) \
         LIMIT ?"
    );
    assert_eq!(
        params,
        vec![
            SqlParam::Text("%red%".to_string()),
            SqlParam::Text("%red%".to_string()),
            SqlParam::Text("%car%".to_string()),
            SqlParam::Text("%car%".to_string()),
            SqlParam::Integer(20),
        ]
    );
}

#[test]
fn test_postgres_placeholders_follow_params() {
    let expr = build_search_query("a b", &["title"]).expect("expression");
    let (sql, params) =
        build_select("items", Some(&expr), SqlDialect::Postgres, 5).expect("sql");

    assert_eq!(
        sql,
        "SELECT * FROM items WHERE (title ILIKE $1 ESCAPE '\\' AND title ILIKE $2 ESCAPE '\\') LIMIT $3"
    );
    assert_eq!(params.len(), 3);
}

#[test]
fn test_no_expression_means_no_where() {
    let expr = build_search_query("", &["title"]);
    let (sql, params) = build_select("items", expr.as_ref(), SqlDialect::Sqlite, 10).expect("sql");
    assert_eq!(sql, "SELECT * FROM items LIMIT ?");
    assert_eq!(params, vec![SqlParam::Integer(10)]);
}

#[test]
fn test_wildcards_in_terms_escaped() {
    let expr = build_search_query("50% off_sale", &["title"]).expect("expression");
    let fragment = lower_to_sql(&expr, SqlDialect::Sqlite).expect("sql");
    assert_eq!(
        fragment.params,
        vec![
            SqlParam::Text("%50\\%%".to_string()),
            SqlParam::Text("%off\\_sale%".to_string()),
        ]
    );
}

#[test]
fn test_invalid_field_path_rejected() {
    let expr = QueryExpression::contains("title; DELETE FROM items", "x");
    let err = lower_to_sql(&expr, SqlDialect::Postgres).expect_err("should reject");
    assert!(err.is_bad_request());
    assert!(matches!(err, TermsiftError::InvalidField { .. }));
}

#[test]
fn test_params_serialize_untagged() {
    let json = serde_json::to_string(&vec![
        SqlParam::Text("%a%".to_string()),
        SqlParam::Integer(3),
    ])
    .expect("serialize");
    assert_eq!(json, "[\"%a%\",3]");
}

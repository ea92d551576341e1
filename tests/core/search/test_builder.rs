// Integration tests for search query building

use termsift::core::search::{build_search_query, QueryExpression, SearchQueryBuilder};

#[test]
fn test_build_empty_query_returns_none() {
    assert!(build_search_query("", &["title"]).is_none());
    assert!(build_search_query("   \t ", &["title", "body"]).is_none());
}

#[test]
fn test_build_without_fields_returns_none() {
    let fields: Vec<String> = Vec::new();
    assert!(build_search_query("foo", &fields).is_none());
    assert!(build_search_query("\"foo bar\" baz", &fields).is_none());
}

#[test]
fn test_build_red_car_over_two_fields() {
    let expr = build_search_query("red car", &["title", "brand__title"]).expect("expression");

    let expected = (QueryExpression::contains("title", "red")
        | QueryExpression::contains("brand__title", "red"))
        & (QueryExpression::contains("title", "car")
            | QueryExpression::contains("brand__title", "car"));
    assert_eq!(expr, expected);
    assert_eq!(
        expr.to_string(),
        "(title icontains 'red' OR brand__title icontains 'red') AND \
         (title icontains 'car' OR brand__title icontains 'car')"
    );
}

#[test]
fn test_build_groups_are_left_folded() {
    let expr = build_search_query("a b c", &["f"]).expect("expression");
    match &expr {
        QueryExpression::And { left, right } => {
            assert_eq!(**right, QueryExpression::contains("f", "c"));
            assert!(matches!(**left, QueryExpression::And { .. }));
        }
        other => panic!("Expected And at the root, got {other:?}"),
    }
}

#[test]
fn test_build_predicate_count() {
    let expr = build_search_query("one two \"three four\"", &["a", "b", "c"]).expect("expression");
    assert_eq!(expr.predicates().len(), 9);
    assert_eq!(expr.terms(), vec!["one", "two", "three four"]);
    assert_eq!(expr.fields(), vec!["a", "b", "c"]);
}

#[test]
fn test_build_repeated_term_kept() {
    let expr = build_search_query("red red", &["title"]).expect("expression");
    assert_eq!(
        expr,
        QueryExpression::contains("title", "red") & QueryExpression::contains("title", "red")
    );
}

#[test]
fn test_default_builder_searches_title() {
    let expr = SearchQueryBuilder::default().build("Lamp").expect("expression");
    assert_eq!(expr, QueryExpression::contains("title", "lamp"));
}

#[test]
fn test_builder_is_reusable() {
    let builder = SearchQueryBuilder::new(["title", "sku"]);
    assert!(builder.build("").is_none());
    assert_eq!(builder.build("x").expect("expression").predicates().len(), 2);
    assert_eq!(builder.build("x y").expect("expression").predicates().len(), 4);
}

#[test]
fn test_expression_json_shape() {
    let expr = build_search_query("red", &["title", "brand__title"]).expect("expression");
    let json = serde_json::to_value(&expr).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!({
            "op": "or",
            "operands": [
                {"op": "field_contains", "field": "title", "term": "red"},
                {"op": "field_contains", "field": "brand__title", "term": "red"}
            ]
        })
    );
}

#[test]
fn test_expression_json_stays_shallow_for_many_terms() {
    let expr = build_search_query("a b c d", &["title", "body"]).expect("expression");
    let json = serde_json::to_value(&expr).expect("serialize");
    assert_eq!(json["op"], "and");
    assert_eq!(json["operands"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["operands"][3]["operands"][1]["term"], "d");

    let back: QueryExpression = serde_json::from_value(json).expect("deserialize");
    assert_eq!(back, expr);
}

#[test]
fn test_build_very_long_query() {
    let raw = "w ".repeat(200_000);
    let expr = build_search_query(&raw, &["title"]).expect("expression");
    assert_eq!(expr.predicates().len(), 200_000);
    assert_eq!(expr.terms(), vec!["w"]);

    let rendered = expr.to_string();
    assert!(rendered.starts_with("title icontains 'w' AND title icontains 'w'"));

    let json = serde_json::to_string(&expr).expect("serialize");
    let back: QueryExpression = serde_json::from_str(&json).expect("deserialize");
    assert!(back == expr);

    drop(back);
    drop(expr);
}

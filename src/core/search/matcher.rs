//! In-memory evaluation of query expressions.
//!
//! The builder only describes *what* to match. Whoever evaluates the tree
//! has to supply case-insensitive substring containment for a field path,
//! which is what [`ContainsMatcher`] captures.
//!
//! Field paths use `__` to traverse into related data, so `brand__title`
//! means "the `title` of the `brand`".

use super::expr::{BoolOp, QueryExpression, Shape};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

/// Separator between relationship hops in a field path
pub const LOOKUP_SEP: &str = "__";

/// Case-insensitive substring containment on a named field.
pub trait ContainsMatcher {
    /// True when the value at `field` contains `term`, ignoring case.
    fn field_contains(&self, field: &str, term: &str) -> bool;
}

/// Case-insensitive substring test. An empty needle always matches.
pub fn icontains(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl QueryExpression {
    /// Evaluate the expression against a record.
    ///
    /// `And` / `Or` short-circuit left to right.
    pub fn matches<M: ContainsMatcher + ?Sized>(&self, record: &M) -> bool {
        // Right operands still to decide, innermost last
        let mut pending: Vec<(BoolOp, &QueryExpression)> = Vec::new();
        let mut node = self;
        loop {
            let value = loop {
                match node.shape() {
                    Shape::Binary(op, left, right) => {
                        pending.push((op, right));
                        node = left;
                    }
                    Shape::Leaf(field, term) => break record.field_contains(field, term),
                }
            };

            loop {
                match pending.pop() {
                    None => return value,
                    Some((BoolOp::And, right)) if value => {
                        node = right;
                        break;
                    }
                    Some((BoolOp::Or, right)) if !value => {
                        node = right;
                        break;
                    }
                    Some(_) => {}
                }
            }
        }
    }
}

/// Keep the records matching `query`, preserving input order.
pub fn filter_records<'a, M: ContainsMatcher>(
    records: &'a [M],
    query: &QueryExpression,
) -> Vec<&'a M> {
    records.iter().filter(|record| query.matches(*record)).collect()
}

impl<T: ContainsMatcher + ?Sized> ContainsMatcher for &T {
    fn field_contains(&self, field: &str, term: &str) -> bool {
        (**self).field_contains(field, term)
    }
}

impl ContainsMatcher for Value {
    fn field_contains(&self, field: &str, term: &str) -> bool {
        let path: Vec<&str> = field.split(LOOKUP_SEP).collect();
        value_contains(self, &path, term)
    }
}

// Arrays fan out at every hop: any element may satisfy the rest of the path.
fn value_contains(value: &Value, path: &[&str], term: &str) -> bool {
    match (value, path.split_first()) {
        (Value::Array(items), _) => items.iter().any(|item| value_contains(item, path, term)),
        (Value::Object(map), Some((key, rest))) => map
            .get(*key)
            .is_some_and(|child| value_contains(child, rest, term)),
        (_, Some(_)) => false,
        (Value::String(s), None) => icontains(s, term),
        (Value::Number(n), None) => icontains(&n.to_string(), term),
        (Value::Bool(b), None) => icontains(&b.to_string(), term),
        (Value::Null | Value::Object(_), None) => false,
    }
}

impl<S: BuildHasher> ContainsMatcher for HashMap<String, String, S> {
    fn field_contains(&self, field: &str, term: &str) -> bool {
        self.get(field).is_some_and(|value| icontains(value, term))
    }
}

impl ContainsMatcher for BTreeMap<String, String> {
    fn field_contains(&self, field: &str, term: &str) -> bool {
        self.get(field).is_some_and(|value| icontains(value, term))
    }
}

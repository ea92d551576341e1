//! Boolean filter expressions over "field contains term" predicates.
//!
//! [`QueryExpression`] is the neutral output of the query builder. It is a
//! plain tagged tree so that any persistence adapter can lower it into its
//! own syntax (see [`super::sql`] and [`super::matcher`]).
//!
//! The builder folds one `And` node per term, so tree height grows with the
//! query length. Everything that walks a tree here (rendering, lowering,
//! comparison, cloning, dropping) uses a heap stack instead of recursion.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{BitAnd, BitOr};

/// A boolean predicate tree.
///
/// `FieldContains` is an icontains-equivalent predicate: the adapter that
/// evaluates or lowers it must apply case-insensitive substring matching.
#[derive(Debug)]
pub enum QueryExpression {
    FieldContains {
        field: String,
        term: String,
    },
    And {
        left: Box<QueryExpression>,
        right: Box<QueryExpression>,
    },
    Or {
        left: Box<QueryExpression>,
        right: Box<QueryExpression>,
    },
}

/// Binary connective of an `And` / `Or` node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum BoolOp {
    And,
    Or,
}

impl BoolOp {
    fn join(self, left: QueryExpression, right: QueryExpression) -> QueryExpression {
        match self {
            BoolOp::And => left.and(right),
            BoolOp::Or => left.or(right),
        }
    }
}

impl fmt::Display for BoolOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoolOp::And => f.write_str("AND"),
            BoolOp::Or => f.write_str("OR"),
        }
    }
}

/// One node viewed without its enum wrapper
pub(crate) enum Shape<'a> {
    Leaf(&'a str, &'a str),
    Binary(BoolOp, &'a QueryExpression, &'a QueryExpression),
}

/// Pre-order event stream of a tree. Every binary node yields
/// `Open`, its left subtree, `Infix`, its right subtree and `Close`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum WalkEvent<'a> {
    Leaf {
        field: &'a str,
        term: &'a str,
    },
    Open {
        op: BoolOp,
        parent: Option<BoolOp>,
    },
    Infix(BoolOp),
    Close {
        op: BoolOp,
        parent: Option<BoolOp>,
    },
}

enum Pending<'a> {
    Visit(&'a QueryExpression, Option<BoolOp>),
    Infix(BoolOp),
    Close(BoolOp, Option<BoolOp>),
}

pub(crate) struct Walk<'a> {
    stack: Vec<Pending<'a>>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = WalkEvent<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let event = match self.stack.pop()? {
            Pending::Visit(expr, parent) => match expr.shape() {
                Shape::Leaf(field, term) => WalkEvent::Leaf { field, term },
                Shape::Binary(op, left, right) => {
                    self.stack.push(Pending::Close(op, parent));
                    self.stack.push(Pending::Visit(right, Some(op)));
                    self.stack.push(Pending::Infix(op));
                    self.stack.push(Pending::Visit(left, Some(op)));
                    WalkEvent::Open { op, parent }
                }
            },
            Pending::Infix(op) => WalkEvent::Infix(op),
            Pending::Close(op, parent) => WalkEvent::Close { op, parent },
        };
        Some(event)
    }
}

impl QueryExpression {
    /// Create a `field contains term` predicate
    pub fn contains(field: impl Into<String>, term: impl Into<String>) -> Self {
        QueryExpression::FieldContains {
            field: field.into(),
            term: term.into(),
        }
    }

    pub fn and(self, other: QueryExpression) -> Self {
        QueryExpression::And {
            left: Box::new(self),
            right: Box::new(other),
        }
    }

    pub fn or(self, other: QueryExpression) -> Self {
        QueryExpression::Or {
            left: Box::new(self),
            right: Box::new(other),
        }
    }

    pub(crate) fn shape(&self) -> Shape<'_> {
        match self {
            QueryExpression::FieldContains { field, term } => Shape::Leaf(field, term),
            QueryExpression::And { left, right } => Shape::Binary(BoolOp::And, left, right),
            QueryExpression::Or { left, right } => Shape::Binary(BoolOp::Or, left, right),
        }
    }

    pub(crate) fn walk(&self) -> Walk<'_> {
        Walk {
            stack: vec![Pending::Visit(self, None)],
        }
    }

    /// All `(field, term)` predicates, left to right
    pub fn predicates(&self) -> Vec<(&str, &str)> {
        self.walk()
            .filter_map(|event| match event {
                WalkEvent::Leaf { field, term } => Some((field, term)),
                _ => None,
            })
            .collect()
    }

    /// Distinct terms in first-seen order
    pub fn terms(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.predicates()
            .into_iter()
            .map(|(_, term)| term)
            .filter(|term| seen.insert(*term))
            .collect()
    }

    /// Distinct field paths in first-seen order
    pub fn fields(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.predicates()
            .into_iter()
            .map(|(field, _)| field)
            .filter(|field| seen.insert(*field))
            .collect()
    }

    /// Height of the tree; a lone predicate has depth 1
    pub fn depth(&self) -> usize {
        let mut open = 0usize;
        let mut deepest = 0usize;
        for event in self.walk() {
            match event {
                WalkEvent::Open { .. } => open += 1,
                WalkEvent::Close { .. } => open -= 1,
                WalkEvent::Leaf { .. } => deepest = deepest.max(open + 1),
                WalkEvent::Infix(_) => {}
            }
        }
        deepest
    }

    // Collect the operands of the maximal same-operator run rooted here
    fn operands(&self, op: BoolOp) -> Vec<&QueryExpression> {
        let mut out = Vec::new();
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            match node.shape() {
                Shape::Binary(inner, left, right) if inner == op => {
                    stack.push(right);
                    stack.push(left);
                }
                _ => out.push(node),
            }
        }
        out
    }

    fn detach_children(&mut self, out: &mut Vec<QueryExpression>) {
        if let QueryExpression::And { left, right } | QueryExpression::Or { left, right } = self {
            out.push(mem::replace(&mut **left, QueryExpression::placeholder()));
            out.push(mem::replace(&mut **right, QueryExpression::placeholder()));
        }
    }

    fn placeholder() -> Self {
        QueryExpression::FieldContains {
            field: String::new(),
            term: String::new(),
        }
    }
}

impl Drop for QueryExpression {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut node) = pending.pop() {
            node.detach_children(&mut pending);
        }
    }
}

impl Clone for QueryExpression {
    fn clone(&self) -> Self {
        let mut built: Vec<QueryExpression> = Vec::new();
        for event in self.walk() {
            match event {
                WalkEvent::Leaf { field, term } => built.push(QueryExpression::contains(field, term)),
                WalkEvent::Close { op, .. } => {
                    if let (Some(right), Some(left)) = (built.pop(), built.pop()) {
                        built.push(op.join(left, right));
                    }
                }
                WalkEvent::Open { .. } | WalkEvent::Infix(_) => {}
            }
        }
        // A walk always yields at least one leaf
        built.pop().unwrap_or_else(QueryExpression::placeholder)
    }
}

impl PartialEq for QueryExpression {
    fn eq(&self, other: &Self) -> bool {
        self.walk().eq(other.walk())
    }
}

impl Eq for QueryExpression {}

impl Hash for QueryExpression {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for event in self.walk() {
            event.hash(state);
        }
    }
}

impl BitAnd for QueryExpression {
    type Output = QueryExpression;

    fn bitand(self, rhs: QueryExpression) -> QueryExpression {
        self.and(rhs)
    }
}

impl BitOr for QueryExpression {
    type Output = QueryExpression;

    fn bitor(self, rhs: QueryExpression) -> QueryExpression {
        self.or(rhs)
    }
}

/// Renders `field icontains 'term'` predicates joined by `AND` / `OR`.
///
/// Parentheses only appear where the operator changes.
impl fmt::Display for QueryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in self.walk() {
            match event {
                WalkEvent::Leaf { field, term } => {
                    let escaped = term.replace('\\', "\\\\").replace('\'', "\\'");
                    write!(f, "{field} icontains '{escaped}'")?;
                }
                WalkEvent::Open { op, parent } if parent.is_some_and(|p| p != op) => {
                    f.write_str("(")?;
                }
                WalkEvent::Close { op, parent } if parent.is_some_and(|p| p != op) => {
                    f.write_str(")")?;
                }
                WalkEvent::Infix(op) => write!(f, " {op} ")?,
                WalkEvent::Open { .. } | WalkEvent::Close { .. } => {}
            }
        }
        Ok(())
    }
}

// Wire form: runs of the same operator are flattened into one `operands`
// list, so nesting only grows where AND and OR alternate.
#[derive(Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum WireRef<'a> {
    FieldContains { field: &'a str, term: &'a str },
    And { operands: Vec<WireRef<'a>> },
    Or { operands: Vec<WireRef<'a>> },
}

#[derive(Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum Wire {
    FieldContains { field: String, term: String },
    And { operands: Vec<Wire> },
    Or { operands: Vec<Wire> },
}

impl<'a> From<&'a QueryExpression> for WireRef<'a> {
    fn from(expr: &'a QueryExpression) -> Self {
        match expr.shape() {
            Shape::Leaf(field, term) => WireRef::FieldContains { field, term },
            Shape::Binary(op, _, _) => {
                let operands = expr.operands(op).into_iter().map(WireRef::from).collect();
                match op {
                    BoolOp::And => WireRef::And { operands },
                    BoolOp::Or => WireRef::Or { operands },
                }
            }
        }
    }
}

impl QueryExpression {
    fn from_wire(wire: Wire) -> Result<Self, String> {
        let (op, operands) = match wire {
            Wire::FieldContains { field, term } => {
                return Ok(QueryExpression::FieldContains { field, term })
            }
            Wire::And { operands } => (BoolOp::And, operands),
            Wire::Or { operands } => (BoolOp::Or, operands),
        };

        let mut folded: Option<QueryExpression> = None;
        for operand in operands {
            let operand = QueryExpression::from_wire(operand)?;
            folded = Some(match folded {
                Some(prev) => op.join(prev, operand),
                None => operand,
            });
        }
        folded.ok_or_else(|| format!("'{op}' needs at least one operand"))
    }
}

impl Serialize for QueryExpression {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WireRef::from(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for QueryExpression {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = Wire::deserialize(deserializer)?;
        QueryExpression::from_wire(wire).map_err(D::Error::custom)
    }
}

//! # Listing Predicate
//!
//! Engine-agnostic description of record-matching constraints.
//!
//! A [`Predicate`] combines independent [`Clause`]s with logical AND; the
//! empty predicate matches every document. Clauses cover the primitives a
//! document store needs for listing search: threshold comparison, a merged
//! numeric range, case-insensitive substring match, set intersection,
//! field-absence tests, equality, and OR of sub-clauses.
//!
//! Each clause can evaluate itself against a JSON document, so any
//! in-process store can execute a predicate without translation.

use serde::Serialize;
use serde_json::Value;

/// A single record-matching constraint.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Clause {
    /// Numeric field must be `>= value`.
    Gte { field: String, value: i64 },

    /// Numeric field must be `<= value`.
    Lte { field: String, value: i64 },

    /// Numeric field must fall inside a shared range. Both bounds apply
    /// to the one underlying field; either may be open.
    Range {
        field: String,
        min: Option<i64>,
        max: Option<i64>,
    },

    /// String field must contain `needle`, ignoring case. The needle is
    /// always a literal, never a pattern expression.
    ContainsCi { field: String, needle: String },

    /// Array field must share at least one element with `values`.
    AnyOf { field: String, values: Vec<String> },

    /// Field must be absent from the document.
    Missing { field: String },

    /// Field must equal `value` exactly.
    Eq { field: String, value: Value },

    /// At least one sub-clause must match.
    Or(Vec<Clause>),
}

impl Clause {
    /// Check whether a document satisfies this clause.
    pub fn matches(&self, doc: &Value) -> bool {
        match self {
            Clause::Gte { field, value } => {
                numeric_field(doc, field).is_some_and(|n| n >= *value as f64)
            }
            Clause::Lte { field, value } => {
                numeric_field(doc, field).is_some_and(|n| n <= *value as f64)
            }
            Clause::Range { field, min, max } => {
                let Some(n) = numeric_field(doc, field) else {
                    return false;
                };
                min.map_or(true, |lo| n >= lo as f64) && max.map_or(true, |hi| n <= hi as f64)
            }
            Clause::ContainsCi { field, needle } => doc
                .get(field)
                .and_then(Value::as_str)
                .is_some_and(|s| s.to_lowercase().contains(&needle.to_lowercase())),
            Clause::AnyOf { field, values } => doc
                .get(field)
                .and_then(Value::as_array)
                .is_some_and(|items| {
                    items
                        .iter()
                        .filter_map(Value::as_str)
                        .any(|item| values.iter().any(|wanted| wanted == item))
                }),
            Clause::Missing { field } => doc.get(field).is_none(),
            Clause::Eq { field, value } => doc.get(field) == Some(value),
            Clause::Or(clauses) => clauses.iter().any(|clause| clause.matches(doc)),
        }
    }
}

/// Extract a numeric field value, if present and numeric.
fn numeric_field(doc: &Value, field: &str) -> Option<f64> {
    doc.get(field).and_then(Value::as_f64)
}

/// A set of clauses combined with AND logic.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Predicate {
    pub clauses: Vec<Clause>,
}

impl Predicate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn and(mut self, clause: Clause) -> Self {
        self.clauses.push(clause);
        self
    }

    /// An empty predicate matches everything.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Check whether a document satisfies every clause.
    pub fn matches(&self, doc: &Value) -> bool {
        self.clauses.iter().all(|clause| clause.matches(doc))
    }
}

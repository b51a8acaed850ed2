//! Store-agnostic predicate tree used by matching and search.
//!
//! Builders produce a `FilterExpr`; a store adapter may push parts of it down
//! to its native query language and must evaluate the rest with
//! [`FilterExpr::matches`].

use serde::Serialize;
use serde_json::Value;

use super::document::lookup;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "node", rename_all = "snake_case")]
pub enum FilterExpr {
    /// Matches every document.
    Always,
    And { all: Vec<FilterExpr> },
    /// An empty `Or` matches nothing.
    Or { any: Vec<FilterExpr> },
    Test { path: String, cond: Condition },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Condition {
    /// Scalar equality; on an array field, "contains".
    Eq(Value),
    /// Scalar membership; on an array field, "intersects".
    In(Vec<Value>),
    Gte(f64),
    Lte(f64),
    /// Present and not an empty object, array or string.
    NonEmpty,
    /// Absent or null.
    Missing,
    /// Some element of an array field satisfies the nested expression, whose
    /// paths are relative to the element.
    ElemMatch(Box<FilterExpr>),
}

impl FilterExpr {
    pub fn and(all: Vec<FilterExpr>) -> Self {
        FilterExpr::And { all }
    }

    pub fn or(any: Vec<FilterExpr>) -> Self {
        FilterExpr::Or { any }
    }

    pub fn test(path: impl Into<String>, cond: Condition) -> Self {
        FilterExpr::Test {
            path: path.into(),
            cond,
        }
    }

    pub fn eq(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::test(path, Condition::Eq(value.into()))
    }

    pub fn is_in<V: Into<Value>>(
        path: impl Into<String>,
        values: impl IntoIterator<Item = V>,
    ) -> Self {
        Self::test(
            path,
            Condition::In(values.into_iter().map(Into::into).collect()),
        )
    }

    pub fn gte(path: impl Into<String>, bound: f64) -> Self {
        Self::test(path, Condition::Gte(bound))
    }

    pub fn lte(path: impl Into<String>, bound: f64) -> Self {
        Self::test(path, Condition::Lte(bound))
    }

    pub fn matches(&self, doc: &Value) -> bool {
        match self {
            FilterExpr::Always => true,
            FilterExpr::And { all } => all.iter().all(|expr| expr.matches(doc)),
            FilterExpr::Or { any } => any.iter().any(|expr| expr.matches(doc)),
            FilterExpr::Test { path, cond } => cond.holds(lookup(doc, path)),
        }
    }

    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl Condition {
    fn holds(&self, field: Option<&Value>) -> bool {
        match self {
            Condition::Missing => field.is_none(),
            Condition::NonEmpty => match field {
                None => false,
                Some(Value::Object(map)) => !map.is_empty(),
                Some(Value::Array(items)) => !items.is_empty(),
                Some(Value::String(s)) => !s.trim().is_empty(),
                Some(_) => true,
            },
            Condition::Eq(expected) => match field {
                None => false,
                Some(Value::Array(items)) => items.iter().any(|item| same_value(item, expected)),
                Some(actual) => same_value(actual, expected),
            },
            Condition::In(set) => match field {
                None => false,
                Some(Value::Array(items)) => items
                    .iter()
                    .any(|item| set.iter().any(|candidate| same_value(item, candidate))),
                Some(actual) => set.iter().any(|candidate| same_value(actual, candidate)),
            },
            Condition::Gte(bound) => field.and_then(Value::as_f64).is_some_and(|v| v >= *bound),
            Condition::Lte(bound) => field.and_then(Value::as_f64).is_some_and(|v| v <= *bound),
            Condition::ElemMatch(inner) => field
                .and_then(Value::as_array)
                .is_some_and(|items| items.iter().any(|item| inner.matches(item))),
        }
    }
}

// 48000 and 48000.0 are the same amount.
fn same_value(a: &Value, b: &Value) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => a == b,
    }
}

//! Read helpers over loosely-shaped profile documents.
//!
//! Paths are dotted (`startup.fundingGoal.amount`). A JSON `null` is treated
//! the same as an absent key everywhere.

use serde_json::Value;

pub fn lookup<'a>(doc: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = doc;
    for segment in path.split('.') {
        current = current.as_object()?.get(segment)?;
    }

    if current.is_null() {
        None
    } else {
        Some(current)
    }
}

/// Non-blank string at `path`, trimmed.
pub fn str_at<'a>(doc: &'a Value, path: &str) -> Option<&'a str> {
    lookup(doc, path)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

pub fn f64_at(doc: &Value, path: &str) -> Option<f64> {
    lookup(doc, path).and_then(Value::as_f64)
}

pub fn array_at<'a>(doc: &'a Value, path: &str) -> &'a [Value] {
    lookup(doc, path)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// An object with at least one key.
pub fn has_section(doc: &Value, path: &str) -> bool {
    lookup(doc, path)
        .and_then(Value::as_object)
        .is_some_and(|section| !section.is_empty())
}

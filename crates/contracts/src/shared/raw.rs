//! Field access over loosely shaped JSON records.
//!
//! Server DTOs and locally stored records name the same field differently
//! (`name` vs `serviceCenterName`, `id` vs `feedbackId`). Each resource
//! lists its accepted aliases once and reads them through these helpers.
//! A key may be a dotted path (`customer.name`). `null` and empty strings
//! count as absent, so the first meaningful alias wins.

use serde_json::{Map, Value};

/// First present, non-null, non-empty value among `keys`.
pub fn first<'a>(raw: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| {
        let value = lookup(raw, key)?;
        match value {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            _ => Some(value),
        }
    })
}

fn lookup<'a>(raw: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.')
        .try_fold(raw, |current, segment| current.as_object()?.get(segment))
}

/// String field; numbers and booleans are rendered as text.
pub fn string_field(raw: &Value, keys: &[&str]) -> Option<String> {
    match first(raw, keys)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Integer field; numeric strings are accepted.
pub fn i64_field(raw: &Value, keys: &[&str]) -> Option<i64> {
    match first(raw, keys)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Float field; numeric strings are accepted.
pub fn f64_field(raw: &Value, keys: &[&str]) -> Option<f64> {
    match first(raw, keys)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => coerce_number(s),
        _ => None,
    }
}

/// Boolean field; `"true"` and `"false"` strings are accepted.
pub fn bool_field(raw: &Value, keys: &[&str]) -> Option<bool> {
    match first(raw, keys)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Entries of `raw` whose key is not in `known`, so a record rebuilt by a
/// normalizer can still carry them.
pub fn unknown_fields(raw: &Value, known: &[&str]) -> Map<String, Value> {
    raw.as_object()
        .map(|object| {
            object
                .iter()
                .filter(|(key, _)| !known.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect()
        })
        .unwrap_or_default()
}

/// Numeric coercion of form text: blank text is zero, anything that is not a
/// finite number is `None`.
pub fn coerce_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

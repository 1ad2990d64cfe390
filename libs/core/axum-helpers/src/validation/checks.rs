//! Predicates usable in a [`FieldRule`](super::FieldRule).
//!
//! Every check receives `None` when the field is absent, so "optional"
//! semantics are expressed by the check itself.

use regex::Regex;
use serde_json::Value;
use std::borrow::Cow;
use std::sync::LazyLock;

static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?([0-9]*[.])?[0-9]+$").expect("numeric pattern is valid")
});

/// Text form of a scalar. Strings, numbers and booleans coerce; anything else
/// has no text form.
pub fn as_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

/// Numeric value of a JSON number or a numeric string such as `"45"` or `"-.5"`.
pub fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) if NUMERIC.is_match(s) => s.parse().ok(),
        _ => None,
    }
}

/// Parses as a 32-bit signed integer.
pub fn is_int(value: Option<&Value>) -> bool {
    match value {
        Some(Value::String(s)) => s.parse::<i32>().is_ok(),
        Some(Value::Number(n)) => n.as_i64().is_some_and(|n| i32::try_from(n).is_ok()),
        _ => false,
    }
}

pub fn not_empty(value: Option<&Value>) -> bool {
    value
        .and_then(as_text)
        .is_some_and(|text| !text.is_empty())
}

pub fn is_numeric(value: Option<&Value>) -> bool {
    value.and_then(as_number).is_some()
}

/// Numeric and strictly greater than zero.
pub fn is_positive(value: Option<&Value>) -> bool {
    value.and_then(as_number).is_some_and(|n| n > 0.0)
}

pub fn positive_if_present(value: Option<&Value>) -> bool {
    value.is_none() || is_positive(value)
}

pub fn boolean_if_present(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::Bool(_)))
}

/// Absent, a string, or a number (numbers are stored as their text).
pub fn text_if_present(value: Option<&Value>) -> bool {
    matches!(value, None | Some(Value::String(_)) | Some(Value::Number(_)))
}

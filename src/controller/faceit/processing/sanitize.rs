use regex::Regex;
use std::sync::LazyLock;

use crate::model::MetricValue;

static NON_NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.]").expect("hardcoded regex should always be valid"));
static LEADING_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d*\.?\d*").expect("hardcoded regex should always be valid"));

/// Coerces a raw stat to a number. Missing, null and unparsable values are 0.
#[must_use]
pub fn sanitize(value: Option<&MetricValue>) -> f64 {
    match value {
        Some(MetricValue::Number(n)) if n.is_finite() => *n,
        Some(MetricValue::Text(s)) => sanitize_str(s),
        _ => 0.0,
    }
}

/// Drops everything but digits and dots, then reads the longest leading
/// decimal, so `"54%"` is 54 and `"1.2.3"` is 1.2.
#[must_use]
pub fn sanitize_str(raw: &str) -> f64 {
    let cleaned = NON_NUMERIC.replace_all(raw, "");
    LEADING_DECIMAL
        .find(&cleaned)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

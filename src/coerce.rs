use serde_json::{Number, Value};

use crate::config::ColumnKind;

/// Trim, then drop thousands separators and dollar signs.
/// Returns `None` for blank input.
fn clean_numeric(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned: String = trimmed.chars().filter(|c| *c != ',' && *c != '$').collect();
    Some(cleaned.trim().to_string())
}

/// Best-effort float parse. Non-finite results count as unparseable.
pub fn to_float(raw: &str) -> Option<f64> {
    let cleaned = clean_numeric(raw)?;
    cleaned.parse::<f64>().ok().filter(|f| f.is_finite())
}

/// Best-effort integer parse; fractional input is truncated toward zero.
pub fn to_int(raw: &str) -> Option<i64> {
    let f = to_float(raw)?;
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound.
    if f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f.trunc() as i64)
    } else {
        None
    }
}

/// Property value for one non-coordinate cell.
///
/// Blank or missing cells become `null`. A failed numeric coercion keeps the
/// trimmed text.
pub fn coerce_property(kind: ColumnKind, raw: Option<&str>) -> Value {
    let trimmed = match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s,
        _ => return Value::Null,
    };

    let coerced = match kind {
        ColumnKind::Float => to_float(trimmed)
            .and_then(Number::from_f64)
            .map(Value::Number),
        ColumnKind::Integer => to_int(trimmed).map(Value::from),
        ColumnKind::Text => None,
    };
    coerced.unwrap_or_else(|| Value::String(trimmed.to_string()))
}

//! Defensive normalization of loosely typed ESI payload values.
//!
//! ESI numbers may deserialize as integers or as floating point depending on the upstream
//! serializer (`21` vs `21.0`). Every conversion of a payload field goes through the helpers
//! in this module instead of branching per field.

use chrono::{DateTime, Datelike, NaiveDateTime, Utc};
use serde_json::Value;

use crate::server::error::esi::EsiError;

/// Coerces a JSON number to `i64`, trying the integer then the floating point representation.
///
/// Floating point values are only accepted when they are finite, have no fractional part
/// and fit in an `i64`.
///
/// # Returns
/// - `Some(i64)` - The value as an integer
/// - `None` - The value is not a number or cannot be represented as an integer
pub fn coerce_to_i64(value: &Value) -> Option<i64> {
    if let Some(v) = value.as_i64() {
        return Some(v);
    }
    if let Some(v) = value.as_u64() {
        return i64::try_from(v).ok();
    }

    let v = value.as_f64()?;
    if v.is_finite() && v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
        Some(v as i64)
    } else {
        None
    }
}

/// Coerces a JSON number to `f64`, accepting both integer and floating point representations.
pub fn coerce_to_f64(value: &Value) -> Option<f64> {
    value.as_f64().filter(|v| v.is_finite())
}

/// Reads an integer field, `None` when absent, null or not coercible.
pub fn optional_i64(payload: &Value, field: &str) -> Option<i64> {
    payload.get(field).and_then(coerce_to_i64)
}

/// Reads an ID field where `0` means the value is absent.
pub fn optional_id(payload: &Value, field: &str) -> Option<i64> {
    optional_i64(payload, field).filter(|id| *id != 0)
}

/// Reads a required integer field.
pub fn required_i64(payload: &Value, field: &str) -> Result<i64, EsiError> {
    optional_i64(payload, field).ok_or_else(|| EsiError::missing_field(field))
}

/// Reads a required floating point field.
pub fn required_f64(payload: &Value, field: &str) -> Result<f64, EsiError> {
    payload
        .get(field)
        .and_then(coerce_to_f64)
        .ok_or_else(|| EsiError::missing_field(field))
}

/// Reads a required string field.
pub fn required_string(payload: &Value, field: &str) -> Result<String, EsiError> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| EsiError::missing_field(field))
}

/// Reads an optional string field, treating empty strings as absent.
pub fn optional_string(payload: &Value, field: &str) -> Option<String> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

pub fn optional_bool(payload: &Value, field: &str) -> Option<bool> {
    payload.get(field).and_then(Value::as_bool)
}

/// Reads an RFC 3339 timestamp field as a naive UTC timestamp.
///
/// The zero timestamp (`0001-01-01T00:00:00Z`) is how ESI marks an unset date, so it is
/// treated as absent just like a missing or unparsable value.
pub fn optional_timestamp(payload: &Value, field: &str) -> Option<NaiveDateTime> {
    let raw = payload.get(field)?.as_str()?;
    let parsed = DateTime::parse_from_rfc3339(raw).ok()?.with_timezone(&Utc);

    if parsed.year() <= 1 {
        return None;
    }

    Some(parsed.naive_utc())
}

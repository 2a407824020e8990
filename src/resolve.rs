use serde_json::Value;

use crate::models::RawRecord;

/// Whether a raw value counts as present. Null and empty/whitespace-only
/// strings are absent; everything else is data, including `0` and `false`
/// (zero injuries is a report, not a gap).
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(text) => !text.trim().is_empty(),
        _ => true,
    }
}

/// Returns the first present value among the candidate keys, in order.
/// Never merges candidates; never mutates the record. A caller that needs
/// a more specific key to beat the generic chain puts it first.
pub fn resolve<'a>(record: &'a RawRecord, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .find_map(|key| record.get(*key).filter(|value| is_present(value)))
}

/// Chain lookup with a caller-supplied fallback value.
pub fn resolve_or<'a>(record: &'a RawRecord, keys: &[&str], default: &'a Value) -> &'a Value {
    resolve(record, keys).unwrap_or(default)
}

/// Renders a scalar as display text. Arrays and objects have no single
/// text form and read as absent.
pub fn value_to_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(boolean) => Some(boolean.to_string()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Reads a non-negative count from a number or a numeric string. Grouping
/// separators (commas, non-breaking spaces) are tolerated; fractional and
/// negative values are malformed counts and read as absent.
pub fn value_to_count(value: &Value) -> Option<u64> {
    match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => {
            let cleaned = text.trim().replace(',', "").replace('\u{00A0}', "");
            cleaned.parse::<u64>().ok()
        }
        _ => None,
    }
}

pub fn resolve_text(record: &RawRecord, keys: &[&str]) -> Option<String> {
    resolve(record, keys).and_then(value_to_text)
}

pub fn resolve_count(record: &RawRecord, keys: &[&str]) -> Option<u64> {
    resolve(record, keys).and_then(value_to_count)
}

pub fn resolve_array<'a>(record: &'a RawRecord, keys: &[&str]) -> Option<&'a Vec<Value>> {
    resolve(record, keys).and_then(Value::as_array)
}

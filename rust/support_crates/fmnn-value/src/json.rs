//! Conversions between [`Value`] and `serde_json::Value`.

use crate::Value;

impl From<serde_json::Value> for Value {
    /// Classifies a JSON element.
    ///
    /// Numbers representable as `i64` become `Integer`; integers beyond `i64`
    /// become `Other`; every other number becomes `Float`. Strings become `Text`,
    /// and everything else (booleans, nulls, arrays, objects) becomes `Other`.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Integer(i)
                } else if n.is_u64() {
                    Value::Other
                } else {
                    n.as_f64().map_or(Value::Other, Value::Float)
                }
            }
            serde_json::Value::String(s) => Value::Text(s),
            serde_json::Value::Null
            | serde_json::Value::Bool(_)
            | serde_json::Value::Array(_)
            | serde_json::Value::Object(_) => Value::Other,
        }
    }
}

impl From<&Value> for serde_json::Value {
    /// Non-finite floats and `Other` are rendered as `null`.
    fn from(value: &Value) -> Self {
        match value {
            Value::Integer(i) => serde_json::Value::from(*i),
            Value::Float(x) => serde_json::Number::from_f64(*x)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Other => serde_json::Value::Null,
        }
    }
}

/// Parses a JSON array into a vector of values.
///
/// Returns `None` if the document is not an array.
pub fn values_from_json_array(document: serde_json::Value) -> Option<Vec<Value>> {
    match document {
        serde_json::Value::Array(items) => Some(items.into_iter().map(Value::from).collect()),
        _ => None,
    }
}

/// Renders a slice of values as a JSON array.
pub fn values_to_json_array(values: &[Value]) -> serde_json::Value {
    serde_json::Value::Array(values.iter().map(serde_json::Value::from).collect())
}

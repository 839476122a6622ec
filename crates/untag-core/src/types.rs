//! Native (untagged) value produced by a transformation.
//!
//! Mirrors the JSON data model, but keeps the timestamp-derived integers
//! apart from the floating-point numbers produced by the `N` rule, and keeps
//! object entries as `Vec<(String, NativeValue)>` so input key order survives
//! into the output.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::{Map, Number, Value};

/// A plain JSON value produced from a tagged node.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
    Null,
    Bool(bool),
    /// Unix epoch seconds from an RFC 3339 string.
    Integer(i64),
    /// Always finite. Whole numbers within ±2^53 are written as JSON
    /// integers (`7`, not `7.0`).
    Number(f64),
    String(String),
    List(Vec<NativeValue>),
    /// Key-value pairs in input order.
    Map(Vec<(String, NativeValue)>),
}

impl NativeValue {
    pub fn is_null(&self) -> bool {
        matches!(self, NativeValue::Null)
    }

    /// Look up a key in a `Map` value. Returns `None` for every other variant.
    pub fn get(&self, key: &str) -> Option<&NativeValue> {
        match self {
            NativeValue::Map(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

impl Serialize for NativeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            NativeValue::Null => serializer.serialize_unit(),
            NativeValue::Bool(b) => serializer.serialize_bool(*b),
            NativeValue::Integer(n) => serializer.serialize_i64(*n),
            NativeValue::Number(n) => match exact_integer(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            NativeValue::String(s) => serializer.serialize_str(s),
            NativeValue::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            NativeValue::Map(entries) => {
                let mut map = serializer.serialize_map(Some(entries.len()))?;
                for (key, value) in entries {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
        }
    }
}

impl From<NativeValue> for Value {
    fn from(native: NativeValue) -> Self {
        match native {
            NativeValue::Null => Value::Null,
            NativeValue::Bool(b) => Value::Bool(b),
            NativeValue::Integer(n) => Value::Number(Number::from(n)),
            NativeValue::Number(n) => match exact_integer(n) {
                Some(i) => Value::Number(Number::from(i)),
                // from_f64 only rejects NaN/Infinity, which the number rule never emits.
                None => Number::from_f64(n).map_or(Value::Null, Value::Number),
            },
            NativeValue::String(s) => Value::String(s),
            NativeValue::List(items) => Value::Array(items.into_iter().map(Value::from).collect()),
            NativeValue::Map(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Map<String, Value>>(),
            ),
        }
    }
}

/// Magnitude up to which every whole `f64` is an exact integer.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0; // 2^53

/// The integer a whole, finite float stands for. Negative zero keeps its
/// float form so the sign survives.
fn exact_integer(n: f64) -> Option<i64> {
    if n.fract() != 0.0 || n.abs() > MAX_EXACT_INTEGER || (n == 0.0 && n.is_sign_negative()) {
        return None;
    }
    Some(n as i64)
}

//! [`PropValue`] — the universal value type carried across the island
//! boundary.

use std::fmt;

use crate::signal::SignalRef;

/// Tree of values the wire format can carry.
///
/// Covers the JSON scalars and containers plus the two opaque leaf kinds the
/// format extends JSON with: raw byte buffers and live mutable cells.
#[derive(Clone)]
pub enum PropValue {
    /// JSON null.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Signed integer.
    Integer(i64),
    /// Unsigned integer above `i64::MAX`.
    UInteger(u64),
    /// Floating-point number.
    Float(f64),
    /// String.
    Str(String),
    /// Raw binary buffer.
    Bytes(Vec<u8>),
    /// Array of values.
    Array(Vec<PropValue>),
    /// Ordered key-value pairs; insertion order is irrelevant for equality.
    Object(Vec<(String, PropValue)>),
    /// Live mutable cell.
    Signal(SignalRef),
}

impl From<serde_json::Value> for PropValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => PropValue::Null,
            serde_json::Value::Bool(b) => PropValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    PropValue::Integer(i)
                } else if let Some(u) = n.as_u64() {
                    PropValue::UInteger(u)
                } else {
                    PropValue::Float(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => PropValue::Str(s),
            serde_json::Value::Array(arr) => {
                PropValue::Array(arr.into_iter().map(PropValue::from).collect())
            }
            serde_json::Value::Object(obj) => PropValue::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, PropValue::from(v)))
                    .collect(),
            ),
        }
    }
}

/// Structural equality.
///
/// Objects compare order-insensitively by key lookup. `Integer` and
/// `UInteger` compare numerically across variants, since a value serialized
/// from one can parse back as the other. Signals compare by current value
/// (`peek`), not by cell identity.
impl PartialEq for PropValue {
    fn eq(&self, other: &Self) -> bool {
        use PropValue::*;
        match (self, other) {
            (Null, Null) => true,
            (Bool(a), Bool(b)) => a == b,
            (Integer(a), Integer(b)) => a == b,
            (UInteger(a), UInteger(b)) => a == b,
            (Integer(a), UInteger(b)) | (UInteger(b), Integer(a)) => {
                *a >= 0 && *a as u64 == *b
            }
            (Float(a), Float(b)) => a == b,
            (Str(a), Str(b)) => a == b,
            (Bytes(a), Bytes(b)) => a == b,
            (Array(a), Array(b)) => a == b,
            (Object(a), Object(b)) => {
                if a.len() != b.len() {
                    return false;
                }
                a.iter().all(|(key, va)| {
                    b.iter()
                        .find(|(kb, _)| kb == key)
                        .is_some_and(|(_, vb)| va == vb)
                })
            }
            (Signal(a), Signal(b)) => a.peek() == b.peek(),
            _ => false,
        }
    }
}

impl fmt::Debug for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Null => f.write_str("Null"),
            PropValue::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            PropValue::Integer(i) => f.debug_tuple("Integer").field(i).finish(),
            PropValue::UInteger(u) => f.debug_tuple("UInteger").field(u).finish(),
            PropValue::Float(x) => f.debug_tuple("Float").field(x).finish(),
            PropValue::Str(s) => f.debug_tuple("Str").field(s).finish(),
            PropValue::Bytes(b) => f.debug_tuple("Bytes").field(b).finish(),
            PropValue::Array(items) => f.debug_tuple("Array").field(items).finish(),
            PropValue::Object(fields) => f.debug_tuple("Object").field(fields).finish(),
            // Cells print their current value; identity has no stable spelling.
            PropValue::Signal(cell) => f.debug_tuple("Signal").field(&cell.peek()).finish(),
        }
    }
}

//! Encoder producing the wire string for a prop tree.

use std::collections::HashMap;
use std::rc::Rc;

use serde_json::{Map, Value};

use island_props_base64::to_base64;

use crate::constants::{FIELD_DATA, FIELD_INDEX, FIELD_KEY, FIELD_VALUE, MARKER_KEY};
use crate::signal::SignalRef;
use crate::tag::Tag;
use crate::value::PropValue;

/// Result of one [`Serializer::serialize`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerializeResult {
    /// The wire string.
    pub serialized: String,
    /// Whether decoding needs the deserializer. When `false` the string is
    /// plain JSON and any standard parser reproduces the tree.
    pub requires_deserializer: bool,
    /// Whether any signal was serialized. When `true` the consumer must
    /// supply a cell factory at decode time.
    pub has_signals: bool,
}

/// Encoder for prop trees.
///
/// Stateless apart from its marker-key configuration; one instance can
/// serialize any number of trees, and each call builds its own signal table.
pub struct Serializer {
    marker: String,
}

impl Default for Serializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Serializer {
    /// Encoder using the default marker key.
    pub fn new() -> Self {
        Self::with_marker(MARKER_KEY)
    }

    /// Encoder using a custom reserved marker key. The decoding side must be
    /// configured with the same key.
    pub fn with_marker(marker: &str) -> Self {
        Self {
            marker: marker.to_string(),
        }
    }

    /// Serializes a prop tree into its wire string.
    ///
    /// The tree is read-only to the encoder apart from `peek` reads on
    /// cells. There is no error surface: floats without a JSON spelling
    /// (NaN, infinities) degrade to `null` the way the JSON writer handles
    /// them.
    pub fn serialize(&self, value: &PropValue) -> SerializeResult {
        let mut ctx = EncodeCtx {
            marker: &self.marker,
            signals: Vec::new(),
            by_identity: HashMap::new(),
            requires_deserializer: false,
        };
        let tree = ctx.encode(value);
        SerializeResult {
            serialized: tree.to_string(),
            requires_deserializer: ctx.requires_deserializer,
            has_signals: !ctx.signals.is_empty(),
        }
    }
}

/// Serializes with the default marker key.
pub fn serialize(value: &PropValue) -> SerializeResult {
    Serializer::new().serialize(value)
}

/// Per-call encoding state: the signal arena and the output flags.
struct EncodeCtx<'a> {
    marker: &'a str,
    /// Every distinct cell seen, in wire-index order. Holding the strong
    /// reference pins each allocation, so the addresses below stay valid
    /// identities for the whole call.
    signals: Vec<SignalRef>,
    /// Cell allocation address -> wire index.
    by_identity: HashMap<*const (), usize>,
    requires_deserializer: bool,
}

impl EncodeCtx<'_> {
    fn encode(&mut self, value: &PropValue) -> Value {
        match value {
            PropValue::Signal(cell) => self.encode_signal(cell),
            PropValue::Bytes(bytes) => self.encode_bytes(bytes),
            PropValue::Object(fields) if fields.iter().any(|(k, _)| k == self.marker) => {
                self.encode_literal_escape(fields)
            }
            PropValue::Null => Value::Null,
            PropValue::Bool(b) => Value::Bool(*b),
            PropValue::Integer(i) => Value::from(*i),
            PropValue::UInteger(u) => Value::from(*u),
            PropValue::Float(x) => {
                serde_json::Number::from_f64(*x).map_or(Value::Null, Value::Number)
            }
            PropValue::Str(s) => Value::String(s.clone()),
            PropValue::Array(items) => {
                Value::Array(items.iter().map(|item| self.encode(item)).collect())
            }
            PropValue::Object(fields) => {
                let mut map = Map::with_capacity(fields.len());
                for (key, val) in fields {
                    map.insert(key.clone(), self.encode(val));
                }
                Value::Object(map)
            }
        }
    }

    fn encode_signal(&mut self, cell: &SignalRef) -> Value {
        self.requires_deserializer = true;
        let identity = Rc::as_ptr(cell) as *const ();
        let index = match self.by_identity.get(&identity) {
            Some(&index) => index,
            None => {
                let index = self.signals.len();
                self.signals.push(Rc::clone(cell));
                self.by_identity.insert(identity, index);
                index
            }
        };
        // The current value rides along on every reference, repeats
        // included, so the reader's cell state stays fresh.
        let snapshot = self.encode(&cell.peek());
        let mut map = Map::with_capacity(3);
        map.insert(self.marker.to_string(), tag_value(Tag::Signal));
        map.insert(FIELD_INDEX.to_string(), Value::from(index as u64));
        map.insert(FIELD_VALUE.to_string(), snapshot);
        Value::Object(map)
    }

    fn encode_bytes(&mut self, bytes: &[u8]) -> Value {
        self.requires_deserializer = true;
        let mut map = Map::with_capacity(2);
        map.insert(self.marker.to_string(), tag_value(Tag::Bytes));
        map.insert(FIELD_DATA.to_string(), Value::String(to_base64(bytes)));
        Value::Object(map)
    }

    /// Rewrites an object that collides with the marker key into a
    /// literal-escape envelope: the colliding value moves under `k`, the
    /// remaining fields under `v`.
    fn encode_literal_escape(&mut self, fields: &[(String, PropValue)]) -> Value {
        self.requires_deserializer = true;
        let mut rest = Map::with_capacity(fields.len().saturating_sub(1));
        let mut escaped = Value::Null;
        for (key, val) in fields {
            if key == self.marker {
                escaped = self.encode(val);
            } else {
                rest.insert(key.clone(), self.encode(val));
            }
        }
        let mut map = Map::with_capacity(3);
        map.insert(self.marker.to_string(), tag_value(Tag::Literal));
        map.insert(FIELD_KEY.to_string(), escaped);
        map.insert(FIELD_VALUE.to_string(), Value::Object(rest));
        Value::Object(map)
    }
}

fn tag_value(tag: Tag) -> Value {
    Value::String(tag.as_str().to_string())
}

//! Decoder reconstructing a prop tree from its wire string.

use std::rc::Rc;

use serde_json::{Map, Value};

use island_props_base64::from_base64;

use crate::constants::{FIELD_DATA, FIELD_INDEX, FIELD_KEY, FIELD_VALUE, MARKER_KEY};
use crate::error::DeserializeError;
use crate::signal::{SignalFactory, SignalRef};
use crate::tag::Tag;
use crate::value::PropValue;

/// Decoder for wire strings.
///
/// Stateless apart from its marker-key configuration; each call builds its
/// own table of reconstructed cells.
pub struct Deserializer {
    marker: String,
}

impl Default for Deserializer {
    fn default() -> Self {
        Self::new()
    }
}

impl Deserializer {
    /// Decoder using the default marker key.
    pub fn new() -> Self {
        Self::with_marker(MARKER_KEY)
    }

    /// Decoder using a custom reserved marker key, matching the encoder's
    /// configuration.
    pub fn with_marker(marker: &str) -> Self {
        Self {
            marker: marker.to_string(),
        }
    }

    /// Parses a wire string back into a prop tree.
    ///
    /// `factory` constructs the cell for each signal wire index on first
    /// reference. It is required whenever the document contains signal
    /// envelopes ([`has_signals`] on the producing side); documents without
    /// them decode with `None`.
    ///
    /// [`has_signals`]: crate::SerializeResult::has_signals
    pub fn deserialize(
        &self,
        text: &str,
        factory: Option<&mut SignalFactory<'_>>,
    ) -> Result<PropValue, DeserializeError> {
        let raw: Value = serde_json::from_str(text)?;
        let mut ctx = DecodeCtx {
            marker: &self.marker,
            factory,
            signals: Vec::new(),
        };
        ctx.decode(raw)
    }
}

/// Deserializes with the default marker key.
pub fn deserialize(
    text: &str,
    factory: Option<&mut SignalFactory<'_>>,
) -> Result<PropValue, DeserializeError> {
    Deserializer::new().deserialize(text, factory)
}

/// Per-call decoding state.
struct DecodeCtx<'a, 'f> {
    marker: &'a str,
    factory: Option<&'a mut SignalFactory<'f>>,
    /// Reconstructed cells by wire index; slots fill on first reference.
    signals: Vec<Option<SignalRef>>,
}

impl DecodeCtx<'_, '_> {
    fn decode(&mut self, raw: Value) -> Result<PropValue, DeserializeError> {
        match raw {
            Value::Object(map) => self.decode_object(map),
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    out.push(self.decode(item)?);
                }
                Ok(PropValue::Array(out))
            }
            scalar => Ok(PropValue::from(scalar)),
        }
    }

    fn decode_object(
        &mut self,
        mut map: Map<String, Value>,
    ) -> Result<PropValue, DeserializeError> {
        if !map.contains_key(self.marker) {
            // Plain object: convey unchanged, recursing into fields.
            let mut fields = Vec::with_capacity(map.len());
            for (key, val) in map {
                fields.push((key, self.decode(val)?));
            }
            return Ok(PropValue::Object(fields));
        }

        let marker_value = &map[self.marker];
        // An unrecognized envelope must not pass through: its shape is
        // ambiguous once the marker key is reserved.
        let Some(tag) = marker_value.as_str().and_then(Tag::from_marker) else {
            let tag = match marker_value.as_str() {
                Some(s) => s.to_string(),
                None => marker_value.to_string(),
            };
            return Err(DeserializeError::UnknownTag(tag));
        };

        match tag {
            Tag::Signal => {
                let index = map
                    .get(FIELD_INDEX)
                    .and_then(Value::as_u64)
                    .ok_or(DeserializeError::InvalidEnvelope(
                        "signal index must be a non-negative integer",
                    ))? as usize;
                let cell = self.signal_at(index)?;
                // A snapshot on any reference, first or repeat, overwrites
                // the cell, so the latest one in the stream wins.
                if let Some(snapshot) = map.remove(FIELD_VALUE) {
                    let decoded = self.decode(snapshot)?;
                    cell.set(decoded);
                }
                Ok(PropValue::Signal(cell))
            }
            Tag::Bytes => {
                let data = map.get(FIELD_DATA).and_then(Value::as_str).ok_or(
                    DeserializeError::InvalidEnvelope("byte payload must be a base64 string"),
                )?;
                Ok(PropValue::Bytes(from_base64(data)?))
            }
            Tag::Literal => {
                let escaped = map.remove(FIELD_KEY).ok_or(
                    DeserializeError::InvalidEnvelope("literal escape is missing its key field"),
                )?;
                let payload = match map.remove(FIELD_VALUE) {
                    Some(Value::Object(payload)) => payload,
                    _ => {
                        return Err(DeserializeError::InvalidEnvelope(
                            "literal escape payload must be an object",
                        ))
                    }
                };
                let mut fields = Vec::with_capacity(payload.len() + 1);
                for (key, val) in payload {
                    fields.push((key, self.decode(val)?));
                }
                // Reinstate the marker key the escape removed. The result is
                // a plain object and is not re-examined for envelopes.
                fields.push((self.marker.to_string(), self.decode(escaped)?));
                Ok(PropValue::Object(fields))
            }
        }
    }

    /// Cell for a wire index, constructing it through the factory on first
    /// reference.
    fn signal_at(&mut self, index: usize) -> Result<SignalRef, DeserializeError> {
        if index >= self.signals.len() {
            self.signals.resize(index + 1, None);
        }
        if let Some(cell) = &self.signals[index] {
            return Ok(Rc::clone(cell));
        }
        let Some(factory) = self.factory.as_mut() else {
            return Err(DeserializeError::MissingFactory);
        };
        let cell = factory();
        self.signals[index] = Some(Rc::clone(&cell));
        Ok(cell)
    }
}

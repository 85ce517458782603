//! Deserializer error type.

use island_props_base64::Base64Error;
use thiserror::Error;

/// Failures while decoding a wire string.
///
/// All of these indicate an encoder/decoder version mismatch, a corrupted
/// transport, or a caller configuration error; none are recoverable at this
/// layer and no partial tree is returned.
#[derive(Debug, Error)]
pub enum DeserializeError {
    /// The marker value of an envelope is outside the tag vocabulary.
    #[error("unknown tag `{0}`")]
    UnknownTag(String),
    /// The document contains signal envelopes but no cell factory was
    /// supplied.
    #[error("document contains signals but no signal factory was supplied")]
    MissingFactory,
    /// A byte-buffer payload is not valid base64.
    #[error("malformed byte payload: {0}")]
    MalformedBytes(#[from] Base64Error),
    /// An envelope field is missing or has the wrong shape.
    #[error("invalid envelope: {0}")]
    InvalidEnvelope(&'static str),
    /// The wire string is not valid JSON.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

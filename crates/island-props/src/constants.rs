//! Wire-format constants shared by the serializer and deserializer.

/// Default reserved marker key distinguishing tag envelopes from plain
/// objects.
///
/// The key is part of the protocol version: both sides of the wire must be
/// configured with the same value. Constructors accept an override for
/// deployments that reserve a different key.
pub const MARKER_KEY: &str = "_f";

/// Marker value of a signal envelope.
pub const TAG_SIGNAL: &str = "s";

/// Marker value of a byte-buffer envelope.
pub const TAG_BYTES: &str = "u8a";

/// Marker value of a literal-escape envelope.
pub const TAG_LITERAL: &str = "l";

/// Envelope field carrying a signal's wire index.
pub const FIELD_INDEX: &str = "i";

/// Envelope field carrying a signal snapshot or an escaped-object payload.
pub const FIELD_VALUE: &str = "v";

/// Envelope field carrying base64 byte data.
pub const FIELD_DATA: &str = "d";

/// Envelope field carrying the escaped marker value of a literal escape.
pub const FIELD_KEY: &str = "k";

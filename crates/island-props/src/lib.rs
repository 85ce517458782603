//! JSON-superset codec for island props.
//!
//! Carries a tree of mixed application data from a server-side producer to a
//! client-side consumer as a single JSON-compatible string. On top of plain
//! JSON the format can convey:
//!
//! - reactive mutable cells ("signals"), deduplicated by identity and
//!   re-bound to live cells on the consumer side,
//! - raw byte buffers, as base64 text,
//! - plain objects whose own fields collide with the format's reserved
//!   marker key, via an exactly-invertible literal escape.
//!
//! The [`serialize`]/[`deserialize`] pair uses the default marker key;
//! [`Serializer`]/[`Deserializer`] take a custom key for deployments that
//! reserve a different one. When [`SerializeResult::requires_deserializer`]
//! is `false`, the wire string is plain JSON and any standard parser will
//! do.
//!
//! # Example
//!
//! ```
//! use island_props::{deserialize, serialize, PropValue, Signal};
//!
//! let count = Signal::new(PropValue::Integer(1));
//! let tree = PropValue::Object(vec![
//!     ("count".to_string(), PropValue::Signal(count)),
//!     ("blob".to_string(), PropValue::Bytes(vec![1, 2, 3])),
//! ]);
//!
//! let result = serialize(&tree);
//! assert!(result.has_signals);
//!
//! let mut factory = || Signal::new(PropValue::Null);
//! let back = deserialize(&result.serialized, Some(&mut factory)).unwrap();
//! assert_eq!(back, tree);
//! ```

mod constants;
mod deserializer;
mod error;
mod serializer;
mod signal;
mod tag;
mod value;

pub use constants::MARKER_KEY;
pub use deserializer::{deserialize, Deserializer};
pub use error::DeserializeError;
pub use serializer::{serialize, SerializeResult, Serializer};
pub use signal::{Signal, SignalCell, SignalFactory, SignalRef};
pub use tag::Tag;
pub use value::PropValue;

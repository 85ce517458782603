//! Base64 byte codec for the island-props wire format.
//!
//! Byte buffers ride the wire as text, so both directions of the codec live
//! here: standard padded base64 over the RFC 4648 alphabet, with factory
//! functions for callers that need a custom alphabet.
//!
//! # Example
//!
//! ```
//! use island_props_base64::{from_base64, to_base64};
//!
//! let data = b"hello world";
//! let encoded = to_base64(data);
//! let decoded = from_base64(&encoded).unwrap();
//! assert_eq!(decoded.as_slice(), data);
//! ```

mod constants;
mod create_from_base64;
mod create_to_base64;
mod from_base64;
mod to_base64;

pub use constants::{ALPHABET, ALPHABET_BYTES, PAD};
pub use create_from_base64::create_from_base64;
pub use create_to_base64::create_to_base64;
pub use from_base64::from_base64;
pub use to_base64::to_base64;

/// Error type for base64 operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Base64Error {
    /// The input contains characters outside the alphabet, or padding in an
    /// invalid position.
    InvalidBase64String,
    /// The character set must be exactly 64 ASCII characters.
    InvalidCharSetLength,
    /// The input length is not a valid base64 length.
    InvalidLength,
}

impl std::fmt::Display for Base64Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Base64Error::InvalidBase64String => write!(f, "INVALID_BASE64_STRING"),
            Base64Error::InvalidCharSetLength => write!(f, "chars must be 64 characters long"),
            Base64Error::InvalidLength => write!(f, "invalid base64 string length"),
        }
    }
}

impl std::error::Error for Base64Error {}

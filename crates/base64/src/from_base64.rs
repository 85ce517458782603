//! Standard base64 decoding function.

use crate::create_from_base64;

/// Decodes a standard padded base64 string to bytes.
///
/// # Errors
///
/// Fails if the input contains characters outside the standard alphabet or
/// has an invalid length/padding combination.
///
/// # Example
///
/// ```
/// use island_props_base64::from_base64;
///
/// let decoded = from_base64("aGVsbG8gd29ybGQ=").unwrap();
/// assert_eq!(decoded, b"hello world");
/// ```
pub fn from_base64(encoded: &str) -> Result<Vec<u8>, crate::Base64Error> {
    let decoder = create_from_base64(None, false)?;
    decoder(encoded)
}

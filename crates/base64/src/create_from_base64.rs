//! Factory function for creating base64 decoders with custom alphabets.

use crate::constants::{ALPHABET, PAD};
use crate::Base64Error;

/// Creates a base64 decoder function with a custom alphabet.
///
/// # Arguments
///
/// * `chars` - A 64-character ASCII alphabet. Defaults to standard base64.
/// * `no_padding` - If true, inputs are expected without trailing `=`
///   padding and the missing padding is inferred from the length.
///
/// # Errors
///
/// Returns an error if `chars` is not exactly 64 ASCII characters long.
///
/// # Example
///
/// ```
/// use island_props_base64::create_from_base64;
///
/// let decode = create_from_base64(None, false).unwrap();
/// assert_eq!(decode("aGVsbG8=").unwrap(), b"hello");
/// ```
pub fn create_from_base64(
    chars: Option<&str>,
    no_padding: bool,
) -> Result<impl Fn(&str) -> Result<Vec<u8>, Base64Error>, Base64Error> {
    let chars = chars.unwrap_or(ALPHABET);
    if chars.len() != 64 || !chars.is_ascii() {
        return Err(Base64Error::InvalidCharSetLength);
    }

    // Reverse lookup table over raw bytes; -1 marks bytes outside the alphabet.
    let mut table = [-1i16; 256];
    for (i, b) in chars.bytes().enumerate() {
        table[b as usize] = i as i16;
    }

    Ok(move |encoded: &str| -> Result<Vec<u8>, Base64Error> {
        let bytes = encoded.as_bytes();
        if bytes.is_empty() {
            return Ok(Vec::new());
        }

        // Strip trailing padding, or infer it from the length when absent.
        let body = if no_padding {
            match bytes.len() % 4 {
                0 | 2 | 3 => bytes,
                _ => return Err(Base64Error::InvalidLength),
            }
        } else {
            if bytes.len() % 4 != 0 {
                return Err(Base64Error::InvalidLength);
            }
            let padding = bytes
                .iter()
                .rev()
                .take_while(|&&b| b == PAD as u8)
                .count();
            if padding > 2 {
                return Err(Base64Error::InvalidBase64String);
            }
            &bytes[..bytes.len() - padding]
        };

        let mut out = Vec::with_capacity(body.len() / 4 * 3 + 2);
        let mut quad = [0u8; 4];
        let mut filled = 0;

        for &b in body {
            let sextet = table[b as usize];
            if sextet < 0 {
                return Err(Base64Error::InvalidBase64String);
            }
            quad[filled] = sextet as u8;
            filled += 1;
            if filled == 4 {
                out.push((quad[0] << 2) | (quad[1] >> 4));
                out.push((quad[1] << 4) | (quad[2] >> 2));
                out.push((quad[2] << 6) | quad[3]);
                filled = 0;
            }
        }

        match filled {
            0 => {}
            2 => out.push((quad[0] << 2) | (quad[1] >> 4)),
            3 => {
                out.push((quad[0] << 2) | (quad[1] >> 4));
                out.push((quad[1] << 4) | (quad[2] >> 2));
            }
            // A single leftover sextet encodes fewer than 8 bits.
            _ => return Err(Base64Error::InvalidLength),
        }

        Ok(out)
    })
}

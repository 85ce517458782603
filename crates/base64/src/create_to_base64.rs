//! Factory function for creating base64 encoders with custom alphabets.

use crate::constants::{ALPHABET, PAD};
use crate::Base64Error;

/// Creates a base64 encoder function with a custom alphabet.
///
/// # Arguments
///
/// * `chars` - A 64-character alphabet. Defaults to standard base64.
/// * `pad` - Whether to emit `=` padding for inputs whose length is not a
///   multiple of 3.
///
/// # Errors
///
/// Returns an error if `chars` is not exactly 64 characters long.
///
/// # Example
///
/// ```
/// use island_props_base64::create_to_base64;
///
/// let encode = create_to_base64(None, true).unwrap();
/// assert_eq!(encode(b"hello"), "aGVsbG8=");
/// ```
pub fn create_to_base64(
    chars: Option<&str>,
    pad: bool,
) -> Result<impl Fn(&[u8]) -> String, Base64Error> {
    let chars = chars.unwrap_or(ALPHABET);
    let table: Vec<char> = chars.chars().collect();
    if table.len() != 64 {
        return Err(Base64Error::InvalidCharSetLength);
    }

    // Two-character lookup table: one entry per 12-bit group.
    let mut table2: Vec<String> = Vec::with_capacity(64 * 64);
    for hi in &table {
        for lo in &table {
            let mut pair = String::with_capacity(2);
            pair.push(*hi);
            pair.push(*lo);
            table2.push(pair);
        }
    }

    Ok(move |data: &[u8]| -> String {
        let length = data.len();
        let tail = length % 3;
        let main = length - tail;
        let mut out = String::with_capacity(length.div_ceil(3) * 4);

        let mut i = 0;
        while i < main {
            let (o1, o2, o3) = (data[i], data[i + 1], data[i + 2]);
            let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
            let v2 = (((o2 & 0x0f) as usize) << 8) | (o3 as usize);
            out.push_str(&table2[v1]);
            out.push_str(&table2[v2]);
            i += 3;
        }

        if tail == 1 {
            let o1 = data[main];
            out.push_str(&table2[(o1 as usize) << 4]);
            if pad {
                out.push(PAD);
                out.push(PAD);
            }
        } else if tail == 2 {
            let (o1, o2) = (data[main], data[main + 1]);
            let v1 = ((o1 as usize) << 4) | ((o2 as usize) >> 4);
            out.push_str(&table2[v1]);
            out.push(table[((o2 & 0x0f) as usize) << 2]);
            if pad {
                out.push(PAD);
            }
        }

        out
    })
}

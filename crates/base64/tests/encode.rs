//! Tests for base64 encoding (to_base64).

use island_props_base64::{create_to_base64, to_base64};
use rand::Rng;

fn generate_blob() -> Vec<u8> {
    let mut rng = rand::thread_rng();
    let length = rng.gen_range(0..=100);
    (0..length).map(|_| rng.gen::<u8>()).collect()
}

/// Reference encoder for cross-checking, written against RFC 4648 directly.
fn reference_encode(data: &[u8]) -> String {
    const ALPHABET: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
    let mut out = String::new();
    for chunk in data.chunks(3) {
        let b0 = chunk[0];
        let b1 = chunk.get(1).copied().unwrap_or(0);
        let b2 = chunk.get(2).copied().unwrap_or(0);
        out.push(ALPHABET[(b0 >> 2) as usize] as char);
        out.push(ALPHABET[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize] as char);
        if chunk.len() > 1 {
            out.push(ALPHABET[(((b1 & 0x0f) << 2) | (b2 >> 6)) as usize] as char);
        } else {
            out.push('=');
        }
        if chunk.len() > 2 {
            out.push(ALPHABET[(b2 & 0x3f) as usize] as char);
        } else {
            out.push('=');
        }
    }
    out
}

#[test]
fn works() {
    let encode2 = create_to_base64(None, true).unwrap();

    for _ in 0..100 {
        let blob = generate_blob();
        let expected = reference_encode(&blob);
        assert_eq!(
            to_base64(&blob),
            expected,
            "failed for blob of length {}",
            blob.len()
        );
        assert_eq!(
            encode2(&blob),
            expected,
            "failed for blob of length {}",
            blob.len()
        );
    }
}

#[test]
fn empty_input() {
    assert_eq!(to_base64(b""), "");
}

#[test]
fn rfc4648_vectors() {
    assert_eq!(to_base64(b"f"), "Zg==");
    assert_eq!(to_base64(b"fo"), "Zm8=");
    assert_eq!(to_base64(b"foo"), "Zm9v");
    assert_eq!(to_base64(b"foob"), "Zm9vYg==");
    assert_eq!(to_base64(b"fooba"), "Zm9vYmE=");
    assert_eq!(to_base64(b"foobar"), "Zm9vYmFy");
}

#[test]
fn small_byte_triplet() {
    assert_eq!(to_base64(&[1, 2, 3]), "AQID");
}

#[test]
fn factory_without_padding() {
    let encode = create_to_base64(None, false).unwrap();
    assert_eq!(encode(b"f"), "Zg");
    assert_eq!(encode(b"fo"), "Zm8");
    assert_eq!(encode(b"foo"), "Zm9v");
}

#[test]
fn factory_rejects_short_alphabet() {
    assert!(create_to_base64(Some("abc"), true).is_err());
}

//! Password obfuscation.
//!
//! Each plaintext byte is XORed with the previous ciphertext byte (the first
//! with `0xCB`) and the result is stored as two uppercase hex digits. This
//! only keeps passwords from being readable in a hex dump; it is not
//! encryption.

use crate::error::{Error, Result};

/// Ciphertext byte preceding the first one.
pub const SEED: u8 = 0xCB;

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Obfuscate `plaintext` into uppercase hex text.
pub fn encode(plaintext: &str) -> String {
    let mut out = String::with_capacity(plaintext.len() * 2);
    let mut seed = SEED;
    for c in plaintext.chars() {
        let byte = u8::try_from(u32::from(c)).unwrap_or(b'?');
        seed ^= byte;
        out.push(HEX_DIGITS[(seed >> 4) as usize] as char);
        out.push(HEX_DIGITS[(seed & 0xF) as usize] as char);
    }
    out
}

/// Recover the plaintext from obfuscated hex text.
///
/// Only uppercase digits are accepted, matching what [`encode`] produces.
pub fn decode(hex: &str) -> Result<String> {
    let bytes = hex.as_bytes();
    if bytes.len() % 2 != 0 {
        return Err(Error::MalformedHex {
            input: hex.to_string(),
            reason: "odd length",
        });
    }
    let mut out = String::with_capacity(bytes.len() / 2);
    let mut previous = SEED;
    for pair in bytes.chunks_exact(2) {
        let current = (nibble(pair[0], hex)? << 4) | nibble(pair[1], hex)?;
        out.push((current ^ previous) as char);
        previous = current;
    }
    Ok(out)
}

/// Obfuscate a garden number the way the "apply play password until" field
/// stores it: as decimal text.
pub fn encode_number(n: u16) -> String {
    encode(&n.to_string())
}

/// Inverse of [`encode_number`].
pub fn decode_number(hex: &str) -> Result<u16> {
    let text = decode(hex)?;
    text.parse().map_err(|source| Error::InvalidNumber {
        input: text.clone(),
        source,
    })
}

fn nibble(digit: u8, input: &str) -> Result<u8> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'A'..=b'F' => Ok(digit - b'A' + 10),
        _ => Err(Error::MalformedHex {
            input: input.to_string(),
            reason: "character outside 0-9A-F",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(encode("Foo"), "8DE28D");
        assert_eq!(encode("Bar"), "89E89A");
        assert_eq!(decode("8DE28D").unwrap(), "Foo");
        assert_eq!(decode("89E89A").unwrap(), "Bar");
    }

    #[test]
    fn empty() {
        assert_eq!(encode(""), "");
        assert_eq!(decode("").unwrap(), "");
    }

    #[test]
    fn inverse_over_printable_ascii() {
        let all: String = (0x20u8..0x7F).map(char::from).collect();
        assert_eq!(decode(&encode(&all)).unwrap(), all);
        for c in all.chars() {
            let s: String = std::iter::repeat(c).take(5).collect();
            assert_eq!(decode(&encode(&s)).unwrap(), s);
        }
    }

    #[test]
    fn chaining_depends_on_prefix() {
        // Same trailing plaintext, different first byte: every output byte differs.
        let a = encode("Xabc");
        let b = encode("Yabc");
        for (x, y) in a.as_bytes().chunks(2).zip(b.as_bytes().chunks(2)) {
            assert_ne!(x, y);
        }
    }

    #[test]
    fn rejects_odd_length() {
        assert!(matches!(
            decode("8DE"),
            Err(Error::MalformedHex {
                reason: "odd length",
                ..
            })
        ));
    }

    #[test]
    fn rejects_lowercase_and_garbage() {
        assert!(matches!(decode("8de28d"), Err(Error::MalformedHex { .. })));
        assert!(matches!(decode("ZZ"), Err(Error::MalformedHex { .. })));
    }

    #[test]
    fn numbers() {
        assert_eq!(encode_number(1), "FA");
        assert_eq!(decode_number("FA").unwrap(), 1);
        assert_eq!(decode_number(&encode_number(65535)).unwrap(), 65535);
        assert!(matches!(
            decode_number(&encode("one")),
            Err(Error::InvalidNumber { .. })
        ));
        assert!(matches!(
            decode_number(&encode("70000")),
            Err(Error::InvalidNumber { .. })
        ));
    }
}

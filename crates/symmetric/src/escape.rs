//! `\xHH` escape formatting for cipher bytes
//!
//! The cipher core deals in raw bytes; this module provides the textual
//! rendering used when ciphertext has to travel through a display or
//! string-literal context. Each byte becomes the four characters `\xHH`
//! with upper-case hex digits.
//!
//! Sizing is always derived from the decoded byte vector, never from
//! display-string arithmetic: [`decode`] returns the bytes and their
//! `len()` is authoritative.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};

use crate::error::{Error, Result, ResultExt};

/// Number of characters produced per encoded byte
pub const CHARS_PER_BYTE: usize = 4;

/// Encode bytes as a `\xHH` escape string
///
/// ```
/// assert_eq!(lfcrypt_symmetric::escape::encode(&[0x72, 0x0a]), "\\x72\\x0A");
/// ```
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * CHARS_PER_BYTE);
    for byte in bytes {
        out.push_str("\\x");
        out.push_str(&hex::encode_upper([*byte]));
    }
    out
}

/// Decode a `\xHH` escape string back into bytes
///
/// Accepts upper- and lower-case digits. Fails with
/// [`Error::InvalidEncoding`] when the input is not a sequence of
/// well-formed four-character `\xHH` groups.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    if text.len() % CHARS_PER_BYTE != 0 {
        return Err(Error::InvalidEncoding {
            context: "escape text length is not a multiple of four",
            #[cfg(feature = "std")]
            message: format!("{} characters", text.len()),
        });
    }

    let mut out = Vec::with_capacity(text.len() / CHARS_PER_BYTE);
    for group in text.as_bytes().chunks(CHARS_PER_BYTE) {
        if &group[..2] != b"\\x" {
            return Err(Error::InvalidEncoding {
                context: "escape group must start with \\x",
                #[cfg(feature = "std")]
                message: String::from_utf8_lossy(group).into_owned(),
            });
        }

        let mut byte = [0u8; 1];
        hex::decode_to_slice(&group[2..], &mut byte).wrap_err(|| Error::InvalidEncoding {
            context: "escape group digits are not hexadecimal",
            #[cfg(feature = "std")]
            message: String::from_utf8_lossy(&group[2..]).into_owned(),
        })?;
        out.push(byte[0]);
    }

    Ok(out)
}

//! # ethnote Codec
//!
//! Converts human-readable notes to transaction payload hex and back.
//!
//! A note travels on-chain as the raw `data` field of a value transfer:
//! UTF-8 bytes, hex-encoded with the standard `0x` prefix. The reverse
//! direction is lossy: any payload that does not decode as
//! UTF-8 (a contract call, ABI-encoded arguments, arbitrary binary) comes
//! back as [`DecodedNote::Undecodable`] rather than an error, because
//! non-text payloads are an expected input, not a failure.
//!
//! ```
//! use ethnote_codec::{decode_note, encode_note, DecodedNote};
//!
//! let hex = encode_note("hi");
//! assert_eq!(hex, "0x6869");
//! assert_eq!(decode_note(&hex), DecodedNote::Text("hi".to_string()));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::fmt;

/// The canonical empty-payload marker: zero bytes, hex-encoded.
pub const EMPTY_PAYLOAD: &str = "0x";

/// The result of decoding a transaction payload.
///
/// `Undecodable` means "data present but not human-readable", which is
/// distinct from an empty payload (callers represent that as the absence
/// of a note altogether).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedNote {
    /// The payload is valid UTF-8 text.
    Text(String),
    /// The payload is binary data that is not valid UTF-8.
    Undecodable,
}

impl DecodedNote {
    /// Returns the decoded text, or `None` for an undecodable payload.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DecodedNote::Text(text) => Some(text),
            DecodedNote::Undecodable => None,
        }
    }

    /// Returns true if the payload could not be read as text.
    pub fn is_undecodable(&self) -> bool {
        matches!(self, DecodedNote::Undecodable)
    }
}

impl fmt::Display for DecodedNote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedNote::Text(text) => write!(f, "{text}"),
            DecodedNote::Undecodable => write!(f, "[undecodable payload]"),
        }
    }
}

/// Encodes a note as a `0x`-prefixed hex payload string.
///
/// An empty note maps to the canonical empty-payload marker [`EMPTY_PAYLOAD`].
pub fn encode_note(text: &str) -> String {
    if text.is_empty() {
        return EMPTY_PAYLOAD.to_string();
    }
    format!("0x{}", hex::encode(text.as_bytes()))
}

/// Decodes a hex payload string back into a note.
///
/// The empty marker (and a bare empty string) decodes to empty text.
/// Anything that is not well-formed hex, or whose bytes are not valid
/// UTF-8, yields the undecodable sentinel. This function never fails.
pub fn decode_note(payload: &str) -> DecodedNote {
    if payload.is_empty() || payload == EMPTY_PAYLOAD {
        return DecodedNote::Text(String::new());
    }
    let Some(digits) = payload.strip_prefix("0x") else {
        return DecodedNote::Undecodable;
    };
    match hex::decode(digits) {
        Ok(bytes) => decode_bytes(&bytes),
        Err(_) => DecodedNote::Undecodable,
    }
}

/// Decodes raw payload bytes into a note.
///
/// This is the resolver-side entry point: RPC responses already carry the
/// payload as bytes, so only the UTF-8 step applies.
pub fn decode_bytes(bytes: &[u8]) -> DecodedNote {
    match std::str::from_utf8(bytes) {
        Ok(text) => DecodedNote::Text(text.to_string()),
        Err(_) => DecodedNote::Undecodable,
    }
}

/// Returns true if `value` is a well-formed `0x`-prefixed hex payload with
/// an even number of digits.
pub fn is_hex_payload(value: &str) -> bool {
    let Some(digits) = value.strip_prefix("0x") else {
        return false;
    };
    digits.len() % 2 == 0 && digits.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Returns the payload bytes for a note to send, or `None` for a blank note.
///
/// Blank covers whitespace-only input: attaching an empty `data` field to a
/// plain transfer trips some wallets, so a transfer without a real note
/// carries no payload at all.
pub fn note_payload(text: &str) -> Option<Vec<u8>> {
    if text.trim().is_empty() {
        return None;
    }
    Some(text.as_bytes().to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for text in ["hi", "hello world", "привет", "こんにちは 🚀", "a"] {
            let encoded = encode_note(text);
            assert_eq!(decode_note(&encoded), DecodedNote::Text(text.to_string()));
        }
    }

    #[test]
    fn test_known_encoding() {
        assert_eq!(encode_note("hi"), "0x6869");
        assert_eq!(decode_note("0x6869"), DecodedNote::Text("hi".to_string()));
    }

    #[test]
    fn test_empty_marker() {
        assert_eq!(encode_note(""), EMPTY_PAYLOAD);
        assert_eq!(decode_note(EMPTY_PAYLOAD), DecodedNote::Text(String::new()));
        assert_eq!(decode_note(""), DecodedNote::Text(String::new()));
    }

    #[test]
    fn test_invalid_utf8_is_sentinel() {
        // 0xfffe is not valid UTF-8 anywhere
        assert_eq!(decode_note("0xfffe"), DecodedNote::Undecodable);
        assert_eq!(decode_bytes(&[0xff, 0xfe]), DecodedNote::Undecodable);
    }

    #[test]
    fn test_malformed_hex_is_sentinel() {
        assert_eq!(decode_note("0x123"), DecodedNote::Undecodable);
        assert_eq!(decode_note("0xzz"), DecodedNote::Undecodable);
        assert_eq!(decode_note("6869"), DecodedNote::Undecodable);
    }

    #[test]
    fn test_is_hex_payload() {
        assert!(is_hex_payload("0x"));
        assert!(is_hex_payload("0x6869"));
        assert!(is_hex_payload("0xDEADbeef"));
        assert!(!is_hex_payload("6869"));
        assert!(!is_hex_payload("0x123"));
        assert!(!is_hex_payload("0xzz"));
    }

    #[test]
    fn test_note_payload_blank() {
        assert_eq!(note_payload(""), None);
        assert_eq!(note_payload("   "), None);
        assert_eq!(note_payload("\n\t"), None);
        assert_eq!(note_payload("gm"), Some(b"gm".to_vec()));
    }

    #[test]
    fn test_sentinel_accessors() {
        let note = DecodedNote::Undecodable;
        assert!(note.is_undecodable());
        assert_eq!(note.as_text(), None);
        assert_eq!(note.to_string(), "[undecodable payload]");

        let text = DecodedNote::Text("gm".to_string());
        assert_eq!(text.as_text(), Some("gm"));
        assert_eq!(text.to_string(), "gm");
    }
}

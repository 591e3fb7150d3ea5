//! Strict Percent-Decoding
//!
//! Environment overrides are interpreted as URI-component-encoded strings.
//! The `percent-encoding` crate passes malformed escapes through literally,
//! so a validation scan runs first: every `%` must introduce a full
//! two-hex-digit escape. Decoded bytes must form valid UTF-8.

use percent_encoding::percent_decode_str;
use thiserror::Error;

/// Percent-decoding errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("malformed percent-escape at byte {position}")]
    InvalidSequence { position: usize },

    #[error("decoded bytes are not valid UTF-8")]
    InvalidUtf8,
}

/// Decode a URI-component-encoded string.
///
/// Plain text with no `%` passes through unchanged. Malformed escapes and
/// escapes that decode to invalid UTF-8 are errors, never literal passthrough.
pub fn percent_decode(input: &str) -> Result<String, DecodeError> {
    validate_escapes(input)?;
    percent_decode_str(input)
        .decode_utf8()
        .map(|decoded| decoded.into_owned())
        .map_err(|_| DecodeError::InvalidUtf8)
}

/// Reject any `%` not followed by two hex digits.
fn validate_escapes(input: &str) -> Result<(), DecodeError> {
    let bytes = input.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let complete = i + 2 < bytes.len()
                && bytes[i + 1].is_ascii_hexdigit()
                && bytes[i + 2].is_ascii_hexdigit();
            if !complete {
                return Err(DecodeError::InvalidSequence { position: i });
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    Ok(())
}

//! Textual key encodings
//!
//! Hex follows the EVM convention: `0x` prefix required, lowercase on output.
//! Validator keys use the lenient form where the prefix is optional.

use crate::error::KeyError;

/// Decode `0x`-prefixed hex (EVM style)
///
/// Rejects a missing prefix, an empty payload and odd-length or non-hex digits.
pub fn decode_prefixed_hex(text: &str) -> Result<Vec<u8>, KeyError> {
    let payload = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .ok_or_else(|| KeyError::malformed_hex("missing 0x prefix"))?;

    if payload.is_empty() {
        return Err(KeyError::malformed_hex("empty hex payload"));
    }

    hex::decode(payload).map_err(KeyError::malformed_hex)
}

/// Encode bytes as `0x`-prefixed lowercase hex
pub fn encode_prefixed_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Decode hex with or without a `0x` prefix
pub fn decode_hex_lenient(text: &str) -> Result<Vec<u8>, KeyError> {
    let payload = text
        .strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .unwrap_or(text);

    hex::decode(payload).map_err(KeyError::malformed_hex)
}

/// Decode base58 (Bitcoin alphabet)
pub fn decode_base58(text: &str) -> Result<Vec<u8>, bs58::decode::Error> {
    bs58::decode(text).into_vec()
}

/// Encode bytes as base58 (Bitcoin alphabet)
pub fn encode_base58(bytes: &[u8]) -> String {
    bs58::encode(bytes).into_string()
}

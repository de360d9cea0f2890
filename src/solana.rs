//! Solana key handling
//!
//! Public keys are parsed and printed through `solana_sdk::pubkey::Pubkey` so
//! the text form matches what the Solana tooling produces. Private keys are raw
//! base58 byte strings (usually the 64-byte keypair encoding).

use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

use crate::chain::{ChainType, BASE58_PUBLIC_KEY_LEN};
use crate::encoding::decode_base58;
use crate::error::KeyError;

/// Parse a base58 Solana public key into its 32 raw bytes
pub fn parse_public_key(text: &str) -> Result<[u8; BASE58_PUBLIC_KEY_LEN], KeyError> {
    let pubkey =
        Pubkey::from_str(text).map_err(|e| KeyError::malformed_base58(ChainType::Solana, e))?;
    Ok(pubkey.to_bytes())
}

/// Encode a raw 32-byte Solana public key as base58
pub fn encode_public_key(raw: &[u8; BASE58_PUBLIC_KEY_LEN]) -> String {
    Pubkey::new_from_array(*raw).to_string()
}

/// Decode a base58 private key into raw bytes
///
/// Malformed or empty input is rejected instead of yielding partial bytes.
pub fn decode_private_key(text: &str) -> Result<Vec<u8>, KeyError> {
    let bytes = decode_base58(text)
        .map_err(|_| KeyError::malformed_base58(ChainType::Solana, "invalid base58 private key"))?;

    if bytes.is_empty() {
        return Err(KeyError::malformed_base58(
            ChainType::Solana,
            "empty private key",
        ));
    }

    Ok(bytes)
}

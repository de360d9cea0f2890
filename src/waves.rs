//! Waves key handling
//!
//! Waves accounts are derived from a seed phrase:
//!
//! ```text
//! account_seed = keccak256(blake2b256(nonce_be32 || seed_utf8))   nonce = 0
//! secret_key   = clamp(sha256(account_seed))
//! ```
//!
//! Public keys are 32-byte Curve25519 keys written as base58.

use crate::chain::{ChainType, BASE58_PUBLIC_KEY_LEN};
use crate::encoding::{decode_base58, encode_base58};
use crate::error::KeyError;
use crate::hash::{secure_hash, sha256};

/// Secret key length in bytes
pub const SECRET_KEY_LEN: usize = 32;

/// Account nonce prepended to the seed; node keys always use the first account
const ACCOUNT_NONCE: u32 = 0;

/// Derive the account secret key from a seed phrase
pub fn derive_secret_key(seed_phrase: &str) -> Result<[u8; SECRET_KEY_LEN], KeyError> {
    if seed_phrase.trim().is_empty() {
        return Err(KeyError::KeyDerivation {
            chain: ChainType::Waves,
            reason: "empty seed phrase".to_string(),
        });
    }

    let mut nonced = Vec::with_capacity(4 + seed_phrase.len());
    nonced.extend_from_slice(&ACCOUNT_NONCE.to_be_bytes());
    nonced.extend_from_slice(seed_phrase.as_bytes());

    let account_seed = secure_hash(&nonced);
    let mut secret = sha256(&account_seed);
    secret[0] &= 248;
    secret[31] &= 127;
    secret[31] |= 64;
    Ok(secret)
}

/// Parse a base58 Waves public key into its 32 raw bytes
pub fn parse_public_key(text: &str) -> Result<[u8; BASE58_PUBLIC_KEY_LEN], KeyError> {
    let bytes =
        decode_base58(text).map_err(|e| KeyError::malformed_base58(ChainType::Waves, e))?;

    if bytes.len() != BASE58_PUBLIC_KEY_LEN {
        return Err(KeyError::malformed_base58(
            ChainType::Waves,
            format!(
                "expected {} bytes, got {}",
                BASE58_PUBLIC_KEY_LEN,
                bytes.len()
            ),
        ));
    }

    let mut key = [0u8; BASE58_PUBLIC_KEY_LEN];
    key.copy_from_slice(&bytes);
    Ok(key)
}

/// Encode a raw Waves public key as base58
pub fn encode_public_key(raw: &[u8]) -> String {
    encode_base58(raw)
}

//! Canonical Cross-Chain Public Key
//!
//! Oracle and relayer public keys from every chain are stored in one
//! fixed-width form so registration data has the same size on every chain.
//!
//! ## Layout
//!
//! ```text
//! EVM group:    | compressed secp256k1 point (33 bytes)          |
//! Base58 group: | 0x00 (1 byte) | raw 32-byte key (32 bytes)      |
//! ```
//!
//! Conversions are pure format transforms: no point or curve validation is
//! performed in either direction.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::chain::{ChainType, KeyFormat, KeyGroup, BASE58_PUBLIC_KEY_LEN};
use crate::encoding::{decode_prefixed_hex, encode_prefixed_hex};
use crate::error::KeyError;
use crate::{solana, waves};

/// Size of the canonical public key in bytes
pub const CANONICAL_PUBLIC_KEY_LEN: usize = 33;

/// Prefix byte placed in front of 32-byte native keys
pub const BASE58_KEY_PREFIX: u8 = 0x00;

/// Canonical 33-byte public key shared by all chains
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CanonicalPublicKey(pub [u8; CANONICAL_PUBLIC_KEY_LEN]);

impl CanonicalPublicKey {
    // ============================================================================
    // Native Bytes
    // ============================================================================

    /// Build the canonical key from chain-native public key bytes
    ///
    /// Only the first 33 (EVM) or 32 (base58 chains) bytes are consumed; any
    /// trailing bytes are ignored. Shorter input fails with `ShortKeyInput`.
    pub fn from_native_bytes(bytes: &[u8], chain: ChainType) -> Result<Self, KeyError> {
        let expected = chain.group().native_public_key_len();
        if bytes.len() < expected {
            return Err(KeyError::ShortKeyInput {
                chain,
                expected,
                actual: bytes.len(),
            });
        }

        let mut key = [0u8; CANONICAL_PUBLIC_KEY_LEN];
        match chain.group() {
            KeyGroup::Evm => {
                key.copy_from_slice(&bytes[..CANONICAL_PUBLIC_KEY_LEN]);
            }
            KeyGroup::Base58 => {
                key[0] = BASE58_KEY_PREFIX;
                key[1..].copy_from_slice(&bytes[..BASE58_PUBLIC_KEY_LEN]);
            }
        }
        Ok(Self(key))
    }

    /// Recover the chain-native public key bytes
    ///
    /// EVM chains get all 33 bytes; base58 chains get bytes `1..33`. The prefix
    /// byte is not checked.
    pub fn to_native_bytes(&self, chain: ChainType) -> &[u8] {
        match chain.group() {
            KeyGroup::Evm => &self.0[..],
            KeyGroup::Base58 => &self.0[1..],
        }
    }

    // ============================================================================
    // Native Text
    // ============================================================================

    /// Parse chain-native public key text into the canonical form
    pub fn from_text(text: &str, chain: ChainType) -> Result<Self, KeyError> {
        match chain.key_format() {
            KeyFormat::EvmHex => {
                let bytes = decode_prefixed_hex(text)?;
                Self::from_native_bytes(&bytes, chain)
            }
            KeyFormat::Waves => Self::from_native_bytes(&waves::parse_public_key(text)?, chain),
            KeyFormat::Solana => Self::from_native_bytes(&solana::parse_public_key(text)?, chain),
        }
    }

    /// Render the key in the chain's native text encoding
    pub fn to_text(&self, chain: ChainType) -> String {
        match chain.key_format() {
            KeyFormat::EvmHex => encode_prefixed_hex(self.to_native_bytes(chain)),
            KeyFormat::Waves => waves::encode_public_key(self.to_native_bytes(chain)),
            KeyFormat::Solana => solana::encode_public_key(&self.base58_body()),
        }
    }

    // ============================================================================
    // Raw Canonical Bytes
    // ============================================================================

    /// Parse from slice (must be exactly 33 bytes)
    pub fn from_slice(bytes: &[u8]) -> Result<Self, KeyError> {
        if bytes.len() != CANONICAL_PUBLIC_KEY_LEN {
            return Err(KeyError::InvalidKeyLength {
                expected: CANONICAL_PUBLIC_KEY_LEN,
                actual: bytes.len(),
            });
        }
        let mut key = [0u8; CANONICAL_PUBLIC_KEY_LEN];
        key.copy_from_slice(bytes);
        Ok(Self(key))
    }

    /// Get the raw canonical bytes
    pub fn as_bytes(&self) -> &[u8; CANONICAL_PUBLIC_KEY_LEN] {
        &self.0
    }

    /// Convert to `0x`-prefixed hex of all 33 bytes
    pub fn to_hex(&self) -> String {
        encode_prefixed_hex(&self.0)
    }

    fn base58_body(&self) -> [u8; BASE58_PUBLIC_KEY_LEN] {
        let mut body = [0u8; BASE58_PUBLIC_KEY_LEN];
        body.copy_from_slice(&self.0[1..]);
        body
    }
}

impl From<[u8; CANONICAL_PUBLIC_KEY_LEN]> for CanonicalPublicKey {
    fn from(bytes: [u8; CANONICAL_PUBLIC_KEY_LEN]) -> Self {
        CanonicalPublicKey(bytes)
    }
}

impl fmt::Debug for CanonicalPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CanonicalPublicKey({})", self.to_hex())
    }
}

impl fmt::Display for CanonicalPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for CanonicalPublicKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(&decode_prefixed_hex(s)?)
    }
}

impl Serialize for CanonicalPublicKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_hex().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CanonicalPublicKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Operation Helpers
// ============================================================================

/// Chain-native public key bytes to canonical form
pub fn encode_canonical_public_key(
    native: &[u8],
    chain: ChainType,
) -> Result<CanonicalPublicKey, KeyError> {
    CanonicalPublicKey::from_native_bytes(native, chain)
}

/// Canonical form back to chain-native public key bytes
pub fn decode_canonical_public_key(key: &CanonicalPublicKey, chain: ChainType) -> Vec<u8> {
    key.to_native_bytes(chain).to_vec()
}

/// Canonical form to the chain's native public key text
pub fn encode_canonical_public_key_to_text(key: &CanonicalPublicKey, chain: ChainType) -> String {
    key.to_text(chain)
}

/// Chain-native public key text to canonical form
pub fn decode_text_to_canonical_public_key(
    text: &str,
    chain: ChainType,
) -> Result<CanonicalPublicKey, KeyError> {
    CanonicalPublicKey::from_text(text, chain)
}

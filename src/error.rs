//! Error types for key conversion
//!
//! Every codec operation returns [`KeyError`] on failure. Messages never carry
//! private-key material.

use thiserror::Error;

use crate::chain::ChainType;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    // ========================================================================
    // Text Decoding Errors
    // ========================================================================

    #[error("Malformed hex: {reason}")]
    MalformedHex { reason: String },

    #[error("Malformed base58 key for {chain}: {reason}")]
    MalformedBase58Key { chain: ChainType, reason: String },

    #[error("Key derivation failed for {chain}: {reason}")]
    KeyDerivation { chain: ChainType, reason: String },

    // ========================================================================
    // Chain Errors
    // ========================================================================

    #[error("Unsupported chain: {name}")]
    UnsupportedChain { name: String },

    // ========================================================================
    // Length Errors
    // ========================================================================

    #[error("Key input too short for {chain}: expected at least {expected} bytes, got {actual}")]
    ShortKeyInput {
        chain: ChainType,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },
}

impl KeyError {
    pub(crate) fn malformed_hex(reason: impl ToString) -> Self {
        KeyError::MalformedHex {
            reason: reason.to_string(),
        }
    }

    pub(crate) fn malformed_base58(chain: ChainType, reason: impl ToString) -> Self {
        KeyError::MalformedBase58Key {
            chain,
            reason: reason.to_string(),
        }
    }
}

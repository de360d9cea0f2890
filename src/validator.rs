//! Validator (consensus) public keys
//!
//! Validator identity is chain-agnostic: a 32-byte Ed25519 public key written
//! as hex, with or without a `0x` prefix.

use std::fmt;
use std::str::FromStr;

use crate::encoding::decode_hex_lenient;
use crate::error::KeyError;

/// Ed25519 public key length in bytes
pub const VALIDATOR_PUBLIC_KEY_LEN: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidatorPublicKey(pub [u8; VALIDATOR_PUBLIC_KEY_LEN]);

impl ValidatorPublicKey {
    /// Decode from hex; the decoded length must be exactly 32 bytes
    pub fn from_hex(text: &str) -> Result<Self, KeyError> {
        let bytes = decode_hex_lenient(text)?;
        if bytes.len() != VALIDATOR_PUBLIC_KEY_LEN {
            return Err(KeyError::InvalidKeyLength {
                expected: VALIDATOR_PUBLIC_KEY_LEN,
                actual: bytes.len(),
            });
        }
        let mut key = [0u8; VALIDATOR_PUBLIC_KEY_LEN];
        key.copy_from_slice(&bytes);
        Ok(Self(key))
    }

    /// Lowercase hex without prefix
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; VALIDATOR_PUBLIC_KEY_LEN] {
        &self.0
    }
}

impl fmt::Display for ValidatorPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for ValidatorPublicKey {
    type Err = KeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

/// Decode a hex validator public key
pub fn decode_validator_public_key(text: &str) -> Result<ValidatorPublicKey, KeyError> {
    ValidatorPublicKey::from_hex(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 8032 test vector 1 public key
    const ED25519_PUBKEY: &str = "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a";

    #[test]
    fn test_decode_with_and_without_prefix() {
        let plain = ValidatorPublicKey::from_hex(ED25519_PUBKEY).unwrap();
        let prefixed = ValidatorPublicKey::from_hex(&format!("0x{}", ED25519_PUBKEY)).unwrap();
        assert_eq!(plain, prefixed);
        assert_eq!(plain.as_bytes()[0], 0xd7);
        assert_eq!(plain.to_string(), ED25519_PUBKEY);
    }

    #[test]
    fn test_malformed_hex() {
        let err = ValidatorPublicKey::from_hex("zz").unwrap_err();
        assert!(matches!(err, KeyError::MalformedHex { .. }));
    }

    #[test]
    fn test_wrong_length() {
        let err = ValidatorPublicKey::from_hex(&ED25519_PUBKEY[..62]).unwrap_err();
        assert_eq!(
            err,
            KeyError::InvalidKeyLength {
                expected: 32,
                actual: 31
            }
        );

        let long = format!("{}00", ED25519_PUBKEY);
        assert!(decode_validator_public_key(&long).is_err());
    }
}

//! Private key text decoding
//!
//! Turns the private key text an operator configures for a chain into the raw
//! bytes handed to that chain's signer:
//!
//! - EVM chains: `0x`-prefixed hex
//! - Waves: seed phrase, derived into the account secret key
//! - Solana: base58 raw private key

use std::fmt;

use crate::chain::{ChainType, KeyFormat};
use crate::encoding::decode_prefixed_hex;
use crate::error::KeyError;
use crate::{solana, waves};

/// Decoded private key material
///
/// Formats as `<redacted>` so it can never leak through logs or error chains.
#[derive(Clone, PartialEq, Eq)]
pub struct RawPrivateKey(Vec<u8>);

impl RawPrivateKey {
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }
}

impl fmt::Debug for RawPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RawPrivateKey(<redacted>)")
    }
}

impl fmt::Display for RawPrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<redacted>")
    }
}

/// Decode private key text for the given chain
pub fn decode_private_key(text: &str, chain: ChainType) -> Result<RawPrivateKey, KeyError> {
    let bytes = match chain.key_format() {
        KeyFormat::EvmHex => decode_prefixed_hex(text)
            // hex errors quote the offending character; keep key text out of them
            .map_err(|_| KeyError::malformed_hex("invalid hex private key"))?,
        KeyFormat::Waves => waves::derive_secret_key(text)?.to_vec(),
        KeyFormat::Solana => solana::decode_private_key(text)?,
    };

    Ok(RawPrivateKey(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVM_KEY: &str = "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_evm_private_key() {
        for chain in ChainType::ALL.iter().filter(|c| c.is_evm()) {
            let key = decode_private_key(EVM_KEY, *chain).unwrap();
            assert_eq!(key.len(), 32);
            assert_eq!(key.as_bytes()[0], 0xac);
            assert_eq!(key.as_bytes()[31], 0x80);
        }
    }

    #[test]
    fn test_evm_private_key_malformed() {
        let err = decode_private_key("0xzz", ChainType::Ethereum).unwrap_err();
        assert!(matches!(err, KeyError::MalformedHex { .. }));
        assert!(!err.to_string().contains("zz"));

        // hex without the 0x prefix is not accepted for EVM keys
        assert!(decode_private_key(&EVM_KEY[2..], ChainType::Binance).is_err());
    }

    #[test]
    fn test_waves_private_key_from_seed() {
        let seed = "seed phrase for a waves oracle node";
        let key = decode_private_key(seed, ChainType::Waves).unwrap();
        assert_eq!(key.as_bytes(), &waves::derive_secret_key(seed).unwrap());
        assert_eq!(key.len(), waves::SECRET_KEY_LEN);
    }

    #[test]
    fn test_waves_empty_seed() {
        let err = decode_private_key("", ChainType::Waves).unwrap_err();
        assert!(matches!(err, KeyError::KeyDerivation { .. }));
    }

    #[test]
    fn test_solana_private_key() {
        let raw = [9u8; 64];
        let text = bs58::encode(raw).into_string();
        let key = decode_private_key(&text, ChainType::Solana).unwrap();
        assert_eq!(key.into_bytes(), raw.to_vec());
    }

    #[test]
    fn test_solana_private_key_malformed() {
        let err = decode_private_key("0OIl", ChainType::Solana).unwrap_err();
        assert!(matches!(err, KeyError::MalformedBase58Key { .. }));
    }

    #[test]
    fn test_private_key_is_redacted() {
        let key = decode_private_key(EVM_KEY, ChainType::Ethereum).unwrap();
        assert_eq!(format!("{}", key), "<redacted>");
        let debug = format!("{:?}", key);
        assert!(debug.contains("<redacted>"));
        assert!(!debug.contains("ac09"));
        assert!(!debug.contains("172"));
    }
}

//! Supported chain registry
//!
//! [`ChainType`] is the single dispatch axis of the key codec. Every chain
//! belongs to exactly one [`KeyGroup`], which fixes the native public key size
//! and its textual encoding:
//!
//! | Group    | Text encoding     | Native public key              |
//! |----------|-------------------|--------------------------------|
//! | `Evm`    | `0x` + hex        | 33-byte compressed secp256k1   |
//! | `Base58` | base58            | 32-byte raw key (Ed25519-like) |

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::KeyError;

/// Native public key length for EVM-compatible chains (compressed point)
pub const EVM_PUBLIC_KEY_LEN: usize = 33;

/// Native public key length for base58 chains
pub const BASE58_PUBLIC_KEY_LEN: usize = 32;

/// Blockchain family an oracle key belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChainType {
    Ethereum,
    Binance,
    Heco,
    Fantom,
    Avax,
    Polygon,
    XDai,
    Solana,
    Waves,
}

/// Key encoding family shared by several chains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyGroup {
    /// Hex text, 33-byte compressed secp256k1 public keys
    Evm,
    /// Base58 text, 32-byte raw keys
    Base58,
}

impl KeyGroup {
    /// Length of the chain-native public key in bytes
    pub fn native_public_key_len(&self) -> usize {
        match self {
            KeyGroup::Evm => EVM_PUBLIC_KEY_LEN,
            KeyGroup::Base58 => BASE58_PUBLIC_KEY_LEN,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            KeyGroup::Evm => "evm",
            KeyGroup::Base58 => "base58",
        }
    }
}

impl fmt::Display for KeyGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Concrete key text format a chain uses
///
/// Base58 chains share a key size but parse keys with different rules, so
/// codec dispatch happens on this rather than on [`KeyGroup`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyFormat {
    /// `0x` hex, compressed secp256k1 public keys
    EvmHex,
    /// Base58 Curve25519 keys, private key derived from a seed phrase
    Waves,
    /// Base58 Ed25519 keys, private key given as raw base58
    Solana,
}

impl KeyFormat {
    pub fn group(&self) -> KeyGroup {
        match self {
            KeyFormat::EvmHex => KeyGroup::Evm,
            KeyFormat::Waves | KeyFormat::Solana => KeyGroup::Base58,
        }
    }
}

impl ChainType {
    /// Every supported chain, in declaration order
    pub const ALL: [ChainType; 9] = [
        ChainType::Ethereum,
        ChainType::Binance,
        ChainType::Heco,
        ChainType::Fantom,
        ChainType::Avax,
        ChainType::Polygon,
        ChainType::XDai,
        ChainType::Solana,
        ChainType::Waves,
    ];

    /// Key text format used by this chain
    pub fn key_format(&self) -> KeyFormat {
        match self {
            ChainType::Ethereum
            | ChainType::Binance
            | ChainType::Heco
            | ChainType::Fantom
            | ChainType::Avax
            | ChainType::Polygon
            | ChainType::XDai => KeyFormat::EvmHex,
            ChainType::Waves => KeyFormat::Waves,
            ChainType::Solana => KeyFormat::Solana,
        }
    }

    /// Key group this chain belongs to
    pub fn group(&self) -> KeyGroup {
        self.key_format().group()
    }

    pub fn is_evm(&self) -> bool {
        self.group() == KeyGroup::Evm
    }

    pub fn is_base58(&self) -> bool {
        self.group() == KeyGroup::Base58
    }

    /// Lowercase chain name as used in configuration files
    pub fn as_str(&self) -> &'static str {
        match self {
            ChainType::Ethereum => "ethereum",
            ChainType::Binance => "binance",
            ChainType::Heco => "heco",
            ChainType::Fantom => "fantom",
            ChainType::Avax => "avax",
            ChainType::Polygon => "polygon",
            ChainType::XDai => "xdai",
            ChainType::Solana => "solana",
            ChainType::Waves => "waves",
        }
    }
}

impl fmt::Display for ChainType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChainType {
    type Err = KeyError;

    /// Parse a chain name, ignoring case and surrounding whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        ChainType::ALL
            .iter()
            .copied()
            .find(|chain| chain.as_str().eq_ignore_ascii_case(name))
            .ok_or_else(|| KeyError::UnsupportedChain {
                name: name.to_string(),
            })
    }
}

impl Serialize for ChainType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ChainType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

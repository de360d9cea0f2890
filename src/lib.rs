//! Oracle-Keys: Cross-Chain Key Representation for Oracle Nodes
//!
//! Every chain the oracle network runs on encodes keys differently. This crate
//! converts between those native encodings and the single representation the
//! network uses to identify validators and relayers:
//!
//! - **Chain Registry** - Closed set of supported chains and their key groups
//! - **Canonical Public Key** - 33-byte cross-chain public key and its
//!   conversions to/from native bytes and text
//! - **Private Keys** - Chain-specific private key text to raw signing bytes
//! - **Validator Keys** - Chain-agnostic Ed25519 consensus keys
//! - **Config** - Node configuration file loading
//!
//! ## Usage
//!
//! ```
//! use oracle_keys::{CanonicalPublicKey, ChainType};
//!
//! let text = "So11111111111111111111111111111111111111112";
//! let key = CanonicalPublicKey::from_text(text, ChainType::Solana).unwrap();
//!
//! assert_eq!(key.as_bytes()[0], 0x00);
//! assert_eq!(key.to_text(ChainType::Solana), text);
//! ```
//!
//! All conversions are pure functions of their inputs and safe to call from
//! any number of threads.

pub mod canonical;
pub mod chain;
pub mod config;
pub mod encoding;
pub mod error;
pub mod hash;
pub mod private_key;
pub mod solana;
pub mod validator;
pub mod waves;

// Re-export commonly used items at the crate root
pub use canonical::{
    decode_canonical_public_key, decode_text_to_canonical_public_key,
    encode_canonical_public_key, encode_canonical_public_key_to_text, CanonicalPublicKey,
    CANONICAL_PUBLIC_KEY_LEN,
};
pub use chain::{ChainType, KeyFormat, KeyGroup};
pub use config::Config;
pub use error::KeyError;
pub use private_key::{decode_private_key, RawPrivateKey};
pub use validator::{decode_validator_public_key, ValidatorPublicKey};

//! Hash primitives used by chain key derivation

use blake2::{digest::consts::U32, Blake2b, Digest};
use sha2::Sha256;
use tiny_keccak::{Hasher, Keccak};

type Blake2b256 = Blake2b<U32>;

/// Compute keccak256 hash of data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Compute blake2b hash of data with a 256-bit digest
pub fn blake2b256(data: &[u8]) -> [u8; 32] {
    Blake2b256::digest(data).into()
}

/// Compute sha256 hash of data
pub fn sha256(data: &[u8]) -> [u8; 32] {
    Sha256::digest(data).into()
}

/// Waves "secure hash": `keccak256(blake2b256(data))`
pub fn secure_hash(data: &[u8]) -> [u8; 32] {
    keccak256(&blake2b256(data))
}

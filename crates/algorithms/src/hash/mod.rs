//! Digest functions
//!
//! SHA-256, RIPEMD-160 and legacy Keccak-256 come from the RustCrypto
//! crates. This module adds the composites Bitcoin and Ethereum build on:
//! double SHA-256, the four-byte Base58Check checksum, Hash160 and the
//! BIP340 tagged hash.

use keyforge_internal::constant_time::ct_eq;
use keyforge_params::utils::hash::{
    CHECKSUM_SIZE, HASH160_OUTPUT_SIZE, KECCAK256_OUTPUT_SIZE, SHA256_OUTPUT_SIZE,
};
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};
use sha3::Keccak256;

/// SHA-256 of `data`
pub fn sha256(data: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
    Sha256::digest(data).into()
}

/// SHA-256 applied twice
pub fn double_sha256(data: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
    Sha256::digest(Sha256::digest(data)).into()
}

/// First four bytes of the double SHA-256 of `data`
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_SIZE] {
    let digest = double_sha256(data);
    let mut out = [0u8; CHECKSUM_SIZE];
    out.copy_from_slice(&digest[..CHECKSUM_SIZE]);
    out
}

/// Whether `sum` is the checksum of `payload`
pub fn verify_checksum(payload: &[u8], sum: &[u8]) -> bool {
    ct_eq(checksum(payload), sum)
}

/// RIPEMD-160 of the SHA-256 of `data`
pub fn hash160(data: &[u8]) -> [u8; HASH160_OUTPUT_SIZE] {
    Ripemd160::digest(Sha256::digest(data)).into()
}

/// Legacy Keccak-256 (pre-standard padding, as used by Ethereum)
pub fn keccak256(data: &[u8]) -> [u8; KECCAK256_OUTPUT_SIZE] {
    Keccak256::digest(data).into()
}

/// BIP340 tagged hash: `SHA256(SHA256(tag) || SHA256(tag) || msg)`
pub fn tagged_hash(tag: &str, msg: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
    let tag_hash = Sha256::digest(tag.as_bytes());
    let mut hasher = Sha256::new();
    hasher.update(&tag_hash);
    hasher.update(&tag_hash);
    hasher.update(msg);
    hasher.finalize().into()
}

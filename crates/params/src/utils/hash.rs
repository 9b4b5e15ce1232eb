//! Constants for hash functions

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of RIPEMD-160 (and therefore Hash160) in bytes
pub const HASH160_OUTPUT_SIZE: usize = 20;

/// Output size of legacy Keccak-256 in bytes
pub const KECCAK256_OUTPUT_SIZE: usize = 32;

/// Size of a Base58Check checksum (leading bytes of double SHA-256)
pub const CHECKSUM_SIZE: usize = 4;

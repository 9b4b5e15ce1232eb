//! Shared constants for secp256k1 operations

use keyforge_params::secp256k1::{
    COMPRESSED_PUBLIC_KEY_SIZE, FIELD_BYTES, UNCOMPRESSED_PUBLIC_KEY_SIZE,
};

/// Size of a secp256k1 scalar in bytes
pub const K256_SCALAR_SIZE: usize = FIELD_BYTES;

/// Size of a secp256k1 field element in bytes
pub const K256_FIELD_ELEMENT_SIZE: usize = FIELD_BYTES;

/// 0x04 || x || y
pub const K256_POINT_UNCOMPRESSED_SIZE: usize = UNCOMPRESSED_PUBLIC_KEY_SIZE;

/// 0x02/0x03 || x
pub const K256_POINT_COMPRESSED_SIZE: usize = COMPRESSED_PUBLIC_KEY_SIZE;

//! Ethereum address constants

/// Size of an Ethereum address in bytes (trailing bytes of the key hash)
pub const ADDRESS_SIZE: usize = 20;

/// Number of hex digits in an address
pub const ADDRESS_HEX_LEN: usize = 2 * ADDRESS_SIZE;

/// Textual prefix of an address
pub const ADDRESS_PREFIX: &str = "0x";

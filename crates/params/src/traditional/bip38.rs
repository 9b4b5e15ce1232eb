//! Constants of BIP38 passphrase-protected keys (non-EC-multiply mode)

/// Leading bytes of a non-EC-multiplied BIP38 payload
pub const PREFIX: [u8; 2] = [0x01, 0x42];

/// Flag byte when the key's public key is compressed
pub const FLAG_COMPRESSED: u8 = 0xE0;

/// Flag byte when the key's public key is uncompressed
pub const FLAG_UNCOMPRESSED: u8 = 0xC0;

/// Size of the address hash salt
pub const SALT_SIZE: usize = 4;

/// Size of the encrypted scalar
pub const CIPHERTEXT_SIZE: usize = 32;

/// Decoded length: prefix || flag || salt || ciphertext || checksum
pub const PAYLOAD_LEN: usize = 2 + 1 + SALT_SIZE + CIPHERTEXT_SIZE + 4;

/// Standard scrypt cost, as log2(N) with N = 16384
pub const SCRYPT_LOG_N: u8 = 14;

/// Standard scrypt block size r
pub const SCRYPT_R: u32 = 8;

/// Standard scrypt parallelism p
pub const SCRYPT_P: u32 = 8;

/// Length of the scrypt output: two 32-byte halves
pub const SCRYPT_OUTPUT_LEN: usize = 64;

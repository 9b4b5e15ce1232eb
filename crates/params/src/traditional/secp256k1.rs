//! secp256k1 domain parameters
//!
//! The curve is y² = x³ + 7 over F_p with p = 2^256 - 2^32 - 977.

/// Field modulus p, big-endian
pub const FIELD_MODULUS: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFE, 0xFF, 0xFF,
    0xFC, 0x2F,
];

/// Order n of the base point, big-endian
pub const GROUP_ORDER: [u8; 32] = [
    0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF,
    0xFE, 0xBA, 0xAE, 0xDC, 0xE6, 0xAF, 0x48, 0xA0, 0x3B, 0xBF, 0xD2, 0x5E, 0x8C, 0xD0, 0x36,
    0x41, 0x41,
];

/// x-coordinate of the base point G, big-endian
pub const GENERATOR_X: [u8; 32] = [
    0x79, 0xBE, 0x66, 0x7E, 0xF9, 0xDC, 0xBB, 0xAC, 0x55, 0xA0, 0x62, 0x95, 0xCE, 0x87, 0x0B,
    0x07, 0x02, 0x9B, 0xFC, 0xDB, 0x2D, 0xCE, 0x28, 0xD9, 0x59, 0xF2, 0x81, 0x5B, 0x16, 0xF8,
    0x17, 0x98,
];

/// y-coordinate of the base point G, big-endian
pub const GENERATOR_Y: [u8; 32] = [
    0x48, 0x3A, 0xDA, 0x77, 0x26, 0xA3, 0xC4, 0x65, 0x5D, 0xA4, 0xFB, 0xFC, 0x0E, 0x11, 0x08,
    0xA8, 0xFD, 0x17, 0xB4, 0x48, 0xA6, 0x85, 0x54, 0x19, 0x9C, 0x47, 0xD0, 0x8F, 0xFB, 0x10,
    0xD4, 0xB8,
];

/// Constant term b of the curve equation
pub const CURVE_B: u32 = 7;

/// Bit size of the underlying field
pub const FIELD_BITS: usize = 256;

/// Size of a field element or scalar in bytes
pub const FIELD_BYTES: usize = FIELD_BITS / 8;

/// Size of a compressed SEC1 public key: 0x02/0x03 || x
pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 1 + FIELD_BYTES;

/// Size of an uncompressed SEC1 public key: 0x04 || x || y
pub const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 1 + 2 * FIELD_BYTES;

/// SEC1 prefix of a compressed key with even y
pub const TAG_COMPRESSED_EVEN: u8 = 0x02;

/// SEC1 prefix of a compressed key with odd y
pub const TAG_COMPRESSED_ODD: u8 = 0x03;

/// SEC1 prefix of an uncompressed key
pub const TAG_UNCOMPRESSED: u8 = 0x04;

/// Extra random bytes drawn beyond the field width when sampling a scalar
pub const RANDOM_EXTRA_BYTES: usize = 8;

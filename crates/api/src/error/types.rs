//! Error type definitions for key and address operations

use thiserror::Error;

/// Result type for keyforge operations
pub type Result<T> = core::result::Result<T, Error>;

/// Primary error type for keyforge operations
///
/// Every kind is a recoverable, local condition. Encoding problems,
/// mathematically invalid values and a wrong passphrase are reported by
/// distinct variants so callers can tell them apart.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Private scalar is zero or not below the group order
    #[error("private key out of range")]
    ScalarOutOfRange,

    /// Coordinate is not below the field modulus
    #[error("coordinate out of range")]
    CoordinateOutOfRange,

    /// No curve point has the requested x-coordinate
    #[error("no such point exists")]
    NoSuchPoint,

    /// Hex text is not exactly 64 hex digits
    #[error("invalid hex string: {reason}")]
    InvalidHexString {
        reason: &'static str,
    },

    /// Text is not valid Base58
    #[error("invalid base58 string: {message}")]
    InvalidBase58 {
        message: String,
    },

    /// Decoded WIF has the wrong length, prefix, version or marker
    #[error("invalid WIF: {reason}")]
    InvalidWif {
        reason: &'static str,
    },

    /// Embedded WIF checksum does not match
    #[error("invalid WIF checksum")]
    InvalidWifChecksum,

    /// Public key bytes are neither a 33-byte compressed nor a 65-byte uncompressed key
    #[error("invalid public key format (length {length})")]
    InvalidPublicKeyFormat {
        length: usize,
    },

    /// Address type ordinal outside the closed set
    #[error("invalid address type {ordinal}")]
    InvalidAddressType {
        ordinal: u8,
    },

    /// Address type name that matches none of the known kinds
    #[error("unknown address type {name:?}")]
    UnknownAddressType {
        name: String,
    },

    /// Export or derivation attempted on a key that was never set
    #[error("private key not set")]
    KeyNotInitialized,

    /// BIP38 payload is malformed
    #[error("invalid BIP38 key: {reason}")]
    InvalidBip38 {
        reason: &'static str,
    },

    /// Embedded BIP38 checksum does not match
    #[error("BIP38 checksum invalid")]
    InvalidBip38Checksum,

    /// Decrypted key does not reproduce the embedded address hash
    #[error("BIP38 wrong passphrase")]
    WrongPassphrase,

    /// Invalid length error with context
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Text encoder rejected its input
    #[error("encoding error: {context}: {message}")]
    Encoding {
        context: &'static str,
        message: String,
    },

    /// Key derivation function rejected its parameters
    #[error("key derivation error: {message}")]
    KeyDerivation {
        message: String,
    },

    /// Entropy source failed
    #[error("random generation error: {message}")]
    RandomGeneration {
        message: String,
    },
}

impl Error {
    /// Shorthand to create an Encoding error
    pub fn encoding(context: &'static str, message: impl Into<String>) -> Self {
        Error::Encoding {
            context,
            message: message.into(),
        }
    }
}

//! Byte encodings of key types

use crate::Result;
use zeroize::Zeroizing;

/// Key types with a public, canonical byte encoding
///
/// Public keys use SEC1: 33 bytes compressed or 65 bytes uncompressed.
pub trait Serialize: Sized {
    /// Parse and validate an encoding.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// The canonical encoding.
    fn to_bytes(&self) -> Vec<u8>;
}

/// Key types whose byte encoding is itself a secret
///
/// The encoding is handed out in a buffer that is wiped when dropped.
pub trait SerializeSecret: Sized {
    /// Parse and validate an encoding. The caller owns wiping `bytes`.
    fn from_bytes(bytes: &[u8]) -> Result<Self>;
    /// The encoding, wiped on drop.
    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>>;
}

//! secp256k1 public keys and the SEC1 codec
//!
//! Two ways in:
//!
//! - [`PublicKey::from_slice`] validates untrusted bytes: the x-coordinate is
//!   range-checked and the point must lie on the curve.
//! - [`PublicKey::from_slice_unchecked`] and [`convert_public_key`] only check
//!   the framing (tag byte and length). They are meant for keys whose
//!   validity is already established, such as ones derived from a private
//!   key; an off-curve input gives a meaningless result, never a panic.

use core::fmt;

use keyforge_algorithms::ec::k256::{
    scalar_mult_base_g, secp256k1, AffinePoint, Scalar, K256_FIELD_ELEMENT_SIZE,
    K256_POINT_COMPRESSED_SIZE, K256_POINT_UNCOMPRESSED_SIZE,
};
use keyforge_api::{Error, KeyFormat, Result, Serialize};
use keyforge_params::secp256k1::{TAG_COMPRESSED_EVEN, TAG_COMPRESSED_ODD, TAG_UNCOMPRESSED};
use num_bigint::BigUint;

/// SEC1 encoding of a secp256k1 public key
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicKey {
    /// 0x02/0x03 || x
    Compressed([u8; K256_POINT_COMPRESSED_SIZE]),
    /// 0x04 || x || y
    Uncompressed([u8; K256_POINT_UNCOMPRESSED_SIZE]),
}

impl PublicKey {
    /// Encode a curve point
    pub fn from_point(point: &AffinePoint, format: KeyFormat) -> Self {
        match format {
            KeyFormat::Compressed => PublicKey::Compressed(point.serialize_compressed()),
            KeyFormat::Uncompressed => PublicKey::Uncompressed(point.serialize_uncompressed()),
        }
    }

    /// Parse and validate SEC1 bytes
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidPublicKeyFormat`] for a wrong tag or length
    /// - [`Error::CoordinateOutOfRange`] if a coordinate is not below p
    /// - [`Error::NoSuchPoint`] if the point is not on the curve
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let key = Self::from_slice_unchecked(bytes)?;
        let curve = secp256k1();
        match &key {
            PublicKey::Compressed(data) => {
                curve.point_from_x_checked(&data[1..], data[0] == TAG_COMPRESSED_EVEN)?;
            }
            PublicKey::Uncompressed(data) => {
                let x = BigUint::from_bytes_be(&data[1..1 + K256_FIELD_ELEMENT_SIZE]);
                let y = BigUint::from_bytes_be(&data[1 + K256_FIELD_ELEMENT_SIZE..]);
                if &x >= curve.p() || &y >= curve.p() {
                    return Err(Error::CoordinateOutOfRange);
                }
                if !curve.is_on_curve(&x, &y) {
                    return Err(Error::NoSuchPoint);
                }
            }
        }
        Ok(key)
    }

    /// Parse SEC1 bytes checking only the tag byte and the length
    pub fn from_slice_unchecked(bytes: &[u8]) -> Result<Self> {
        let invalid = Error::InvalidPublicKeyFormat {
            length: bytes.len(),
        };
        let Some(&tag) = bytes.first() else {
            return Err(invalid);
        };
        match bytes.len() {
            K256_POINT_UNCOMPRESSED_SIZE if tag == TAG_UNCOMPRESSED => {
                let mut data = [0u8; K256_POINT_UNCOMPRESSED_SIZE];
                data.copy_from_slice(bytes);
                Ok(PublicKey::Uncompressed(data))
            }
            K256_POINT_COMPRESSED_SIZE if tag == TAG_COMPRESSED_EVEN || tag == TAG_COMPRESSED_ODD => {
                let mut data = [0u8; K256_POINT_COMPRESSED_SIZE];
                data.copy_from_slice(bytes);
                Ok(PublicKey::Compressed(data))
            }
            _ => Err(invalid),
        }
    }

    /// Encoding of this key
    pub fn format(&self) -> KeyFormat {
        match self {
            PublicKey::Compressed(_) => KeyFormat::Compressed,
            PublicKey::Uncompressed(_) => KeyFormat::Uncompressed,
        }
    }

    /// Raw SEC1 bytes
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            PublicKey::Compressed(data) => data,
            PublicKey::Uncompressed(data) => data,
        }
    }

    /// The same key in another encoding
    ///
    /// Compressing takes x and the parity of y. Expanding recovers y from x
    /// without validation.
    pub fn to_format(&self, format: KeyFormat) -> PublicKey {
        match (self, format) {
            (PublicKey::Uncompressed(data), KeyFormat::Compressed) => {
                let mut out = [0u8; K256_POINT_COMPRESSED_SIZE];
                out[0] = if data[K256_POINT_UNCOMPRESSED_SIZE - 1] & 1 == 1 {
                    TAG_COMPRESSED_ODD
                } else {
                    TAG_COMPRESSED_EVEN
                };
                out[1..].copy_from_slice(&data[1..1 + K256_FIELD_ELEMENT_SIZE]);
                PublicKey::Compressed(out)
            }
            (PublicKey::Compressed(_), KeyFormat::Uncompressed) => {
                PublicKey::Uncompressed(self.to_point().serialize_uncompressed())
            }
            _ => *self,
        }
    }

    /// The curve point this key encodes
    pub fn to_point(&self) -> AffinePoint {
        match self {
            PublicKey::Compressed(data) => {
                secp256k1().point_from_x(&data[1..], data[0] == TAG_COMPRESSED_EVEN)
            }
            PublicKey::Uncompressed(data) => AffinePoint::new(
                BigUint::from_bytes_be(&data[1..1 + K256_FIELD_ELEMENT_SIZE]),
                BigUint::from_bytes_be(&data[1 + K256_FIELD_ELEMENT_SIZE..]),
            ),
        }
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl Serialize for PublicKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_slice(bytes)
    }

    fn to_bytes(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PublicKey::Compressed(_) => "Compressed",
            PublicKey::Uncompressed(_) => "Uncompressed",
        };
        write!(f, "PublicKey::{}({})", name, hex::encode(self.as_bytes()))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.as_bytes()))
    }
}

/// Public key of `scalar` in the requested encoding
pub fn public_key(scalar: &Scalar, format: KeyFormat) -> PublicKey {
    PublicKey::from_point(&scalar_mult_base_g(scalar), format)
}

/// Re-encode SEC1 bytes as compressed or uncompressed
///
/// Only the framing is checked, as with [`PublicKey::from_slice_unchecked`].
pub fn convert_public_key(bytes: &[u8], format: KeyFormat) -> Result<Vec<u8>> {
    let key = PublicKey::from_slice_unchecked(bytes)?;
    Ok(key.to_format(format).as_bytes().to_vec())
}

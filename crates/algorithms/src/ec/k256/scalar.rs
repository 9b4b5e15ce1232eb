//! secp256k1 private scalars

use keyforge_common::security::SecretBuffer;
use keyforge_internal::bytes::left_pad;
use keyforge_params::secp256k1::GROUP_ORDER;
use num_bigint::BigUint;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::ec::k256::constants::K256_SCALAR_SIZE;
use crate::error::{validate, Error, Result};

/// A scalar in [1, n-1], stored as 32 big-endian bytes
///
/// Out-of-range input is rejected, never reduced: a private key that wraps
/// silently would map to someone else's address.
#[derive(Clone, Zeroize, ZeroizeOnDrop, Debug, PartialEq, Eq)]
pub struct Scalar(SecretBuffer<K256_SCALAR_SIZE>);

impl Scalar {
    /// Create a scalar from exactly 32 big-endian bytes
    pub fn new(data: [u8; K256_SCALAR_SIZE]) -> Result<Self> {
        let is_zero = data.iter().all(|&b| b == 0);
        validate::scalar_range(is_zero, data < GROUP_ORDER)?;
        Ok(Scalar(SecretBuffer::new(data)))
    }

    /// Create a scalar from a big-endian byte string of any length
    ///
    /// Leading zero bytes are ignored.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let data = left_pad::<K256_SCALAR_SIZE>(bytes).ok_or(Error::ScalarOutOfRange)?;
        Self::new(data)
    }

    /// Create a scalar from an integer
    pub fn from_biguint(k: &BigUint) -> Result<Self> {
        Self::from_slice(&k.to_bytes_be())
    }

    /// The scalar as an integer
    pub fn to_biguint(&self) -> BigUint {
        BigUint::from_bytes_be(self.0.as_ref())
    }

    /// Get a reference to the underlying `SecretBuffer`.
    pub fn as_secret_buffer(&self) -> &SecretBuffer<K256_SCALAR_SIZE> {
        &self.0
    }

    /// Serialize this scalar to bytes.
    pub fn serialize(&self) -> [u8; K256_SCALAR_SIZE] {
        self.0.to_array()
    }
}

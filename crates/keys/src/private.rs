//! Validated secp256k1 private keys

use keyforge_algorithms::ec::k256::{Scalar, K256_SCALAR_SIZE as SCALAR_SIZE};
use keyforge_algorithms::random::{random_scalar, random_scalar_mixed};
use keyforge_api::error::validate;
use keyforge_api::{AddressType, Error, KeyFormat, Result, SerializeSecret};
use num_bigint::BigUint;
use rand::{CryptoRng, RngCore};
use tracing::debug;
use zeroize::Zeroizing;

use crate::address::derive_address;
use crate::bip38::{self, Bip38Params};
use crate::public::{public_key, PublicKey};
use crate::wif;

/// A private scalar with its address type and compression flag
///
/// Every value of this type holds a scalar in [1, n-1]. Constructors
/// default to [`AddressType::P2pkh`] and a compressed public key unless the
/// source format says otherwise.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrivateKey {
    scalar: Scalar,
    address_type: AddressType,
    compressed: bool,
}

impl PrivateKey {
    /// Wrap an already validated scalar
    pub fn from_scalar(scalar: Scalar) -> Self {
        PrivateKey {
            scalar,
            address_type: AddressType::P2pkh,
            compressed: true,
        }
    }

    /// From an integer in [1, n-1]
    pub fn from_biguint(k: &BigUint) -> Result<Self> {
        Ok(Self::from_scalar(Scalar::from_biguint(k)?))
    }

    /// From big-endian bytes of any length
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(Self::from_scalar(Scalar::from_slice(bytes)?))
    }

    /// From exactly 64 hex digits, optionally prefixed with `0x`
    ///
    /// Surrounding whitespace is ignored and either case is accepted.
    pub fn from_hex(text: &str) -> Result<Self> {
        let text = text.trim();
        let digits = text
            .strip_prefix("0x")
            .or_else(|| text.strip_prefix("0X"))
            .unwrap_or(text);
        validate::hex_digits(digits, 2 * SCALAR_SIZE)?;

        let mut bytes = Zeroizing::new([0u8; SCALAR_SIZE]);
        hex::decode_to_slice(digits, &mut bytes[..]).map_err(|_| Error::InvalidHexString {
            reason: "non-hex character",
        })?;
        Ok(Self::from_scalar(Scalar::new(*bytes)?))
    }

    /// From WIF text; the compression flag follows the encoding
    pub fn from_wif(text: &str) -> Result<Self> {
        let (scalar, compressed) = wif::decode(text)?;
        debug!(compressed, "imported WIF key");
        Ok(Self::from_scalar(scalar).with_compressed(compressed))
    }

    /// From BIP38 text at the standard scrypt cost
    pub fn from_bip38(text: &str, passphrase: &str) -> Result<Self> {
        Self::from_bip38_with_params(text, passphrase, &Bip38Params::default())
    }

    /// From BIP38 text at a caller-chosen scrypt cost
    pub fn from_bip38_with_params(
        text: &str,
        passphrase: &str,
        params: &Bip38Params,
    ) -> Result<Self> {
        let (scalar, compressed) = bip38::decrypt(text, passphrase, params)?;
        Ok(Self::from_scalar(scalar).with_compressed(compressed))
    }

    /// Fresh key from a cryptographic RNG
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        Ok(Self::from_scalar(random_scalar(rng)?))
    }

    /// Fresh key from a cryptographic RNG mixed with caller entropy
    pub fn generate_with_entropy<R: RngCore + CryptoRng>(
        rng: &mut R,
        extra: &[u8],
    ) -> Result<Self> {
        Ok(Self::from_scalar(random_scalar_mixed(rng, extra)?))
    }

    /// Builder form of [`set_address_type`](Self::set_address_type)
    pub fn with_address_type(mut self, address_type: AddressType) -> Self {
        self.address_type = address_type;
        self
    }

    /// Builder form of [`set_compressed`](Self::set_compressed)
    pub fn with_compressed(mut self, compressed: bool) -> Self {
        self.compressed = compressed;
        self
    }

    /// Change the address type used by [`address`](Self::address)
    pub fn set_address_type(&mut self, address_type: AddressType) {
        self.address_type = address_type;
    }

    /// Change the public key encoding used by WIF, BIP38 and [`public_key`](Self::public_key)
    pub fn set_compressed(&mut self, compressed: bool) {
        self.compressed = compressed;
    }

    /// The address type of this key
    pub fn address_type(&self) -> AddressType {
        self.address_type
    }

    /// Whether the public key is used compressed
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// The private scalar
    pub fn scalar(&self) -> &Scalar {
        &self.scalar
    }

    /// 32 big-endian bytes
    pub fn to_bytes(&self) -> Zeroizing<[u8; SCALAR_SIZE]> {
        Zeroizing::new(self.scalar.serialize())
    }

    /// 64 uppercase hex digits
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode_upper(self.to_bytes().as_slice()))
    }

    /// WIF text carrying the compression flag
    pub fn to_wif(&self) -> Zeroizing<String> {
        wif::encode(&self.scalar, self.compressed)
    }

    /// BIP38 text at the standard scrypt cost
    pub fn to_bip38(&self, passphrase: &str) -> Result<String> {
        self.to_bip38_with_params(passphrase, &Bip38Params::default())
    }

    /// BIP38 text at a caller-chosen scrypt cost
    pub fn to_bip38_with_params(&self, passphrase: &str, params: &Bip38Params) -> Result<String> {
        bip38::encrypt(&self.scalar, self.compressed, passphrase, params)
    }

    /// Public key in the encoding named by the compression flag
    pub fn public_key(&self) -> PublicKey {
        let format = if self.compressed {
            KeyFormat::Compressed
        } else {
            KeyFormat::Uncompressed
        };
        public_key(&self.scalar, format)
    }

    /// Address of this key's own type
    pub fn address(&self) -> Result<String> {
        self.address_of(self.address_type)
    }

    /// Address of any type
    pub fn address_of(&self, kind: AddressType) -> Result<String> {
        derive_address(self.public_key().as_bytes(), kind)
    }
}

impl From<Scalar> for PrivateKey {
    fn from(scalar: Scalar) -> Self {
        Self::from_scalar(scalar)
    }
}

impl SerializeSecret for PrivateKey {
    fn from_bytes(bytes: &[u8]) -> Result<Self> {
        validate::length("private key", bytes.len(), SCALAR_SIZE)?;
        PrivateKey::from_bytes(bytes)
    }

    fn to_bytes_zeroizing(&self) -> Zeroizing<Vec<u8>> {
        Zeroizing::new(self.to_bytes().to_vec())
    }
}

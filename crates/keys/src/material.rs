//! Mutable key holder with an explicit Empty/Initialized lifecycle
//!
//! [`KeyMaterial`] starts empty and becomes initialized through one of the
//! `set_*` methods. A failed setter leaves the holder exactly as it was.
//! Every export and derivation on an empty holder returns
//! [`Error::KeyNotInitialized`].
//!
//! The address type and compression flag can be configured before a key is
//! set; they are applied to whatever key arrives, except that WIF and BIP38
//! input carries its own compression flag.

use keyforge_algorithms::ec::k256::{Scalar, K256_SCALAR_SIZE};
use keyforge_api::{AddressType, Error, Result};
use num_bigint::BigUint;
use tracing::debug;
use zeroize::Zeroizing;

use crate::bip38::Bip38Params;
use crate::private::PrivateKey;
use crate::public::PublicKey;

/// Private key slot plus its per-key configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyMaterial {
    key: Option<PrivateKey>,
    address_type: AddressType,
    compressed: bool,
}

impl Default for KeyMaterial {
    fn default() -> Self {
        KeyMaterial {
            key: None,
            address_type: AddressType::P2pkh,
            compressed: true,
        }
    }
}

impl KeyMaterial {
    /// An empty holder with P2PKH and compression selected
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a key has been set
    pub fn is_initialized(&self) -> bool {
        self.key.is_some()
    }

    /// The key, if one has been set
    pub fn private_key(&self) -> Result<&PrivateKey> {
        self.key.as_ref().ok_or(Error::KeyNotInitialized)
    }

    /// Set from a validated scalar
    pub fn set_scalar(&mut self, scalar: Scalar) -> &mut Self {
        self.install(PrivateKey::from_scalar(scalar));
        self
    }

    /// Set from an integer in [1, n-1]
    pub fn set_biguint(&mut self, k: &BigUint) -> Result<&mut Self> {
        self.install(PrivateKey::from_biguint(k)?);
        Ok(self)
    }

    /// Set from big-endian bytes of any length
    pub fn set_bytes(&mut self, bytes: &[u8]) -> Result<&mut Self> {
        self.install(PrivateKey::from_bytes(bytes)?);
        Ok(self)
    }

    /// Set from 64 hex digits, optionally `0x`-prefixed
    pub fn set_hex(&mut self, text: &str) -> Result<&mut Self> {
        self.install(PrivateKey::from_hex(text)?);
        Ok(self)
    }

    /// Set from WIF text, taking the compression flag from the encoding
    pub fn set_wif(&mut self, text: &str) -> Result<&mut Self> {
        let key = PrivateKey::from_wif(text)?;
        self.compressed = key.is_compressed();
        self.install(key);
        Ok(self)
    }

    /// Set from BIP38 text at the standard scrypt cost
    pub fn set_bip38(&mut self, text: &str, passphrase: &str) -> Result<&mut Self> {
        self.set_bip38_with_params(text, passphrase, &Bip38Params::default())
    }

    /// Set from BIP38 text at a caller-chosen scrypt cost
    ///
    /// The compression flag comes from the encoding; the address type is kept.
    pub fn set_bip38_with_params(
        &mut self,
        text: &str,
        passphrase: &str,
        params: &Bip38Params,
    ) -> Result<&mut Self> {
        let key = PrivateKey::from_bip38_with_params(text, passphrase, params)?;
        self.compressed = key.is_compressed();
        self.install(key);
        Ok(self)
    }

    /// Select the address type used by [`address`](Self::address)
    pub fn set_address_type(&mut self, address_type: AddressType) -> &mut Self {
        self.address_type = address_type;
        if let Some(key) = self.key.as_mut() {
            key.set_address_type(address_type);
        }
        self
    }

    /// Select the address type by ordinal
    ///
    /// Returns [`Error::InvalidAddressType`] for an ordinal outside the set.
    pub fn set_address_type_ordinal(&mut self, ordinal: u8) -> Result<&mut Self> {
        let address_type = AddressType::try_from(ordinal)?;
        Ok(self.set_address_type(address_type))
    }

    /// Select compressed or uncompressed public key use
    pub fn set_compressed(&mut self, compressed: bool) -> &mut Self {
        self.compressed = compressed;
        if let Some(key) = self.key.as_mut() {
            key.set_compressed(compressed);
        }
        self
    }

    /// Configured address type
    pub fn address_type(&self) -> AddressType {
        self.address_type
    }

    /// Configured compression flag
    pub fn is_compressed(&self) -> bool {
        self.compressed
    }

    /// 32 big-endian bytes
    pub fn to_bytes(&self) -> Result<Zeroizing<[u8; K256_SCALAR_SIZE]>> {
        Ok(self.private_key()?.to_bytes())
    }

    /// 64 uppercase hex digits
    pub fn to_hex(&self) -> Result<Zeroizing<String>> {
        Ok(self.private_key()?.to_hex())
    }

    /// WIF text
    pub fn to_wif(&self) -> Result<Zeroizing<String>> {
        Ok(self.private_key()?.to_wif())
    }

    /// BIP38 text at the standard scrypt cost
    pub fn to_bip38(&self, passphrase: &str) -> Result<String> {
        self.private_key()?.to_bip38(passphrase)
    }

    /// BIP38 text at a caller-chosen scrypt cost
    pub fn to_bip38_with_params(&self, passphrase: &str, params: &Bip38Params) -> Result<String> {
        self.private_key()?.to_bip38_with_params(passphrase, params)
    }

    /// Public key in the configured encoding
    pub fn public_key(&self) -> Result<PublicKey> {
        Ok(self.private_key()?.public_key())
    }

    /// Address of the configured type
    pub fn address(&self) -> Result<String> {
        self.private_key()?.address()
    }

    /// Address of any type
    pub fn address_of(&self, kind: AddressType) -> Result<String> {
        self.private_key()?.address_of(kind)
    }

    fn install(&mut self, key: PrivateKey) {
        debug!(
            address_type = %self.address_type,
            compressed = self.compressed,
            replacing = self.key.is_some(),
            "key material set"
        );
        self.key = Some(
            key.with_address_type(self.address_type)
                .with_compressed(self.compressed),
        );
    }
}

impl From<PrivateKey> for KeyMaterial {
    fn from(key: PrivateKey) -> Self {
        KeyMaterial {
            address_type: key.address_type(),
            compressed: key.is_compressed(),
            key: Some(key),
        }
    }
}

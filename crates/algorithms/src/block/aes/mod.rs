//! AES-256 block cipher
//!
//! A thin wrapper over the `aes` crate that speaks this crate's error type
//! and works on plain byte slices.

use ::aes::cipher::generic_array::GenericArray;
use ::aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use keyforge_params::utils::symmetric::{AES256_KEY_SIZE, AES_BLOCK_SIZE};

use crate::error::{validate, Result};

/// AES-256 block cipher with an expanded key schedule
#[derive(Clone)]
pub struct Aes256 {
    inner: ::aes::Aes256,
}

impl Aes256 {
    /// Expand a 32-byte key
    pub fn new(key: &[u8]) -> Result<Self> {
        validate::length("AES-256 key", key.len(), AES256_KEY_SIZE)?;
        let inner = ::aes::Aes256::new(GenericArray::from_slice(key));
        Ok(Aes256 { inner })
    }

    /// Encrypt one 16-byte block in place
    pub fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
        self.inner.encrypt_block(GenericArray::from_mut_slice(block));
        Ok(())
    }

    /// Decrypt one 16-byte block in place
    pub fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
        self.inner.decrypt_block(GenericArray::from_mut_slice(block));
        Ok(())
    }
}

impl core::fmt::Debug for Aes256 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Aes256([REDACTED])")
    }
}

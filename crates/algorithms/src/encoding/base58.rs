//! Base58 and Base58Check
//!
//! Each leading zero byte maps to a leading `'1'` and back.

use keyforge_params::utils::hash::CHECKSUM_SIZE;

use crate::error::{Error, Result};
use crate::hash::{checksum, verify_checksum};

/// Encode bytes with the Bitcoin alphabet
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).into_string()
}

/// Decode Base58 text
///
/// Fails with [`Error::InvalidBase58`] on characters outside the alphabet.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    bs58::decode(text)
        .into_vec()
        .map_err(|e| Error::InvalidBase58 {
            message: e.to_string(),
        })
}

/// Encode `payload || checksum(payload)`
pub fn encode_check(payload: &[u8]) -> String {
    let mut framed = Vec::with_capacity(payload.len() + CHECKSUM_SIZE);
    framed.extend_from_slice(payload);
    framed.extend_from_slice(&checksum(payload));
    encode(&framed)
}

/// Decode Base58Check text and return the payload without its checksum
pub fn decode_check(text: &str) -> Result<Vec<u8>> {
    let mut data = decode(text)?;
    if data.len() < CHECKSUM_SIZE {
        return Err(Error::encoding("base58check", "shorter than checksum"));
    }
    let split = data.len() - CHECKSUM_SIZE;
    if !verify_checksum(&data[..split], &data[split..]) {
        return Err(Error::encoding("base58check", "checksum mismatch"));
    }
    data.truncate(split);
    Ok(data)
}

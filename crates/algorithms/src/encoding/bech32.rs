//! SegWit address encoding
//!
//! The `bech32` crate selects the checksum constant from the witness
//! version: Bech32 for version 0, Bech32m for everything above.

use ::bech32::{segwit, Fe32, Hrp};

use crate::error::{Error, Result};

/// Encode a witness program as a SegWit address
pub fn encode_segwit(hrp: &str, witness_version: u8, program: &[u8]) -> Result<String> {
    let hrp = Hrp::parse(hrp).map_err(|e| Error::encoding("bech32 hrp", e.to_string()))?;
    let version = Fe32::try_from(witness_version)
        .map_err(|e| Error::encoding("bech32 witness version", e.to_string()))?;
    segwit::encode(hrp, version, program).map_err(|e| Error::encoding("bech32", e.to_string()))
}

/// Decode a SegWit address into `(hrp, witness version, program)`
///
/// The checksum variant must match the witness version.
pub fn decode_segwit(address: &str) -> Result<(String, u8, Vec<u8>)> {
    let (hrp, version, program) =
        segwit::decode(address).map_err(|e| Error::encoding("bech32", e.to_string()))?;
    Ok((hrp.to_string(), version.to_u8(), program))
}

//! Wallet Import Format
//!
//! `Base58Check(0x80 ‖ scalar ‖ [0x01])`. The trailing 0x01 marks a key
//! whose public key is used compressed. Mainnet WIFs start with `5` when
//! uncompressed and with `K` or `L` when compressed.

use keyforge_algorithms::encoding::base58;
use keyforge_algorithms::hash::verify_checksum;
use keyforge_algorithms::Scalar;
use keyforge_api::{Error, Result};
use keyforge_params::bitcoin::{
    WIF_COMPRESSED_LEADS, WIF_COMPRESSED_LEN, WIF_COMPRESSION_MARKER, WIF_UNCOMPRESSED_LEAD,
    WIF_UNCOMPRESSED_LEN, WIF_VERSION,
};
use keyforge_params::utils::hash::CHECKSUM_SIZE;
use zeroize::Zeroizing;

/// Encode a scalar as WIF
pub fn encode(scalar: &Scalar, compressed: bool) -> Zeroizing<String> {
    let mut payload = Zeroizing::new(Vec::with_capacity(WIF_COMPRESSED_LEN));
    payload.push(WIF_VERSION);
    payload.extend_from_slice(scalar.as_secret_buffer().as_ref());
    if compressed {
        payload.push(WIF_COMPRESSION_MARKER);
    }
    Zeroizing::new(base58::encode_check(&payload))
}

/// Decode WIF text into the scalar and its compression flag
///
/// Surrounding whitespace is ignored.
///
/// # Errors
///
/// - [`Error::InvalidBase58`] for characters outside the alphabet
/// - [`Error::InvalidWif`] if the leading character and decoded length
///   disagree, or the version byte or compression marker is wrong
/// - [`Error::InvalidWifChecksum`] on checksum mismatch
/// - [`Error::ScalarOutOfRange`] if the embedded scalar is 0 or ≥ n
pub fn decode(text: &str) -> Result<(Scalar, bool)> {
    let text = text.trim();
    let lead = text.chars().next().ok_or(Error::InvalidWif { reason: "empty" })?;
    let data = Zeroizing::new(base58::decode(text)?);

    let compressed = match data.len() {
        WIF_UNCOMPRESSED_LEN if lead == WIF_UNCOMPRESSED_LEAD => false,
        WIF_COMPRESSED_LEN if WIF_COMPRESSED_LEADS.contains(&lead) => true,
        _ => {
            return Err(Error::InvalidWif {
                reason: "length does not match leading character",
            })
        }
    };

    let (body, sum) = data.split_at(data.len() - CHECKSUM_SIZE);
    if !verify_checksum(body, sum) {
        return Err(Error::InvalidWifChecksum);
    }
    if body[0] != WIF_VERSION {
        return Err(Error::InvalidWif {
            reason: "unexpected version byte",
        });
    }

    let scalar_bytes = if compressed {
        let (scalar_bytes, marker) = body[1..].split_at(body.len() - 2);
        if marker[0] != WIF_COMPRESSION_MARKER {
            return Err(Error::InvalidWif {
                reason: "missing compression marker",
            });
        }
        scalar_bytes
    } else {
        &body[1..]
    };

    Ok((Scalar::from_slice(scalar_bytes)?, compressed))
}

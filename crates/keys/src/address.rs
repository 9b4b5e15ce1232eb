//! Address derivation
//!
//! Every routine accepts a SEC1 public key in either encoding and
//! re-encodes it to the form its address kind is defined over:
//!
//! | Kind | Key form | Address |
//! |---|---|---|
//! | P2PKH | compressed | Base58Check(0x00 ‖ Hash160(key)) |
//! | P2PKH (uncompressed) | uncompressed | Base58Check(0x00 ‖ Hash160(key)) |
//! | P2SH | compressed | Base58Check(0x05 ‖ Hash160(0x00 0x14 ‖ Hash160(key))) |
//! | P2WPKH | compressed | Bech32 v0 of Hash160(key) |
//! | P2TR | point | Bech32m v1 of the x-only tweaked output key |
//! | ETH | uncompressed | EIP-55 of the last 20 bytes of Keccak-256(x ‖ y) |

use keyforge_algorithms::ec::k256::secp256k1;
use keyforge_algorithms::encoding::{base58, bech32};
use keyforge_algorithms::hash::{hash160, keccak256, tagged_hash};
use keyforge_api::error::validate;
use keyforge_api::{AddressType, KeyFormat, Result};
use keyforge_params::bitcoin::{
    P2PKH_VERSION, P2SH_VERSION, P2WPKH_REDEEM_PREFIX, SEGWIT_HRP, TAP_TWEAK_TAG,
    WITNESS_VERSION_P2TR, WITNESS_VERSION_P2WPKH,
};
use keyforge_params::ethereum::{ADDRESS_HEX_LEN, ADDRESS_PREFIX, ADDRESS_SIZE};
use num_bigint::BigUint;
use tracing::trace;

use crate::public::PublicKey;

/// Derive the address of `kind` for a public key
pub fn derive_address(pubkey: &[u8], kind: AddressType) -> Result<String> {
    trace!(%kind, key_len = pubkey.len(), "deriving address");
    match kind {
        AddressType::P2pkh => p2pkh(pubkey),
        AddressType::P2pkhUncompressed => p2pkh_uncompressed(pubkey),
        AddressType::P2sh => p2sh(pubkey),
        AddressType::P2wpkh => p2wpkh(pubkey),
        AddressType::P2tr => p2tr(pubkey),
        AddressType::Eth => eth(pubkey),
    }
}

/// Pay-to-pubkey-hash over the compressed key
pub fn p2pkh(pubkey: &[u8]) -> Result<String> {
    legacy_p2pkh(pubkey, KeyFormat::Compressed)
}

/// Pay-to-pubkey-hash over the uncompressed key
pub fn p2pkh_uncompressed(pubkey: &[u8]) -> Result<String> {
    legacy_p2pkh(pubkey, KeyFormat::Uncompressed)
}

fn legacy_p2pkh(pubkey: &[u8], format: KeyFormat) -> Result<String> {
    let key = normalize(pubkey, format)?;
    Ok(versioned(P2PKH_VERSION, &hash160(key.as_bytes())))
}

/// P2WPKH nested in pay-to-script-hash
pub fn p2sh(pubkey: &[u8]) -> Result<String> {
    let key = normalize(pubkey, KeyFormat::Compressed)?;
    let mut redeem_script = P2WPKH_REDEEM_PREFIX.to_vec();
    redeem_script.extend_from_slice(&hash160(key.as_bytes()));
    Ok(versioned(P2SH_VERSION, &hash160(&redeem_script)))
}

/// Native segwit v0 pay-to-witness-pubkey-hash
pub fn p2wpkh(pubkey: &[u8]) -> Result<String> {
    let key = normalize(pubkey, KeyFormat::Compressed)?;
    bech32::encode_segwit(SEGWIT_HRP, WITNESS_VERSION_P2WPKH, &hash160(key.as_bytes()))
}

/// Pay-to-taproot with the key as internal key and no script tree
///
/// The internal point is negated first if its y is odd (BIP340 x-only
/// keys always have even y). The output key is Q = P + t·G with
/// t = tagged_hash("TapTweak", x(P)).
pub fn p2tr(pubkey: &[u8]) -> Result<String> {
    let curve = secp256k1();
    let point = PublicKey::from_slice_unchecked(pubkey)?.to_point();
    let internal = if point.has_odd_y() { -&point } else { point };

    let tweak = tagged_hash(TAP_TWEAK_TAG, &internal.x_bytes());
    let tweak_point = curve.scalar_base_mult(&BigUint::from_bytes_be(&tweak));
    let output = curve.add(&internal, &tweak_point);

    bech32::encode_segwit(SEGWIT_HRP, WITNESS_VERSION_P2TR, &output.x_bytes())
}

/// Ethereum address with EIP-55 checksum casing
pub fn eth(pubkey: &[u8]) -> Result<String> {
    let key = normalize(pubkey, KeyFormat::Uncompressed)?;
    let digest = keccak256(&key.as_bytes()[1..]);
    eip55_checksum(&hex::encode(&digest[digest.len() - ADDRESS_SIZE..]))
}

/// Apply EIP-55 mixed-case checksum to a 40-digit hex address
///
/// Accepts any casing, with or without the `0x` prefix. Each letter is
/// uppercased iff the matching nibble of Keccak-256(lowercase address) is
/// at least 8.
pub fn eip55_checksum(address: &str) -> Result<String> {
    let digits = address
        .strip_prefix(ADDRESS_PREFIX)
        .or_else(|| address.strip_prefix("0X"))
        .unwrap_or(address);
    validate::hex_digits(digits, ADDRESS_HEX_LEN)?;

    let lower = digits.to_ascii_lowercase();
    let hash = keccak256(lower.as_bytes());

    let mut out = String::with_capacity(ADDRESS_PREFIX.len() + ADDRESS_HEX_LEN);
    out.push_str(ADDRESS_PREFIX);
    for (i, c) in lower.chars().enumerate() {
        let byte = hash[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        out.push(if nibble >= 8 { c.to_ascii_uppercase() } else { c });
    }
    Ok(out)
}

fn normalize(pubkey: &[u8], format: KeyFormat) -> Result<PublicKey> {
    Ok(PublicKey::from_slice_unchecked(pubkey)?.to_format(format))
}

fn versioned(version: u8, hash: &[u8]) -> String {
    let mut payload = Vec::with_capacity(1 + hash.len());
    payload.push(version);
    payload.extend_from_slice(hash);
    base58::encode_check(&payload)
}

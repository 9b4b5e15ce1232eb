//! BIP38 passphrase-protected keys, non-EC-multiply mode
//!
//! ```text
//! salt        = checksum(ascii P2PKH address of the key)
//! d1 ‖ d2     = scrypt(passphrase, salt, N, r, p, 64)
//! ciphertext  = AES-256(d2, (scalar ⊕ d1)[0..16]) ‖ AES-256(d2, (scalar ⊕ d1)[16..32])
//! payload     = 0x01 0x42 ‖ flag ‖ salt ‖ ciphertext
//! text        = Base58Check(payload)
//! ```
//!
//! The P2PKH address is over the compressed or uncompressed public key
//! according to the key's flag (0xE0 or 0xC0). Decryption with the wrong
//! passphrase yields some other scalar; recomputing the salt from it is
//! what detects the mistake.

use keyforge_algorithms::block::Aes256;
use keyforge_algorithms::encoding::base58;
use keyforge_algorithms::hash::{checksum, verify_checksum};
use keyforge_algorithms::kdf::scrypt;
use keyforge_algorithms::Scalar;
use keyforge_api::{AddressType, Error, Result};
use keyforge_internal::bytes::xor_in_place;
use keyforge_internal::constant_time::ct_eq;
use keyforge_params::bip38::{
    CIPHERTEXT_SIZE, FLAG_COMPRESSED, FLAG_UNCOMPRESSED, PAYLOAD_LEN, PREFIX, SALT_SIZE,
    SCRYPT_OUTPUT_LEN,
};
use keyforge_params::utils::hash::CHECKSUM_SIZE;
use keyforge_params::utils::symmetric::AES_BLOCK_SIZE;
use tracing::debug;
use zeroize::Zeroizing;

use crate::address::derive_address;
use crate::public::public_key;

pub use keyforge_algorithms::kdf::ScryptParams as Bip38Params;

const FLAG_OFFSET: usize = PREFIX.len();
const SALT_OFFSET: usize = FLAG_OFFSET + 1;
const CIPHERTEXT_OFFSET: usize = SALT_OFFSET + SALT_SIZE;

/// Encrypt a scalar under `passphrase`
pub fn encrypt(
    scalar: &Scalar,
    compressed: bool,
    passphrase: &str,
    params: &Bip38Params,
) -> Result<String> {
    debug!(compressed, "BIP38 encrypt");
    let salt = address_hash(scalar, compressed)?;
    let derived = derive(passphrase, &salt, params)?;
    let (half1, half2) = derived.split_at(SCRYPT_OUTPUT_LEN / 2);

    let mut block = Zeroizing::new(scalar.serialize());
    xor_in_place(&mut block[..], half1);
    let cipher = Aes256::new(half2)?;
    for chunk in block.chunks_mut(AES_BLOCK_SIZE) {
        cipher.encrypt_block(chunk)?;
    }

    let mut payload = Vec::with_capacity(PAYLOAD_LEN - CHECKSUM_SIZE);
    payload.extend_from_slice(&PREFIX);
    payload.push(if compressed {
        FLAG_COMPRESSED
    } else {
        FLAG_UNCOMPRESSED
    });
    payload.extend_from_slice(&salt);
    payload.extend_from_slice(&block[..]);
    Ok(base58::encode_check(&payload))
}

/// Decrypt BIP38 text into the scalar and its compression flag
///
/// # Errors
///
/// - [`Error::InvalidBase58`] for characters outside the alphabet
/// - [`Error::InvalidBip38`] for a wrong length, prefix or flag byte
/// - [`Error::InvalidBip38Checksum`] on checksum mismatch
/// - [`Error::WrongPassphrase`] if the recovered key does not reproduce
///   the embedded salt
pub fn decrypt(text: &str, passphrase: &str, params: &Bip38Params) -> Result<(Scalar, bool)> {
    let data = base58::decode(text.trim())?;
    if data.len() != PAYLOAD_LEN {
        return Err(Error::InvalidBip38 {
            reason: "wrong payload length",
        });
    }
    let (payload, sum) = data.split_at(PAYLOAD_LEN - CHECKSUM_SIZE);
    if !verify_checksum(payload, sum) {
        return Err(Error::InvalidBip38Checksum);
    }
    if payload[..FLAG_OFFSET] != PREFIX {
        return Err(Error::InvalidBip38 {
            reason: "not a non-EC-multiplied key",
        });
    }
    let compressed = match payload[FLAG_OFFSET] {
        FLAG_COMPRESSED => true,
        FLAG_UNCOMPRESSED => false,
        _ => {
            return Err(Error::InvalidBip38 {
                reason: "unknown flag byte",
            })
        }
    };
    debug!(compressed, "BIP38 decrypt");

    let salt = &payload[SALT_OFFSET..CIPHERTEXT_OFFSET];
    let derived = derive(passphrase, salt, params)?;
    let (half1, half2) = derived.split_at(SCRYPT_OUTPUT_LEN / 2);

    let mut block = Zeroizing::new([0u8; CIPHERTEXT_SIZE]);
    block.copy_from_slice(&payload[CIPHERTEXT_OFFSET..]);
    let cipher = Aes256::new(half2)?;
    for chunk in block.chunks_mut(AES_BLOCK_SIZE) {
        cipher.decrypt_block(chunk)?;
    }
    xor_in_place(&mut block[..], half1);

    // a wrong passphrase can land outside [1, n-1] as well
    let scalar = Scalar::new(*block).map_err(|_| Error::WrongPassphrase)?;
    if !ct_eq(address_hash(&scalar, compressed)?, salt) {
        return Err(Error::WrongPassphrase);
    }
    Ok((scalar, compressed))
}

fn address_hash(scalar: &Scalar, compressed: bool) -> Result<[u8; SALT_SIZE]> {
    let kind = if compressed {
        AddressType::P2pkh
    } else {
        AddressType::P2pkhUncompressed
    };
    let address = derive_address(public_key(scalar, kind.key_format()).as_bytes(), kind)?;
    Ok(checksum(address.as_bytes()))
}

fn derive(
    passphrase: &str,
    salt: &[u8],
    params: &Bip38Params,
) -> Result<Zeroizing<[u8; SCRYPT_OUTPUT_LEN]>> {
    let mut out = Zeroizing::new([0u8; SCRYPT_OUTPUT_LEN]);
    scrypt(passphrase.as_bytes(), salt, params, &mut out[..])?;
    Ok(out)
}

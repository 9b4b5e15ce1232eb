//! secp256k1 keys and addresses
//!
//! This crate turns a private scalar into the text forms wallets exchange:
//! hex, WIF and BIP38 for the private key, SEC1 for the public key, and
//! P2PKH, P2SH, P2WPKH, P2TR and Ethereum addresses.
//!
//! [`PrivateKey`] is always valid. [`KeyMaterial`] is the mutable holder
//! that starts empty and reports [`Error::KeyNotInitialized`] until a key is
//! set.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod address;
pub mod bip38;
pub mod material;
pub mod private;
pub mod public;
pub mod wif;

pub use address::{derive_address, eip55_checksum};
pub use bip38::Bip38Params;
pub use material::KeyMaterial;
pub use private::PrivateKey;
pub use public::{convert_public_key, public_key, PublicKey};

pub use keyforge_api::{AddressType, Error, KeyFormat, Result};

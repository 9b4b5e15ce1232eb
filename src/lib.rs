//! # keyforge
//!
//! secp256k1 keys and addresses from first principles.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! keyforge = "0.3"
//! ```
//!
//! ```no_run
//! use keyforge::prelude::*;
//!
//! let mut key = PrivateKey::generate(&mut OsRng)?;
//! key.set_address_type(AddressType::P2wpkh);
//! println!("{} {}", key.address()?, key.to_wif().as_str());
//! # Ok::<(), keyforge::prelude::Error>(())
//! ```
//!
//! ## Features
//!
//! - `algorithms` (default): curve engine, digests and text encodings
//! - `keys` (default): private keys, WIF, BIP38 and address derivation
//! - `serde`: `Serialize`/`Deserialize` for the shared public types
//! - `full`: All features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`keyforge-params`]: curve constants, version bytes, BIP38 cost
//! - [`keyforge-api`]: error taxonomy and shared types
//! - [`keyforge-internal`]: byte helpers
//! - [`keyforge-common`]: secret storage and modular arithmetic
//! - [`keyforge-algorithms`]: secp256k1, hashing, encodings, scrypt, AES
//! - [`keyforge-keys`]: keys, key material and addresses

#![forbid(unsafe_code)]

// Core re-exports (always available)
pub use keyforge_api as api;
pub use keyforge_common as common;
pub use keyforge_internal as internal;
pub use keyforge_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use keyforge_algorithms as algorithms;

#[cfg(feature = "keys")]
pub use keyforge_keys as keys;

/// Common imports for keyforge users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export shared types and traits
    pub use crate::api::{AddressType, KeyFormat, Serialize, SerializeSecret};

    // Re-export security types
    pub use crate::common::SecretBuffer;
    pub use zeroize::Zeroizing;

    pub use rand::rngs::OsRng;

    #[cfg(feature = "keys")]
    pub use crate::keys::{
        convert_public_key, derive_address, eip55_checksum, public_key, Bip38Params,
        KeyMaterial, PrivateKey, PublicKey,
    };
}

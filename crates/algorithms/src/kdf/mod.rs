//! Key derivation functions
//!
//! scrypt is the only KDF keyforge needs: BIP38 stretches the passphrase
//! with it before AES encryption.

pub mod scrypt;

pub use self::scrypt::{scrypt, ScryptParams};

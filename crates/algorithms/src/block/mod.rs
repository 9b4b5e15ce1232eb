//! Block cipher primitives
//!
//! Only AES-256 in single-block mode is needed: BIP38 encrypts the two
//! halves of a masked scalar independently.

pub mod aes;

pub use aes::Aes256;

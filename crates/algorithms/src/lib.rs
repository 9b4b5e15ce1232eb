//! Primitive layer of keyforge
//!
//! This crate holds everything that works on bytes and integers rather than
//! on keys:
//!
//! - secp256k1 group arithmetic over arbitrary-precision integers ([`ec`])
//! - SHA-256, RIPEMD-160 and Keccak-256 digests plus the Bitcoin composites ([`hash`])
//! - Base58, Base58Check and SegWit Bech32/Bech32m ([`encoding`])
//! - scrypt and AES-256 as used by BIP38 ([`kdf`], [`block`])
//! - uniform private scalar generation ([`random`])
//!
//! None of the curve code is constant time. Callers handling secrets on
//! shared hardware should be aware of this.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Block cipher used by BIP38
pub mod block;
pub use block::Aes256;

// Digests
pub mod hash;

// Text encodings
pub mod encoding;

// Key derivation
pub mod kdf;
pub use kdf::ScryptParams;

// Elliptic curve primitives
pub mod ec;
pub use ec::k256::{secp256k1, AffinePoint, CurveParameters, Scalar};

// Private scalar generation
pub mod random;

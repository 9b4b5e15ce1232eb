//! Public API traits and types for the keyforge library
//!
//! This crate provides the public API surface shared by the keyforge crates:
//! the error taxonomy, the closed set of address kinds, public key formats
//! and the byte-serialization traits.

#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use traits::{Serialize, SerializeSecret};
pub use types::{AddressType, KeyFormat};

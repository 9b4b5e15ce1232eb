//! Common implementations and shared functionality for the keyforge library
//!
//! This crate provides the secret storage type used for private scalars and
//! the modular arithmetic the curve engine is built on.

#![forbid(unsafe_code)]

pub mod math_common;
pub mod security;

// Re-export core security types
pub use security::SecretBuffer;

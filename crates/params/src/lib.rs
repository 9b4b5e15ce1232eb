//! Constant values for the keyforge library
//!
//! Curve parameters, serialization sizes, version bytes and the fixed
//! cost parameters of the passphrase encryption scheme. Nothing here
//! allocates; the arithmetic crates turn the byte arrays into integers once.

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

pub mod traditional;
pub mod utils;

pub use traditional::{bip38, bitcoin, ethereum, secp256k1};

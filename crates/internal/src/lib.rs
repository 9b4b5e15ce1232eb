//! Internal utilities for the keyforge library
//!
//! Byte-level helpers shared by the arithmetic and key crates. Nothing in
//! here is part of the public API contract.

#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]

pub mod bytes;
pub mod constant_time;

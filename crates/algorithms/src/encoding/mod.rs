//! Text encodings for keys and addresses
//!
//! - [`base58`]: Bitcoin's Base58 alphabet and Base58Check framing
//! - [`bech32`]: SegWit addresses, Bech32 for v0 and Bech32m for v1+

pub mod base58;
pub mod bech32;

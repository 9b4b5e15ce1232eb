//! Constants for secp256k1 keys and the formats built on them

pub mod bip38;
pub mod bitcoin;
pub mod ethereum;
pub mod secp256k1;

//! Traits shared by the keyforge key types

pub mod serialize;

pub use serialize::{Serialize, SerializeSecret};

//! Constants shared by the hashing, encoding and cipher helpers

pub mod hash;
pub mod symmetric;

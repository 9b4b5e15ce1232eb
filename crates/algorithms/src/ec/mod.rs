//! Elliptic curve primitives
//!
//! keyforge works on a single curve, secp256k1, implemented from first
//! principles over arbitrary-precision integers in [`k256`].

pub mod k256;

pub use k256::{AffinePoint as K256Point, Scalar as K256Scalar};

//! Koblitz secp256k1 Elliptic Curve Primitives
//!
//! The curve equation is y² = x³ + 7 over the prime field F_p where:
//! - p = 2^256 - 2^32 - 977
//! - The curve order n = 0xFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141
//!
//! Arithmetic is done on [`BigUint`] values reduced mod p after every step.
//! Points travel as [`AffinePoint`]s, with `(0, 0)` standing for the point
//! at infinity, and are lifted to Jacobian coordinates internally so that
//! a scalar multiplication costs a single field inversion.
//!
//! Nothing here is constant time: scalar multiplication branches on the
//! bits of the scalar and bignum operations leak operand sizes.

mod constants;
mod point;
mod recovery;
mod scalar;

pub use constants::{
    K256_FIELD_ELEMENT_SIZE, K256_POINT_COMPRESSED_SIZE, K256_POINT_UNCOMPRESSED_SIZE,
    K256_SCALAR_SIZE,
};
pub use point::AffinePoint;
pub use scalar::Scalar;

use keyforge_common::math_common::to_be_bytes_fixed;
use keyforge_params::secp256k1::{
    CURVE_B, FIELD_BITS, FIELD_MODULUS, GENERATOR_X, GENERATOR_Y, GROUP_ORDER,
};
use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;

/// Domain parameters of a short Weierstrass curve y² = x³ + b with a = 0
///
/// The only instance is the process-wide secp256k1 value returned by
/// [`secp256k1`]; it is built on first use and never mutated.
#[derive(Debug)]
pub struct CurveParameters {
    p: BigUint,
    n: BigUint,
    b: BigUint,
    gx: BigUint,
    gy: BigUint,
    bit_size: usize,
    // (p + 1) / 4, valid because p ≡ 3 (mod 4)
    sqrt_exponent: BigUint,
}

static SECP256K1: Lazy<CurveParameters> = Lazy::new(|| {
    let p = BigUint::from_bytes_be(&FIELD_MODULUS);
    let sqrt_exponent = (&p + BigUint::one()) >> 2;
    CurveParameters {
        n: BigUint::from_bytes_be(&GROUP_ORDER),
        b: BigUint::from(CURVE_B),
        gx: BigUint::from_bytes_be(&GENERATOR_X),
        gy: BigUint::from_bytes_be(&GENERATOR_Y),
        bit_size: FIELD_BITS,
        sqrt_exponent,
        p,
    }
});

/// The secp256k1 curve
pub fn secp256k1() -> &'static CurveParameters {
    &SECP256K1
}

/// Get the standard base point G of the secp256k1 curve
pub fn base_point_g() -> AffinePoint {
    secp256k1().generator()
}

/// Scalar multiplication with the base point: scalar * G
pub fn scalar_mult_base_g(scalar: &Scalar) -> AffinePoint {
    secp256k1().scalar_base_mult(&scalar.to_biguint())
}

impl CurveParameters {
    /// Field modulus p
    pub fn p(&self) -> &BigUint {
        &self.p
    }

    /// Group order n
    pub fn n(&self) -> &BigUint {
        &self.n
    }

    /// Curve constant b
    pub fn b(&self) -> &BigUint {
        &self.b
    }

    /// Size of the field in bits
    pub fn bit_size(&self) -> usize {
        self.bit_size
    }

    /// Base point G
    pub fn generator(&self) -> AffinePoint {
        AffinePoint::from_reduced(self.gx.clone(), self.gy.clone())
    }

    /// Whether (x, y) satisfies y² ≡ x³ + b (mod p)
    pub fn is_on_curve(&self, x: &BigUint, y: &BigUint) -> bool {
        let lhs = (y * y) % &self.p;
        lhs == self.y_squared(x)
    }

    /// x³ + b mod p
    fn y_squared(&self, x: &BigUint) -> BigUint {
        (x.modpow(&BigUint::from(3u32), &self.p) + &self.b) % &self.p
    }
}

pub(crate) fn is_odd(x: &BigUint) -> bool {
    (x & &BigUint::one()).is_one()
}

/// Big-endian encoding left-padded to the field width
///
/// Callers pass values already reduced mod p or n; anything wider is
/// reduced mod p first.
pub(crate) fn field_bytes(x: &BigUint) -> [u8; K256_FIELD_ELEMENT_SIZE] {
    match to_be_bytes_fixed(x) {
        Some(bytes) => bytes,
        None => field_bytes(&(x % secp256k1().p())),
    }
}

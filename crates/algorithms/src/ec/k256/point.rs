//! secp256k1 point arithmetic
//!
//! Doubling follows "dbl-2009-l" and addition "add-2007-bl" from the
//! Explicit-Formulas Database, both specialised to a = 0.

use keyforge_common::math_common::{mod_add, mod_inv_prime, mod_mul, mod_neg, mod_sub};
use keyforge_params::secp256k1::{TAG_COMPRESSED_EVEN, TAG_COMPRESSED_ODD, TAG_UNCOMPRESSED};
use num_bigint::BigUint;
use num_traits::{One, Zero};

use super::constants::{
    K256_FIELD_ELEMENT_SIZE, K256_POINT_COMPRESSED_SIZE, K256_POINT_UNCOMPRESSED_SIZE,
};
use super::{field_bytes, is_odd, secp256k1, CurveParameters};

/// A point in affine coordinates
///
/// Both coordinates are kept reduced mod p. `(0, 0)` is not on the curve
/// and stands for the point at infinity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AffinePoint {
    x: BigUint,
    y: BigUint,
}

impl AffinePoint {
    /// Build a point from coordinates, reducing both mod p
    ///
    /// No curve membership check is made; see
    /// [`CurveParameters::is_on_curve`].
    pub fn new(x: BigUint, y: BigUint) -> Self {
        let p = secp256k1().p();
        AffinePoint {
            x: x % p,
            y: y % p,
        }
    }

    pub(crate) fn from_reduced(x: BigUint, y: BigUint) -> Self {
        AffinePoint { x, y }
    }

    /// The point at infinity
    pub fn identity() -> Self {
        AffinePoint {
            x: BigUint::zero(),
            y: BigUint::zero(),
        }
    }

    /// Check if this point is the identity element
    pub fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    /// x-coordinate
    pub fn x(&self) -> &BigUint {
        &self.x
    }

    /// y-coordinate
    pub fn y(&self) -> &BigUint {
        &self.y
    }

    /// x-coordinate as 32 big-endian bytes
    pub fn x_bytes(&self) -> [u8; K256_FIELD_ELEMENT_SIZE] {
        field_bytes(&self.x)
    }

    /// y-coordinate as 32 big-endian bytes
    pub fn y_bytes(&self) -> [u8; K256_FIELD_ELEMENT_SIZE] {
        field_bytes(&self.y)
    }

    /// Whether the y-coordinate is odd
    pub fn has_odd_y(&self) -> bool {
        is_odd(&self.y)
    }

    /// SEC1 compressed encoding: parity tag followed by x
    pub fn serialize_compressed(&self) -> [u8; K256_POINT_COMPRESSED_SIZE] {
        let mut out = [0u8; K256_POINT_COMPRESSED_SIZE];
        out[0] = if self.has_odd_y() {
            TAG_COMPRESSED_ODD
        } else {
            TAG_COMPRESSED_EVEN
        };
        out[1..].copy_from_slice(&self.x_bytes());
        out
    }

    /// SEC1 uncompressed encoding: 0x04 || x || y
    pub fn serialize_uncompressed(&self) -> [u8; K256_POINT_UNCOMPRESSED_SIZE] {
        let mut out = [0u8; K256_POINT_UNCOMPRESSED_SIZE];
        out[0] = TAG_UNCOMPRESSED;
        out[1..1 + K256_FIELD_ELEMENT_SIZE].copy_from_slice(&self.x_bytes());
        out[1 + K256_FIELD_ELEMENT_SIZE..].copy_from_slice(&self.y_bytes());
        out
    }
}

/// Point in Jacobian coordinates; Z = 0 is the point at infinity
#[derive(Clone, Debug)]
struct JacobianPoint {
    x: BigUint,
    y: BigUint,
    z: BigUint,
}

impl JacobianPoint {
    fn infinity() -> Self {
        JacobianPoint {
            x: BigUint::zero(),
            y: BigUint::zero(),
            z: BigUint::zero(),
        }
    }

    fn from_affine(point: &AffinePoint) -> Self {
        if point.is_identity() {
            return Self::infinity();
        }
        JacobianPoint {
            x: point.x.clone(),
            y: point.y.clone(),
            z: BigUint::one(),
        }
    }

    fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }
}

impl CurveParameters {
    /// 2·A
    pub fn double(&self, a: &AffinePoint) -> AffinePoint {
        let j = self.double_jacobian(&JacobianPoint::from_affine(a));
        self.to_affine(&j)
    }

    /// A + B
    pub fn add(&self, a: &AffinePoint, b: &AffinePoint) -> AffinePoint {
        let j = self.add_jacobian(&JacobianPoint::from_affine(a), &JacobianPoint::from_affine(b));
        self.to_affine(&j)
    }

    /// k·B by left-to-right double-and-add over the big-endian bytes of k
    ///
    /// k = 0 yields the identity.
    pub fn scalar_mult(&self, base: &AffinePoint, k: &BigUint) -> AffinePoint {
        let base = JacobianPoint::from_affine(base);
        let mut acc = JacobianPoint::infinity();
        for byte in k.to_bytes_be() {
            for bit in (0..8).rev() {
                acc = self.double_jacobian(&acc);
                if (byte >> bit) & 1 == 1 {
                    acc = self.add_jacobian(&base, &acc);
                }
            }
        }
        self.to_affine(&acc)
    }

    /// k·G
    pub fn scalar_base_mult(&self, k: &BigUint) -> AffinePoint {
        self.scalar_mult(&self.generator(), k)
    }

    fn to_affine(&self, point: &JacobianPoint) -> AffinePoint {
        if point.is_infinity() {
            return AffinePoint::identity();
        }
        let p = &self.p;
        let Some(z_inv) = mod_inv_prime(&point.z, p) else {
            return AffinePoint::identity();
        };
        let z_inv2 = mod_mul(&z_inv, &z_inv, p);
        let z_inv3 = mod_mul(&z_inv2, &z_inv, p);
        AffinePoint::from_reduced(mod_mul(&point.x, &z_inv2, p), mod_mul(&point.y, &z_inv3, p))
    }

    fn double_jacobian(&self, point: &JacobianPoint) -> JacobianPoint {
        if point.is_infinity() {
            return JacobianPoint::infinity();
        }
        let p = &self.p;
        let (x, y, z) = (&point.x, &point.y, &point.z);

        let a = mod_mul(x, x, p);
        let b = mod_mul(y, y, p);
        let c = mod_mul(&b, &b, p);

        // D = 2((X + B)² - A - C)
        let x_plus_b = mod_add(x, &b, p);
        let d = mod_sub(&mod_sub(&mod_mul(&x_plus_b, &x_plus_b, p), &a, p), &c, p);
        let d = mod_add(&d, &d, p);

        let e = mod_add(&mod_add(&a, &a, p), &a, p);
        let f = mod_mul(&e, &e, p);

        let x3 = mod_sub(&f, &mod_add(&d, &d, p), p);
        let c8 = mod_mul(&BigUint::from(8u32), &c, p);
        let y3 = mod_sub(&mod_mul(&e, &mod_sub(&d, &x3, p), p), &c8, p);
        let y_plus_y = mod_add(y, y, p);
        let z3 = mod_mul(&y_plus_y, z, p);

        JacobianPoint { x: x3, y: y3, z: z3 }
    }

    fn add_jacobian(&self, a: &JacobianPoint, b: &JacobianPoint) -> JacobianPoint {
        if a.is_infinity() {
            return b.clone();
        }
        if b.is_infinity() {
            return a.clone();
        }
        let p = &self.p;

        let z1z1 = mod_mul(&a.z, &a.z, p);
        let z2z2 = mod_mul(&b.z, &b.z, p);
        let u1 = mod_mul(&a.x, &z2z2, p);
        let u2 = mod_mul(&b.x, &z1z1, p);
        let s1 = mod_mul(&mod_mul(&a.y, &b.z, p), &z2z2, p);
        let s2 = mod_mul(&mod_mul(&b.y, &a.z, p), &z1z1, p);

        let h = mod_sub(&u2, &u1, p);
        let r_half = mod_sub(&s2, &s1, p);
        if h.is_zero() && r_half.is_zero() {
            return self.double_jacobian(a);
        }
        // h = 0 with r != 0 means B = -A; the formulas below then give Z3 = 0

        let two_h = mod_add(&h, &h, p);
        let i = mod_mul(&two_h, &two_h, p);
        let j = mod_mul(&h, &i, p);
        let r = mod_add(&r_half, &r_half, p);
        let v = mod_mul(&u1, &i, p);

        let x3 = mod_sub(&mod_sub(&mod_mul(&r, &r, p), &j, p), &mod_add(&v, &v, p), p);
        let s1j = mod_mul(&s1, &j, p);
        let y3 = mod_sub(&mod_mul(&r, &mod_sub(&v, &x3, p), p), &mod_add(&s1j, &s1j, p), p);
        let z_sum = mod_add(&a.z, &b.z, p);
        let z3 = mod_mul(
            &mod_sub(&mod_sub(&mod_mul(&z_sum, &z_sum, p), &z1z1, p), &z2z2, p),
            &h,
            p,
        );

        JacobianPoint { x: x3, y: y3, z: z3 }
    }
}

impl core::ops::Neg for &AffinePoint {
    type Output = AffinePoint;

    fn neg(self) -> AffinePoint {
        if self.is_identity() {
            return AffinePoint::identity();
        }
        AffinePoint::from_reduced(self.x.clone(), mod_neg(&self.y, secp256k1().p()))
    }
}

//! Recovering a point from its x-coordinate
//!
//! p ≡ 3 (mod 4), so a square root of a quadratic residue r is
//! r^((p+1)/4) mod p. Of the two roots ±y the caller picks one by parity.

use keyforge_common::math_common::{mod_exp, mod_mul, mod_neg};
use num_bigint::BigUint;

use super::{is_odd, AffinePoint, CurveParameters};
use crate::error::{Error, Result};

impl CurveParameters {
    /// Point with the given x-coordinate and y-parity, without validation
    ///
    /// If `x` has no point on the curve the result is meaningless. Use
    /// [`CurveParameters::point_from_x_checked`] for untrusted input.
    pub fn point_from_x(&self, x: &[u8], want_even: bool) -> AffinePoint {
        let x = BigUint::from_bytes_be(x);
        let y = self.sqrt_candidate(&self.y_squared(&x));
        AffinePoint::new(x, self.select_parity(y, want_even))
    }

    /// Point with the given x-coordinate and y-parity
    ///
    /// Fails with [`Error::CoordinateOutOfRange`] if x ≥ p and with
    /// [`Error::NoSuchPoint`] if x³ + 7 is not a square mod p.
    pub fn point_from_x_checked(&self, x: &[u8], want_even: bool) -> Result<AffinePoint> {
        let x = BigUint::from_bytes_be(x);
        if &x >= self.p() {
            return Err(Error::CoordinateOutOfRange);
        }
        let y2 = self.y_squared(&x);
        let y = self.sqrt_candidate(&y2);
        if mod_mul(&y, &y, self.p()) != y2 {
            return Err(Error::NoSuchPoint);
        }
        Ok(AffinePoint::from_reduced(x, self.select_parity(y, want_even)))
    }

    fn sqrt_candidate(&self, value: &BigUint) -> BigUint {
        mod_exp(value, &self.sqrt_exponent, self.p())
    }

    fn select_parity(&self, y: BigUint, want_even: bool) -> BigUint {
        if is_odd(&y) == want_even {
            mod_neg(&y, self.p())
        } else {
            y
        }
    }
}

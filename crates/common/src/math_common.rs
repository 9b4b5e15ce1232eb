//! Modular arithmetic over arbitrary-precision unsigned integers
//!
//! Inputs need not be reduced; every result is in [0, m).

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Perform modular exponentiation (a^e mod m)
pub fn mod_exp(a: &BigUint, e: &BigUint, m: &BigUint) -> BigUint {
    if m.is_one() {
        return BigUint::zero();
    }
    a.modpow(e, m)
}

/// Inverse of `a` modulo the prime `p`, by Fermat's little theorem
///
/// Returns `None` when `a` is a multiple of `p`.
pub fn mod_inv_prime(a: &BigUint, p: &BigUint) -> Option<BigUint> {
    let a = a % p;
    if a.is_zero() {
        return None;
    }
    let two = BigUint::from(2u32);
    Some(a.modpow(&(p - &two), p))
}

/// Perform modular addition: (a + b) mod m
pub fn mod_add(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a + b) % m
}

/// Perform modular subtraction: (a - b) mod m
pub fn mod_sub(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    ((a % m) + m - (b % m)) % m
}

/// Perform modular multiplication: (a * b) mod m
pub fn mod_mul(a: &BigUint, b: &BigUint, m: &BigUint) -> BigUint {
    (a * b) % m
}

/// Perform modular negation: (-a) mod m
pub fn mod_neg(a: &BigUint, m: &BigUint) -> BigUint {
    (m - (a % m)) % m
}

/// Big-endian encoding of `x` left-padded to exactly `N` bytes
///
/// Returns `None` when `x` needs more than `N` bytes.
pub fn to_be_bytes_fixed<const N: usize>(x: &BigUint) -> Option<[u8; N]> {
    keyforge_internal::bytes::left_pad::<N>(&x.to_bytes_be())
}

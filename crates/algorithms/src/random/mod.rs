//! Private scalar generation
//!
//! A scalar is drawn by reading 32 + 8 bytes from the RNG and mapping the
//! integer into [1, n-1] as `(v mod (n - 1)) + 1`. The eight surplus bytes
//! keep the modulo bias below 2⁻⁶⁴.
//!
//! [`random_scalar_mixed`] additionally folds caller-supplied entropy into
//! the RNG output, for callers that distrust their system RNG.

use keyforge_internal::bytes::xor_in_place;
use keyforge_params::secp256k1::{FIELD_BYTES, RANDOM_EXTRA_BYTES};
use num_bigint::BigUint;
use num_traits::One;
use rand::{CryptoRng, RngCore};
use tracing::trace;
use zeroize::Zeroizing;

use crate::ec::k256::{secp256k1, Scalar};
use crate::error::{Error, Result};

const DRAW_SIZE: usize = FIELD_BYTES + RANDOM_EXTRA_BYTES;

/// Draw a uniformly distributed scalar in [1, n-1]
pub fn random_scalar<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Scalar> {
    let mut draw = Zeroizing::new([0u8; DRAW_SIZE]);
    fill(rng, &mut draw[..])?;
    trace!("drew scalar from rng");
    reduce(&draw[..])
}

/// Draw a scalar in [1, n-1] with `extra` mixed into the RNG output
///
/// For each of the 40 drawn bytes, a random count c is read and c + 1
/// randomly chosen bytes of `extra` are XORed into it. An empty `extra`
/// behaves exactly like [`random_scalar`].
pub fn random_scalar_mixed<R: RngCore + CryptoRng>(rng: &mut R, extra: &[u8]) -> Result<Scalar> {
    if extra.is_empty() {
        return random_scalar(rng);
    }

    let mut draw = Zeroizing::new([0u8; DRAW_SIZE]);
    fill(rng, &mut draw[..])?;

    let mut counts = Zeroizing::new([0u8; DRAW_SIZE]);
    fill(rng, &mut counts[..])?;

    let mut mix = Zeroizing::new([0u8; DRAW_SIZE]);
    for (slot, &count) in mix.iter_mut().zip(counts.iter()) {
        for _ in 0..=count {
            *slot ^= extra[random_index(rng, extra.len())?];
        }
    }
    xor_in_place(&mut draw[..], &mix[..]);
    trace!(extra_len = extra.len(), "drew scalar with extra entropy");

    reduce(&draw[..])
}

fn reduce(draw: &[u8]) -> Result<Scalar> {
    let n_minus_one = secp256k1().n() - BigUint::one();
    let k = BigUint::from_bytes_be(draw) % n_minus_one + BigUint::one();
    Scalar::from_biguint(&k)
}

/// Uniform index in [0, len) by rejection sampling on u64
fn random_index<R: RngCore + CryptoRng>(rng: &mut R, len: usize) -> Result<usize> {
    let len = len as u64;
    let limit = u64::MAX - (u64::MAX % len);
    loop {
        let mut buf = [0u8; 8];
        fill(rng, &mut buf)?;
        let v = u64::from_be_bytes(buf);
        if v < limit {
            return Ok((v % len) as usize);
        }
    }
}

fn fill<R: RngCore + CryptoRng>(rng: &mut R, buf: &mut [u8]) -> Result<()> {
    rng.try_fill_bytes(buf).map_err(|e| Error::RandomGeneration {
        message: e.to_string(),
    })
}

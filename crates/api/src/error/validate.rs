//! Validation utilities shared by the keyforge crates

use super::{Error, Result};

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a scalar lies in [1, n-1]
///
/// The caller supplies the comparison results so this crate stays free of
/// any integer representation.
#[inline(always)]
pub fn scalar_range(is_zero: bool, below_order: bool) -> Result<()> {
    if is_zero || !below_order {
        return Err(Error::ScalarOutOfRange);
    }
    Ok(())
}

/// Validate that `text` is exactly `digits` hex digits
pub fn hex_digits(text: &str, digits: usize) -> Result<()> {
    if text.len() != digits {
        return Err(Error::InvalidHexString {
            reason: "wrong number of hex digits",
        });
    }
    if !text.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(Error::InvalidHexString {
            reason: "non-hex character",
        });
    }
    Ok(())
}

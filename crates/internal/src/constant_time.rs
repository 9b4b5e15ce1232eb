//! Constant-time comparison of checksums and salts

use subtle::ConstantTimeEq;

/// Constant-time comparison of two byte slices
///
/// Returns true if the slices are equal, false otherwise. Slices of
/// different length compare unequal immediately; only the contents are
/// compared in constant time.
pub fn ct_eq<A, B>(a: A, b: B) -> bool
where
    A: AsRef<[u8]>,
    B: AsRef<[u8]>,
{
    let a = a.as_ref();
    let b = b.as_ref();

    if a.len() != b.len() {
        return false;
    }

    a.ct_eq(b).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ct_eq() {
        assert!(ct_eq([1u8, 2, 3, 4], [1u8, 2, 3, 4]));
        assert!(!ct_eq([1u8, 2, 3, 4], [1u8, 2, 3, 5]));
        assert!(!ct_eq([1u8, 2, 3], [1u8, 2, 3, 4]));
        assert!(ct_eq([0u8; 0], [0u8; 0]));
    }
}

//! Secret data types with guaranteed zeroization

use core::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Fixed-size secret buffer that guarantees zeroization
///
/// Holds private scalars. The contents are wiped on drop and never
/// appear in `Debug` output.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretBuffer<const N: usize> {
    data: [u8; N],
}

impl<const N: usize> SecretBuffer<N> {
    /// Create a new secret buffer with the given data
    pub fn new(data: [u8; N]) -> Self {
        Self { data }
    }

    /// Create a zeroed secret buffer
    pub fn zeroed() -> Self {
        Self { data: [0u8; N] }
    }

    /// Get the length of the buffer
    pub fn len(&self) -> usize {
        N
    }

    /// Check if the buffer is empty (always false for non-zero N)
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Copy the contents out as a plain array
    ///
    /// The copy is not zeroized; callers wrap it when it must be.
    pub fn to_array(&self) -> [u8; N] {
        self.data
    }
}

impl<const N: usize> AsRef<[u8]> for SecretBuffer<N> {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl<const N: usize> AsMut<[u8]> for SecretBuffer<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

impl<const N: usize> PartialEq for SecretBuffer<N> {
    fn eq(&self, other: &Self) -> bool {
        keyforge_internal::constant_time::ct_eq(self.data, other.data)
    }
}

impl<const N: usize> Eq for SecretBuffer<N> {}

impl<const N: usize> fmt::Debug for SecretBuffer<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBuffer<{}>([REDACTED])", N)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_is_redacted() {
        let buf = SecretBuffer::new([0xAB; 4]);
        let shown = format!("{:?}", buf);
        assert_eq!(shown, "SecretBuffer<4>([REDACTED])");
        assert!(!shown.contains("171"));
    }

    #[test]
    fn test_zeroize() {
        let mut buf = SecretBuffer::new([7u8; 8]);
        buf.zeroize();
        assert_eq!(buf, SecretBuffer::<8>::zeroed());
        assert_eq!(buf.len(), 8);
        assert!(!buf.is_empty());
    }

    #[test]
    fn test_equality() {
        let a = SecretBuffer::new([1u8, 2, 3]);
        let mut b = a.clone();
        assert_eq!(a, b);
        b.as_mut()[2] = 4;
        assert_ne!(a, b);
        assert_eq!(a.to_array(), [1, 2, 3]);
    }
}

//! Fixed-width byte helpers

/// Left-pad a big-endian integer encoding to exactly `N` bytes
///
/// Returns `None` when the significant part does not fit. Leading zero
/// bytes of the input are ignored, so over-long encodings of small values
/// are accepted.
pub fn left_pad<const N: usize>(bytes: &[u8]) -> Option<[u8; N]> {
    let first = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    let significant = &bytes[first..];
    if significant.len() > N {
        return None;
    }
    let mut out = [0u8; N];
    out[N - significant.len()..].copy_from_slice(significant);
    Some(out)
}

/// XOR `src` into `dst` byte by byte
///
/// Only the common prefix of the two slices is touched.
pub fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}

//! scrypt (RFC 7914)

use keyforge_params::bip38::{SCRYPT_LOG_N, SCRYPT_P, SCRYPT_R};
use tracing::trace;

use crate::error::{Error, Result};

/// scrypt cost parameters
///
/// `log_n` is the base-2 logarithm of the CPU/memory cost N. The default is
/// the cost BIP38 fixes (N = 16384, r = 8, p = 8); lower values exist for
/// tests and must never be used to produce keys meant for other software.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScryptParams {
    /// log2(N)
    pub log_n: u8,
    /// Block size
    pub r: u32,
    /// Parallelism
    pub p: u32,
}

impl ScryptParams {
    /// Create a parameter set
    pub const fn new(log_n: u8, r: u32, p: u32) -> Self {
        ScryptParams { log_n, r, p }
    }
}

impl Default for ScryptParams {
    fn default() -> Self {
        ScryptParams::new(SCRYPT_LOG_N, SCRYPT_R, SCRYPT_P)
    }
}

/// Derive `out.len()` bytes from `password` and `salt`
pub fn scrypt(password: &[u8], salt: &[u8], params: &ScryptParams, out: &mut [u8]) -> Result<()> {
    trace!(log_n = params.log_n, r = params.r, p = params.p, len = out.len(), "scrypt");
    let inner = ::scrypt::Params::new(params.log_n, params.r, params.p, out.len()).map_err(|e| {
        Error::KeyDerivation {
            message: e.to_string(),
        }
    })?;
    ::scrypt::scrypt(password, salt, &inner, out).map_err(|e| Error::KeyDerivation {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 7914 section 12, first vector
    #[test]
    fn test_rfc7914_empty_vector() {
        let mut out = [0u8; 64];
        scrypt(b"", b"", &ScryptParams::new(4, 1, 1), &mut out).unwrap();
        assert_eq!(
            hex::encode(out),
            "77d6576238657b203b19ca42c18a0497f16b4844e3074ae8dfdffa3fede21442\
             fcd0069ded0948f8326a753a0fc81f17e8d3e0fb2e0d3628cf35e20c38d18906"
        );
    }

    #[test]
    fn test_default_is_bip38_cost() {
        let params = ScryptParams::default();
        assert_eq!((params.log_n, params.r, params.p), (14, 8, 8));
    }

    #[test]
    fn test_invalid_params() {
        let mut out = [0u8; 64];
        let err = scrypt(b"pw", b"salt", &ScryptParams::new(4, 0, 1), &mut out).unwrap_err();
        assert!(matches!(err, Error::KeyDerivation { .. }));
    }
}

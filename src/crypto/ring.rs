use super::{CryptoError, Cryptographer, HmacKey};
use crate::credentials::DigestAlgorithm;
use failure::err_msg;
use ring::hmac;
use std::convert::TryFrom;

impl From<ring::error::Unspecified> for CryptoError {
    // Ring's errors are entirely opaque
    fn from(_: ring::error::Unspecified) -> Self {
        CryptoError::Other(err_msg("Unspecified ring error"))
    }
}

pub struct RingCryptographer;

struct RingHmacKey(hmac::Key);

impl HmacKey for RingHmacKey {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let tag = hmac::sign(&self.0, data);
        Ok(tag.as_ref().to_vec())
    }
}

impl Cryptographer for RingCryptographer {
    fn new_key(
        &self,
        algorithm: DigestAlgorithm,
        key: &[u8],
    ) -> Result<Box<dyn HmacKey>, CryptoError> {
        // ring accepts keys of any length, hashing long ones per RFC 2104
        let k = hmac::Key::new(hmac::Algorithm::try_from(algorithm)?, key);
        Ok(Box::new(RingHmacKey(k)))
    }

    fn constant_time_compare(&self, a: &[u8], b: &[u8]) -> bool {
        ring::constant_time::verify_slices_are_equal(a, b).is_ok()
    }
}

impl TryFrom<DigestAlgorithm> for hmac::Algorithm {
    type Error = CryptoError;
    fn try_from(algorithm: DigestAlgorithm) -> Result<Self, CryptoError> {
        match algorithm {
            DigestAlgorithm::Sha1 => Ok(hmac::HMAC_SHA1_FOR_LEGACY_USE_ONLY),
            DigestAlgorithm::Sha256 => Ok(hmac::HMAC_SHA256),
        }
    }
}

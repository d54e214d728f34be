//! Pluggable cryptographic backend.
//!
//! All HMAC computation and MAC comparison goes through a global [`Cryptographer`].  With the
//! default `use_ring` feature this is initialized automatically; otherwise an implementation
//! must be installed with [`set_cryptographer`] before any MAC is calculated.

use crate::credentials::DigestAlgorithm;
use failure::Fail;

mod holder;
pub(crate) use holder::get_cryptographer;
pub use holder::{set_boxed_cryptographer, set_cryptographer, SetCryptographerError};

#[cfg(feature = "use_ring")]
mod ring;

#[derive(Fail, Debug)]
pub enum CryptoError {
    /// The backend has no implementation of the requested digest.
    #[fail(display = "Digest algorithm {} is unsupported by this Cryptographer", _0)]
    UnsupportedDigest(DigestAlgorithm),

    /// The key material could not be used to initialize the keyed hash.
    #[fail(display = "Key rejected by this Cryptographer: {}", _0)]
    InvalidKey(String),

    /// No backend has been installed.
    #[fail(display = "No Cryptographer has been set")]
    Uninitialized,

    /// Any other backend failure.
    #[fail(display = "{}", _0)]
    Other(#[fail(cause)] failure::Error),
}

/// A keyed hash, initialized with a key and ready to sign data.
pub trait HmacKey: Send + Sync {
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// An object that implements the cryptographic operations this crate needs.
pub trait Cryptographer: Send + Sync + 'static {
    /// Initialize a keyed hash for `algorithm` with the given key bytes.
    fn new_key(
        &self,
        algorithm: DigestAlgorithm,
        key: &[u8],
    ) -> Result<Box<dyn HmacKey>, CryptoError>;

    /// Compare two byte strings in time independent of their contents.
    fn constant_time_compare(&self, a: &[u8], b: &[u8]) -> bool;
}

pub(crate) fn new_key(
    algorithm: DigestAlgorithm,
    key: &[u8],
) -> Result<Box<dyn HmacKey>, CryptoError> {
    get_cryptographer()?.new_key(algorithm, key)
}

/// Constant-time comparison; an uninitialized backend never reports equality.
pub(crate) fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    match get_cryptographer() {
        Ok(c) => c.constant_time_compare(a, b),
        Err(_) => false,
    }
}

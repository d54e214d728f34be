use super::{CryptoError, Cryptographer};
use failure::Fail;
use once_cell::sync::OnceCell;

static BACKEND: OnceCell<&'static dyn Cryptographer> = OnceCell::new();

/// Returned when a backend is installed after another one already claimed the slot.
#[derive(Debug, Fail)]
#[fail(display = "A Cryptographer is already installed")]
pub struct SetCryptographerError(());

/// Install an owned backend.  The box is leaked, since the backend lives for the rest of the
/// process.
pub fn set_boxed_cryptographer(c: Box<dyn Cryptographer>) -> Result<(), SetCryptographerError> {
    set_cryptographer(Box::leak(c))
}

/// Install the backend used for every MAC and MAC comparison in this crate.
///
/// Only the first installation wins.  With `use_ring`, the ring backend installs itself the
/// first time a MAC is needed, so a custom backend must be installed before that.
pub fn set_cryptographer(c: &'static dyn Cryptographer) -> Result<(), SetCryptographerError> {
    BACKEND.set(c).map_err(|_| SetCryptographerError(()))
}

pub(crate) fn get_cryptographer() -> Result<&'static dyn Cryptographer, CryptoError> {
    install_default();
    BACKEND.get().copied().ok_or(CryptoError::Uninitialized)
}

#[cfg(feature = "use_ring")]
fn install_default() {
    // losing the race to a caller-installed backend is fine
    let _ = set_cryptographer(&super::ring::RingCryptographer);
}

#[cfg(not(feature = "use_ring"))]
fn install_default() {}

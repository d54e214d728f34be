use crate::error::*;
use rand::rngs::OsRng;
use rand::RngCore;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Length of generated nonces, in characters.
pub const NONCE_LENGTH: usize = 6;

const NONCE_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Create a random alphanumeric string of `len` characters drawn from the OS CSPRNG.
///
/// Each character is selected uniformly from `A-Za-z0-9`.  No attempt is made to avoid
/// repeats; replay detection belongs to the server.
pub fn random_nonce(len: usize) -> Result<String> {
    // largest multiple of the alphabet size that fits in a byte; anything above is rejected
    let limit = 256 - (256 % NONCE_ALPHABET.len());
    let mut rng = OsRng;
    let mut nonce = String::with_capacity(len);
    let mut buf = [0u8; 16];
    while nonce.len() < len {
        rng.try_fill_bytes(&mut buf)?;
        for b in buf.iter().map(|b| *b as usize).filter(|b| *b < limit) {
            nonce.push(NONCE_ALPHABET[b % NONCE_ALPHABET.len()] as char);
            if nonce.len() == len {
                break;
            }
        }
    }
    Ok(nonce)
}

/// Whole seconds since the epoch, truncated toward zero, negative before it.
pub(crate) fn unix_secs(t: SystemTime) -> i64 {
    match t.duration_since(UNIX_EPOCH) {
        Ok(d) => d.as_secs() as i64,
        Err(e) => -(e.duration().as_secs() as i64),
    }
}

/// Inverse of [`unix_secs`], or None if the platform cannot represent the time.
pub(crate) fn from_unix_secs(secs: i64) -> Option<SystemTime> {
    if secs >= 0 {
        UNIX_EPOCH.checked_add(Duration::from_secs(secs as u64))
    } else {
        UNIX_EPOCH.checked_sub(Duration::from_secs(secs.unsigned_abs()))
    }
}

use crate::b64;
use crate::canonical::CanonicalRequest;
use crate::credentials::{Credentials, DigestAlgorithm};
use crate::crypto;
use crate::error::*;
use crate::util::unix_secs;
use base64::Engine;
use log::trace;
use std::fmt;
use std::time::SystemTime;

/// Mac represents a message authentication code, the signature in a Hawk transaction.
///
/// Macs display as standard, padded base64 with no line wrapping, and compare in constant time.
#[derive(Debug, Clone)]
pub struct Mac(Vec<u8>);

impl Mac {
    /// MAC the UTF-8 bytes of `text` using the key and algorithm from `credentials`.
    pub fn calculate(credentials: &Credentials, text: &str) -> Result<Mac> {
        let key = crypto::new_key(credentials.algorithm(), credentials.key())?;
        Ok(Mac(key.sign(text.as_bytes())?))
    }

    /// MAC the canonical string of the given request.
    pub fn for_request(credentials: &Credentials, request: &CanonicalRequest) -> Result<Mac> {
        let text = request.canonical_string();
        trace!("normalized {} string: {:?}", request.auth_type(), text);
        Mac::calculate(credentials, &text)
    }

    /// Parse a base64-encoded MAC, as carried in headers and bewits.
    pub fn from_base64(s: &str) -> Result<Mac> {
        Ok(Mac(b64::STANDARD_ENGINE.decode(s)?))
    }

    pub fn to_base64(&self) -> String {
        b64::STANDARD_ENGINE.encode(&self.0)
    }
}

/// MAC the decimal representation of a timestamp with a fixed placeholder credential.
///
/// The result is deterministic for a given second, and is used to sign the server's time in
/// clock-skew responses.
pub fn timestamp_mac(ts: SystemTime) -> Result<Mac> {
    let credentials = Credentials::new("dummy", "dummy", DigestAlgorithm::Sha256)?;
    Mac::calculate(&credentials, &unix_secs(ts).to_string())
}

impl fmt::Display for Mac {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.to_base64())
    }
}

impl AsRef<[u8]> for Mac {
    fn as_ref(&self) -> &[u8] {
        &self.0[..]
    }
}

impl From<Vec<u8>> for Mac {
    fn from(original: Vec<u8>) -> Self {
        Mac(original)
    }
}

impl PartialEq for Mac {
    fn eq(&self, other: &Mac) -> bool {
        crypto::constant_time_compare(&self.0, &other.0)
    }
}

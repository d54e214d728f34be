use crate::error::*;
use std::fmt;
use std::str::FromStr;

/// The keyed-hash algorithm agreed between client and server.
///
/// Parsing is case-insensitive; display is lowercase.  There is no default: an unrecognized
/// name is an error rather than a guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DigestAlgorithm {
    Sha1,
    Sha256,
}

impl DigestAlgorithm {
    /// All algorithms this crate knows about.
    pub const ALL: [DigestAlgorithm; 2] = [DigestAlgorithm::Sha1, DigestAlgorithm::Sha256];

    /// The name of the keyed-hash function backing this algorithm.
    pub fn hash_name(self) -> &'static str {
        match self {
            DigestAlgorithm::Sha1 => "HMAC-SHA-1",
            DigestAlgorithm::Sha256 => "HMAC-SHA-256",
        }
    }
}

impl fmt::Display for DigestAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            DigestAlgorithm::Sha1 => "sha1",
            DigestAlgorithm::Sha256 => "sha256",
        })
    }
}

impl FromStr for DigestAlgorithm {
    type Err = Error;
    fn from_str(s: &str) -> Result<DigestAlgorithm> {
        match s.to_ascii_lowercase().as_str() {
            "sha1" => Ok(DigestAlgorithm::Sha1),
            "sha256" => Ok(DigestAlgorithm::Sha256),
            _ => Err(Error::InvalidArgument(format!(
                "Hawk algorithm \"{}\" is invalid",
                s
            ))),
        }
    }
}

/// Hawk credentials: an ID, the secret key associated with that ID, and the algorithm used to
/// MAC with it.
///
/// Credentials are immutable once built.  The id and key are opaque and are never normalized;
/// they compare (and order) by id, then key, then algorithm.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Credentials {
    id: String,
    key: Vec<u8>,
    algorithm: DigestAlgorithm,
}

impl Credentials {
    /// Build a set of credentials.  An empty id or an empty key counts as missing.
    pub fn new<S, B>(id: S, key: B, algorithm: DigestAlgorithm) -> Result<Credentials>
    where
        S: Into<String>,
        B: Into<Vec<u8>>,
    {
        let id = id.into();
        if id.is_empty() {
            return Err(Error::MissingField("id"));
        }
        let key = key.into();
        if key.is_empty() {
            return Err(Error::MissingField("key"));
        }
        Ok(Credentials { id, key, algorithm })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The shared secret.  Treat it accordingly.
    pub fn key(&self) -> &[u8] {
        &self.key
    }

    pub fn algorithm(&self) -> DigestAlgorithm {
        self.algorithm
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("id", &self.id)
            .field("key", &"<redacted>")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}

use crate::canonical::{AuthType, CanonicalRequest};
use crate::credentials::Credentials;
use crate::error::*;
use crate::mac::Mac;
use crate::util::unix_secs;
use std::fmt;
use std::time::SystemTime;

/// Representation of a Hawk `Authorization` header value, including the `Hawk ` prefix.
///
/// Displaying a Header gives the exact header value:
///
/// ```text
/// Hawk id="<id>", ts="<ts>", nonce="<nonce>"[, hash="<hash>"][, ext="<ext>"], mac="<mac>"
/// ```
///
/// `ext` is left out when it is empty.
#[derive(Clone, PartialEq, Debug)]
pub struct Header {
    id: String,
    ts: SystemTime,
    nonce: String,
    mac: Mac,
    hash: Option<String>,
    ext: Option<String>,
}

impl Header {
    /// Sign a header-type canonical request, producing the header that carries it.
    ///
    /// None of the header components can contain the character `"`.
    pub fn sign(credentials: &Credentials, request: &CanonicalRequest) -> Result<Header> {
        if request.auth_type() != AuthType::Header {
            return Err(Error::InvalidArgument(format!(
                "cannot make an Authorization header for {} authentication",
                request.auth_type()
            )));
        }
        let nonce = request.nonce().ok_or(Error::MissingField("nonce"))?;

        let id = Header::check_component(credentials.id())?;
        let nonce = Header::check_component(nonce)?;
        let hash = match request.hash() {
            Some(hash) => Some(Header::check_component(hash)?),
            None => None,
        };
        let ext = match request.ext() {
            Some(ext) if !ext.is_empty() => Some(Header::check_component(ext)?),
            _ => None,
        };

        let mac = Mac::for_request(credentials, request)?;

        Ok(Header {
            id,
            ts: request.ts(),
            nonce,
            mac,
            hash,
            ext,
        })
    }

    /// Check a header component for validity.
    fn check_component(value: &str) -> Result<String> {
        if value.contains('\"') {
            return Err(Error::InvalidArgument(
                "Hawk header components cannot contain `\"`".to_string(),
            ));
        }
        if value.chars().any(|c| c.is_control()) {
            return Err(Error::InvalidArgument(
                "Hawk header components cannot contain control characters".to_string(),
            ));
        }
        Ok(value.to_string())
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn ts(&self) -> SystemTime {
        self.ts
    }

    pub fn nonce(&self) -> &str {
        &self.nonce
    }

    pub fn mac(&self) -> &Mac {
        &self.mac
    }

    pub fn hash(&self) -> Option<&str> {
        self.hash.as_deref()
    }

    pub fn ext(&self) -> Option<&str> {
        self.ext.as_deref()
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Hawk id=\"{}\", ts=\"{}\", nonce=\"{}\"",
            self.id,
            unix_secs(self.ts),
            self.nonce
        )?;
        if let Some(ref hash) = self.hash {
            write!(f, ", hash=\"{}\"", hash)?;
        }
        if let Some(ref ext) = self.ext {
            write!(f, ", ext=\"{}\"", ext)?;
        }
        write!(f, ", mac=\"{}\"", self.mac)
    }
}

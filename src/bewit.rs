use crate::b64;
use crate::canonical::{AuthType, CanonicalRequestBuilder};
use crate::credentials::Credentials;
use crate::error::*;
use crate::mac::Mac;
use crate::util::{from_unix_secs, unix_secs};
use base64::Engine;
use log::debug;
use std::borrow::Cow;
use std::convert::TryFrom;
use std::str;
use std::str::FromStr;
use std::time::{Duration, SystemTime};
use url::Url;

const BACKSLASH: u8 = b'\\';

/// A Bewit is a piece of data attached to a GET request that functions in place of a Hawk
/// Authentication header.  It contains an id, an expiration time, a MAC, and an optional `ext`
/// value.  These are available using accessor functions.
#[derive(Clone, Debug, PartialEq)]
pub struct Bewit<'a> {
    id: Cow<'a, str>,
    exp: SystemTime,
    mac: Mac,
    ext: Option<Cow<'a, str>>,
}

impl<'a> Bewit<'a> {
    /// Create a new Bewit with the given values.  This is a low-level function; see
    /// [`Bewit::with_ttl`] for an easier way to make a Bewit.
    pub fn new(id: &'a str, exp: SystemTime, mac: Mac, ext: Option<&'a str>) -> Bewit<'a> {
        Bewit {
            id: Cow::Borrowed(id),
            exp,
            mac,
            ext: ext.map(Cow::Borrowed),
        }
    }

    /// Make a bewit for `uri` that expires at `exp`.
    ///
    /// An `ext` containing `\` cannot be represented in the token and is rejected.
    pub fn with_expiry(
        credentials: &'a Credentials,
        uri: &Url,
        exp: SystemTime,
        ext: Option<&'a str>,
    ) -> Result<Bewit<'a>> {
        if let Some(ext) = ext {
            if ext.as_bytes().contains(&BACKSLASH) {
                return Err(Error::InvalidArgument(
                    "bewit ext may not contain `\\`".to_string(),
                ));
            }
        }
        // the token carries whole seconds only
        let exp = from_unix_secs(unix_secs(exp))
            .ok_or_else(|| Error::InvalidArgument("expiry out of range".to_string()))?;

        let request = CanonicalRequestBuilder::new(AuthType::Bewit)
            .ts(exp)
            .uri(uri)
            .ext(ext)
            .request()?;
        let mac = Mac::for_request(credentials, &request)?;

        Ok(Bewit::new(credentials.id(), exp, mac, ext))
    }

    /// Make a bewit for `uri` that is valid for `ttl` from now.  The TTL must be at least one
    /// second.
    pub fn with_ttl(
        credentials: &'a Credentials,
        uri: &Url,
        ttl: Duration,
        ext: Option<&'a str>,
    ) -> Result<Bewit<'a>> {
        if ttl.as_secs() == 0 {
            return Err(Error::InvalidArgument(
                "TTL must be a positive value".to_string(),
            ));
        }
        let exp = i64::try_from(ttl.as_secs())
            .ok()
            .and_then(|ttl| unix_secs(SystemTime::now()).checked_add(ttl))
            .and_then(from_unix_secs)
            .ok_or_else(|| Error::InvalidArgument("TTL out of range".to_string()))?;
        Bewit::with_expiry(credentials, uri, exp, ext)
    }

    /// Extract the `bewit` query parameter, if any, from a URL.  If the URL contains no bewit,
    /// the return value is `Ok(None)`.  If it contains a valid bewit, the result contains the
    /// bewit and the URL with that parameter removed, which is the URL the bewit's MAC covers.
    /// If it contains an invalid bewit, or more than one, the Result is an Err.
    pub fn from_url(uri: &Url) -> Result<Option<(Bewit<'a>, Url)>> {
        const PREFIX: &str = "bewit=";

        let query = match uri.query() {
            Some(q) => q,
            None => return Ok(None),
        };

        let mut bewit_components: Vec<&str> = vec![];
        let components: Vec<&str> = query
            .split('&')
            .filter(|comp| {
                if comp.starts_with(PREFIX) {
                    bewit_components.push(*comp);
                    false
                } else {
                    true
                }
            })
            .collect();

        match bewit_components.len() {
            0 => Ok(None),
            1 => {
                let bewit = Bewit::from_str(&bewit_components[0][PREFIX.len()..])?;
                let mut stripped = uri.clone();
                if components.is_empty() {
                    stripped.set_query(None);
                } else {
                    stripped.set_query(Some(&components.join("&")));
                }
                Ok(Some((bewit, stripped)))
            }
            _ => Err(InvalidBewit::Multiple.into()),
        }
    }

    /// Generate the fully-encoded string for this Bewit
    pub fn to_str(&self) -> String {
        let mut raw = format!("{}\\{}\\{}", self.id, unix_secs(self.exp), self.mac);
        if let Some(ref ext) = self.ext {
            if !ext.is_empty() {
                raw.push('\\');
                raw.push_str(ext);
            }
        }

        b64::BEWIT_ENGINE.encode(&raw)
    }

    /// Validate this bewit against the credentials for its id, the URL it was presented with
    /// (without the `bewit` parameter), and the current time.
    ///
    /// An expired bewit fails with [`Error::ExpiredBewit`]; a bewit whose MAC does not match
    /// fails with [`Error::MacMismatch`].
    pub fn validate(&self, credentials: &Credentials, uri: &Url, now: SystemTime) -> Result<()> {
        if self.id() != credentials.id() {
            debug!("bewit id {:?} does not match credentials", self.id());
            return Err(Error::MacMismatch);
        }

        if unix_secs(self.exp) <= unix_secs(now) {
            debug!("bewit for {:?} expired", self.id());
            return Err(Error::ExpiredBewit);
        }

        let request = CanonicalRequestBuilder::new(AuthType::Bewit)
            .ts(self.exp)
            .uri(uri)
            .ext(self.ext())
            .request()?;
        let expected = Mac::for_request(credentials, &request)?;
        if expected != self.mac {
            debug!("bewit for {:?} has an invalid MAC", self.id());
            return Err(Error::MacMismatch);
        }

        Ok(())
    }

    /// Get the Bewit's client identifier
    pub fn id(&self) -> &str {
        self.id.as_ref()
    }

    /// Get the expiration time of the bewit
    pub fn exp(&self) -> SystemTime {
        self.exp
    }

    /// Get the MAC included in the Bewit
    pub fn mac(&self) -> &Mac {
        &self.mac
    }

    /// Get the Bewit's `ext` field.
    pub fn ext(&self) -> Option<&str> {
        self.ext.as_ref().map(|cow| cow.as_ref())
    }
}

impl<'a> FromStr for Bewit<'a> {
    type Err = Error;
    fn from_str(bewit: &str) -> Result<Bewit<'a>> {
        let bewit = b64::BEWIT_ENGINE.decode(bewit)?;

        let parts: Vec<&[u8]> = bewit.split(|c| *c == BACKSLASH).collect();
        if parts.len() != 3 && parts.len() != 4 {
            return Err(InvalidBewit::Format.into());
        }

        let id = String::from_utf8(parts[0].to_vec()).map_err(|_| InvalidBewit::Id)?;
        if id.is_empty() {
            return Err(InvalidBewit::Id.into());
        }

        let exp = str::from_utf8(parts[1]).map_err(|_| InvalidBewit::Exp)?;
        let exp = i64::from_str(exp).map_err(|_| InvalidBewit::Exp)?;

        let mac = str::from_utf8(parts[2]).map_err(|_| InvalidBewit::Mac)?;
        let mac = Mac::from_base64(mac).map_err(|_| InvalidBewit::Mac)?;

        let ext = match parts.get(3) {
            Some(ext) if !ext.is_empty() => Some(Cow::Owned(
                String::from_utf8(ext.to_vec()).map_err(|_| InvalidBewit::Ext)?,
            )),
            _ => None,
        };

        Ok(Bewit {
            id: Cow::Owned(id),
            exp: from_unix_secs(exp).ok_or(InvalidBewit::Exp)?,
            mac,
            ext,
        })
    }
}

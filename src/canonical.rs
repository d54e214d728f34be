use crate::error::*;
use crate::util::unix_secs;
use crate::HAWK_VERSION;
use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;
use url::Url;

/// The kind of authentication being performed, which selects the shape of the canonical string
/// (and its first line).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuthType {
    /// Authentication via an `Authorization` header
    Header,
    /// Authentication via a `bewit` query parameter
    Bewit,
}

impl AuthType {
    pub const ALL: [AuthType; 2] = [AuthType::Header, AuthType::Bewit];
}

impl fmt::Display for AuthType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            AuthType::Header => "header",
            AuthType::Bewit => "bewit",
        })
    }
}

impl FromStr for AuthType {
    type Err = Error;
    fn from_str(s: &str) -> Result<AuthType> {
        match s.to_ascii_lowercase().as_str() {
            "header" => Ok(AuthType::Header),
            "bewit" => Ok(AuthType::Bewit),
            _ => Err(Error::InvalidArgument(format!(
                "Hawk authentication type \"{}\" is invalid",
                s
            ))),
        }
    }
}

/// The authenticatable fields of a request, normalized and ready to be serialized into the
/// string that gets MAC'd.
///
/// Instances are only available from [`CanonicalRequestBuilder::request`], which checks every
/// precondition, so serialization itself cannot fail.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalRequest<'a> {
    auth_type: AuthType,
    ts: SystemTime,
    nonce: Option<&'a str>,
    method: String,
    resource: String,
    host: String,
    port: u16,
    hash: Option<&'a str>,
    ext: Option<&'a str>,
    app: Option<&'a str>,
    dlg: Option<&'a str>,
}

impl<'a> CanonicalRequest<'a> {
    pub fn auth_type(&self) -> AuthType {
        self.auth_type
    }

    pub fn ts(&self) -> SystemTime {
        self.ts
    }

    pub fn nonce(&self) -> Option<&'a str> {
        self.nonce
    }

    /// The upper-cased method, or `GET` for bewits.
    pub fn method(&self) -> &str {
        &self.method
    }

    /// The raw path, plus `?` and the raw query if the URI had one.
    pub fn resource(&self) -> &str {
        &self.resource
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn hash(&self) -> Option<&'a str> {
        self.hash
    }

    pub fn ext(&self) -> Option<&'a str> {
        self.ext
    }

    pub fn app(&self) -> Option<&'a str> {
        self.app
    }

    pub fn dlg(&self) -> Option<&'a str> {
        self.dlg
    }

    /// Serialize the request into the exact string to be MAC'd.  Every line, including empty
    /// ones, ends with `\n`.
    pub fn canonical_string(&self) -> String {
        let (nonce, hash) = match self.auth_type {
            AuthType::Header => (self.nonce.unwrap_or_default(), self.hash.unwrap_or_default()),
            AuthType::Bewit => ("", ""),
        };

        let mut s = format!(
            "hawk.{version}.{auth_type}\n{ts}\n{nonce}\n{method}\n{resource}\n{host}\n{port}\n{hash}\n{ext}\n",
            version = HAWK_VERSION,
            auth_type = self.auth_type,
            ts = unix_secs(self.ts),
            nonce = nonce,
            method = self.method,
            resource = self.resource,
            host = self.host,
            port = self.port,
            hash = hash,
            ext = escape_ext(self.ext.unwrap_or_default()),
        );

        // Oz extension
        if let Some(app) = self.app {
            s.push_str(app);
            s.push('\n');
            s.push_str(self.dlg.unwrap_or_default());
            s.push('\n');
        }

        s
    }
}

/// Escape `\` before newlines, so that an escaped newline is never escaped twice.
fn escape_ext(ext: &str) -> String {
    ext.replace('\\', "\\\\").replace('\n', "\\n")
}

/// The explicit port, else the scheme's default.  `Url` forgets an explicit port equal to the
/// default of a scheme it knows (http, https, ws, wss, ftp), so those schemes always resolve.
fn port_of(uri: &Url) -> Result<u16> {
    uri.port_or_known_default().ok_or_else(|| {
        Error::InvalidArgument(format!("Unknown URI scheme \"{}\"", uri.scheme()))
    })
}

/// Collects the fields of a [`CanonicalRequest`].
///
/// All setters accept `Option`s so that callers can pass through values they may or may not
/// have; [`request`](CanonicalRequestBuilder::request) reports anything mandatory that is
/// still missing.
#[derive(Debug, Clone)]
pub struct CanonicalRequestBuilder<'a> {
    auth_type: AuthType,
    ts: Option<SystemTime>,
    uri: Option<&'a Url>,
    nonce: Option<&'a str>,
    method: Option<&'a str>,
    hash: Option<&'a str>,
    ext: Option<&'a str>,
    app: Option<&'a str>,
    dlg: Option<&'a str>,
}

impl<'a> CanonicalRequestBuilder<'a> {
    pub fn new(auth_type: AuthType) -> Self {
        CanonicalRequestBuilder {
            auth_type,
            ts: None,
            uri: None,
            nonce: None,
            method: None,
            hash: None,
            ext: None,
            app: None,
            dlg: None,
        }
    }

    /// Set the request timestamp (for bewits, the expiration time).
    pub fn ts<T: Into<Option<SystemTime>>>(mut self, ts: T) -> Self {
        self.ts = ts.into();
        self
    }

    /// Set the request URI.  Only the path, query, host, scheme and port are used.
    ///
    /// The port is the explicit one if the URI has it, otherwise the default for http, https,
    /// ws, wss or ftp.  Any other scheme without a port fails in
    /// [`request`](CanonicalRequestBuilder::request).
    pub fn uri<U: Into<Option<&'a Url>>>(mut self, uri: U) -> Self {
        self.uri = uri.into();
        self
    }

    /// Set the nonce.  Required for header authentication and ignored for bewits.
    pub fn nonce<S: Into<Option<&'a str>>>(mut self, nonce: S) -> Self {
        self.nonce = nonce.into();
        self
    }

    /// Set the HTTP method.  Required for header authentication; bewits always use `GET`.
    pub fn method<S: Into<Option<&'a str>>>(mut self, method: S) -> Self {
        self.method = method.into();
        self
    }

    /// Set the base64 payload hash.  Only included for header authentication.
    pub fn hash<S: Into<Option<&'a str>>>(mut self, hash: S) -> Self {
        self.hash = hash.into();
        self
    }

    pub fn ext<S: Into<Option<&'a str>>>(mut self, ext: S) -> Self {
        self.ext = ext.into();
        self
    }

    /// Set the Oz application id.  Without it, `dlg` is not part of the canonical string.
    pub fn app<S: Into<Option<&'a str>>>(mut self, app: S) -> Self {
        self.app = app.into();
        self
    }

    pub fn dlg<S: Into<Option<&'a str>>>(mut self, dlg: S) -> Self {
        self.dlg = dlg.into();
        self
    }

    /// Check the collected fields and produce the canonical request.
    pub fn request(self) -> Result<CanonicalRequest<'a>> {
        let ts = self.ts.ok_or(Error::MissingField("ts"))?;
        let uri = self.uri.ok_or(Error::MissingField("uri"))?;

        let method = match self.auth_type {
            AuthType::Header => {
                if self.nonce.is_none() {
                    return Err(Error::MissingField("nonce"));
                }
                self.method
                    .ok_or(Error::MissingField("method"))?
                    .to_uppercase()
            }
            AuthType::Bewit => "GET".to_string(),
        };

        let resource = match uri.query() {
            Some(query) => format!("{}?{}", uri.path(), query),
            None => uri.path().to_string(),
        };
        let host = uri
            .host_str()
            .ok_or(Error::MissingField("host"))?
            .to_lowercase();
        let port = port_of(uri)?;

        Ok(CanonicalRequest {
            auth_type: self.auth_type,
            ts,
            nonce: self.nonce,
            method,
            resource,
            host,
            port,
            hash: self.hash,
            ext: self.ext,
            app: self.app,
            dlg: self.dlg,
        })
    }
}

use crate::bewit::Bewit;
use crate::canonical::{AuthType, CanonicalRequestBuilder};
use crate::credentials::Credentials;
use crate::error::*;
use crate::header::Header;
use crate::payload::PayloadValidation;
use crate::util::{from_unix_secs, random_nonce, unix_secs, NONCE_LENGTH};
use log::debug;
use std::time::{Duration, SystemTime};
use url::Url;

/// Client-side configuration: which requests get Hawk authentication, and the payload policy.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClientConfig {
    path_prefix: Option<String>,
    payload_validation: PayloadValidation,
}

impl ClientConfig {
    /// Create a configuration.  A path prefix, if given, must start with `/`.
    pub fn new<S: Into<String>>(
        path_prefix: Option<S>,
        payload_validation: PayloadValidation,
    ) -> Result<ClientConfig> {
        let path_prefix: Option<String> = path_prefix.map(Into::into);
        if let Some(ref prefix) = path_prefix {
            if !prefix.starts_with('/') {
                return Err(Error::InvalidArgument(format!(
                    "Path prefix must start with \"/\" if present, got {:?}",
                    prefix
                )));
            }
        }
        Ok(ClientConfig {
            path_prefix,
            payload_validation,
        })
    }

    pub fn path_prefix(&self) -> Option<&str> {
        self.path_prefix.as_deref()
    }

    pub fn payload_validation(&self) -> PayloadValidation {
        self.payload_validation
    }

    /// Whether a request for `path` should carry Hawk authentication.
    ///
    /// Always true without a prefix.  With one, the path must start with it; a missing path
    /// passes.
    pub fn is_valid_for(&self, path: Option<&str>) -> bool {
        match (self.path_prefix.as_deref(), path) {
            (None, _) | (_, None) => true,
            (Some(prefix), Some(path)) => path.starts_with(prefix),
        }
    }
}

/// A Hawk client: a set of credentials plus the configuration that governs their use.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Client {
    config: ClientConfig,
    credentials: Credentials,
}

impl Client {
    pub fn new(credentials: Credentials, config: ClientConfig) -> Client {
        Client {
            config,
            credentials,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// See [`ClientConfig::is_valid_for`].
    pub fn is_valid_for(&self, path: Option<&str>) -> bool {
        self.config.is_valid_for(path)
    }

    /// Generate the value for the Hawk `Authorization` header of a request, using the current
    /// time and a fresh nonce.
    ///
    /// `hash` is the base64 payload MAC (see [`body_mac`](crate::body_mac)), if the payload is
    /// to be authenticated.  `app` and `dlg` are the Oz application and delegator; they are
    /// covered by the MAC but not carried in the header.
    pub fn authorization_header(
        &self,
        uri: &Url,
        method: &str,
        hash: Option<&str>,
        ext: Option<&str>,
        app: Option<&str>,
        dlg: Option<&str>,
    ) -> Result<String> {
        let nonce = random_nonce(NONCE_LENGTH)?;
        // whole seconds only
        let ts = from_unix_secs(unix_secs(SystemTime::now()))
            .ok_or_else(|| Error::InvalidArgument("system time out of range".to_string()))?;
        let request = CanonicalRequestBuilder::new(AuthType::Header)
            .ts(ts)
            .uri(uri)
            .nonce(nonce.as_str())
            .method(method)
            .hash(hash)
            .ext(ext)
            .app(app)
            .dlg(dlg)
            .request()?;
        let header = Header::sign(&self.credentials, &request)?;
        debug!("signed {} {} for {:?}", request.method(), uri, self.credentials.id());
        Ok(header.to_string())
    }

    /// Generate a bewit granting GET access to `uri` for `ttl`.
    pub fn bewit(&self, uri: &Url, ttl: Duration, ext: Option<&str>) -> Result<String> {
        Ok(Bewit::with_ttl(&self.credentials, uri, ttl, ext)?.to_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::credentials::DigestAlgorithm;

    fn credentials() -> Credentials {
        Credentials::new(
            "dh37fgj492je",
            "werxhqb98rpaxn39848xrunpaw3489ruxnpa98w4rxn",
            DigestAlgorithm::Sha256,
        )
        .unwrap()
    }

    fn api_config() -> ClientConfig {
        ClientConfig::new(Some("/api"), PayloadValidation::Never).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = ClientConfig::default();
        assert_eq!(config.path_prefix(), None);
        assert_eq!(config.payload_validation(), PayloadValidation::Never);
    }

    #[test]
    fn test_config_prefix_must_be_absolute() {
        match ClientConfig::new(Some("api"), PayloadValidation::Never) {
            Err(Error::InvalidArgument(_)) => {}
            r => panic!("unexpected {:?}", r),
        }
        let config = ClientConfig::new(None::<String>, PayloadValidation::Mandatory).unwrap();
        assert_eq!(config.payload_validation(), PayloadValidation::Mandatory);
    }

    #[test]
    fn test_is_valid_for_prefix() {
        let config = api_config();
        assert!(config.is_valid_for(Some("/api/x")));
        assert!(config.is_valid_for(Some("/api")));
        assert!(!config.is_valid_for(Some("/other")));
        assert!(!config.is_valid_for(Some("")));
        assert!(config.is_valid_for(None));
    }

    #[test]
    fn test_is_valid_for_no_prefix() {
        let client = Client::new(credentials(), ClientConfig::default());
        assert!(client.is_valid_for(Some("/api/x")));
        assert!(client.is_valid_for(Some("/other")));
        assert!(client.is_valid_for(Some("")));
        assert!(client.is_valid_for(None));
    }

    #[test]
    fn test_client_equality() {
        let a = Client::new(credentials(), api_config());
        assert_eq!(a, Client::new(credentials(), api_config()));
        assert_ne!(a, Client::new(credentials(), ClientConfig::default()));
    }

    #[cfg(feature = "use_ring")]
    #[test]
    fn test_authorization_header_shape() {
        let client = Client::new(credentials(), ClientConfig::default());
        let uri = Url::parse("http://example.com:8000/resource/1?b=1&a=2").unwrap();
        let header = client
            .authorization_header(&uri, "get", None, Some("some-app-ext-data"), None, None)
            .unwrap();
        assert!(header.starts_with("Hawk id=\"dh37fgj492je\", ts=\""));
        assert!(header.contains("\", ext=\"some-app-ext-data\", mac=\""));
        assert!(!header.contains("hash="));
    }

    #[cfg(feature = "use_ring")]
    #[test]
    fn test_authorization_header_unknown_scheme() {
        let client = Client::new(credentials(), ClientConfig::default());
        let uri = Url::parse("myscheme://example.com/resource").unwrap();
        match client.authorization_header(&uri, "GET", None, None, None, None) {
            Err(Error::InvalidArgument(_)) => {}
            r => panic!("unexpected {:?}", r),
        }
    }
}

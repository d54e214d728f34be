//! The `hawk-core` crate provides the signing core of Hawk HTTP authentication: the canonical
//! strings both sides MAC, the MACs themselves, `Authorization` header values, and bewits.
//!
//! It does no I/O.  Looking up credentials, detecting replayed nonces, and moving headers and
//! URLs over the network are left to the caller.
//!
//! # Examples
//!
//! ## Hawk Client
//!
//! A client builds a [`Client`] from its credentials and configuration, then asks it for the
//! value of the `Authorization` header for each request.
//!
//! ```
//! use hawk_core::{Client, ClientConfig, Credentials, DigestAlgorithm, PayloadValidation};
//! use url::Url;
//!
//! fn main() -> hawk_core::Result<()> {
//!     let credentials = Credentials::new(
//!         "dh37fgj492je",
//!         "werxhqb98rpaxn39848xrunpaw3489ruxnpa98w4rxn",
//!         DigestAlgorithm::Sha256,
//!     )?;
//!     let config = ClientConfig::new(Some("/resource"), PayloadValidation::Never)?;
//!     let client = Client::new(credentials, config);
//!
//!     let url = Url::parse("https://example.com/resource/1?b=1&a=2")?;
//!     assert!(client.is_valid_for(Some(url.path())));
//!
//!     let header = client.authorization_header(&url, "GET", None, Some("my-ext"), None, None)?;
//!     assert!(header.starts_with("Hawk id=\"dh37fgj492je\", ts=\""));
//!     assert!(header.contains("mac=\""));
//!     Ok(())
//! }
//! ```
//!
//! To authenticate a payload, MAC it first and pass the result as the `hash`:
//!
//! ```
//! # use hawk_core::{Client, ClientConfig, Credentials, DigestAlgorithm};
//! # use url::Url;
//! # fn main() -> hawk_core::Result<()> {
//! # let credentials = Credentials::new("id", "key", DigestAlgorithm::Sha256)?;
//! let hash = hawk_core::body_mac(&credentials, "text/plain; charset=utf-8", "hello")?;
//! let client = Client::new(credentials, ClientConfig::default());
//! let url = Url::parse("https://example.com/upload")?;
//! let header = client.authorization_header(
//!     &url, "POST", Some(hash.to_string().as_str()), None, None, None)?;
//! assert!(header.contains(&format!("hash=\"{}\"", hash)));
//! # Ok(())
//! # }
//! ```
//!
//! ## Bewits
//!
//! A bewit grants time-limited GET access to a single URL without any header.  The side that
//! receives it strips it from the URL and validates it against the credentials for its id.
//!
//! ```
//! use hawk_core::{Bewit, Credentials, DigestAlgorithm};
//! use std::time::{Duration, SystemTime};
//! use url::Url;
//!
//! fn main() -> hawk_core::Result<()> {
//!     let credentials = Credentials::new("me", "some-secret", DigestAlgorithm::Sha256)?;
//!     let mut url = Url::parse("https://example.com/resource?x=1")?;
//!     let bewit = Bewit::with_ttl(&credentials, &url, Duration::from_secs(60), None)?;
//!     url.query_pairs_mut().append_pair("bewit", &bewit.to_str());
//!
//!     let (received, stripped) = Bewit::from_url(&url)?.expect("bewit present");
//!     assert_eq!(received.id(), "me");
//!     received.validate(&credentials, &stripped, SystemTime::now())?;
//!     Ok(())
//! }
//! ```
//!
//! ## Lower level
//!
//! [`CanonicalRequestBuilder`] exposes the canonical string itself, and [`Mac`] and [`Header`]
//! operate on it directly, for callers that manage their own nonces and timestamps.
//!
//! # Features
//!
//! The `use_ring` feature (on by default) supplies HMAC and constant-time comparison via `ring`.
//! Without it, install a [`crypto::Cryptographer`] with [`crypto::set_cryptographer`] before
//! calculating any MAC.

mod b64;
mod bewit;
mod canonical;
mod client;
mod credentials;
pub mod crypto;
mod error;
mod header;
mod mac;
mod payload;
mod util;

/// The Hawk protocol version, the `1` in `hawk.1.header`.
pub const HAWK_VERSION: &str = "1";

pub use crate::bewit::Bewit;
pub use crate::canonical::{AuthType, CanonicalRequest, CanonicalRequestBuilder};
pub use crate::client::{Client, ClientConfig};
pub use crate::credentials::{Credentials, DigestAlgorithm};
pub use crate::error::*;
pub use crate::header::Header;
pub use crate::mac::{timestamp_mac, Mac};
pub use crate::payload::{body_mac, payload_string, PayloadValidation};
pub use crate::util::{random_nonce, NONCE_LENGTH};

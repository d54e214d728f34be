use crate::credentials::DigestAlgorithm;
use crate::crypto::CryptoError;
use failure::Fail;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Fail, Debug)]
pub enum Error {
    #[fail(display = "Missing required field `{}`", _0)]
    MissingField(&'static str),

    #[fail(display = "Invalid argument: {}", _0)]
    InvalidArgument(String),

    #[fail(display = "Unsupported MAC algorithm: {}", _0)]
    UnsupportedAlgorithm(DigestAlgorithm),

    #[fail(display = "Invalid key: {}", _0)]
    InvalidKey(String),

    #[fail(display = "Invalid url: {}", _0)]
    InvalidUrl(#[fail(cause)] url::ParseError),

    #[fail(display = "{}", _0)]
    InvalidBewit(#[fail(cause)] InvalidBewit),

    #[fail(display = "Bewit has expired")]
    ExpiredBewit,

    #[fail(display = "MAC does not match")]
    MacMismatch,

    #[fail(display = "Base64 Decode error: {}", _0)]
    Decode(#[fail(cause)] base64::DecodeError),

    #[fail(display = "RNG error: {}", _0)]
    Rng(#[fail(cause)] rand::Error),

    #[fail(display = "Crypto error: {}", _0)]
    Crypto(#[fail(cause)] CryptoError),
}

/// The reason a bewit token could not be parsed.
#[derive(Fail, Debug, PartialEq)]
pub enum InvalidBewit {
    #[fail(display = "Multiple bewits in URL")]
    Multiple,
    #[fail(display = "Invalid bewit format")]
    Format,
    #[fail(display = "Invalid bewit id")]
    Id,
    #[fail(display = "Invalid bewit exp")]
    Exp,
    #[fail(display = "Invalid bewit mac")]
    Mac,
    #[fail(display = "Invalid bewit ext")]
    Ext,
}

impl From<base64::DecodeError> for Error {
    fn from(e: base64::DecodeError) -> Self {
        Error::Decode(e)
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::InvalidUrl(e)
    }
}

impl From<rand::Error> for Error {
    fn from(e: rand::Error) -> Self {
        Error::Rng(e)
    }
}

impl From<CryptoError> for Error {
    fn from(e: CryptoError) -> Self {
        match e {
            CryptoError::UnsupportedDigest(algorithm) => Error::UnsupportedAlgorithm(algorithm),
            CryptoError::InvalidKey(msg) => Error::InvalidKey(msg),
            e => Error::Crypto(e),
        }
    }
}

impl From<InvalidBewit> for Error {
    fn from(e: InvalidBewit) -> Self {
        Error::InvalidBewit(e)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_crypto_errors_map_to_kinds() {
        match Error::from(CryptoError::UnsupportedDigest(DigestAlgorithm::Sha1)) {
            Error::UnsupportedAlgorithm(DigestAlgorithm::Sha1) => {}
            e => panic!("unexpected {:?}", e),
        }
        match Error::from(CryptoError::InvalidKey("short".to_string())) {
            Error::InvalidKey(ref msg) if msg == "short" => {}
            e => panic!("unexpected {:?}", e),
        }
        match Error::from(CryptoError::Uninitialized) {
            Error::Crypto(CryptoError::Uninitialized) => {}
            e => panic!("unexpected {:?}", e),
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", Error::MissingField("nonce")),
            "Missing required field `nonce`"
        );
        assert_eq!(
            format!("{}", Error::from(InvalidBewit::Format)),
            "Invalid bewit format"
        );
    }
}

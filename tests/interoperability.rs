//! Known-answer tests: values produced by other Hawk implementations for the same inputs.
#![cfg(feature = "use_ring")]

use hawk_core::{
    body_mac, timestamp_mac, AuthType, CanonicalRequestBuilder, Credentials, DigestAlgorithm,
    Header, Mac,
};
use pretty_assertions::assert_eq;
use std::time::{Duration, UNIX_EPOCH};
use url::Url;

fn credentials(algorithm: DigestAlgorithm) -> Credentials {
    Credentials::new(
        "dh37fgj492je",
        "werxhqb98rpaxn39848xrunpaw3489ruxnpa98w4rxn",
        algorithm,
    )
    .unwrap()
}

fn url() -> Url {
    Url::parse("http://example.com:8000/resource/1?b=1&a=2").unwrap()
}

fn builder(uri: &Url) -> CanonicalRequestBuilder {
    CanonicalRequestBuilder::new(AuthType::Header)
        .ts(UNIX_EPOCH + Duration::new(1353832234, 0))
        .uri(uri)
        .nonce("j4h3g2")
        .method("GET")
}

#[test]
fn header_canonical_string_and_mac() {
    let uri = url();
    let request = builder(&uri).ext("some-app-ext-data").request().unwrap();
    assert_eq!(
        request.canonical_string(),
        "hawk.1.header\n1353832234\nj4h3g2\nGET\n/resource/1?b=1&a=2\nexample.com\n8000\n\n\
         some-app-ext-data\n"
    );
    let mac = Mac::for_request(&credentials(DigestAlgorithm::Sha256), &request).unwrap();
    assert_eq!(
        mac.to_string(),
        "6R4rV5iE+NPoym+WwjeHzjAGXUtLNIxmo1vpMofpLAE="
    );
}

#[test]
fn header_sha1() {
    let uri = url();
    let request = builder(&uri).request().unwrap();
    let mac = Mac::for_request(&credentials(DigestAlgorithm::Sha1), &request).unwrap();
    assert_eq!(mac.to_string(), "ic6931LDf4AXFTV+ikHjEoHh5AM=");
}

#[test]
fn header_with_payload_hash() {
    let credentials = credentials(DigestAlgorithm::Sha256);
    let body = "Thank you for flying Hawk";
    let hash = body_mac(&credentials, "text/plain; charset=utf-8", body).unwrap();
    assert_eq!(
        hash.to_string(),
        "nF62Gd9KzvdFjLRBGxcnjLNtXPjFWDAu48Bry69FoWI="
    );

    let uri = url();
    let hash = hash.to_string();
    let request = builder(&uri)
        .method("post")
        .hash(hash.as_str())
        .ext("some-app-ext-data")
        .request()
        .unwrap();
    assert_eq!(request.method(), "POST");
    let header = Header::sign(&credentials, &request).unwrap();
    assert!(header.to_string().starts_with(
        "Hawk id=\"dh37fgj492je\", ts=\"1353832234\", nonce=\"j4h3g2\", \
         hash=\"nF62Gd9KzvdFjLRBGxcnjLNtXPjFWDAu48Bry69FoWI=\", ext=\"some-app-ext-data\", \
         mac=\""
    ));
}

#[test]
fn header_with_app_and_dlg() {
    let uri = url();
    let credentials = credentials(DigestAlgorithm::Sha256);

    let request = builder(&uri)
        .ext("some-app-ext-data")
        .app("my-app")
        .dlg("my-authority")
        .request()
        .unwrap();
    assert!(request
        .canonical_string()
        .ends_with("some-app-ext-data\nmy-app\nmy-authority\n"));
    let mac = Mac::for_request(&credentials, &request).unwrap();
    assert_eq!(
        mac.to_string(),
        "QUgGn9jc/ju32qIneKxjnC0ylhk3ZqlRkzMTqmKmB4U="
    );

    let request = builder(&uri)
        .ext("some-app-ext-data")
        .app("my-app")
        .request()
        .unwrap();
    let mac = Mac::for_request(&credentials, &request).unwrap();
    assert_eq!(
        mac.to_string(),
        "atgg22rtxnK6sGJkol/m1VCpUOR/xQyoYyktuFyVOss="
    );
}

#[test]
fn header_ext_escaping() {
    let uri = url();
    let request = builder(&uri).ext("a\\b\nc").request().unwrap();
    assert!(request.canonical_string().ends_with("\n\na\\\\b\\nc\n"));
    let mac = Mac::for_request(&credentials(DigestAlgorithm::Sha256), &request).unwrap();
    assert_eq!(
        mac.to_string(),
        "B/gSHdS48XP727oxv25oanGwwlHTiYa0tm/aXIYF4rA="
    );
}

#[test]
fn timestamp() {
    let mac = timestamp_mac(UNIX_EPOCH + Duration::new(1353832234, 0)).unwrap();
    assert_eq!(
        mac.to_string(),
        "V7gaRGlZqJmKzI+NAfC7PwsILFVj6LZqfv7/eqj+dao="
    );
}

use crate::credentials::Credentials;
use crate::error::*;
use crate::mac::Mac;
use crate::HAWK_VERSION;
use std::fmt;
use std::str::FromStr;

/// Policy for whether a payload hash must accompany a request.
///
/// This is configuration for whoever validates requests; the signing side only carries it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PayloadValidation {
    /// Never validate the payload, even if a hash is present
    Never,
    /// Validate the payload if a hash is present, continue if not
    IfPresent,
    /// Validate the payload, and fail if there is no hash
    Mandatory,
}

impl PayloadValidation {
    pub const ALL: [PayloadValidation; 3] = [
        PayloadValidation::Never,
        PayloadValidation::IfPresent,
        PayloadValidation::Mandatory,
    ];
}

impl Default for PayloadValidation {
    fn default() -> Self {
        PayloadValidation::Never
    }
}

impl fmt::Display for PayloadValidation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            PayloadValidation::Never => "never",
            PayloadValidation::IfPresent => "ifpresent",
            PayloadValidation::Mandatory => "mandatory",
        })
    }
}

impl FromStr for PayloadValidation {
    type Err = Error;
    fn from_str(s: &str) -> Result<PayloadValidation> {
        match s.to_ascii_lowercase().as_str() {
            "never" => Ok(PayloadValidation::Never),
            "ifpresent" => Ok(PayloadValidation::IfPresent),
            "mandatory" => Ok(PayloadValidation::Mandatory),
            _ => Err(Error::InvalidArgument(format!(
                "Hawk payload validation \"{}\" is invalid",
                s
            ))),
        }
    }
}

/// Reduce a content type to its lower-cased media type, dropping any `;` parameters.
fn media_type(content_type: &str) -> String {
    let media_type = match content_type.find(';') {
        Some(i) => &content_type[..i],
        None => content_type,
    };
    media_type.to_lowercase()
}

/// Build the string MAC'd for a payload.
pub fn payload_string(content_type: &str, body: &str) -> String {
    format!(
        "hawk.{}.payload\n{}\n{}\n",
        HAWK_VERSION,
        media_type(content_type),
        body
    )
}

/// Calculate the MAC of a request body.  The base64 form of the result is what goes in the
/// `hash` attribute of a request.
pub fn body_mac(credentials: &Credentials, content_type: &str, body: &str) -> Result<Mac> {
    Mac::calculate(credentials, &payload_string(content_type, body))
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_payload_string() {
        assert_eq!(
            payload_string("Text/Plain; charset=utf-8", "Thank you for flying Hawk"),
            "hawk.1.payload\ntext/plain\nThank you for flying Hawk\n"
        );
        assert_eq!(payload_string("", ""), "hawk.1.payload\n\n\n");
    }

    #[test]
    fn test_media_type() {
        assert_eq!(media_type("text/plain;charset=utf-8"), "text/plain");
        assert_eq!(media_type("APPLICATION/JSON"), "application/json");
        assert_eq!(media_type(";x"), "");
        // only the parameters are removed
        assert_eq!(media_type(" text/plain ;x"), " text/plain ");
    }

    #[test]
    fn test_payload_validation_parse() {
        for pv in PayloadValidation::ALL.iter() {
            assert_eq!(PayloadValidation::from_str(&pv.to_string()).unwrap(), *pv);
        }
        assert_eq!(
            PayloadValidation::from_str("IfPresent").unwrap(),
            PayloadValidation::IfPresent
        );
        match PayloadValidation::from_str("sometimes") {
            Err(Error::InvalidArgument(_)) => {}
            r => panic!("unexpected {:?}", r),
        }
        assert_eq!(PayloadValidation::default(), PayloadValidation::Never);
    }

    #[cfg(feature = "use_ring")]
    #[test]
    fn test_body_mac() {
        use crate::credentials::DigestAlgorithm;

        let credentials = Credentials::new(
            "dh37fgj492je",
            "werxhqb98rpaxn39848xrunpaw3489ruxnpa98w4rxn",
            DigestAlgorithm::Sha256,
        )
        .unwrap();
        let body = "Thank you for flying Hawk";
        let with_params = body_mac(&credentials, "text/plain;charset=utf-8", body).unwrap();
        let plain = body_mac(&credentials, "text/plain", body).unwrap();
        let upper = body_mac(&credentials, "TEXT/PLAIN", body).unwrap();
        assert_eq!(with_params.to_string(), "nF62Gd9KzvdFjLRBGxcnjLNtXPjFWDAu48Bry69FoWI=");
        assert_eq!(with_params, plain);
        assert_eq!(upper, plain);

        // the unstripped string would have produced a different MAC
        let unstripped = Mac::calculate(
            &credentials,
            "hawk.1.payload\ntext/plain;charset=utf-8\nThank you for flying Hawk\n",
        )
        .unwrap();
        assert_ne!(unstripped, plain);
    }
}

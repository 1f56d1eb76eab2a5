//! Host/path extraction from a URL.

use percent_encoding::percent_decode_str;
use url::Host;

/// Host and path pieces of a URL used for filename derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    /// Host, with `:port` appended when the URL names a non-default port.
    pub host: String,
    /// Path with leading and trailing `/` removed (may be empty).
    pub path: String,
}

/// Splits a URL into host and trimmed path.
///
/// Both come back in readable form: IDN hosts as Unicode rather than
/// punycode, and the path percent-decoded. Query and fragment are ignored.
/// A string the `url` crate cannot parse is treated as a bare path with no
/// host, so this never fails.
pub fn split_url(url: &str) -> UrlParts {
    match url::Url::parse(url) {
        Ok(parsed) => {
            let mut host = match parsed.host() {
                Some(Host::Domain(domain)) => idna::domain_to_unicode(domain).0,
                Some(other) => other.to_string(),
                None => String::new(),
            };
            if let Some(port) = parsed.port() {
                host.push(':');
                host.push_str(&port.to_string());
            }
            let path = percent_decode_str(parsed.path()).decode_utf8_lossy();
            UrlParts {
                host,
                path: path.trim_matches('/').to_string(),
            }
        }
        Err(_) => UrlParts {
            host: String::new(),
            path: url.trim_matches('/').to_string(),
        },
    }
}

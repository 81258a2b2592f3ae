// src/checker/resolve.rs
// =============================================================================
// Turns an href value into an absolute URL we can request.
//
// Three cases:
// - href already has a scheme (https:, mailto:, javascript:) -> use it as-is
// - href has no scheme (/docs, page.html, //cdn.host/x, #top) -> resolve it
//   against the page URL, the way a browser would
// - href is broken (bad IPv6 host, invalid port, ...) -> LinkParseError
//
// Scheme-relative links (//host/path) count as "no scheme" and pick up the
// page's scheme.
// =============================================================================

use thiserror::Error;
use url::{ParseError, Url};

/// An href that is not a valid URL reference.
#[derive(Error, Debug)]
#[error("invalid link {href:?}: {source}")]
pub struct LinkParseError {
    pub href: String,
    #[source]
    pub source: ParseError,
}

// Resolves an href against the page it was found on
//
// Examples (base = "https://example.com/blog/post"):
//   "/about"             -> https://example.com/about
//   "next"               -> https://example.com/blog/next
//   "//cdn.example.com/" -> https://cdn.example.com/
//   "https://rust-lang.org/" -> unchanged
pub fn resolve_link(href: &str, base: &Url) -> Result<Url, LinkParseError> {
    let invalid = |source| LinkParseError {
        href: href.to_string(),
        source,
    };

    match Url::parse(href) {
        // Has its own scheme, so it's already absolute
        Ok(url) => Ok(url),
        // No scheme: a relative reference
        Err(ParseError::RelativeUrlWithoutBase) => base.join(href).map_err(invalid),
        Err(e) => Err(invalid(e)),
    }
}

// The host part of a URL as a plain string, "" when there is none
//
// IPv6 hosts come back from url as "[::1]", so the brackets are stripped.
pub fn link_host(url: &Url) -> &str {
    url.host_str()
        .map(|host| host.trim_start_matches('[').trim_end_matches(']'))
        .unwrap_or("")
}

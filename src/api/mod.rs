//! Backend API
//!
//! REST bindings for the ticket backend, organized by resource.

mod chamados;
mod client;
mod usuarios;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

pub use client::{ApiClient, FetchTransport, Method, SessionHooks, Transport};
pub(crate) use client::encode;

#[cfg(test)]
pub(crate) use client::testing;

/// Characters left alone inside a path segment (RFC 3986 unreserved)
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a value for use as one URL path segment.
pub fn encode_segment(value: &str) -> String {
    utf8_percent_encode(value, SEGMENT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("abc-123_x.y~z"), "abc-123_x.y~z");
        assert_eq!(encode_segment("a/b c"), "a%2Fb%20c");
    }
}

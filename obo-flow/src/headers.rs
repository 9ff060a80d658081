//! Normalized header access and bearer extraction
//!
//! The flow never inspects a host-specific request object. Whatever shape the
//! hosting framework delivers headers in, a thin adapter at that boundary
//! exposes them through [`HeaderLookup`], and the flow only ever asks for a
//! header by name. A request whose headers cannot be adapted simply looks like
//! a request without a credential.

use std::collections::HashMap;

use axum::http::HeaderMap;

use crate::error::{OboError, Result};

/// Case-insensitive, read-only header access
pub trait HeaderLookup {
    /// Look up a header value by name, ignoring case
    fn get(&self, name: &str) -> Option<&str>;
}

impl HeaderLookup for HeaderMap {
    fn get(&self, name: &str) -> Option<&str> {
        HeaderMap::get(self, name).and_then(|value| value.to_str().ok())
    }
}

impl HeaderLookup for HashMap<String, String> {
    fn get(&self, name: &str) -> Option<&str> {
        self.iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Extract the bearer token from the `authorization` header.
///
/// The scheme comparison is case-insensitive per RFC 6750. An absent header,
/// a non-bearer scheme, or an empty credential all fail with
/// [`OboError::MissingCredential`].
pub fn extract_bearer_token<H: HeaderLookup + ?Sized>(headers: &H) -> Result<&str> {
    let value = headers
        .get("authorization")
        .ok_or(OboError::MissingCredential)?;

    let mut parts = value.splitn(2, ' ');
    let scheme = parts.next().unwrap_or_default();
    let token = parts.next().unwrap_or_default().trim();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(OboError::MissingCredential);
    }

    Ok(token)
}

//! Unit tests for header normalization and bearer extraction

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use axum::http::{HeaderMap, HeaderValue};
    use std::collections::HashMap;

    use crate::error::OboError;
    use crate::headers::{HeaderLookup, extract_bearer_token};

    fn map_of(name: &str, value: &str) -> HashMap<String, String> {
        let mut headers = HashMap::new();
        headers.insert(name.to_string(), value.to_string());
        headers
    }

    #[test]
    fn extracts_token_from_lowercase_header() {
        let headers = map_of("authorization", "Bearer abc123");
        assert_eq!(extract_bearer_token(&headers).unwrap(), "abc123");
    }

    #[test]
    fn header_name_lookup_is_case_insensitive() {
        for name in ["Authorization", "AUTHORIZATION", "AuThOrIzAtIoN"] {
            let headers = map_of(name, "Bearer abc123");
            assert_eq!(extract_bearer_token(&headers).unwrap(), "abc123");
        }
    }

    #[test]
    fn scheme_match_is_case_insensitive() {
        let headers = map_of("authorization", "bearer abc123");
        assert_eq!(extract_bearer_token(&headers).unwrap(), "abc123");
    }

    #[test]
    fn works_through_http_header_map() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", HeaderValue::from_static("Bearer xyz"));
        assert_eq!(extract_bearer_token(&headers).unwrap(), "xyz");
    }

    #[test]
    fn http_header_map_lookup_trait() {
        let mut headers = HeaderMap::new();
        headers.insert("x-custom", HeaderValue::from_static("value"));
        assert_eq!(HeaderLookup::get(&headers, "X-Custom"), Some("value"));
        assert_eq!(HeaderLookup::get(&headers, "missing"), None);
    }

    #[test]
    fn empty_headers_fail_with_missing_credential() {
        let headers: HashMap<String, String> = HashMap::new();
        assert_matches!(
            extract_bearer_token(&headers),
            Err(OboError::MissingCredential)
        );
    }

    #[test]
    fn wrong_scheme_fails_with_missing_credential() {
        let headers = map_of("authorization", "Basic dXNlcjpwYXNz");
        assert_matches!(
            extract_bearer_token(&headers),
            Err(OboError::MissingCredential)
        );
    }

    #[test]
    fn value_without_space_fails_with_missing_credential() {
        let headers = map_of("authorization", "Bearerabc123");
        assert_matches!(
            extract_bearer_token(&headers),
            Err(OboError::MissingCredential)
        );
    }

    #[test]
    fn scheme_without_token_fails_with_missing_credential() {
        for value in ["Bearer", "Bearer ", "Bearer    "] {
            let headers = map_of("authorization", value);
            assert_matches!(
                extract_bearer_token(&headers),
                Err(OboError::MissingCredential),
                "value {value:?} must not yield a token"
            );
        }
    }

    #[test]
    fn token_may_itself_contain_spaces_after_first_split() {
        // Only the first space separates scheme and credential.
        let headers = map_of("authorization", "Bearer abc 123");
        assert_eq!(extract_bearer_token(&headers).unwrap(), "abc 123");
    }
}

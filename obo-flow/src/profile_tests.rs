//! Unit tests for the downstream profile fetch

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use httpmock::prelude::*;

    use crate::error::OboError;
    use crate::profile::{UserProfile, fetch_profile};

    #[tokio::test]
    async fn fetches_a_complete_profile() {
        let server = MockServer::start();

        let mock = server.mock(|when, then| {
            when.method(GET)
                .path("/v1.0/me")
                .header("authorization", "Bearer graph-token");
            then.status(200)
                .header("content-type", "application/json")
                .body(
                    r#"{"displayName":"Jane Doe","userPrincipalName":"jane@x.com","jobTitle":"Engineer"}"#,
                );
        });

        let client = reqwest::Client::new();
        let profile = fetch_profile(&client, &server.url("/v1.0/me"), "graph-token")
            .await
            .unwrap();

        assert_eq!(profile.display_name, "Jane Doe");
        assert_eq!(profile.user_principal_name, "jane@x.com");
        assert_eq!(profile.job_title, "Engineer");
        mock.assert();
    }

    #[tokio::test]
    async fn missing_fields_fall_back_to_placeholders() {
        let server = MockServer::start();

        let _mock = server.mock(|when, then| {
            when.method(GET).path("/v1.0/me");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"displayName":"Jane Doe","userPrincipalName":"jane@x.com"}"#);
        });

        let client = reqwest::Client::new();
        let profile = fetch_profile(&client, &server.url("/v1.0/me"), "graph-token")
            .await
            .unwrap();

        assert_eq!(profile.job_title, "No Job Title");
    }

    #[tokio::test]
    async fn empty_object_yields_all_placeholders() {
        let server = MockServer::start();

        let _mock = server.mock(|when, then| {
            when.method(GET).path("/v1.0/me");
            then.status(200)
                .header("content-type", "application/json")
                .body("{}");
        });

        let client = reqwest::Client::new();
        let profile = fetch_profile(&client, &server.url("/v1.0/me"), "graph-token")
            .await
            .unwrap();

        assert_eq!(profile.display_name, "Unknown");
        assert_eq!(profile.user_principal_name, "Unknown");
        assert_eq!(profile.job_title, "No Job Title");
    }

    #[tokio::test]
    async fn forbidden_status_carries_status_and_body() {
        let server = MockServer::start();

        let _mock = server.mock(|when, then| {
            when.method(GET).path("/v1.0/me");
            then.status(403).body("Insufficient privileges");
        });

        let client = reqwest::Client::new();
        let result = fetch_profile(&client, &server.url("/v1.0/me"), "graph-token").await;

        assert_matches!(
            result,
            Err(OboError::Downstream { status: 403, body }) if body.contains("Insufficient privileges")
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_transport_failure() {
        let client = reqwest::Client::new();
        let result = fetch_profile(&client, "http://127.0.0.1:1/v1.0/me", "graph-token").await;

        assert_matches!(result, Err(OboError::Transport(_)));
    }

    #[test]
    fn summary_renders_all_fields() {
        let profile = UserProfile {
            display_name: "Jane Doe".to_string(),
            user_principal_name: "jane@x.com".to_string(),
            job_title: "Engineer".to_string(),
        };

        let summary = profile.summary();
        assert!(summary.contains("Jane Doe"));
        assert!(summary.contains("jane@x.com"));
        assert!(summary.contains("Engineer"));
    }
}

//! Downstream profile fetch from Microsoft Graph

use serde::Deserialize;
use tracing::debug;

use crate::error::{OboError, Result};

/// Production profile endpoint
pub const GRAPH_ME_ENDPOINT: &str = "https://graph.microsoft.com/v1.0/me";

fn unknown() -> String {
    "Unknown".to_string()
}

fn no_job_title() -> String {
    "No Job Title".to_string()
}

/// The caller's profile, reduced to the fields the tool reports
///
/// Fields absent from the Graph response fall back to placeholder text rather
/// than failing the request.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name, or "Unknown"
    #[serde(default = "unknown")]
    pub display_name: String,
    /// User principal name (usually the email), or "Unknown"
    #[serde(default = "unknown")]
    pub user_principal_name: String,
    /// Job title, or "No Job Title"
    #[serde(default = "no_job_title")]
    pub job_title: String,
}

impl UserProfile {
    /// One-line success text surfaced to the tool caller
    pub fn summary(&self) -> String {
        format!(
            "Success! OBO flow complete. User: {} ({}) - {}",
            self.display_name, self.user_principal_name, self.job_title
        )
    }
}

/// Fetch the caller's profile with the exchanged access token.
///
/// A single best-effort GET: no retry, no backoff, the HTTP client's default
/// timeout. Non-200 statuses carry the response body back to the caller as a
/// [`OboError::Downstream`] failure.
pub async fn fetch_profile(
    client: &reqwest::Client,
    endpoint: &str,
    access_token: &str,
) -> Result<UserProfile> {
    let response = client
        .get(endpoint)
        .bearer_auth(access_token)
        .header(reqwest::header::CONTENT_TYPE, "application/json")
        .send()
        .await
        .map_err(|e| OboError::Transport(e.to_string()))?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        let body = response.text().await.unwrap_or_default();
        return Err(OboError::Downstream {
            status: status.as_u16(),
            body,
        });
    }

    let profile = response
        .json::<UserProfile>()
        .await
        .map_err(|e| OboError::Transport(format!("invalid profile response: {e}")))?;

    debug!("profile fetch succeeded");
    Ok(profile)
}

//! On-behalf-of token exchange against the Entra ID token endpoint
//!
//! The backend presents its own client id and secret as proof of identity
//! together with the caller's token as an assertion, and receives back a token
//! scoped to the downstream resource. Denials are terminal for the request:
//! the usual causes (missing admin consent, an invalid client secret, an
//! expired user token) need administrator action, not a retry.

use serde::Deserialize;
use tracing::debug;

use crate::config::IdentityConfig;
use crate::error::{OboError, Result};

/// OAuth2 extension grant used by the on-behalf-of flow (RFC 7523)
const OBO_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

const REQUESTED_TOKEN_USE: &str = "on_behalf_of";

/// Token endpoint response, reduced to the fields the flow inspects
#[derive(Debug, Default, Deserialize)]
struct TokenResponse {
    access_token: Option<String>,
    error_description: Option<String>,
}

/// Exchange the caller's token for a downstream-scoped access token.
///
/// The returned token is treated as opaque; validating it is the identity
/// provider's job, not ours. Any response without an `access_token` is a
/// denial carrying the provider's `error_description`.
pub async fn exchange_on_behalf_of(
    client: &reqwest::Client,
    token_endpoint: &str,
    config: &IdentityConfig,
    user_token: &str,
    scope: &str,
) -> Result<String> {
    let response = client
        .post(token_endpoint)
        .form(&[
            ("grant_type", OBO_GRANT_TYPE),
            ("client_id", config.client_id.as_str()),
            ("client_secret", config.client_secret()),
            ("assertion", user_token),
            ("scope", scope),
            ("requested_token_use", REQUESTED_TOKEN_USE),
        ])
        .send()
        .await
        .map_err(|e| OboError::Transport(format!("token endpoint unreachable: {e}")))?;

    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| OboError::Transport(format!("reading token endpoint response: {e}")))?;

    // Entra ID answers with JSON for both grants and denials; anything else
    // is surfaced verbatim as the denial description.
    let parsed: TokenResponse = serde_json::from_str(&body).unwrap_or_default();

    if status.is_success() {
        if let Some(token) = parsed.access_token {
            debug!(%status, "on-behalf-of exchange granted");
            return Ok(token);
        }
    }

    let description = parsed.error_description.unwrap_or_else(|| {
        if body.trim().is_empty() {
            "unknown error".to_string()
        } else {
            body
        }
    });

    debug!(%status, "on-behalf-of exchange denied");
    Err(OboError::ExchangeDenied(description))
}

//! OAuth2 on-behalf-of (OBO) exchange for Microsoft Entra ID
//!
//! This crate implements the credential side of a stateless backend: a bearer
//! token presented by the caller is exchanged, using the backend's own client
//! credentials, for a token scoped to Microsoft Graph, which then fetches the
//! caller's profile.
//!
//! The flow is strictly sequential — extract, exchange, fetch — and the first
//! failure short-circuits the rest. Nothing is cached between invocations:
//! every call performs a fresh exchange, which keeps the short-lived
//! credential handling stateless.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use entra_obo_flow::{IdentityConfig, ProfileFlow};
//! use std::collections::HashMap;
//!
//! # async fn run() -> Result<(), entra_obo_flow::OboError> {
//! let config = IdentityConfig::from_env()?;
//! let flow = ProfileFlow::new(config);
//!
//! let mut headers = HashMap::new();
//! headers.insert("authorization".to_string(), "Bearer eyJ...".to_string());
//!
//! let profile = flow.get_profile(&headers).await?;
//! println!("{}", profile.summary());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod exchange;
pub mod headers;
pub mod profile;

#[cfg(test)]
mod headers_tests;
#[cfg(test)]
mod profile_tests;

pub use config::IdentityConfig;
pub use error::{OboError, Result};
pub use headers::{HeaderLookup, extract_bearer_token};
pub use profile::UserProfile;

/// Default downstream scope: Microsoft Graph with the statically consented
/// permission set
pub const DEFAULT_DOWNSTREAM_SCOPE: &str = "https://graph.microsoft.com/.default";

/// The complete on-behalf-of flow for one downstream resource
///
/// Holds the process-wide identity configuration and a shared HTTP client.
/// Endpoints default to the public Entra ID and Graph URLs and are only
/// overridden by tests pointing at a local mock.
#[derive(Debug, Clone)]
pub struct ProfileFlow {
    config: IdentityConfig,
    http: reqwest::Client,
    scope: String,
    token_endpoint: String,
    profile_endpoint: String,
}

impl ProfileFlow {
    /// Create a flow targeting the production endpoints
    pub fn new(config: IdentityConfig) -> Self {
        let token_endpoint = config.token_endpoint();
        Self {
            config,
            http: reqwest::Client::new(),
            scope: DEFAULT_DOWNSTREAM_SCOPE.to_string(),
            token_endpoint,
            profile_endpoint: profile::GRAPH_ME_ENDPOINT.to_string(),
        }
    }

    /// Override the token and profile endpoints
    pub fn with_endpoints(
        mut self,
        token_endpoint: impl Into<String>,
        profile_endpoint: impl Into<String>,
    ) -> Self {
        self.token_endpoint = token_endpoint.into();
        self.profile_endpoint = profile_endpoint.into();
        self
    }

    /// Override the downstream scope requested during the exchange
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    /// Run the flow against one request's headers.
    ///
    /// Extracts the caller's bearer token, exchanges it for a Graph-scoped
    /// token and fetches the profile. No outbound call is made when the
    /// credential is missing.
    pub async fn get_profile<H: HeaderLookup + ?Sized>(&self, headers: &H) -> Result<UserProfile> {
        let user_token = headers::extract_bearer_token(headers)?;

        let access_token = exchange::exchange_on_behalf_of(
            &self.http,
            &self.token_endpoint,
            &self.config,
            user_token,
            &self.scope,
        )
        .await?;

        profile::fetch_profile(&self.http, &self.profile_endpoint, &access_token).await
    }
}

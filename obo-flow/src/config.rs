//! Identity configuration for the confidential client
//!
//! The backend authenticates to the identity provider with its own client id
//! and secret while asserting the caller's token. Configuration is loaded once
//! at startup from the environment and is immutable afterwards; missing or
//! blank values fail fast instead of surfacing at the first request.

use std::env;
use std::fmt;

use crate::error::{OboError, Result};

/// Environment variable holding the Entra ID tenant (directory) id
pub const ENV_TENANT_ID: &str = "AZURE_TENANT_ID";
/// Environment variable holding the backend application's client id
pub const ENV_CLIENT_ID: &str = "BACKEND_CLIENT_ID";
/// Environment variable holding the backend application's client secret
pub const ENV_CLIENT_SECRET: &str = "BACKEND_CLIENT_SECRET";

/// Base URL of the Entra ID authority
pub const AUTHORITY_BASE: &str = "https://login.microsoftonline.com";

/// Credentials identifying the backend application to the identity provider
///
/// The client secret is kept out of `Debug` output; it only leaves this struct
/// through [`IdentityConfig::client_secret`] when the exchange request is
/// built.
#[derive(Clone)]
pub struct IdentityConfig {
    /// Entra ID tenant (directory) id
    pub tenant_id: String,
    /// Application (client) id of the backend registration
    pub client_id: String,
    client_secret: String,
}

impl fmt::Debug for IdentityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdentityConfig")
            .field("tenant_id", &self.tenant_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

impl IdentityConfig {
    /// Create a configuration from explicit values, rejecting blank fields
    pub fn new(
        tenant_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Result<Self> {
        let config = Self {
            tenant_id: tenant_id.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        };

        for (name, value) in [
            ("tenant_id", &config.tenant_id),
            ("client_id", &config.client_id),
            ("client_secret", &config.client_secret),
        ] {
            if value.trim().is_empty() {
                return Err(OboError::Config(format!("{name} must not be blank")));
            }
        }

        Ok(config)
    }

    /// Load the configuration from the process environment.
    ///
    /// Reads `AZURE_TENANT_ID`, `BACKEND_CLIENT_ID` and `BACKEND_CLIENT_SECRET`
    /// and fails if any is unset or blank.
    pub fn from_env() -> Result<Self> {
        let read = |name: &str| {
            env::var(name).map_err(|_| OboError::Config(format!("{name} is not set")))
        };

        Self::new(
            read(ENV_TENANT_ID)?,
            read(ENV_CLIENT_ID)?,
            read(ENV_CLIENT_SECRET)?,
        )
    }

    /// Authority URL for this tenant
    pub fn authority(&self) -> String {
        format!("{AUTHORITY_BASE}/{}", self.tenant_id)
    }

    /// OAuth2 v2.0 token endpoint for this tenant
    pub fn token_endpoint(&self) -> String {
        format!("{}/oauth2/v2.0/token", self.authority())
    }

    /// The backend application's client secret
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

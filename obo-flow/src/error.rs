//! Error types for the on-behalf-of flow

use thiserror::Error;

/// Result type alias for OBO flow operations
pub type Result<T> = std::result::Result<T, OboError>;

/// Classified failure of the on-behalf-of flow
///
/// Each request-path failure maps to exactly one variant; nothing escapes the
/// flow as a panic or an unclassified error. `Config` is produced only while
/// loading identity configuration at startup and never on a request path.
#[derive(Debug, Error)]
pub enum OboError {
    /// No usable bearer credential was found in the inbound request
    #[error("authorization token not found in request headers")]
    MissingCredential,

    /// The identity provider rejected the on-behalf-of exchange
    #[error("on-behalf-of exchange denied: {0}")]
    ExchangeDenied(String),

    /// The downstream API answered with a non-success status
    #[error("downstream API returned {status}: {body}")]
    Downstream {
        /// HTTP status code of the downstream response
        status: u16,
        /// Response body as returned by the downstream API
        body: String,
    },

    /// Network-level failure reaching an external service
    #[error("transport error: {0}")]
    Transport(String),

    /// Invalid or incomplete identity configuration
    #[error("configuration error: {0}")]
    Config(String),
}

impl OboError {
    /// Render the human-readable message surfaced to tool callers.
    ///
    /// Outcomes are formatted to text only at this outermost boundary;
    /// everything below it works with the typed variants.
    pub fn user_message(&self) -> String {
        match self {
            Self::MissingCredential => {
                "Security Error: Authorization token not found in header.".to_string()
            }
            Self::ExchangeDenied(desc) => {
                format!("OBO Authentication Failed: {desc}. Check Admin Consent in Portal.")
            }
            Self::Downstream { status, body } => {
                format!("Graph API Error: {status} - {body}")
            }
            Self::Transport(msg) => {
                format!("Exception connecting to Graph: {msg}")
            }
            Self::Config(msg) => {
                format!("Configuration Error: {msg}")
            }
        }
    }
}

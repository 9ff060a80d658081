//! Stateless MCP server for the Entra ID on-behalf-of flow
//!
//! Exposes two tools over JSON-RPC-per-POST: `echo_message` for connectivity
//! checks and `get_my_profile_info`, which exchanges the caller's bearer token
//! for a Microsoft Graph token and fetches the caller's profile. Every
//! invocation is independent; there is no session state and no token cache.

pub mod backend;
pub mod http;
pub mod protocol;


pub use backend::ProfileBackend;
pub use http::router;

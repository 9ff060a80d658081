//! Tool surface of the profile server
//!
//! Two tools, mirroring the endpoint's purpose: `echo_message` verifies
//! reachability without touching authentication, and `get_my_profile_info`
//! runs the full on-behalf-of flow against the inbound request's headers.

use axum::http::HeaderMap;
use serde_json::json;
use tracing::{info, warn};

use entra_obo_flow::ProfileFlow;

use crate::protocol::{
    CallToolRequestParam, CallToolResult, Implementation, InitializeResult, ListToolsResult,
    PROTOCOL_VERSION, RpcError, ServerCapabilities, Tool, ToolsCapability,
};

/// Name of the connectivity-check tool
pub const ECHO_TOOL: &str = "echo_message";
/// Name of the profile tool
pub const PROFILE_TOOL: &str = "get_my_profile_info";

/// Backend holding the on-behalf-of flow behind the tool surface
#[derive(Debug, Clone)]
pub struct ProfileBackend {
    flow: ProfileFlow,
}

impl ProfileBackend {
    /// Create a backend around the given flow
    pub fn new(flow: ProfileFlow) -> Self {
        Self { flow }
    }

    /// Answer `initialize`
    pub fn initialize_result(&self) -> InitializeResult {
        InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            server_info: Implementation {
                name: "entra-obo-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            instructions: Some(
                "Call get_my_profile_info with an Authorization: Bearer header to read \
                 the signed-in user's profile via the on-behalf-of flow."
                    .to_string(),
            ),
        }
    }

    /// Answer `tools/list`
    pub fn list_tools(&self) -> ListToolsResult {
        ListToolsResult {
            tools: vec![
                Tool {
                    name: ECHO_TOOL.to_string(),
                    description: "Echoes the message back. Useful for testing connectivity \
                                  without authentication."
                        .to_string(),
                    input_schema: json!({
                        "type": "object",
                        "properties": {
                            "message": {
                                "type": "string",
                                "description": "Text to echo back"
                            }
                        },
                        "required": ["message"]
                    }),
                },
                Tool {
                    name: PROFILE_TOOL.to_string(),
                    description: "Reads the signed-in user's profile via Microsoft Graph \
                                  using the on-behalf-of flow. The user's bearer token is \
                                  taken from the request's Authorization header."
                        .to_string(),
                    input_schema: json!({
                        "type": "object",
                        "properties": {}
                    }),
                },
            ],
        }
    }

    /// Answer `tools/call`.
    ///
    /// Tool-level outcomes, success and handled failure alike, come back as a
    /// `CallToolResult`; only protocol misuse (unknown tool, bad arguments)
    /// surfaces as a JSON-RPC error.
    pub async fn call_tool(
        &self,
        params: CallToolRequestParam,
        headers: &HeaderMap,
    ) -> Result<CallToolResult, RpcError> {
        match params.name.as_str() {
            ECHO_TOOL => {
                let message = params
                    .arguments
                    .as_ref()
                    .and_then(|args| args.get("message"))
                    .and_then(|value| value.as_str())
                    .ok_or_else(|| {
                        RpcError::invalid_params("echo_message requires a string 'message' argument")
                    })?;

                Ok(CallToolResult::text(format!("Echo from server: {message}")))
            }
            PROFILE_TOOL => match self.flow.get_profile(headers).await {
                Ok(profile) => {
                    info!("profile tool completed");
                    Ok(CallToolResult::text(profile.summary()))
                }
                Err(err) => {
                    // The message carries classification only, never a token.
                    warn!("profile tool failed: {err}");
                    Ok(CallToolResult::error_text(err.user_message()))
                }
            },
            other => Err(RpcError::invalid_params(format!("Unknown tool: {other}"))),
        }
    }
}

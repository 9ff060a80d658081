//! Stateless HTTP transport
//!
//! One JSON-RPC message per POST body, one JSON response per request, no
//! sessions and no streaming. Inbound headers ride along into `tools/call` so
//! the profile tool can read the caller's Authorization header.

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response as HttpResponse},
    routing::{get, post},
};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::debug;

use crate::backend::ProfileBackend;
use crate::protocol::{CallToolRequestParam, Request, Response, RpcError};

#[derive(Clone)]
struct AppState {
    backend: ProfileBackend,
}

/// Build the router: `POST /mcp` for protocol messages, `GET /health`
pub fn router(backend: ProfileBackend) -> Router {
    Router::new()
        .route("/mcp", post(handle_message))
        .route("/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(AppState { backend })
}

async fn health() -> impl IntoResponse {
    axum::Json(json!({ "status": "ok" }))
}

async fn handle_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: String,
) -> HttpResponse {
    let request: Request = match serde_json::from_str(&body) {
        Ok(request) => request,
        Err(err) => {
            let error = RpcError::parse_error(format!("invalid JSON-RPC message: {err}"));
            return axum::Json(Response::error(serde_json::Value::Null, error)).into_response();
        }
    };

    // Stateless mode: notifications are acknowledged and dropped.
    if request.is_notification() {
        debug!(method = %request.method, "notification acknowledged");
        return StatusCode::ACCEPTED.into_response();
    }

    let id = request.id.clone();
    let response = match dispatch(&state.backend, request, &headers).await {
        Ok(result) => Response::success(id, result),
        Err(error) => Response::error(id, error),
    };

    axum::Json(response).into_response()
}

async fn dispatch(
    backend: &ProfileBackend,
    request: Request,
    headers: &HeaderMap,
) -> Result<serde_json::Value, RpcError> {
    debug!(method = %request.method, "dispatching request");

    match request.method.as_str() {
        "initialize" => to_value(backend.initialize_result()),
        "ping" => Ok(json!({})),
        "tools/list" => to_value(backend.list_tools()),
        "tools/call" => {
            let params: CallToolRequestParam = serde_json::from_value(request.params)
                .map_err(|err| RpcError::invalid_params(err.to_string()))?;
            let result = backend.call_tool(params, headers).await?;
            to_value(result)
        }
        other => Err(RpcError::method_not_found(other)),
    }
}

fn to_value<T: serde::Serialize>(value: T) -> Result<serde_json::Value, RpcError> {
    serde_json::to_value(value).map_err(|err| RpcError::internal_error(err.to_string()))
}

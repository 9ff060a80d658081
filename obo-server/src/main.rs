//! Binary entry point
//!
//! Loads identity configuration from the environment (failing fast when it is
//! incomplete), then serves the stateless MCP endpoint until a shutdown
//! signal arrives.

use std::net::SocketAddr;

use tracing::{error, info};

use entra_obo_flow::{IdentityConfig, ProfileFlow};
use entra_obo_server::{ProfileBackend, router};

/// Environment variable overriding the listen address
const ENV_HTTP_ADDR: &str = "OBO_HTTP_ADDR";

const DEFAULT_HTTP_ADDR: &str = "127.0.0.1:3001";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "entra_obo_server=info,entra_obo_flow=info".into()),
        )
        .init();

    let config = match IdentityConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!("identity configuration invalid: {err}");
            std::process::exit(1);
        }
    };

    info!(
        tenant_id = %config.tenant_id,
        client_id = %config.client_id,
        "identity configuration loaded"
    );

    let backend = ProfileBackend::new(ProfileFlow::new(config));
    let app = router(backend);

    let addr: SocketAddr = match std::env::var(ENV_HTTP_ADDR)
        .unwrap_or_else(|_| DEFAULT_HTTP_ADDR.to_string())
        .parse()
    {
        Ok(addr) => addr,
        Err(err) => {
            error!("invalid {ENV_HTTP_ADDR}: {err}");
            std::process::exit(1);
        }
    };

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("failed to bind {addr}: {err}");
            std::process::exit(1);
        }
    };

    info!("listening on {addr}");

    if let Err(err) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("server error: {err}");
        std::process::exit(1);
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {err}");
        return;
    }
    info!("shutdown signal received");
}

pub mod api;
pub mod domain;
pub mod routes;
pub mod shared;
pub mod state;
pub mod system;

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = shared::config::load_config()?;

    let upload_dir = shared::config::get_upload_dir(&config);
    std::fs::create_dir_all(&upload_dir)?;
    tracing::info!("Upload directory: {}", upload_dir.display());
    tracing::info!("CORS origins: {:?}", config.cors_origins_list());

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| {
            anyhow::anyhow!(
                "Invalid listen address {}:{}: {}",
                config.server.host,
                config.server.port,
                e
            )
        })?;
    let port = config.server.port;

    let state = Arc::new(state::AppState::new(config));
    tracing::info!("Answer provider: {}", state.qa.provider_name());

    let app = routes::configure_routes(state);

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", port, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}

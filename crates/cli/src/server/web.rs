use carbon_txt_api::{create_app, AppState};
use carbon_txt_domain::config::ServerConfig;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;

pub async fn start_web_server(server: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let addr: SocketAddr = server.listen_address().parse()?;
    let app = create_app(state, &server.cors_allowed_origins);

    let listener = TcpListener::bind(addr).await?;
    info!(bind_address = %addr, "Starting validation API");
    info!("API: http://{}/api", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Validation API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

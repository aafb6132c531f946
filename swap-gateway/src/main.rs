use anyhow::Context;
use swap_gateway::{router, AppState, Config, JupiterClient, JUPITER_BASE_URL};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // RUST_LOG=debug ./swap-gateway
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    fmt().with_env_filter(env_filter).with_target(false).init();

    let config = Config::from_env()?;

    let jupiter = JupiterClient::new(JUPITER_BASE_URL, config.upstream_timeout)?;
    info!(
        upstream = %jupiter.base_url(),
        timeout_secs = config.upstream_timeout.as_secs(),
        "jupiter client ready"
    );

    let app = router(AppState::new(jupiter));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("bind {}", config.bind_addr))?;
    info!("Starting server on port {}", config.bind_addr.port());
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutting down");
    }
}

use anyhow::Context;
use blogdeck::blogdeck_config::ServerConfig;
use blogdeck::logging::init_logging;
use blogdeck::router::init_router;
use blogdeck::state::init_app_state;
use dotenvy::dotenv;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let state = init_app_state().await?;
    let app = init_router(state);

    let server = ServerConfig::from_env();
    let address = server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {}", address))?;

    info!(address = %address, "Server listening");
    info!("API reference available at http://{}/scalar", address);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

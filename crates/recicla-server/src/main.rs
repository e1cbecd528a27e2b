#![forbid(unsafe_code)]

use recicla_server::{build_router, AppState, ServerConfig};
use recicla_store::Store;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), String> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    let store = Store::new(&config.db_path);
    store
        .init()
        .await
        .map_err(|e| format!("database init failed: {e}"))?;
    info!("database ready at {}", config.db_path.display());

    let state = AppState::new(store, config.flash_secret.as_bytes());
    let app = build_router(state);

    let listener = TcpListener::bind(&config.bind)
        .await
        .map_err(|e| format!("bind {} failed: {e}", config.bind))?;
    info!("recicla-server listening on {}", config.bind);
    axum::serve(listener, app)
        .await
        .map_err(|e| format!("server failed: {e}"))
}

use anyhow::Context;
use parcel_api::{app, AppState};
use parcel_core::Storage;
use parcel_store::{app_config::Config, seed_demo_data, MemStore};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "parcel_api=debug,tower_http=debug,axum::rejection=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Parcel API on port {}", config.server.port);

    let store: Arc<dyn Storage> = Arc::new(MemStore::new());
    if config.seed.demo_data {
        seed_demo_data(store.as_ref())
            .await
            .context("Failed to seed demo data")?;
    }

    let app = app(AppState::new(store, &config));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

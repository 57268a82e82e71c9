//! Meetzy Recommender — Binary Entrypoint
//! Boots the Axum HTTP server, wiring config, catalog, routes, and metrics.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use meetzy_recommender::api::{create_router, AppState};
use meetzy_recommender::catalog::{EventCatalog, HttpCatalog, StaticCatalog};
use meetzy_recommender::config;
use meetzy_recommender::metrics::Metrics;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env in local/dev; no-op in prod environments.
    let _ = dotenvy::dotenv();
    init_tracing();

    let cfg = config::load_default().context("loading service config")?;

    // The Prometheus recorder must be installed before the first counter.
    let metrics = Metrics::init();

    let catalog: Arc<dyn EventCatalog> = if let Some(url) = cfg.catalog.url.clone() {
        tracing::info!(%url, "using http event catalog");
        Arc::new(HttpCatalog::new(url))
    } else if let Some(path) = cfg.catalog.path.clone() {
        let static_catalog =
            StaticCatalog::from_json_file(Path::new(&path)).context("loading catalog file")?;
        tracing::info!(%path, events = static_catalog.len(), "using file event catalog");
        Arc::new(static_catalog)
    } else {
        tracing::warn!("no catalog configured; GET /recommend will see no candidates");
        Arc::new(StaticCatalog::new(Vec::new()))
    };

    let state = AppState::new(catalog);
    let router = create_router(state).merge(metrics.router());

    let listener = tokio::net::TcpListener::bind(&cfg.bind)
        .await
        .with_context(|| format!("binding {}", cfg.bind))?;
    tracing::info!(bind = %cfg.bind, "meetzy recommender listening");
    axum::serve(listener, router).await?;
    Ok(())
}

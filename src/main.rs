use std::sync::Arc;

use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, fmt};

mod controllers;
mod models;
mod routers;
mod secrets;

use controllers::TabController;
use routers::{AppState, app_router};
use secrets::Settings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::default().add_directive(Level::INFO.into())),
        )
        .with_target(false)
        .init();

    let settings = Settings::from_env();

    let tabs = TabController::new(&settings)?;
    let app = app_router(AppState {
        tabs: Arc::new(tabs),
    });

    let listener = tokio::net::TcpListener::bind(settings.bind_address()).await?;
    info!("🎸 Tab relay listening on {}", listener.local_addr()?);
    info!("📡 Upstream: {}", settings.upstream_base_url);

    axum::serve(listener, app).await?;
    Ok(())
}

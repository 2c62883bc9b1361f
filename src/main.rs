mod catalog;
mod config;
mod db;
mod entities;
mod error;
mod models;
mod routes;
mod seed;
mod templates;
#[cfg(test)]
mod test_support;

use std::sync::Arc;

use anyhow::Context;

use crate::{catalog::Catalog, config::Config};

pub struct AppState {
    pub catalog: Catalog,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,movieshelf=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let catalog = Catalog::initialize(&config.database_url, &config.seed_path)
        .await
        .context("failed to initialize catalog")?;

    let app = routes::router(Arc::new(AppState { catalog: catalog.clone() }));

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    catalog.close().await;
    tracing::info!("shut down");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}

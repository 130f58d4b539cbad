//! summerlin-web — Axum web server entry point.
//! Loads site config, serves the sitemap family and static assets.

mod server;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use summerlin_core::config::{LogFormat, SiteConfig, SiteUrlProvider};

use server::AppState;

fn init_tracing(format: LogFormat) {
    let builder = tracing_subscriber::fmt().with_env_filter(
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
    );
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Pretty => builder.init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let project_root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config_path = project_root.join("config.yaml");

    // Tracing needs the config's log format, so report load problems after init
    let (config, load_error) = match SiteConfig::load(&config_path) {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::from_env(&project_root)?, Some(e)),
    };
    init_tracing(config.log_format);

    if let Some(e) = load_error {
        warn!("Using default config: {:#}", e);
    }
    match config.site_url() {
        Ok(url) => info!("{} at {}", config.site_name, url),
        Err(e) => warn!("Sitemaps will fail until the site url is fixed: {}", e),
    }

    let public_dir = config.resolve_public_dir();
    if let Some(dir) = public_dir.as_ref().filter(|d| !d.is_dir()) {
        warn!("public_dir {:?} is not a directory, static assets disabled", dir);
    }

    let port = config.port;
    let state = Arc::new(AppState {
        site: Arc::new(config),
        public_dir,
    });
    let app = server::router(state);

    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Listening on http://localhost:{}/sitemap-index.xml", port);

    // Graceful shutdown on Ctrl+C
    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        info!("Shutdown signal received, draining connections...");
    };

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("Server error")?;

    info!("Server stopped.");
    Ok(())
}

//! Web server — Axum router + shared state.

pub mod sitemap;

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tower_http::services::ServeDir;

use summerlin_core::config::SiteUrlProvider;

/// Shared application state. Read-only for the lifetime of the process.
pub struct AppState {
    pub site: Arc<dyn SiteUrlProvider>,
    pub public_dir: Option<PathBuf>,
}

pub fn router(state: Arc<AppState>) -> Router {
    let mut app = Router::new()
        .merge(sitemap::routes())
        .with_state(state.clone());

    // Serve static assets if the directory exists
    if let Some(public_dir) = state.public_dir.as_ref().filter(|d| d.is_dir()) {
        app = app.fallback_service(ServeDir::new(public_dir));
    }

    app
}

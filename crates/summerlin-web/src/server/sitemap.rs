//! Sitemap endpoints — the sitemap index and the four child sitemaps.
//!
//! Two failure layers: a build error is answered by the handler itself with
//! "Sitemap generation failed", a panic anywhere below the router is caught
//! by [`CatchPanicLayer`] and answered with "Sitemap unavailable".

use std::any::Any;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use chrono::{DateTime, Utc};
use tower_http::catch_panic::CatchPanicLayer;
use tracing::error;

use summerlin_core::config::SiteUrlProvider;
use summerlin_core::sitemap::SitemapKind;

use super::AppState;

pub const XML_CONTENT_TYPE: &str = "application/xml";

pub const GENERATION_FAILED_BODY: &str =
    r#"<?xml version="1.0" encoding="UTF-8"?><error>Sitemap generation failed</error>"#;

pub const UNAVAILABLE_BODY: &str =
    r#"<?xml version="1.0" encoding="UTF-8"?><error>Sitemap unavailable</error>"#;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(SitemapKind::Index.path(), get(get_index))
        .route(SitemapKind::Pages.path(), get(get_pages))
        .route(SitemapKind::Communities.path(), get(get_communities))
        .route(SitemapKind::Properties.path(), get(get_properties))
        .route(SitemapKind::Images.path(), get(get_images))
        .layer(CatchPanicLayer::custom(sitemap_unavailable))
}

async fn get_index(State(state): State<Arc<AppState>>) -> Response {
    render(SitemapKind::Index, state.site.as_ref(), Utc::now())
}

async fn get_pages(State(state): State<Arc<AppState>>) -> Response {
    render(SitemapKind::Pages, state.site.as_ref(), Utc::now())
}

async fn get_communities(State(state): State<Arc<AppState>>) -> Response {
    render(SitemapKind::Communities, state.site.as_ref(), Utc::now())
}

async fn get_properties(State(state): State<Arc<AppState>>) -> Response {
    render(SitemapKind::Properties, state.site.as_ref(), Utc::now())
}

async fn get_images(State(state): State<Arc<AppState>>) -> Response {
    render(SitemapKind::Images, state.site.as_ref(), Utc::now())
}

/// Build `kind` and wrap it in a response. A build error never escapes.
fn render(kind: SitemapKind, site: &dyn SiteUrlProvider, now: DateTime<Utc>) -> Response {
    match kind.build(site, now) {
        Ok(xml) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, XML_CONTENT_TYPE)],
            [(
                header::CACHE_CONTROL,
                format!("public, max-age={}", kind.max_age_secs()),
            )],
            xml,
        )
            .into_response(),
        Err(e) => {
            error!("{} generation error: {}", kind, e);
            xml_error(GENERATION_FAILED_BODY)
        }
    }
}

/// Outer boundary for anything the handlers did not anticipate.
fn sitemap_unavailable(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        *s
    } else {
        "unknown panic"
    };
    error!("Sitemap rendering fault: {}", detail);
    xml_error(UNAVAILABLE_BODY)
}

fn xml_error(body: &'static str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        [(header::CONTENT_TYPE, XML_CONTENT_TYPE)],
        body,
    )
        .into_response()
}

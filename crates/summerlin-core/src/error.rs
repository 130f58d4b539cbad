//! Sitemap errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SitemapError {
    /// No canonical site URL is configured.
    #[error("site url is not configured")]
    MissingSiteUrl,

    /// The configured site URL is not an absolute http(s) URL.
    #[error("invalid site url {url:?}: {reason}")]
    InvalidSiteUrl { url: String, reason: String },
}

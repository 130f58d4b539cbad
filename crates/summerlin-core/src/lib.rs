//! summerlin-core — Sitemap generation for the Reverence Summerlin Homes site.
//!
//! Pure domain logic, no HTTP. The web crate injects a [`config::SiteUrlProvider`]
//! and a timestamp, this crate turns them into sitemap XML documents.

pub mod catalog;
pub mod config;
pub mod error;
pub mod sitemap;
pub mod types;

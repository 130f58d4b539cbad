//! Core types — sitemap entries, URL entries, image entries.

// ── Change frequency ──

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
    Monthly,
}

impl std::fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChangeFreq::Daily => write!(f, "daily"),
            ChangeFreq::Weekly => write!(f, "weekly"),
            ChangeFreq::Monthly => write!(f, "monthly"),
        }
    }
}

// ── Sitemap index ──

/// One `<sitemap>` child of a sitemap index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    pub loc: String,
    pub lastmod: String,
}

// ── URL set ──

/// One `<image:image>` attached to a URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageEntry {
    pub loc: String,
    pub title: String,
    pub caption: String,
}

/// One `<url>` of a URL set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlEntry {
    pub loc: String,
    pub lastmod: Option<String>,
    pub changefreq: Option<ChangeFreq>,
    pub priority: Option<&'static str>,
    pub images: Vec<ImageEntry>,
}

impl UrlEntry {
    pub fn new(loc: String) -> Self {
        Self {
            loc,
            lastmod: None,
            changefreq: None,
            priority: None,
            images: Vec::new(),
        }
    }
}

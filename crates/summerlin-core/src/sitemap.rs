//! Sitemap generation.
//!
//! Builds the sitemap index and the four child sitemaps it points at.
//! Every builder reads the base URL from a [`SiteUrlProvider`] once and
//! stamps every `lastmod` with the same timestamp.
//!
//! # Sitemap Index Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <sitemap>
//!     <loc>https://example.com/sitemap.xml</loc>
//!     <lastmod>2026-01-01T00:00:00.000Z</lastmod>
//!   </sitemap>
//! </sitemapindex>
//! ```

use chrono::{DateTime, SecondsFormat, Utc};
use std::borrow::Cow;

use crate::catalog::{
    PageSpec, COMMUNITIES, FEATURED_COMMUNITY, FEATURED_LISTINGS, KEY_IMAGES,
    RELOCATION_PAGES, RESOURCE_PAGES, STATIC_PAGES,
};
use crate::config::SiteUrlProvider;
use crate::error::SitemapError;
use crate::types::{ChangeFreq, ImageEntry, SitemapEntry, UrlEntry};

pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const IMAGE_NS: &str = "http://www.google.com/schemas/sitemap-image/1.1";

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";

/// One day, for documents that only change on deploy.
const DAY_SECS: u32 = 86_400;
/// One hour, for listings.
const HOUR_SECS: u32 = 3_600;

/// The documents this crate can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitemapKind {
    Index,
    Pages,
    Communities,
    Properties,
    Images,
}

impl SitemapKind {
    /// Child sitemaps in the order the index lists them.
    pub const CHILDREN: [SitemapKind; 4] = [
        SitemapKind::Pages,
        SitemapKind::Communities,
        SitemapKind::Properties,
        SitemapKind::Images,
    ];

    /// Request path, relative to the site root.
    pub fn path(self) -> &'static str {
        match self {
            SitemapKind::Index => "/sitemap-index.xml",
            SitemapKind::Pages => "/sitemap.xml",
            SitemapKind::Communities => "/sitemap-communities.xml",
            SitemapKind::Properties => "/sitemap-properties.xml",
            SitemapKind::Images => "/sitemap-images.xml",
        }
    }

    /// How long clients may cache a successful response.
    pub fn max_age_secs(self) -> u32 {
        match self {
            SitemapKind::Properties => HOUR_SECS,
            _ => DAY_SECS,
        }
    }

    /// Build this document for the provider's site URL at `now`.
    pub fn build(
        self,
        provider: &dyn SiteUrlProvider,
        now: DateTime<Utc>,
    ) -> Result<String, SitemapError> {
        let base_url = provider.site_url()?;
        let lastmod = lastmod_stamp(now);
        let xml = match self {
            SitemapKind::Index => render_index(&index_entries(&base_url, &lastmod)),
            SitemapKind::Pages => render_urlset(&page_urls(&base_url, &lastmod)),
            SitemapKind::Communities => render_urlset(&community_urls(&base_url, &lastmod)),
            SitemapKind::Properties => render_urlset(&property_urls(&base_url, &lastmod)),
            SitemapKind::Images => render_urlset(&image_urls(&base_url)),
        };
        Ok(xml)
    }
}

impl std::fmt::Display for SitemapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path().trim_start_matches('/'))
    }
}

/// ISO-8601 UTC with millisecond precision, e.g. `2026-10-18T09:30:00.000Z`.
pub fn lastmod_stamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

// ── Entry lists ──

pub fn index_entries(base_url: &str, lastmod: &str) -> Vec<SitemapEntry> {
    SitemapKind::CHILDREN
        .iter()
        .map(|kind| SitemapEntry {
            loc: format!("{}{}", base_url, kind.path()),
            lastmod: lastmod.to_string(),
        })
        .collect()
}

fn page_url(base_url: &str, spec: &PageSpec, lastmod: &str) -> UrlEntry {
    UrlEntry {
        lastmod: Some(lastmod.to_string()),
        changefreq: Some(spec.changefreq),
        priority: Some(spec.priority),
        ..UrlEntry::new(format!("{}{}", base_url, spec.path))
    }
}

fn community_priority(slug: &str, featured: &'static str, other: &'static str) -> &'static str {
    if slug == FEATURED_COMMUNITY {
        featured
    } else {
        other
    }
}

/// Static pages, communities, relocation guides and resources.
pub fn page_urls(base_url: &str, lastmod: &str) -> Vec<UrlEntry> {
    let mut urls: Vec<UrlEntry> = STATIC_PAGES
        .iter()
        .map(|spec| page_url(base_url, spec, lastmod))
        .collect();
    urls.extend(COMMUNITIES.iter().map(|(slug, _)| UrlEntry {
        lastmod: Some(lastmod.to_string()),
        changefreq: Some(ChangeFreq::Weekly),
        priority: Some(community_priority(slug, "0.9", "0.7")),
        ..UrlEntry::new(format!("{}/communities/{}", base_url, slug))
    }));
    urls.extend(
        RELOCATION_PAGES
            .iter()
            .chain(RESOURCE_PAGES)
            .map(|spec| page_url(base_url, spec, lastmod)),
    );
    urls
}

/// Every community page with its hero and aerial images.
pub fn community_urls(base_url: &str, lastmod: &str) -> Vec<UrlEntry> {
    COMMUNITIES
        .iter()
        .map(|(slug, name)| UrlEntry {
            lastmod: Some(lastmod.to_string()),
            changefreq: Some(ChangeFreq::Weekly),
            priority: Some(community_priority(slug, "0.9", "0.8")),
            images: vec![
                ImageEntry {
                    loc: format!("{}/images/communities/{}-hero.jpg", base_url, slug),
                    title: format!("{} - Las Vegas Real Estate", name),
                    caption: format!("Beautiful homes in {}, Las Vegas", name),
                },
                ImageEntry {
                    loc: format!("{}/images/communities/{}-aerial.jpg", base_url, slug),
                    title: format!("{} Aerial View", name),
                    caption: format!("Aerial view of {} community", name),
                },
            ],
            ..UrlEntry::new(format!("{}/communities/{}", base_url, slug))
        })
        .collect()
}

/// The listings index plus every featured listing.
pub fn property_urls(base_url: &str, lastmod: &str) -> Vec<UrlEntry> {
    let mut urls = vec![UrlEntry {
        lastmod: Some(lastmod.to_string()),
        changefreq: Some(ChangeFreq::Daily),
        priority: Some("0.9"),
        ..UrlEntry::new(format!("{}/properties", base_url))
    }];

    urls.extend(FEATURED_LISTINGS.iter().map(|listing| {
        let image_base = format!("{}/images/properties/{}", base_url, listing.id);
        UrlEntry {
            lastmod: Some(lastmod.to_string()),
            changefreq: Some(ChangeFreq::Weekly),
            priority: Some("0.8"),
            images: vec![
                ImageEntry {
                    loc: format!("{}-hero.jpg", image_base),
                    title: format!(
                        "{} Bed {} Bath Home in {}",
                        listing.bedrooms, listing.bathrooms, listing.community
                    ),
                    caption: format!(
                        "Beautiful {} sqft home in {}, Las Vegas - ${}",
                        listing.sqft,
                        listing.community,
                        format_thousands(listing.price)
                    ),
                },
                ImageEntry {
                    loc: format!("{}-exterior.jpg", image_base),
                    title: format!("{} Home Exterior", listing.community),
                    caption: format!("Exterior view of luxury home in {}", listing.community),
                },
            ],
            ..UrlEntry::new(format!("{}/properties/{}", base_url, listing.id))
        }
    }));
    urls
}

/// Key site images, each attached to the home page.
pub fn image_urls(base_url: &str) -> Vec<UrlEntry> {
    KEY_IMAGES
        .iter()
        .map(|(path, title, caption)| UrlEntry {
            images: vec![ImageEntry {
                loc: format!("{}{}", base_url, path),
                title: title.to_string(),
                caption: caption.to_string(),
            }],
            ..UrlEntry::new(base_url.to_string())
        })
        .collect()
}

// ── Rendering ──

pub fn render_index(entries: &[SitemapEntry]) -> String {
    let mut xml = String::with_capacity(256 + entries.len() * 128);

    xml.push_str(XML_DECL);
    xml.push_str("<sitemapindex xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push_str("\">\n");

    for entry in entries {
        xml.push_str("  <sitemap>\n    <loc>");
        xml.push_str(&escape_xml(&entry.loc));
        xml.push_str("</loc>\n    <lastmod>");
        xml.push_str(&escape_xml(&entry.lastmod));
        xml.push_str("</lastmod>\n  </sitemap>\n");
    }

    xml.push_str("</sitemapindex>\n");
    xml
}

/// Render a `urlset`, declaring the image namespace only when needed.
pub fn render_urlset(urls: &[UrlEntry]) -> String {
    let mut xml = String::with_capacity(256 + urls.len() * 256);
    let with_images = urls.iter().any(|u| !u.images.is_empty());

    xml.push_str(XML_DECL);
    xml.push_str("<urlset xmlns=\"");
    xml.push_str(SITEMAP_NS);
    xml.push('"');
    if with_images {
        xml.push_str("\n        xmlns:image=\"");
        xml.push_str(IMAGE_NS);
        xml.push('"');
    }
    xml.push_str(">\n");

    for entry in urls {
        xml.push_str("  <url>\n    <loc>");
        xml.push_str(&escape_xml(&entry.loc));
        xml.push_str("</loc>\n");
        if let Some(lastmod) = &entry.lastmod {
            xml.push_str("    <lastmod>");
            xml.push_str(&escape_xml(lastmod));
            xml.push_str("</lastmod>\n");
        }
        if let Some(changefreq) = entry.changefreq {
            xml.push_str("    <changefreq>");
            xml.push_str(&changefreq.to_string());
            xml.push_str("</changefreq>\n");
        }
        if let Some(priority) = entry.priority {
            xml.push_str("    <priority>");
            xml.push_str(priority);
            xml.push_str("</priority>\n");
        }
        for image in &entry.images {
            xml.push_str("    <image:image>\n      <image:loc>");
            xml.push_str(&escape_xml(&image.loc));
            xml.push_str("</image:loc>\n      <image:title>");
            xml.push_str(&escape_xml(&image.title));
            xml.push_str("</image:title>\n      <image:caption>");
            xml.push_str(&escape_xml(&image.caption));
            xml.push_str("</image:caption>\n    </image:image>\n");
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

/// Escape `& < > " '`, borrowing the input when nothing needs escaping.
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    let Some(first) = s.find(['&', '<', '>', '"', '\'']) else {
        return Cow::Borrowed(s);
    };

    let mut out = String::with_capacity(s.len() + 16);
    out.push_str(&s[..first]);
    for ch in s[first..].chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// `1250000` -> `1,250,000`
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct FixedUrl(&'static str);

    impl SiteUrlProvider for FixedUrl {
        fn site_url(&self) -> Result<String, SitemapError> {
            crate::config::normalize_site_url(self.0)
        }
    }

    struct Unconfigured;

    impl SiteUrlProvider for Unconfigured {
        fn site_url(&self) -> Result<String, SitemapError> {
            Err(SitemapError::MissingSiteUrl)
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
    }

    fn lastmods(xml: &str) -> Vec<&str> {
        xml.split("<lastmod>")
            .skip(1)
            .filter_map(|s| s.split("</lastmod>").next())
            .collect()
    }

    #[test]
    fn test_lastmod_stamp_format() {
        assert_eq!(lastmod_stamp(fixed_now()), "2026-10-18T09:30:00.000Z");
    }

    #[test]
    fn test_index_lists_four_children() {
        let xml = SitemapKind::Index.build(&FixedUrl("https://example.com"), fixed_now()).unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<sitemapindex xmlns="{SITEMAP_NS}">"#)));
        assert_eq!(xml.matches("<sitemap>").count(), 4);
        assert_eq!(xml.matches("</sitemap>").count(), 4);
        for suffix in [
            "/sitemap.xml",
            "/sitemap-communities.xml",
            "/sitemap-properties.xml",
            "/sitemap-images.xml",
        ] {
            assert!(
                xml.contains(&format!("<loc>https://example.com{}</loc>", suffix)),
                "missing {}",
                suffix
            );
        }
        assert!(xml.trim_end().ends_with("</sitemapindex>"));
    }

    #[test]
    fn test_index_children_in_order() {
        let entries = index_entries("https://example.com", "t");
        let locs: Vec<&str> = entries.iter().map(|e| e.loc.as_str()).collect();
        assert_eq!(
            locs,
            vec![
                "https://example.com/sitemap.xml",
                "https://example.com/sitemap-communities.xml",
                "https://example.com/sitemap-properties.xml",
                "https://example.com/sitemap-images.xml",
            ]
        );
    }

    #[test]
    fn test_index_lastmods_identical() {
        let xml = SitemapKind::Index.build(&FixedUrl("https://example.com"), fixed_now()).unwrap();
        let stamps = lastmods(&xml);
        assert_eq!(stamps.len(), 4);
        assert!(stamps.iter().all(|s| *s == "2026-10-18T09:30:00.000Z"));
    }

    #[test]
    fn test_index_trailing_slash_base() {
        let xml = SitemapKind::Index.build(&FixedUrl("https://example.com/"), fixed_now()).unwrap();
        assert!(xml.contains("<loc>https://example.com/sitemap.xml</loc>"));
        assert!(!xml.contains("https://example.com//"));
    }

    #[test]
    fn test_index_is_idempotent() {
        let provider = FixedUrl("https://example.com");
        let a = SitemapKind::Index.build(&provider, fixed_now()).unwrap();
        let b = SitemapKind::Index.build(&provider, fixed_now()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_missing_config_fails_every_kind() {
        for kind in [SitemapKind::Index]
            .into_iter()
            .chain(SitemapKind::CHILDREN)
        {
            assert_eq!(
                kind.build(&Unconfigured, fixed_now()),
                Err(SitemapError::MissingSiteUrl)
            );
        }
    }

    #[test]
    fn test_pages_sitemap_contents() {
        let xml = SitemapKind::Pages
            .build(&FixedUrl("https://example.com"), fixed_now())
            .unwrap();

        let expected =
            STATIC_PAGES.len() + COMMUNITIES.len() + RELOCATION_PAGES.len() + RESOURCE_PAGES.len();
        assert_eq!(xml.matches("<url>").count(), expected);
        assert!(!xml.contains("xmlns:image"));
        assert!(xml.contains(
            "<loc>https://example.com</loc>\n    <lastmod>2026-10-18T09:30:00.000Z</lastmod>\n    <changefreq>weekly</changefreq>\n    <priority>1.0</priority>"
        ));
        assert!(xml.contains(
            "<loc>https://example.com/communities/monument-at-reverence</loc>\n    <lastmod>2026-10-18T09:30:00.000Z</lastmod>\n    <changefreq>weekly</changefreq>\n    <priority>0.9</priority>"
        ));
        assert!(xml.contains(
            "<loc>https://example.com/communities/kestrel</loc>\n    <lastmod>2026-10-18T09:30:00.000Z</lastmod>\n    <changefreq>weekly</changefreq>\n    <priority>0.7</priority>"
        ));
        assert!(xml.contains("<loc>https://example.com/relocate/san-francisco</loc>"));
        assert!(xml.contains("<loc>https://example.com/resources/tennis-pickleball</loc>"));
    }

    #[test]
    fn test_communities_sitemap_images() {
        let xml = SitemapKind::Communities
            .build(&FixedUrl("https://example.com"), fixed_now())
            .unwrap();

        assert!(xml.contains(&format!(r#"xmlns:image="{IMAGE_NS}""#)));
        assert_eq!(xml.matches("<url>").count(), COMMUNITIES.len());
        assert_eq!(xml.matches("<image:image>").count(), COMMUNITIES.len() * 2);
        assert!(xml.contains(
            "<image:loc>https://example.com/images/communities/the-ridges-aerial.jpg</image:loc>"
        ));
        assert!(xml.contains("<image:title>The Ridges - Las Vegas Real Estate</image:title>"));
        assert_eq!(xml.matches("<priority>0.9</priority>").count(), 1);
    }

    #[test]
    fn test_properties_sitemap_contents() {
        let xml = SitemapKind::Properties
            .build(&FixedUrl("https://example.com"), fixed_now())
            .unwrap();

        assert_eq!(xml.matches("<url>").count(), FEATURED_LISTINGS.len() + 1);
        assert!(xml.contains(
            "<loc>https://example.com/properties</loc>\n    <lastmod>2026-10-18T09:30:00.000Z</lastmod>\n    <changefreq>daily</changefreq>"
        ));
        assert!(xml.contains(
            "<image:caption>Beautiful 3200 sqft home in Monument at Reverence, Las Vegas - $1,250,000</image:caption>"
        ));
        assert!(xml.contains("<image:title>5 Bed 4 Bath Home in The Ridges</image:title>"));
    }

    #[test]
    fn test_images_sitemap_contents() {
        let xml = SitemapKind::Images
            .build(&FixedUrl("https://example.com"), fixed_now())
            .unwrap();

        assert_eq!(xml.matches("<url>").count(), KEY_IMAGES.len());
        assert_eq!(
            xml.matches("<loc>https://example.com</loc>").count(),
            KEY_IMAGES.len()
        );
        assert!(!xml.contains("<lastmod>"));
        assert!(xml.contains("<image:loc>https://example.com/images/og-image.svg</image:loc>"));
    }

    #[test]
    fn test_non_canonical_base_never_reaches_loc() {
        for raw in ["https:example.com", "https://example.com?ref=x", "https://example.com#top"] {
            assert!(
                matches!(
                    SitemapKind::Index.build(&FixedUrl(raw), fixed_now()),
                    Err(SitemapError::InvalidSiteUrl { .. })
                ),
                "{}",
                raw
            );
        }
    }

    #[test]
    fn test_max_age() {
        assert_eq!(SitemapKind::Index.max_age_secs(), 86_400);
        assert_eq!(SitemapKind::Properties.max_age_secs(), 3_600);
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml(r#"say "hi""#), "say &quot;hi&quot;");
        assert_eq!(escape_xml("it's"), "it&apos;s");
        assert_eq!(escape_xml("Tom & Jerry's <b>"), "Tom &amp; Jerry&apos;s &lt;b&gt;");
        assert!(matches!(escape_xml("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_render_escapes_locations() {
        let xml = render_index(&[SitemapEntry {
            loc: "https://example.com/?a=1&b=2".into(),
            lastmod: "t".into(),
        }]);
        assert!(xml.contains("<loc>https://example.com/?a=1&amp;b=2</loc>"));
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(750_000), "750,000");
        assert_eq!(format_thousands(2_100_000), "2,100,000");
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(SitemapKind::Communities.to_string(), "sitemap-communities.xml");
    }
}

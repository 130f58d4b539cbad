//! Site catalog — every page, community, listing and key image the sitemaps list.

use crate::types::ChangeFreq;

/// A page path relative to the site root, with its crawl hints.
#[derive(Debug, Clone, Copy)]
pub struct PageSpec {
    pub path: &'static str,
    pub priority: &'static str,
    pub changefreq: ChangeFreq,
}

const fn page(path: &'static str, priority: &'static str, changefreq: ChangeFreq) -> PageSpec {
    PageSpec {
        path,
        priority,
        changefreq,
    }
}

// ── Static pages ──

pub const STATIC_PAGES: &[PageSpec] = &[
    page("", "1.0", ChangeFreq::Weekly),
    page("/buying", "0.9", ChangeFreq::Monthly),
    page("/selling", "0.9", ChangeFreq::Monthly),
    page("/relocate", "0.8", ChangeFreq::Monthly),
    page("/communities", "0.9", ChangeFreq::Weekly),
    page("/resources", "0.7", ChangeFreq::Weekly),
    page("/about", "0.6", ChangeFreq::Monthly),
    page("/contact", "0.8", ChangeFreq::Monthly),
    page("/valuation", "0.7", ChangeFreq::Monthly),
];

pub const RELOCATION_PAGES: &[PageSpec] = &[
    page("/relocate/summerlin", "0.8", ChangeFreq::Monthly),
    page("/relocate/california", "0.7", ChangeFreq::Monthly),
    page("/relocate/los-angeles", "0.7", ChangeFreq::Monthly),
    page("/relocate/san-francisco", "0.7", ChangeFreq::Monthly),
    page("/relocate/new-york", "0.7", ChangeFreq::Monthly),
    page("/relocate/seattle", "0.7", ChangeFreq::Monthly),
    page("/relocate/phoenix", "0.7", ChangeFreq::Monthly),
    page("/relocate/chicago", "0.7", ChangeFreq::Monthly),
];

pub const RESOURCE_PAGES: &[PageSpec] = &[
    page("/resources/blog", "0.6", ChangeFreq::Weekly),
    page("/resources/youtube", "0.5", ChangeFreq::Monthly),
    page("/resources/schools", "0.6", ChangeFreq::Monthly),
    page("/resources/golf-courses", "0.5", ChangeFreq::Monthly),
    page("/resources/trails", "0.5", ChangeFreq::Monthly),
    page("/resources/tennis-pickleball", "0.5", ChangeFreq::Monthly),
    page("/resources/pools", "0.5", ChangeFreq::Monthly),
];

// ── Communities ──

/// The community that gets a priority bump in every sitemap.
pub const FEATURED_COMMUNITY: &str = "monument-at-reverence";

/// (slug, display name)
pub const COMMUNITIES: &[(&str, &str)] = &[
    ("monument-at-reverence", "Monument at Reverence"),
    ("reverence-summerlin", "Reverence Summerlin"),
    ("summerlin-west", "Summerlin West"),
    ("the-ridges", "The Ridges"),
    ("red-rock-country-club", "Red Rock Country Club"),
    ("skye-canyon", "Skye Canyon"),
    ("ascension-summerlin", "Ascension Summerlin"),
    ("astra-la-madre-peaks", "Astra at La Madre Peaks"),
    ("downtown-summerlin", "Downtown Summerlin"),
    ("kestrel", "Kestrel"),
    ("mesa-ridge", "Mesa Ridge"),
    ("the-peaks", "The Peaks"),
    ("luxury-homes", "Luxury Homes"),
    ("new-construction", "New Construction"),
    ("henderson", "Henderson"),
    ("boulder-city", "Boulder City"),
];

// ── Featured listings ──

#[derive(Debug, Clone, Copy)]
pub struct Listing {
    pub id: &'static str,
    pub price: u64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub sqft: u32,
    pub community: &'static str,
}

pub const FEATURED_LISTINGS: &[Listing] = &[
    Listing {
        id: "monument-reverence-luxury-home-1",
        price: 1_250_000,
        bedrooms: 4,
        bathrooms: 3,
        sqft: 3200,
        community: "Monument at Reverence",
    },
    Listing {
        id: "summerlin-west-family-home-2",
        price: 850_000,
        bedrooms: 3,
        bathrooms: 2,
        sqft: 2400,
        community: "Summerlin West",
    },
    Listing {
        id: "the-ridges-luxury-estate-3",
        price: 2_100_000,
        bedrooms: 5,
        bathrooms: 4,
        sqft: 4500,
        community: "The Ridges",
    },
    Listing {
        id: "red-rock-country-club-golf-home-4",
        price: 1_650_000,
        bedrooms: 4,
        bathrooms: 3,
        sqft: 3800,
        community: "Red Rock Country Club",
    },
    Listing {
        id: "skye-canyon-modern-home-5",
        price: 750_000,
        bedrooms: 3,
        bathrooms: 2,
        sqft: 2200,
        community: "Skye Canyon",
    },
];

// ── Key images ──

/// (path, title, caption)
pub const KEY_IMAGES: &[(&str, &str, &str)] = &[
    (
        "/images/og-image.svg",
        "Dr. Janet Duffy - Las Vegas Real Estate Expert",
        "Dr. Janet Duffy, Featured Pulte Homes Agent specializing in Las Vegas and Summerlin real estate",
    ),
    (
        "/images/twitter-image.svg",
        "Dr. Janet Duffy Real Estate Services",
        "Expert real estate services in Las Vegas, Summerlin, and Monument at Reverence",
    ),
    (
        "/images/dr-janet-duffy.svg",
        "Dr. Janet Duffy Professional Headshot",
        "Dr. Janet Duffy, Licensed Real Estate Agent serving Las Vegas and Summerlin",
    ),
    (
        "/images/communities/monument-at-reverence-hero.jpg",
        "Monument at Reverence Community",
        "Luxury homes in Monument at Reverence, Las Vegas",
    ),
    (
        "/images/communities/summerlin-west-hero.jpg",
        "Summerlin West Community",
        "Beautiful homes in Summerlin West, Las Vegas",
    ),
    (
        "/images/communities/the-ridges-hero.jpg",
        "The Ridges Luxury Community",
        "Luxury estates in The Ridges, Las Vegas",
    ),
    (
        "/images/communities/red-rock-country-club-hero.jpg",
        "Red Rock Country Club",
        "Golf course homes in Red Rock Country Club, Las Vegas",
    ),
    (
        "/images/communities/skye-canyon-hero.jpg",
        "Skye Canyon Community",
        "Modern homes in Skye Canyon, Las Vegas",
    ),
];

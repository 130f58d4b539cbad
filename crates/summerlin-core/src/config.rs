//! Configuration — YAML config + env var overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

use crate::error::SitemapError;

/// Env vars applied on top of the YAML file, in this order.
const ENV_SITE_URL: &str = "SITE_URL";
const ENV_SITE_NAME: &str = "SITE_NAME";
const ENV_PORT: &str = "PORT";
const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => anyhow::bail!("unknown log format '{}' (expected pretty or json)", other),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Human-readable site name
    #[serde(default = "default_site_name")]
    pub site_name: String,

    /// Canonical base URL every absolute link is built from
    #[serde(default = "default_site_url")]
    pub site_url: String,

    /// HTTP listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory of static assets served as the router fallback
    #[serde(default)]
    pub public_dir: Option<String>,

    /// "pretty" | "json"
    #[serde(default = "default_log_format")]
    pub log_format: LogFormat,

    /// Directory holding config.yaml (set at load time, not serialized from YAML)
    #[serde(skip)]
    pub project_root: PathBuf,
}

fn default_site_name() -> String {
    "Reverence Summerlin Homes".into()
}
fn default_site_url() -> String {
    "https://reverencesummerlinhomes.com".into()
}
fn default_port() -> u16 {
    8000
}
fn default_log_format() -> LogFormat {
    LogFormat::Pretty
}

impl SiteConfig {
    /// Load config from a YAML file with env var overrides.
    pub fn load(config_path: &Path) -> Result<Self> {
        Self::load_with_env(config_path, |key| std::env::var(key).ok())
    }

    /// Same as [`SiteConfig::load`], reading overrides through `env`.
    pub fn load_with_env(config_path: &Path, env: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        let mut config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        let parent = config_path.parent().unwrap_or(Path::new("."));
        config.project_root = parent
            .canonicalize()
            .unwrap_or_else(|_| parent.to_path_buf());

        config.apply_env(env)?;
        Ok(config)
    }

    /// Defaults plus env var overrides, for running without a config file.
    pub fn from_env(project_root: &Path) -> Result<Self> {
        let mut config = Self {
            project_root: project_root.to_path_buf(),
            ..Self::default()
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = env(ENV_SITE_URL) {
            self.site_url = url;
        }
        if let Some(name) = env(ENV_SITE_NAME) {
            self.site_name = name;
        }
        if let Some(port) = env(ENV_PORT) {
            self.port = port
                .trim()
                .parse()
                .with_context(|| format!("{} is not a valid port: {:?}", ENV_PORT, port))?;
        }
        if let Some(format) = env(ENV_LOG_FORMAT) {
            self.log_format = format.parse()?;
        }
        Ok(())
    }

    /// Resolve the static asset directory, relative paths against the project root.
    pub fn resolve_public_dir(&self) -> Option<PathBuf> {
        let dir = self.public_dir.as_deref()?;
        let p = Path::new(dir);
        if p.is_absolute() {
            Some(p.to_path_buf())
        } else {
            Some(self.project_root.join(p))
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: default_site_name(),
            site_url: default_site_url(),
            port: default_port(),
            public_dir: None,
            log_format: default_log_format(),
            project_root: PathBuf::new(),
        }
    }
}

/// Source of the canonical base URL, consulted on every request.
pub trait SiteUrlProvider: Send + Sync {
    /// Base URL without a trailing slash.
    fn site_url(&self) -> Result<String, SitemapError>;
}

impl SiteUrlProvider for SiteConfig {
    fn site_url(&self) -> Result<String, SitemapError> {
        normalize_site_url(&self.site_url)
    }
}

/// Validate an absolute http(s) URL and strip trailing slashes.
pub fn normalize_site_url(raw: &str) -> Result<String, SitemapError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(SitemapError::MissingSiteUrl);
    }

    let parsed = Url::parse(trimmed).map_err(|e| SitemapError::InvalidSiteUrl {
        url: trimmed.to_string(),
        reason: e.to_string(),
    })?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(SitemapError::InvalidSiteUrl {
            url: trimmed.to_string(),
            reason: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }

    // The url crate repairs `https:host` and `http:/host`; the raw text is what lands in <loc>
    let invalid = |reason: &str| SitemapError::InvalidSiteUrl {
        url: trimmed.to_string(),
        reason: reason.to_string(),
    };
    if !trimmed.starts_with(&format!("{}://", parsed.scheme())) {
        return Err(invalid("expected scheme://host"));
    }
    if parsed.cannot_be_a_base() || parsed.host_str().map_or(true, str::is_empty) {
        return Err(invalid("missing host"));
    }
    if parsed.query().is_some() {
        return Err(invalid("base url must not carry a query"));
    }
    if parsed.fragment().is_some() {
        return Err(invalid("base url must not carry a fragment"));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

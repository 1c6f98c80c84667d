//! Site configuration
//!
//! The configuration is embedded into the wasm bundle at build time.
//! `SITE_API_BASE` overrides the reviews API base URL without editing the TOML.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub api: ApiConfig,
    pub reviews: ReviewsConfig,
    pub notifications: NotificationsConfig,
    pub contact: ContactConfig,
    pub quotes: QuotesConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReviewsConfig {
    /// localStorage key for the last successfully loaded review sequence
    pub cache_key: String,
    pub resize_debounce_ms: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct NotificationsConfig {
    pub duration_ms: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ContactConfig {
    /// Contact form has no backend endpoint, sending is simulated
    pub send_delay_ms: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct QuotesConfig {
    pub storage_key: String,
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:3001/api"

[reviews]
cache_key = "customerReviews"
resize_debounce_ms = 300

[notifications]
duration_ms = 5000

[contact]
send_delay_ms = 2000

[quotes]
storage_key = "quoteList"
"#;

/// Parse configuration text and apply the build-time API override
pub fn parse_config(text: &str, api_override: Option<&str>) -> Result<SiteConfig, toml::de::Error> {
    let mut config: SiteConfig = toml::from_str(text)?;
    if let Some(base) = api_override.map(str::trim).filter(|s| !s.is_empty()) {
        config.api.base_url = base.trim_end_matches('/').to_string();
    }
    Ok(config)
}

static CONFIG: Lazy<SiteConfig> = Lazy::new(|| {
    parse_config(DEFAULT_CONFIG, option_env!("SITE_API_BASE"))
        .expect("embedded site config is valid")
});

/// Get the site configuration
pub fn site_config() -> &'static SiteConfig {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG, None).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3001/api");
        assert_eq!(config.reviews.cache_key, "customerReviews");
        assert_eq!(config.reviews.resize_debounce_ms, 300);
        assert_eq!(config.notifications.duration_ms, 5000);
        assert_eq!(config.quotes.storage_key, "quoteList");
    }

    #[test]
    fn test_api_override() {
        let config = parse_config(DEFAULT_CONFIG, Some("https://reviews.example.in/api/")).unwrap();
        assert_eq!(config.api.base_url, "https://reviews.example.in/api");

        let config = parse_config(DEFAULT_CONFIG, Some("  ")).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3001/api");
    }
}

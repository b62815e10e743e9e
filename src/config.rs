use crate::models::{CatalogRoute, MediaKind};
use std::env;

/// Upstream plugin source that declares the currently working origin
const DEFAULT_DISCOVERY_URL: &str =
    "https://raw.githubusercontent.com/kerimmkirac/cs-kerim2/main/RecTV/src/main/kotlin/com/kerimmkirac/RecTV.kt";

/// Fallback mirror host pattern; `{n}` is the numeric suffix
const DEFAULT_FALLBACK_HOST_TEMPLATE: &str = "https://m.prectv{n}.sbs";

/// Credential path segment the origin API expects on every call
const DEFAULT_API_KEY: &str = "4F5A9C3D9A86FA54EACEDDD635185/c3c5bd17-e37b-4b94-a944-8a3688a30452";

/// Harvest configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Origin resolution
    pub preferred_origin: Option<String>,
    pub discovery_url: String,
    pub fallback_host_template: String,
    pub fallback_range_low: u32,
    pub fallback_range_high: u32,

    // API
    pub api_key: String,
    pub request_timeout_ms: u64,
    pub user_agent: String,
    pub referer: String,

    // Fan-out
    pub pool_size_categories: usize,
    pub pool_size_series: usize,

    // Output
    pub output_file: String,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            // Origin resolution
            preferred_origin: env::var("PREFERRED_ORIGIN").ok(),
            discovery_url: env::var("DISCOVERY_URL")
                .unwrap_or_else(|_| DEFAULT_DISCOVERY_URL.to_string()),
            fallback_host_template: env::var("FALLBACK_HOST_TEMPLATE")
                .unwrap_or_else(|_| DEFAULT_FALLBACK_HOST_TEMPLATE.to_string()),
            fallback_range_low: env::var("FALLBACK_RANGE_LOW")
                .unwrap_or_else(|_| "40".to_string())
                .parse()
                .unwrap_or(40),
            fallback_range_high: env::var("FALLBACK_RANGE_HIGH")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap_or(60),

            // API
            api_key: env::var("API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string()),
            request_timeout_ms: env::var("REQUEST_TIMEOUT_MS")
                .unwrap_or_else(|_| "15000".to_string())
                .parse()
                .unwrap_or(15_000),

            // Identity headers the origin expects on catalog calls
            user_agent: env::var("USER_AGENT")
                .unwrap_or_else(|_| "googleusercontent".to_string()),
            referer: env::var("REFERER").unwrap_or_else(|_| "https://twitter.com/".to_string()),

            // Fan-out
            pool_size_categories: env::var("POOL_SIZE_CATEGORIES")
                .unwrap_or_else(|_| "4".to_string())
                .parse()
                .unwrap_or(4),
            pool_size_series: env::var("POOL_SIZE_SERIES")
                .unwrap_or_else(|_| "8".to_string())
                .parse()
                .unwrap_or(8),

            // Output
            output_file: env::var("OUTPUT_FILE").unwrap_or_else(|_| "rectv_full.m3u".to_string()),
        }
    }
}

/// Channel groups walked by the harvester
pub fn channel_routes() -> Vec<CatalogRoute> {
    vec![CatalogRoute::new(MediaKind::Live, "0", "Canlı Yayınlar")]
}

/// Movie genres walked by the harvester
pub fn movie_routes() -> Vec<CatalogRoute> {
    [
        ("0", "Son Filmler"),
        ("14", "Aile"),
        ("1", "Aksiyon"),
        ("13", "Animasyon"),
        ("19", "Belgesel Filmleri"),
        ("4", "Bilim Kurgu"),
        ("2", "Dram"),
        ("10", "Fantastik"),
        ("3", "Komedi"),
        ("8", "Korku"),
        ("17", "Macera"),
        ("5", "Romantik"),
    ]
    .into_iter()
    .map(|(id, label)| CatalogRoute::new(MediaKind::Movie, id, label))
    .collect()
}

/// Series genres walked by the harvester
pub fn series_routes() -> Vec<CatalogRoute> {
    [
        ("0", "Son Diziler"),
        ("1", "Aksiyon"),
        ("2", "Dram"),
        ("3", "Komedi"),
    ]
    .into_iter()
    .map(|(id, label)| CatalogRoute::new(MediaKind::Series, id, label))
    .collect()
}

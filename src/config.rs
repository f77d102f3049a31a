use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Selene configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct SeleneConfig {
    /// Almanac service settings.
    #[serde(default)]
    pub service: ServiceConfig,

    /// Response cache settings.
    #[serde(default)]
    pub cache: CacheConfig,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceConfig {
    /// Service root URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Observer coordinate as "LAT,LON" decimal degrees.
    #[serde(default = "default_coords")]
    pub coords: String,

    /// UTC offset in hours for daily event times.
    #[serde(default = "default_tz")]
    pub tz: f64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            coords: default_coords(),
            tz: default_tz(),
        }
    }
}

fn default_base_url() -> String {
    selene_almanac::DEFAULT_BASE_URL.to_string()
}
fn default_coords() -> String {
    // Washington Monument, the service's documented reference point.
    "38.889444,-77.035278".to_string()
}
fn default_tz() -> f64 {
    -5.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Whether responses are cached at all.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Directory holding one JSON file per cached response.
    #[serde(default = "default_cache_dir")]
    pub dir: PathBuf,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            dir: default_cache_dir(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_cache_dir() -> PathBuf {
    PathBuf::from(".selene-cache")
}

/// Loads configuration from `path`, falling back to defaults when the
/// file does not exist.
pub fn load(path: &Path) -> Result<SeleneConfig> {
    if !path.exists() {
        return Ok(SeleneConfig::default());
    }
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config: {}", path.display()))
}

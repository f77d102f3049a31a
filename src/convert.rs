use anyhow::{Context, Result};

use selene_almanac::{AlmanacClient, ClientConfig, DiskCache, Fetcher};

use crate::config::SeleneConfig;

/// Builds the almanac fetcher described by the configuration.
pub fn build_fetcher(config: &SeleneConfig) -> Result<Fetcher> {
    let client = AlmanacClient::new(ClientConfig {
        base_url: config.service.base_url.clone(),
        coords: config.service.coords.clone(),
        tz: config.service.tz,
    })
    .context("failed to initialize almanac client")?;

    let cache = if config.cache.enabled {
        let cache = DiskCache::open(&config.cache.dir)
            .with_context(|| format!("failed to open cache: {}", config.cache.dir.display()))?;
        Some(cache)
    } else {
        None
    };

    Ok(Fetcher::new(client, cache))
}

//! Remote endpoints used during the transformation

use crate::product::ProductConfig;
use anyhow::{Context, Result};
use url::Url;

/// Remote endpoints with environment overrides applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Clojars artifact endpoint answering with `latest_version`
    pub registry: Url,
    /// Image written to `assets/hickey.png`
    pub asset: Url,
}

impl Endpoints {
    /// Resolve endpoints from a product config, honoring its override variables
    pub fn from_config<C: ProductConfig>(config: &C) -> Result<Self> {
        Ok(Self {
            registry: resolve(
                std::env::var(config.registry_url_env()).ok(),
                config.registry_url(),
            )?,
            asset: resolve(std::env::var(config.asset_url_env()).ok(), config.asset_url())?,
        })
    }
}

/// Parse the override if set and non-empty, otherwise the default
fn resolve(override_value: Option<String>, default: &str) -> Result<Url> {
    let url_str = override_value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| default.to_string());
    Url::parse(&url_str).with_context(|| format!("Invalid URL: {}", url_str))
}

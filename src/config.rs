// src/config.rs
//! Layered service configuration: TOML file, then env overrides, then
//! built-in defaults. A missing file is fine; a malformed one is not.

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_PATH: &str = "config/recommender.toml";
pub const DEFAULT_BIND: &str = "0.0.0.0:8000";

pub const ENV_CONFIG_PATH: &str = "RECOMMENDER_CONFIG_PATH";
pub const ENV_BIND: &str = "RECOMMENDER_BIND";
pub const ENV_CATALOG_URL: &str = "RECOMMENDER_CATALOG_URL";
pub const ENV_CATALOG_PATH: &str = "RECOMMENDER_CATALOG_PATH";

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Where the candidate events come from. When both are set, `url` wins.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            catalog: CatalogConfig::default(),
        }
    }
}

fn default_bind() -> String {
    DEFAULT_BIND.to_string()
}

/// Load config from an explicit TOML path.
pub fn load_from(path: &Path) -> Result<ServiceConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("reading config from {}", path.display()))?;
    let cfg: ServiceConfig = toml::from_str(&content)
        .with_context(|| format!("parsing config at {}", path.display()))?;
    Ok(cfg)
}

/// Load config using env var + fallbacks:
/// 1) $RECOMMENDER_CONFIG_PATH (must exist when set)
/// 2) config/recommender.toml when present
/// 3) built-in defaults
///
/// RECOMMENDER_BIND / RECOMMENDER_CATALOG_URL / RECOMMENDER_CATALOG_PATH
/// override the file values last.
pub fn load_default() -> Result<ServiceConfig> {
    let mut cfg = if let Ok(p) = std::env::var(ENV_CONFIG_PATH) {
        let pb = PathBuf::from(p);
        if !pb.exists() {
            bail!("{ENV_CONFIG_PATH} points to non-existent path");
        }
        load_from(&pb)?
    } else {
        let default_p = PathBuf::from(DEFAULT_CONFIG_PATH);
        if default_p.exists() {
            load_from(&default_p)?
        } else {
            ServiceConfig::default()
        }
    };

    apply_env_overrides(&mut cfg);
    Ok(cfg)
}

fn apply_env_overrides(cfg: &mut ServiceConfig) {
    if let Some(v) = non_empty_env(ENV_BIND) {
        cfg.bind = v;
    }
    if let Some(v) = non_empty_env(ENV_CATALOG_URL) {
        cfg.catalog.url = Some(v);
    }
    if let Some(v) = non_empty_env(ENV_CATALOG_PATH) {
        cfg.catalog.path = Some(v);
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

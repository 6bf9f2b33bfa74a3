//! Configuration file support.
//!
//! Loads optional `novelus.toml` from the working directory, or the file
//! named by `--config`.

use anyhow::{Context, Result};
use novelus_site::PageOptions;
use serde::Deserialize;
use std::path::Path;
use tracing::warn;

/// File looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE: &str = "novelus.toml";

/// Root configuration structure
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NovelusConfig {
    pub site: SiteConfig,
}

/// `[site]` table. Unset keys keep the page defaults.
#[derive(Debug, Default, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// Document title
    pub title: Option<String>,
    /// `<html lang>`
    pub lang: Option<String>,
    /// Base URL for images
    pub asset_base: Option<String>,
    /// Footer copyright year
    pub copyright_year: Option<u16>,
}

impl NovelusConfig {
    /// Load `novelus.toml` from `root`.
    /// Returns default config if the file doesn't exist or is invalid.
    pub fn load(root: &Path) -> Self {
        let path = root.join(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        match Self::load_from_path(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring {}: {:#}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load a specific file. Missing or malformed files are errors.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {}", path.display()))
    }

    /// Page options with config values applied over the defaults.
    pub fn page_options(&self) -> PageOptions {
        let defaults = PageOptions::default();
        let site = self.site.clone();
        PageOptions {
            title: site.title.unwrap_or(defaults.title),
            lang: site.lang.unwrap_or(defaults.lang),
            asset_base: site.asset_base.unwrap_or(defaults.asset_base),
            copyright_year: site.copyright_year.unwrap_or(defaults.copyright_year),
        }
    }
}

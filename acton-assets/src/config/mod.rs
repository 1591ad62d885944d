//! Configuration for asset tag generation
//!
//! Settings are loaded with the same precedence as the rest of the acton
//! stack:
//!
//! 1. Environment variables (highest priority, `ACTON_` prefix, `__` for nesting)
//! 2. The TOML file passed to [`AssetConfig::load_from`], or `./config.toml`
//! 3. Hardcoded defaults (fallback)
//!
//! # Example Configuration
//!
//! ```toml
//! # config.toml
//! [assets]
//! javascripts_dir = "/static/js"
//! stylesheets_dir = "/static/css"
//! stylesheet_media = "screen"
//! asset_host = "https://static.example.com"
//! asset_version = "2024-06-01"
//! ```
//!
//! The version can also come from the environment at deploy time:
//! `ACTON_ASSETS__ASSET_VERSION=3f9c2e1`.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::AssetError;

/// Where required assets are served from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Path prefix for relative JavaScript names
    pub javascripts_dir: String,

    /// Path prefix for relative stylesheet names
    pub stylesheets_dir: String,

    /// `media` attribute on stylesheet links
    pub stylesheet_media: String,

    /// Optional host prepended to every non-URL asset path
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_host: Option<String>,

    /// Optional cache-busting token appended as `?v=...`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asset_version: Option<String>,
}

impl Default for AssetSettings {
    fn default() -> Self {
        Self {
            javascripts_dir: "/javascripts".to_string(),
            stylesheets_dir: "/stylesheets".to_string(),
            stylesheet_media: "all".to_string(),
            asset_host: None,
            asset_version: None,
        }
    }
}

/// Top-level configuration document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Asset settings (`[assets]` table)
    #[serde(default)]
    pub assets: AssetSettings,
}

impl AssetConfig {
    /// Load configuration from `./config.toml` and the environment
    ///
    /// A missing file falls back to defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Config`] if the file or environment contain values
    /// of the wrong type.
    pub fn load() -> Result<Self, AssetError> {
        Self::load_from("config.toml")
    }

    /// Load configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::Config`] if:
    /// - Default configuration cannot be serialized to TOML
    /// - The file contains invalid TOML syntax
    /// - Values fail type conversion
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use acton_assets::config::AssetConfig;
    ///
    /// # fn example() -> Result<(), acton_assets::error::AssetError> {
    /// let config = AssetConfig::load_from("./config/production.toml")?;
    /// let media = config.assets.stylesheet_media;
    /// # Ok(())
    /// # }
    /// ```
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let defaults =
            toml::to_string(&Self::default()).map_err(|e| AssetError::Config(e.to_string()))?;

        let config: Self = Figment::new()
            .merge(Toml::string(&defaults))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("ACTON_").split("__").lowercase(true))
            .extract()?;

        tracing::debug!(
            path = %path.as_ref().display(),
            javascripts_dir = %config.assets.javascripts_dir,
            stylesheets_dir = %config.assets.stylesheets_dir,
            "Loaded asset configuration"
        );
        Ok(config)
    }
}

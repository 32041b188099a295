//! Playground configuration file handling (tintlab.toml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tintlab_core::{ColorCategory, ElementType};
use tintlab_store::LocalCache;

/// Top-level playground configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct PlaygroundConfig {
    /// Quiet period before a preview commits, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
    /// Minimum spacing between surface projections, in milliseconds
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
    /// Local theme cache file; platform default when absent
    #[serde(default)]
    pub cache_path: Option<PathBuf>,
    /// Initially selected element scope
    #[serde(default = "default_element")]
    pub element: ElementType,
    /// Initially selected color category
    #[serde(default = "default_category")]
    pub category: ColorCategory,
    /// Opaque user id forwarded to the remote store
    #[serde(default)]
    pub user_id: Option<String>,
}

fn default_debounce_ms() -> u64 {
    400
}

fn default_frame_interval_ms() -> u64 {
    16
}

fn default_element() -> ElementType {
    ElementType::Buttons
}

fn default_category() -> ColorCategory {
    ColorCategory::Backgrounds
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            frame_interval_ms: default_frame_interval_ms(),
            cache_path: None,
            element: default_element(),
            category: default_category(),
            user_id: None,
        }
    }
}

impl PlaygroundConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("invalid playground config at {}", path.display()))
    }

    /// The theme cache file to use: the configured path, or the platform
    /// default location
    pub fn resolve_cache_path(&self) -> Result<PathBuf> {
        match &self.cache_path {
            Some(path) => Ok(path.clone()),
            None => LocalCache::default_path().context("no usable theme cache location"),
        }
    }
}

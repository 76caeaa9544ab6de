pub mod config;
pub mod fit;
pub mod render;
pub mod say;
pub mod voices;

use std::path::PathBuf;

use anyhow::{Context, Result};
use meme_core::config::MemeConfig;

/// Load the config file if one was given, else the defaults.
pub(crate) fn load_config(path: Option<&PathBuf>) -> Result<MemeConfig> {
    match path {
        Some(path) => MemeConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(MemeConfig::default()),
    }
}

//! Optional user configuration for tzlist.
//!
//! The configuration lives at `$XDG_CONFIG_HOME/tzlist/tzlist.toml`. The file
//! is optional; when it is missing every option falls back to its default and
//! nothing is written to disk.
//!
//! ```toml
//! # Zones appended after the built-in catalog (duplicates are skipped)
//! extra_zones = ["America/Lima", "Asia/Dhaka"]
//!
//! group_by_area = false             # List zones grouped by area
//! show_local_time = false           # Show the current time in each zone
//! ```
//!
//! Extra zones are not checked against the tz database; they only need to be
//! non-empty identifiers without whitespace.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::*;
use crate::logger::Log;

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
pub struct Config {
    pub extra_zones: Option<Vec<String>>,
    pub group_by_area: Option<bool>,
    pub show_local_time: Option<bool>,
}

impl Config {
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the configuration from the default location.
    ///
    /// A missing file yields the default configuration.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path).with_context(|| {
            format!(
                "Failed to load configuration from {}",
                config_path.display()
            )
        })
    }

    /// Load and validate the configuration at `path`.
    ///
    /// Unlike [`Config::load`], a missing file is an error here.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            anyhow::bail!(
                "Configuration file not found at specified path: {}",
                path.display()
            );
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        config.normalize_extra_zones();
        validate_config(&config)?;

        Ok(config)
    }

    /// Trim surrounding whitespace from extra zones.
    fn normalize_extra_zones(&mut self) {
        if let Some(zones) = self.extra_zones.as_mut() {
            for tz in zones.iter_mut() {
                let trimmed = tz.trim();
                if trimmed.len() != tz.len() {
                    *tz = trimmed.to_string();
                }
            }
        }
    }

    pub fn extra_zones(&self) -> &[String] {
        self.extra_zones.as_deref().unwrap_or(&[])
    }

    pub fn group_by_area(&self) -> bool {
        self.group_by_area.unwrap_or(DEFAULT_GROUP_BY_AREA)
    }

    pub fn show_local_time(&self) -> bool {
        self.show_local_time.unwrap_or(DEFAULT_SHOW_LOCAL_TIME)
    }

    /// Print the effective configuration.
    pub fn log_config(&self) {
        Log::log_block_start("Loaded configuration");
        Log::log_indented(&format!("Group by area: {}", self.group_by_area()));
        Log::log_indented(&format!("Show local time: {}", self.show_local_time()));
        if self.extra_zones().is_empty() {
            Log::log_indented("Extra zones: none");
        } else {
            Log::log_indented(&format!("Extra zones: {}", self.extra_zones().join(", ")));
        }
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    for tz in config.extra_zones() {
        if tz.is_empty() {
            anyhow::bail!("extra_zones contains an empty time zone identifier");
        }
        if tz.chars().any(char::is_whitespace) {
            anyhow::bail!(
                "Invalid time zone identifier in extra_zones: '{}' (whitespace is not allowed, use '_' instead)",
                tz
            );
        }
    }

    Ok(())
}

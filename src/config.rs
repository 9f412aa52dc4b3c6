// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Configuration management
//!
//! Settings are layered: built-in defaults, then a TOML file, then
//! `WAYPATH_*` environment variables.

use crate::engine::EngineOptions;
use anyhow::{Context, Result};
use config::{Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Separator placed between node names when printing a route
    pub separator: String,
    /// Stop the search once the destination is settled
    pub early_exit: bool,
    /// Colour human-readable output
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            separator: " -> ".to_string(),
            early_exit: true,
            color: true,
        }
    }
}

impl Config {
    /// Engine options derived from this configuration
    #[must_use]
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            early_exit: self.early_exit,
        }
    }

    /// Render a single key, or `None` if the key is unknown
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "separator" => Some(self.separator.clone()),
            "early_exit" => Some(self.early_exit.to_string()),
            "color" => Some(self.color.to_string()),
            _ => None,
        }
    }

    /// Render the whole configuration as TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}

/// Default config file location: `<config_dir>/config.toml`
#[must_use]
pub fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "hyperpolymath", "waypath")
        .map(|d| d.config_dir().join("config.toml"))
}

/// Load configuration.
///
/// An explicit `path` must exist; the default location is optional.
pub fn load(path: Option<&Path>) -> Result<Config> {
    let mut builder = config::Config::builder();

    match path {
        Some(p) => {
            builder = builder.add_source(File::from(p).format(FileFormat::Toml).required(true));
        }
        None => {
            if let Some(p) = default_path() {
                builder = builder.add_source(
                    File::from(p.as_path())
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }
    }

    builder = builder.add_source(Environment::with_prefix("WAYPATH"));

    let settings = builder.build().context("Failed to read configuration")?;
    let config: Config = settings
        .try_deserialize()
        .context("Failed to parse configuration")?;

    tracing::debug!(?config, "configuration loaded");
    Ok(config)
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Config command - show the effective configuration

use crate::config::Config;
use anyhow::Result;

/// Print the whole configuration as TOML, or the value of one key
pub fn run(config: &Config, key: Option<&str>) -> Result<()> {
    match key {
        Some(k) => {
            let value = config
                .get(k)
                .ok_or_else(|| anyhow::anyhow!("Unknown configuration key: {}", k))?;
            println!("{value}");
        }
        None => print!("{}", config.to_toml()?),
    }
    Ok(())
}

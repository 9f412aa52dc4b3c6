// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod bootstrap;
pub mod completions;
pub mod config;
pub mod export;
pub mod nodes;
pub mod reachable;
pub mod route;

use owo_colors::{OwoColorize, Style};

/// Process exit status when a node name does not resolve
pub const EXIT_INVALID_INPUT: u8 = 2;

/// How command output is rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputStyle {
    /// Emit JSON instead of human-readable text
    pub json: bool,
    /// Use ANSI colours in human-readable text
    pub color: bool,
    /// Separator between node names in a route
    pub separator: String,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            json: false,
            color: false,
            separator: " -> ".to_string(),
        }
    }
}

impl OutputStyle {
    /// Apply `style` to `text` when colour is enabled
    #[must_use]
    pub fn paint(&self, text: &str, style: Style) -> String {
        if self.color {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Reachable command - list every node reachable from a start node

use super::route::{self, QueryOutcome};
use super::OutputStyle;
use crate::graph::RouteGraph;
use anyhow::{Context, Result};

/// Names reachable from `from`, sorted. `None` if `from` does not resolve.
#[must_use]
pub fn reachable_names(graph: &RouteGraph, from: &str) -> Option<Vec<String>> {
    let start = graph.resolve(from.trim())?;
    let mut names: Vec<String> = graph
        .reachable_from(start)
        .into_iter()
        .map(|id| graph.name(id).to_string())
        .collect();
    names.sort();
    Some(names)
}

/// Run the reachable command.
///
/// Returns `false` when `from` does not resolve; that is reported the same
/// way as an unknown name in the route command.
pub fn run(graph: &RouteGraph, from: &str, style: &OutputStyle) -> Result<bool> {
    let Some(names) = reachable_names(graph, from) else {
        let invalid = QueryOutcome::InvalidNode {
            name: from.trim().to_string(),
        };
        println!("{}", route::render(&invalid, style)?);
        return Ok(false);
    };

    if style.json {
        println!(
            "{}",
            serde_json::to_string(&names).context("Failed to serialize node names")?
        );
    } else {
        for name in names {
            println!("{name}");
        }
    }
    Ok(true)
}

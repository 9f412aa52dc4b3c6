// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Nodes command - list nodes with their outgoing edges

use super::OutputStyle;
use crate::graph::RouteGraph;
use crate::types::Cost;
use anyhow::{Context, Result};
use owo_colors::Style;
use serde::Serialize;

/// One node and where it leads
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeListing {
    /// Node name
    pub name: String,
    /// `(target, cost)` pairs, sorted by target name then cost
    pub edges: Vec<(String, Cost)>,
}

/// Describe every node in insertion order
#[must_use]
pub fn listing(graph: &RouteGraph) -> Vec<NodeListing> {
    graph
        .nodes()
        .map(|id| {
            let mut edges: Vec<(String, Cost)> = graph
                .neighbors(id)
                .map(|e| (graph.name(e.to).to_string(), e.cost))
                .collect();
            edges.sort();
            NodeListing {
                name: graph.name(id).to_string(),
                edges,
            }
        })
        .collect()
}

/// Run the nodes command
pub fn run(graph: &RouteGraph, style: &OutputStyle) -> Result<()> {
    let listing = listing(graph);

    if style.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&listing).context("Failed to serialize nodes")?
        );
        return Ok(());
    }

    if listing.is_empty() {
        eprintln!("Graph is empty.");
        return Ok(());
    }

    for node in listing {
        let edges = node
            .edges
            .iter()
            .map(|(to, cost)| format!("{to} ({cost})"))
            .collect::<Vec<_>>()
            .join(", ");
        let name = style.paint(&node.name, Style::new().bold());
        if edges.is_empty() {
            println!("{name}");
        } else {
            println!("{name} -> {edges}");
        }
    }
    Ok(())
}

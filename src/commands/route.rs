// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Route command - resolve two node names and print the cheapest route

use super::OutputStyle;
use crate::engine::{find_shortest_path_with, EngineOptions};
use crate::graph::RouteGraph;
use crate::types::{PathOutcome, TotalCost};
use anyhow::{Context, Result};
use owo_colors::Style;
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::info;

/// What the user sees for a route query
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryOutcome {
    /// A route exists
    Found {
        /// Node names in travel order
        path: Vec<String>,
        /// Total route cost
        cost: TotalCost,
    },
    /// Both names resolved but nothing connects them
    NoPath,
    /// A name did not resolve; the engine was not run
    InvalidNode {
        /// The first name that failed to resolve
        name: String,
    },
}

impl QueryOutcome {
    /// Whether the query failed on its input
    #[must_use]
    pub fn is_invalid(&self) -> bool {
        matches!(self, Self::InvalidNode { .. })
    }
}

/// Resolve both names and, only if both are known, run the engine
#[must_use]
pub fn query(graph: &RouteGraph, from: &str, to: &str, options: EngineOptions) -> QueryOutcome {
    let (from, to) = (from.trim(), to.trim());

    let Some(source) = graph.resolve(from) else {
        return QueryOutcome::InvalidNode { name: from.to_string() };
    };
    let Some(destination) = graph.resolve(to) else {
        return QueryOutcome::InvalidNode { name: to.to_string() };
    };

    match find_shortest_path_with(graph, source, destination, options) {
        PathOutcome::Found(route) => QueryOutcome::Found {
            path: route.names(graph).into_iter().map(String::from).collect(),
            cost: route.cost,
        },
        PathOutcome::NoPath => QueryOutcome::NoPath,
    }
}

/// Render an outcome as text or JSON
pub fn render(outcome: &QueryOutcome, style: &OutputStyle) -> Result<String> {
    if style.json {
        return serde_json::to_string(outcome).context("Failed to serialize route");
    }

    let text = match outcome {
        QueryOutcome::Found { path, cost } => format!(
            "{}\n{}",
            style.paint(&format!("Path: {}", path.join(&style.separator)), Style::new().green()),
            style.paint(&format!("Total cost: {cost}"), Style::new().bold()),
        ),
        QueryOutcome::NoPath => style.paint("No path found.", Style::new().yellow()),
        QueryOutcome::InvalidNode { name } => {
            style.paint(&format!("Invalid node name entered: {name}"), Style::new().red())
        }
    };
    Ok(text)
}

/// Run the route command. Missing names are prompted for on stdin.
pub fn run(
    graph: &RouteGraph,
    from: Option<String>,
    to: Option<String>,
    options: EngineOptions,
    style: &OutputStyle,
) -> Result<QueryOutcome> {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut prompts = std::io::stderr();

    let from = match from {
        Some(name) => name,
        None => prompt("Enter the source node: ", &mut input, &mut prompts)?,
    };
    let to = match to {
        Some(name) => name,
        None => prompt("Enter the destination node: ", &mut input, &mut prompts)?,
    };

    info!("Routing {} -> {}", from.trim(), to.trim());
    let outcome = query(graph, &from, &to, options);
    println!("{}", render(&outcome, style)?);
    Ok(outcome)
}

/// Ask for one line of input
fn prompt<R: BufRead, W: Write>(label: &str, input: &mut R, out: &mut W) -> Result<String> {
    out.write_all(label.as_bytes())?;
    out.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read node name")?;
    Ok(line.trim().to_string())
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph construction from command-line input
//!
//! The library never embeds graph data. The CLI starts from the reference
//! graph (unless told not to) and layers `--node` and `--edge` items on top.

use crate::error::GraphError;
use crate::graph::RouteGraph;
use anyhow::{Context, Result};
use std::str::FromStr;
use tracing::debug;

/// Edges of the reference graph: A->B(5), A->C(10), B->D(3), C->D(7)
pub const REFERENCE_EDGES: [(&str, &str, i64); 4] = [
    ("A", "B", 5),
    ("A", "C", 10),
    ("B", "D", 3),
    ("C", "D", 7),
];

/// One `FROM:TO:COST` edge given on the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    /// Source node name
    pub from: String,
    /// Target node name
    pub to: String,
    /// Edge cost; negative values are rejected when the graph is built
    pub cost: i64,
}

impl FromStr for EdgeSpec {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || GraphError::MalformedEdgeSpec(s.to_string());

        // Split from the right so the cost is always the last field
        let mut parts = s.rsplitn(3, ':');
        let cost = parts.next().ok_or_else(malformed)?;
        let to = parts.next().ok_or_else(malformed)?;
        let from = parts.next().ok_or_else(malformed)?;

        let cost = cost.trim().parse::<i64>().map_err(|_| malformed())?;
        if from.trim().is_empty() || to.trim().is_empty() {
            return Err(malformed());
        }

        Ok(Self {
            from: from.trim().to_string(),
            to: to.trim().to_string(),
            cost,
        })
    }
}

/// Everything needed to build the graph for one invocation
#[derive(Debug, Clone, Default)]
pub struct GraphSource {
    /// Start from the reference graph
    pub reference: bool,
    /// Extra nodes, possibly unconnected
    pub nodes: Vec<String>,
    /// Extra edges
    pub edges: Vec<EdgeSpec>,
}

impl GraphSource {
    /// Build the graph, rejecting invalid names and weights
    pub fn build(&self) -> Result<RouteGraph> {
        let mut graph = RouteGraph::new();

        if self.reference {
            for (from, to, cost) in REFERENCE_EDGES {
                graph.add_edge_by_name(from, to, cost)?;
            }
        }

        for name in &self.nodes {
            graph
                .add_node(name)
                .with_context(|| format!("Failed to add node '{name}'"))?;
        }

        for edge in &self.edges {
            graph
                .add_edge_by_name(&edge.from, &edge.to, edge.cost)
                .with_context(|| format!("Failed to add edge {}:{}:{}", edge.from, edge.to, edge.cost))?;
        }

        debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "graph built"
        );
        Ok(graph)
    }
}

/// The reference graph on its own
pub fn reference_graph() -> Result<RouteGraph> {
    GraphSource {
        reference: true,
        ..GraphSource::default()
    }
    .build()
}

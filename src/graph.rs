// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph store: nodes, weighted directed edges and name resolution

use crate::error::GraphError;
use crate::types::{Cost, Edge, Node, NodeId};
use anyhow::{Context, Result};
use petgraph::graph::DiGraph;
use petgraph::visit::{Bfs, EdgeRef};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Weighted directed graph with petgraph backing and a name lookup table
#[derive(Debug, Clone, Default)]
pub struct RouteGraph {
    /// Node arena; edge weights are costs
    graph: DiGraph<Node, Cost>,
    /// Map from node name to node index
    node_indices: HashMap<String, NodeId>,
}

/// Serializable snapshot used by the JSON export
#[derive(Debug, Serialize)]
struct GraphExport<'a> {
    nodes: Vec<&'a str>,
    edges: Vec<EdgeExport<'a>>,
}

#[derive(Debug, Serialize)]
struct EdgeExport<'a> {
    from: &'a str,
    to: &'a str,
    cost: Cost,
}

impl RouteGraph {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node, or return the existing one with the same name
    pub fn add_node(&mut self, name: &str) -> Result<NodeId, GraphError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GraphError::EmptyName);
        }
        if let Some(&idx) = self.node_indices.get(name) {
            return Ok(idx);
        }
        let idx = self.graph.add_node(Node::new(name));
        self.node_indices.insert(name.to_string(), idx);
        Ok(idx)
    }

    /// Append a directed edge `from -> to` with the given cost.
    ///
    /// Negative costs are rejected before the graph is touched.
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, cost: i64) -> Result<(), GraphError> {
        let from_node = self
            .graph
            .node_weight(from)
            .ok_or_else(|| GraphError::UnknownNode(format!("#{}", from.index())))?;
        let to_node = self
            .graph
            .node_weight(to)
            .ok_or_else(|| GraphError::UnknownNode(format!("#{}", to.index())))?;

        let cost = Cost::try_from(cost).map_err(|_| GraphError::InvalidWeight {
            from: from_node.name.clone(),
            to: to_node.name.clone(),
            cost,
        })?;

        self.graph.add_edge(from, to, cost);
        Ok(())
    }

    /// Append an edge between named nodes, creating either endpoint if missing
    pub fn add_edge_by_name(&mut self, from: &str, to: &str, cost: i64) -> Result<(), GraphError> {
        if cost < 0 {
            return Err(GraphError::InvalidWeight {
                from: from.trim().to_string(),
                to: to.trim().to_string(),
                cost,
            });
        }
        let from_idx = self.add_node(from)?;
        let to_idx = self.add_node(to)?;
        self.add_edge(from_idx, to_idx, cost)
    }

    /// Look up a node by name. `None` is a normal outcome, not an error.
    ///
    /// Surrounding whitespace is ignored, as in [`RouteGraph::add_node`].
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<NodeId> {
        self.node_indices.get(name.trim()).copied()
    }

    /// Check whether `id` belongs to this graph
    #[must_use]
    pub fn contains(&self, id: NodeId) -> bool {
        self.graph.node_weight(id).is_some()
    }

    /// Get the node for an id
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.graph.node_weight(id)
    }

    /// Name of a node, or `"?"` for an id from another graph
    #[must_use]
    pub fn name(&self, id: NodeId) -> &str {
        self.graph.node_weight(id).map_or("?", |n| n.name.as_str())
    }

    /// Outgoing edges of `id`
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = Edge> + '_ {
        self.graph.edges(id).map(|e| Edge {
            to: e.target(),
            cost: *e.weight(),
        })
    }

    /// All node ids in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.graph.node_indices()
    }

    /// Every node reachable from `start` along directed edges, `start` included.
    ///
    /// Breadth-first; each node is visited once, so cycles terminate.
    #[must_use]
    pub fn reachable_from(&self, start: NodeId) -> HashSet<NodeId> {
        let mut reachable = HashSet::new();
        if !self.contains(start) {
            return reachable;
        }

        let mut bfs = Bfs::new(&self.graph, start);
        while let Some(idx) = bfs.next(&self.graph) {
            reachable.insert(idx);
        }
        reachable
    }

    /// Get node count
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Get edge count
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Check if the graph is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Export to DOT format for Graphviz
    #[must_use]
    pub fn to_dot(&self) -> String {
        let mut dot = String::from("digraph waypath {\n");
        dot.push_str("  rankdir=LR;\n");
        dot.push_str("  node [shape=circle];\n\n");

        for node in self.graph.node_weights() {
            dot.push_str(&format!("  \"{}\";\n", escape_dot(&node.name)));
        }

        dot.push('\n');

        for edge in self.graph.edge_references() {
            dot.push_str(&format!(
                "  \"{}\" -> \"{}\" [label=\"{}\"];\n",
                escape_dot(self.name(edge.source())),
                escape_dot(self.name(edge.target())),
                edge.weight()
            ));
        }

        dot.push_str("}\n");
        dot
    }

    /// Export to JSON
    pub fn to_json(&self) -> Result<String> {
        let export = GraphExport {
            nodes: self.graph.node_weights().map(|n| n.name.as_str()).collect(),
            edges: self
                .graph
                .edge_references()
                .map(|e| EdgeExport {
                    from: self.name(e.source()),
                    to: self.name(e.target()),
                    cost: *e.weight(),
                })
                .collect(),
        };
        serde_json::to_string_pretty(&export).context("Failed to serialize graph to JSON")
    }
}

fn escape_dot(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Waypath library - least-cost routes through weighted directed graphs
//!
//! This crate provides a small graph store with name resolution and
//! reachability queries, and a Dijkstra engine that computes the cheapest
//! route between two of its nodes.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod graph;

/// Core data types shared by the graph store and the engine
pub mod types {
    use petgraph::graph::NodeIndex;
    use serde::{Deserialize, Serialize};

    /// Per-edge travel cost. Always non-negative.
    pub type Cost = u64;

    /// Sum of edge costs along a route. Wide enough that no realistic route
    /// of `Cost` edges can overflow it.
    pub type TotalCost = u128;

    /// Stable identity of a node: its index in the graph arena.
    pub type NodeId = NodeIndex;

    // =========================================================================
    // Node / Edge
    // =========================================================================

    /// A location in the graph
    #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Node {
        /// Unique name, used both as lookup key and display label
        pub name: String,
    }

    impl Node {
        /// Create a node with the given name
        #[must_use]
        pub fn new(name: impl Into<String>) -> Self {
            Self { name: name.into() }
        }
    }

    /// Outgoing edge as seen from its source node
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Edge {
        /// Destination node
        pub to: NodeId,
        /// Cost of travelling this edge
        pub cost: Cost,
    }

    // =========================================================================
    // Query Results
    // =========================================================================

    /// A least-cost route from source to destination
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Route {
        /// Nodes in travel order, source first and destination last
        pub nodes: Vec<NodeId>,
        /// Sum of the edge costs along `nodes`
        pub cost: TotalCost,
    }

    impl Route {
        /// Node names in travel order
        #[must_use]
        pub fn names<'g>(&self, graph: &'g crate::graph::RouteGraph) -> Vec<&'g str> {
            self.nodes.iter().map(|&id| graph.name(id)).collect()
        }

        /// Node names joined by `separator`
        #[must_use]
        pub fn display(&self, graph: &crate::graph::RouteGraph, separator: &str) -> String {
            self.names(graph).join(separator)
        }

        /// Number of edges travelled
        #[must_use]
        pub fn hops(&self) -> usize {
            self.nodes.len().saturating_sub(1)
        }
    }

    /// Result of a shortest-path query between two resolved nodes
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum PathOutcome {
        /// The destination is reachable
        Found(Route),
        /// No directed route connects source to destination
        NoPath,
    }

    impl PathOutcome {
        /// The route, if one was found
        #[must_use]
        pub fn route(&self) -> Option<&Route> {
            match self {
                Self::Found(route) => Some(route),
                Self::NoPath => None,
            }
        }
    }
}

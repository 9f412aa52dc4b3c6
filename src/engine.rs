// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Shortest-path engine (Dijkstra over the reachable subgraph)
//!
//! Each query owns its cost map, predecessor map and frontier, so one
//! [`RouteGraph`] can serve any number of queries, including concurrent ones
//! over a shared reference. The graph is only ever read.

use crate::graph::RouteGraph;
use crate::types::{NodeId, PathOutcome, Route, TotalCost};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use tracing::{debug, trace, warn};

/// Tuning knobs for a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Stop as soon as the destination leaves the frontier
    pub early_exit: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self { early_exit: true }
    }
}

/// Frontier entry. Ordered so that `BinaryHeap` pops the cheapest first,
/// and the lowest node index among equal costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Frontier {
    cost: TotalCost,
    node: NodeId,
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Find the least-cost route from `source` to `destination` with default options.
///
/// Both ids must come from [`RouteGraph::resolve`] on `graph`; resolution
/// failures are the caller's to report.
#[must_use]
pub fn find_shortest_path(graph: &RouteGraph, source: NodeId, destination: NodeId) -> PathOutcome {
    find_shortest_path_with(graph, source, destination, EngineOptions::default())
}

/// Find the least-cost route from `source` to `destination`.
#[must_use]
pub fn find_shortest_path_with(
    graph: &RouteGraph,
    source: NodeId,
    destination: NodeId,
    options: EngineOptions,
) -> PathOutcome {
    let reachable = graph.reachable_from(source);

    // A node absent from `distances` has not been reached yet (infinite cost).
    let mut distances: HashMap<NodeId, TotalCost> = HashMap::new();
    let mut previous: HashMap<NodeId, NodeId> = HashMap::new();

    // Nodes join the frontier on their first relaxation; the rest of the
    // reachable set stays at infinity, which is equivalent to seeding it.
    let mut frontier = BinaryHeap::new();
    if reachable.contains(&source) {
        distances.insert(source, 0);
        frontier.push(Frontier { cost: 0, node: source });
    }

    while let Some(Frontier { cost, node }) = frontier.pop() {
        if distances.get(&node).is_some_and(|&best| cost > best) {
            trace!(node = graph.name(node), cost, "skipping stale frontier entry");
            continue;
        }

        trace!(node = graph.name(node), cost, "settled");
        if options.early_exit && node == destination {
            break;
        }

        for edge in graph.neighbors(node) {
            if !reachable.contains(&edge.to) {
                continue;
            }
            let Some(candidate) = cost.checked_add(TotalCost::from(edge.cost)) else {
                warn!(
                    from = graph.name(node),
                    to = graph.name(edge.to),
                    "route cost overflow, edge ignored"
                );
                continue;
            };
            if distances.get(&edge.to).map_or(true, |&current| candidate < current) {
                trace!(
                    from = graph.name(node),
                    to = graph.name(edge.to),
                    candidate,
                    "relaxed"
                );
                distances.insert(edge.to, candidate);
                previous.insert(edge.to, node);
                frontier.push(Frontier {
                    cost: candidate,
                    node: edge.to,
                });
            }
        }
    }

    let path = reconstruct_path(&previous, destination);
    let connected = path.first() == Some(&source);
    let outcome = match distances.get(&destination) {
        Some(&cost) if connected => PathOutcome::Found(Route { nodes: path, cost }),
        _ => PathOutcome::NoPath,
    };

    debug!(
        source = graph.name(source),
        destination = graph.name(destination),
        reachable = reachable.len(),
        found = outcome.route().is_some(),
        "shortest path query finished"
    );
    outcome
}

/// Walk the predecessor chain back from `destination` and return it in travel order
fn reconstruct_path(previous: &HashMap<NodeId, NodeId>, destination: NodeId) -> Vec<NodeId> {
    let mut path = vec![destination];
    let mut at = destination;
    while let Some(&prev) = previous.get(&at) {
        path.push(prev);
        at = prev;
    }
    path.reverse();
    path
}

// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Invariant tests for the route graph and the shortest-path engine
//!
//! These tests verify critical invariants:
//! 1. Optimality - reported costs match a brute-force minimum
//! 2. Determinism - repeated queries give identical answers
//! 3. Termination - cycles never hang reachability or the engine

use proptest::prelude::*;
use std::collections::HashSet;
use waypath::commands::route::{query, QueryOutcome};
use waypath::engine::{find_shortest_path, find_shortest_path_with, EngineOptions};
use waypath::graph::RouteGraph;
use waypath::types::{NodeId, PathOutcome, TotalCost};

// =============================================================================
// Test Helpers
// =============================================================================

fn reference_graph() -> RouteGraph {
    let mut graph = RouteGraph::new();
    graph.add_edge_by_name("A", "B", 5).unwrap();
    graph.add_edge_by_name("A", "C", 10).unwrap();
    graph.add_edge_by_name("B", "D", 3).unwrap();
    graph.add_edge_by_name("C", "D", 7).unwrap();
    graph
}

fn id(graph: &RouteGraph, name: &str) -> NodeId {
    graph.resolve(name).unwrap()
}

fn build(node_count: usize, edges: &[(usize, usize, u8)]) -> RouteGraph {
    let mut graph = RouteGraph::new();
    for i in 0..node_count {
        graph.add_node(&format!("n{i}")).unwrap();
    }
    for &(from, to, cost) in edges {
        graph
            .add_edge_by_name(&format!("n{from}"), &format!("n{to}"), i64::from(cost))
            .unwrap();
    }
    graph
}

/// Cheapest simple path by exhaustive search
fn brute_force(graph: &RouteGraph, source: NodeId, destination: NodeId) -> Option<TotalCost> {
    fn walk(
        graph: &RouteGraph,
        at: NodeId,
        destination: NodeId,
        cost: TotalCost,
        visited: &mut HashSet<NodeId>,
        best: &mut Option<TotalCost>,
    ) {
        if at == destination {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for edge in graph.neighbors(at) {
            if visited.insert(edge.to) {
                walk(graph, edge.to, destination, cost + TotalCost::from(edge.cost), visited, best);
                visited.remove(&edge.to);
            }
        }
    }

    let mut best = None;
    let mut visited = HashSet::from([source]);
    walk(graph, source, destination, 0, &mut visited, &mut best);
    best
}

/// Sum edge costs along `nodes`, taking the cheapest parallel edge each hop
fn path_cost(graph: &RouteGraph, nodes: &[NodeId]) -> Option<TotalCost> {
    nodes.windows(2).try_fold(0, |acc, hop| {
        graph
            .neighbors(hop[0])
            .filter(|e| e.to == hop[1])
            .map(|e| e.cost)
            .min()
            .map(|c| acc + TotalCost::from(c))
    })
}

fn arb_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize, u8)>)> {
    (1usize..7).prop_flat_map(|n| {
        let edge = (0..n, 0..n, 0u8..20);
        (Just(n), prop::collection::vec(edge, 0..16))
    })
}

// =============================================================================
// Reference Scenarios
// =============================================================================

#[test]
fn test_reference_a_to_d() {
    let graph = reference_graph();

    let outcome = find_shortest_path(&graph, id(&graph, "A"), id(&graph, "D"));
    let route = outcome.route().expect("A reaches D");

    assert_eq!(route.display(&graph, " -> "), "A -> B -> D");
    assert_eq!(route.cost, 8);
}

#[test]
fn test_reference_a_to_a() {
    let graph = reference_graph();

    let outcome = find_shortest_path(&graph, id(&graph, "A"), id(&graph, "A"));
    let route = outcome.route().expect("A reaches itself");

    assert_eq!(route.names(&graph), vec!["A"]);
    assert_eq!(route.cost, 0);
}

#[test]
fn test_reference_unconnected_node() {
    let mut graph = reference_graph();
    graph.add_node("E").unwrap();

    let outcome = find_shortest_path(&graph, id(&graph, "A"), id(&graph, "E"));

    assert_eq!(outcome, PathOutcome::NoPath);
}

#[test]
fn test_reference_unknown_name_is_invalid() {
    let graph = reference_graph();

    assert!(graph.resolve("Z").is_none());
    assert_eq!(
        query(&graph, "Z", "A", EngineOptions::default()),
        QueryOutcome::InvalidNode { name: "Z".into() }
    );
}

#[test]
fn test_three_outcomes_are_distinct() {
    let mut graph = reference_graph();
    graph.add_node("E").unwrap();
    let options = EngineOptions::default();

    let found = query(&graph, "A", "D", options);
    let no_path = query(&graph, "A", "E", options);
    let invalid = query(&graph, "A", "Z", options);

    assert!(matches!(found, QueryOutcome::Found { .. }));
    assert_eq!(no_path, QueryOutcome::NoPath);
    assert!(invalid.is_invalid());
}

// =============================================================================
// Graph Store Invariants
// =============================================================================

#[test]
fn test_names_are_unique() {
    let mut graph = reference_graph();
    let before = graph.node_count();

    graph.add_node("A").unwrap();
    graph.add_edge_by_name("A", "B", 1).unwrap();

    assert_eq!(graph.node_count(), before);
    assert_eq!(graph.edge_count(), 5);
}

#[test]
fn test_negative_weight_leaves_graph_untouched() {
    let mut graph = reference_graph();
    let (a, d) = (id(&graph, "A"), id(&graph, "D"));

    assert!(graph.add_edge(a, d, -100).is_err());

    assert_eq!(graph.edge_count(), 4);
    assert_eq!(find_shortest_path(&graph, a, d).route().unwrap().cost, 8);
}

#[test]
fn test_reachability_on_dense_cycle() {
    let mut graph = RouteGraph::new();
    let names = ["p", "q", "r", "s"];
    for from in names {
        for to in names {
            graph.add_edge_by_name(from, to, 1).unwrap();
        }
    }

    let reachable = graph.reachable_from(id(&graph, "r"));
    assert_eq!(reachable.len(), 4);
}

// =============================================================================
// Engine Invariants
// =============================================================================

#[test]
fn test_shared_graph_across_threads() {
    let graph = reference_graph();
    let (a, d) = (id(&graph, "A"), id(&graph, "D"));

    let results: Vec<PathOutcome> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| find_shortest_path(&graph, a, d)))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(results.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(results[0].route().unwrap().cost, 8);
}

#[test]
fn test_tie_break_is_consistent() {
    // Two routes of cost 2: S-L-T and S-R-T
    let mut graph = RouteGraph::new();
    graph.add_edge_by_name("S", "L", 1).unwrap();
    graph.add_edge_by_name("S", "R", 1).unwrap();
    graph.add_edge_by_name("L", "T", 1).unwrap();
    graph.add_edge_by_name("R", "T", 1).unwrap();
    let (s, t) = (id(&graph, "S"), id(&graph, "T"));

    let first = find_shortest_path(&graph, s, t);
    for _ in 0..10 {
        assert_eq!(find_shortest_path(&graph, s, t), first);
    }
    assert_eq!(first.route().unwrap().cost, 2);
}

#[test]
fn test_reachable_route_found_at_u64_limit() {
    // i64::MAX + i64::MAX + 1 == u64::MAX
    let mut graph = RouteGraph::new();
    graph.add_edge_by_name("A", "B", i64::MAX).unwrap();
    graph.add_edge_by_name("B", "C", i64::MAX).unwrap();
    graph.add_edge_by_name("C", "D", 1).unwrap();
    let (a, d) = (id(&graph, "A"), id(&graph, "D"));

    assert!(graph.reachable_from(a).contains(&d));
    let outcome = find_shortest_path(&graph, a, d);
    assert_eq!(outcome.route().map(|r| r.cost), Some(TotalCost::from(u64::MAX)));
}

proptest! {
    #[test]
    fn prop_self_route_costs_zero((n, edges) in arb_graph()) {
        let graph = build(n, &edges);
        for node in graph.nodes() {
            let outcome = find_shortest_path(&graph, node, node);
            let route = outcome.route().expect("self route exists");
            prop_assert_eq!(&route.nodes, &vec![node]);
            prop_assert_eq!(route.cost, 0);
        }
    }

    #[test]
    fn prop_cost_matches_brute_force((n, edges) in arb_graph()) {
        let graph = build(n, &edges);
        let nodes: Vec<NodeId> = graph.nodes().collect();

        for &s in &nodes {
            for &d in &nodes {
                let expected = brute_force(&graph, s, d);
                match find_shortest_path(&graph, s, d) {
                    PathOutcome::Found(route) => {
                        prop_assert_eq!(Some(route.cost), expected);
                        prop_assert_eq!(route.nodes.first(), Some(&s));
                        prop_assert_eq!(route.nodes.last(), Some(&d));
                        // No gaps: every hop is a real edge and the costs add up
                        prop_assert_eq!(path_cost(&graph, &route.nodes), Some(route.cost));
                    }
                    PathOutcome::NoPath => prop_assert_eq!(expected, None),
                }
            }
        }
    }

    #[test]
    fn prop_early_exit_does_not_change_result((n, edges) in arb_graph()) {
        let graph = build(n, &edges);
        let nodes: Vec<NodeId> = graph.nodes().collect();

        for &s in &nodes {
            for &d in &nodes {
                let eager = find_shortest_path_with(&graph, s, d, EngineOptions { early_exit: true });
                let full = find_shortest_path_with(&graph, s, d, EngineOptions { early_exit: false });
                prop_assert_eq!(
                    eager.route().map(|r| r.cost),
                    full.route().map(|r| r.cost)
                );
            }
        }
    }

    #[test]
    fn prop_queries_are_idempotent((n, edges) in arb_graph()) {
        let graph = build(n, &edges);
        let nodes: Vec<NodeId> = graph.nodes().collect();
        let (s, d) = (nodes[0], nodes[nodes.len() - 1]);

        let first = find_shortest_path(&graph, s, d);
        let second = find_shortest_path(&graph, s, d);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_reachable_matches_route_existence((n, edges) in arb_graph()) {
        let graph = build(n, &edges);

        for s in graph.nodes() {
            let reachable = graph.reachable_from(s);
            prop_assert!(reachable.contains(&s));
            prop_assert!(reachable.len() <= graph.node_count());
            for d in graph.nodes() {
                let found = find_shortest_path(&graph, s, d).route().is_some();
                prop_assert_eq!(found, reachable.contains(&d));
            }
        }
    }
}

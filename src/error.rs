// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Errors raised while building a graph

use thiserror::Error;

/// Graph construction errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Edge cost below zero
    #[error("invalid weight {cost} on edge {from} -> {to}: costs must be non-negative")]
    InvalidWeight {
        /// Source node name
        from: String,
        /// Target node name
        to: String,
        /// Rejected cost
        cost: i64,
    },

    /// Node id or name that does not belong to this graph
    #[error("node not found in graph: {0}")]
    UnknownNode(String),

    /// Node name that is empty or only whitespace
    #[error("node names must not be empty")]
    EmptyName,

    /// Edge description that is not `FROM:TO:COST`
    #[error("malformed edge '{0}': expected FROM:TO:COST")]
    MalformedEdgeSpec(String),
}

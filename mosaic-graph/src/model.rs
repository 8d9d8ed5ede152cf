//! Typed representation of a social-network dataset.
//!
//! The shapes mirror the network widget's wire convention: nodes carry an
//! `id` and optionally a `label`, edges carry `from` and `to`. Any further
//! attributes (size, color, weight, ...) are preserved verbatim in a
//! flattened map so loading stays pass-through.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A node identifier: an integer or a string.
///
/// Both shapes occur in widget datasets; ordering and hashing follow the
/// underlying value, and an integer id never equals its string spelling.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    Int(i64),
    Text(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Int(n) => write!(f, "{n}"),
            NodeId::Text(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for NodeId {
    fn from(n: i64) -> Self {
        NodeId::Int(n)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId::Text(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId::Text(s)
    }
}

/// A single node of the network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Display label, if the dataset provides one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Remaining attributes (size, color, group, ...), kept verbatim
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

/// A connection between two nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    /// Remaining attributes (weight, width, ...), kept verbatim
    #[serde(flatten)]
    pub attrs: Map<String, Value>,
}

/// An edge endpoint that references no node in the dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct DanglingEdge {
    /// Index of the offending edge in [`Graph::edges`]
    pub edge_index: usize,
    /// The identifier that is missing from the node set
    pub endpoint: NodeId,
}

/// A social-network graph: a list of nodes and a list of edges.
///
/// Immutable after construction; the loader builds one per dataset and
/// callers share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The set of node identifiers present in the dataset.
    pub fn node_ids(&self) -> HashSet<&NodeId> {
        self.nodes.iter().map(|n| &n.id).collect()
    }

    /// Report every edge endpoint that references a missing node.
    ///
    /// Loading does not enforce this invariant (the widget tolerates
    /// dangling references); callers that want the check run it explicitly.
    pub fn validate_edges(&self) -> Vec<DanglingEdge> {
        let ids = self.node_ids();
        let mut dangling = Vec::new();
        for (edge_index, edge) in self.edges.iter().enumerate() {
            for endpoint in [&edge.from, &edge.to] {
                if !ids.contains(endpoint) {
                    dangling.push(DanglingEdge {
                        edge_index,
                        endpoint: endpoint.clone(),
                    });
                }
            }
        }
        dangling
    }
}

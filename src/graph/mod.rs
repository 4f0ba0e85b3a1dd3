//! Graph model types (nouns)
//!
//! These types represent the node/edge graph drawn on the canvas. A `Graph`
//! is an owned snapshot: the compiler only ever borrows it.

mod edge;
mod name;
mod node;

pub use edge::Edge;
pub use name::{canonicalize, is_identifier};
pub use node::{DatasetPayload, FunctionPayload, Node, NodeKind, Position};

use serde::{Deserialize, Serialize};

/// A directed graph of dataset and function nodes
///
/// Declaration order of `nodes` and `edges` is preserved and is the only
/// ordering the compiler relies on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Graph {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Get a node by id (first match when ids are duplicated)
    pub fn get_node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Dataset nodes in declaration order
    pub fn datasets(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_dataset())
    }

    /// Function nodes in declaration order
    pub fn functions(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.is_function())
    }
}

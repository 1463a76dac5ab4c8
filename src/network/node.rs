//! Chunk nodes, test links, and the shared node registry.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::pattern::{self, Symbol};

/// Stable identifier of a node, assigned in creation order within one
/// registry and never reused.
pub type NodeId = usize;

/// Directed edge from parent to child. `test` is matched against the
/// unconsumed portion of an input pattern to decide traversal.
#[derive(Debug, Clone, Serialize)]
pub struct Link {
    pub test: Vec<Symbol>,
    pub child: NodeId,
}

/// A chunk in the discrimination network.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    /// Creation-order index within the registry.
    pub id: NodeId,
    /// Concatenation of the test labels from the root to this node, with a
    /// trailing terminator stripped at construction.
    pub contents: Vec<Symbol>,
    /// Fullest pattern learned for this chunk so far.
    pub image: Vec<Symbol>,
    /// Owned outgoing links, in insertion order.
    pub children: Vec<Link>,
    /// Symmetric, non-owning references to chunks judged similar.
    pub similarity_links: BTreeSet<NodeId>,
    /// Optional external annotation; the learning operators never set it.
    pub label: Option<String>,
}

/// Ordered registry of every node ever created, shared by all modalities
/// of one engine. Nodes persist for the registry's lifetime.
#[derive(Debug, Default, Clone, Serialize)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates a node and returns its id. A trailing terminator is stripped
    /// from `contents` when the sequence holds more than one symbol.
    pub fn insert(&mut self, mut contents: Vec<Symbol>, image: Vec<Symbol>) -> NodeId {
        if contents.len() > 1 && pattern::ends_with_terminator(&contents) {
            contents.pop();
        }
        let id = self.nodes.len();
        self.nodes.push(Node {
            id,
            contents,
            image,
            children: Vec::new(),
            similarity_links: BTreeSet::new(),
            label: None,
        });
        id
    }

    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Records a symmetric similarity link between `a` and `b`.
    pub fn link_similar(&mut self, a: NodeId, b: NodeId) {
        self.nodes[a].similarity_links.insert(b);
        self.nodes[b].similarity_links.insert(a);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::pattern_of;

    #[test]
    fn test_insert_assigns_increasing_ids() {
        let mut arena = NodeArena::new();
        let a = arena.insert(pattern_of(&["a"]), Vec::new());
        let b = arena.insert(pattern_of(&["b"]), Vec::new());
        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(arena.len(), 2);
        assert_eq!(arena.get(a).id, a);
    }

    #[test]
    fn test_insert_strips_trailing_terminator_from_contents() {
        let mut arena = NodeArena::new();
        let id = arena.insert(pattern_of(&["a", "b", "$"]), pattern_of(&["a", "b", "$"]));
        assert_eq!(arena.get(id).contents, pattern_of(&["a", "b"]));
        // The image keeps the terminator; only contents is normalized.
        assert_eq!(arena.get(id).image, pattern_of(&["a", "b", "$"]));
    }

    #[test]
    fn test_single_terminator_contents_kept() {
        let mut arena = NodeArena::new();
        let id = arena.insert(pattern_of(&["$"]), pattern_of(&["$"]));
        assert_eq!(arena.get(id).contents, pattern_of(&["$"]));
    }

    #[test]
    fn test_link_similar_is_symmetric() {
        let mut arena = NodeArena::new();
        let a = arena.insert(pattern_of(&["a"]), Vec::new());
        let b = arena.insert(pattern_of(&["b"]), Vec::new());
        arena.link_similar(a, b);
        assert!(arena.get(a).similarity_links.contains(&b));
        assert!(arena.get(b).similarity_links.contains(&a));
    }
}

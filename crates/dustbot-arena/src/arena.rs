//! The [`NodeArena`] and predecessor-chain iteration.

use crate::error::ArenaError;
use crate::node::{NodeId, TraversalNode};
use dustbot_core::Coord;
use std::ops::Index;

/// Flat storage for one search tree.
///
/// Nodes are appended and never removed individually; [`reset`](Self::reset)
/// drops the whole tree and starts a new generation.
#[derive(Debug, Default)]
pub struct NodeArena {
    generation: u32,
    nodes: Vec<TraversalNode>,
}

impl NodeArena {
    /// Create an empty arena at generation 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty arena with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            generation: 0,
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Current generation.
    pub fn generation(&self) -> u32 {
        self.generation
    }

    /// Number of nodes allocated in the current generation.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether no nodes have been allocated in the current generation.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Discard every node and advance the generation.
    ///
    /// Handles issued before the reset become stale.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.generation = self.generation.wrapping_add(1);
    }

    /// Allocate a node with no predecessor.
    pub fn root(&mut self, coord: Coord) -> NodeId {
        self.push(TraversalNode {
            coord,
            predecessor: None,
            depth: 0,
        })
    }

    /// Allocate a node discovered from `parent`.
    ///
    /// # Panics
    ///
    /// If `parent` is not a live handle of this arena.
    pub fn child(&mut self, parent: NodeId, coord: Coord) -> NodeId {
        let depth = self[parent].depth + 1;
        self.push(TraversalNode {
            coord,
            predecessor: Some(parent),
            depth,
        })
    }

    fn push(&mut self, node: TraversalNode) -> NodeId {
        let index = self.nodes.len();
        self.nodes.push(node);
        NodeId {
            generation: self.generation,
            index,
        }
    }

    /// Resolve a handle, checking generation and range.
    pub fn get(&self, id: NodeId) -> Result<&TraversalNode, ArenaError> {
        if id.generation != self.generation {
            return Err(ArenaError::StaleHandle {
                handle: id,
                current: self.generation,
            });
        }
        self.nodes.get(id.index()).ok_or(ArenaError::OutOfRange {
            handle: id,
            len: self.nodes.len(),
        })
    }

    /// Coordinate of a live node. Panics like [`Index`] on a bad handle.
    pub fn coord(&self, id: NodeId) -> Coord {
        self[id].coord
    }

    /// Walk from `id` back to the root, yielding `id` first.
    pub fn lineage(&self, id: NodeId) -> Lineage<'_> {
        Lineage {
            arena: self,
            next: Some(id),
        }
    }
}

impl Index<NodeId> for NodeArena {
    type Output = TraversalNode;

    fn index(&self, id: NodeId) -> &TraversalNode {
        debug_assert_eq!(
            id.generation, self.generation,
            "stale handle {id} used at generation {}",
            self.generation
        );
        &self.nodes[id.index()]
    }
}

/// Iterator over a predecessor chain, target first, root last.
pub struct Lineage<'a> {
    arena: &'a NodeArena,
    next: Option<NodeId>,
}

impl<'a> Iterator for Lineage<'a> {
    type Item = &'a TraversalNode;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        let node = &self.arena[id];
        self.next = node.predecessor;
        Some(node)
    }
}

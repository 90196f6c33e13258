//! Node handles and traversal nodes.

use dustbot_core::Coord;
use std::fmt;

/// Handle to a node in a [`NodeArena`](crate::NodeArena).
///
/// Generation-scoped: a handle is only valid for the arena generation it
/// was issued in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct NodeId {
    pub(crate) generation: u32,
    pub(crate) index: usize,
}

impl NodeId {
    /// The arena generation this handle was issued in.
    pub fn generation(self) -> u32 {
        self.generation
    }

    /// Position of the node within its generation.
    pub fn index(self) -> usize {
        self.index
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId(gen={}, idx={})", self.generation, self.index)
    }
}

/// A coordinate plus a link to the node it was discovered from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraversalNode {
    pub(crate) coord: Coord,
    pub(crate) predecessor: Option<NodeId>,
    pub(crate) depth: u32,
}

impl TraversalNode {
    /// The grid cell this node stands for.
    pub fn coord(&self) -> Coord {
        self.coord
    }

    /// The node this one was discovered from; `None` for the root.
    pub fn predecessor(&self) -> Option<NodeId> {
        self.predecessor
    }

    /// Whether this is the tree root.
    pub fn is_root(&self) -> bool {
        self.predecessor.is_none()
    }

    /// Number of edges between this node and the root.
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

//! Arena storage for search-tree nodes.
//!
//! Both search engines build a tree of [`TraversalNode`]s, each linking a
//! coordinate to the node it was discovered from. Rather than owning
//! pointers, nodes live in a flat [`NodeArena`] and refer to their
//! predecessor by [`NodeId`] index, so the tree has no ownership cycles
//! and path reconstruction is a walk over indices.
//!
//! ```text
//! NodeArena (one per search pass)
//! ├── generation: u32        bumped on reset(), stamped into every NodeId
//! └── nodes: Vec<TraversalNode>
//!     └── TraversalNode { coord, predecessor: Option<NodeId>, depth }
//! ```
//!
//! Resetting the arena between sweep rounds discards the whole tree in
//! O(1) while keeping the allocation. Handles from an earlier generation
//! are detected as stale instead of silently aliasing new nodes.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod arena;
pub mod error;
pub mod node;

pub use arena::{Lineage, NodeArena};
pub use error::ArenaError;
pub use node::{NodeId, TraversalNode};

//! Arena error types.

use crate::node::NodeId;
use thiserror::Error;

/// Errors from resolving a [`NodeId`] against a [`NodeArena`](crate::NodeArena).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// The handle belongs to a generation discarded by `reset()`.
    #[error("stale handle {handle}: arena is at generation {current}")]
    StaleHandle {
        /// The rejected handle.
        handle: NodeId,
        /// The arena's current generation.
        current: u32,
    },
    /// The handle's index is past the end of the arena.
    #[error("handle {handle} out of range: arena holds {len} nodes")]
    OutOfRange {
        /// The rejected handle.
        handle: NodeId,
        /// Number of live nodes.
        len: usize,
    },
}

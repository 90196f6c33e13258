//! Planner output and its determinism fingerprint.
//!
//! The fingerprint uses FNV-1a: fast, deterministic, and stable across
//! platforms. It is not cryptographically secure; it exists so two runs
//! can be compared for byte-identical output with a single integer.

use dustbot_core::{Action, SearchStats, Strategy};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

#[inline]
fn fnv1a_u64(mut hash: u64, v: u64) -> u64 {
    for &b in &v.to_le_bytes() {
        hash = fnv1a_byte(hash, b);
    }
    hash
}

/// An ordered robot plan plus the search effort spent producing it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    /// The strategy that produced this plan.
    pub strategy: Strategy,
    /// Actions in execution order.
    pub actions: Vec<Action>,
    /// Node counters for the run.
    pub stats: SearchStats,
}

impl Plan {
    /// Number of directional moves.
    pub fn move_count(&self) -> usize {
        self.actions.iter().filter(|a| a.is_move()).count()
    }

    /// Number of clean actions.
    pub fn clean_count(&self) -> usize {
        self.actions.iter().filter(|a| a.is_clean()).count()
    }

    /// Whether the plan has no actions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The actions as a compact token string, e.g. `"EEV"`.
    pub fn tokens(&self) -> String {
        self.actions.iter().map(|a| a.token()).collect()
    }

    /// FNV-1a hash over strategy, action tokens, and both counters.
    ///
    /// Two plans with equal fingerprints are, for all practical purposes,
    /// identical. The action count is folded in after the tokens so that
    /// a prefix never collides with its extension by construction.
    pub fn fingerprint(&self) -> u64 {
        let mut hash = FNV_OFFSET;
        for &b in self.strategy.as_str().as_bytes() {
            hash = fnv1a_byte(hash, b);
        }
        for a in &self.actions {
            hash = fnv1a_byte(hash, a.token() as u8);
        }
        hash = fnv1a_u64(hash, self.actions.len() as u64);
        hash = fnv1a_u64(hash, self.stats.nodes_generated);
        fnv1a_u64(hash, self.stats.nodes_expanded)
    }
}

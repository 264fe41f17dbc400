//! Ancestry resolution: merge fragments into their nearest valid ancestor.
//!
//! Key characteristics:
//! - Labels live in a flat arena and refer to parents by index
//! - Walks skip over labels that were already merged away
//! - Dangling and out-of-range parents end the walk without a merge
//! - Fragments that lie on a parent cycle are never merged
//! - Passes repeat until one performs no merge (fixed point)
//!
//! Termination: every merge permanently invalidates one label, so a run
//! performs at most `n` merges and `n + 1` passes.

use crate::chain::cycle_members;
use log::{debug, trace};
use std::ops::AddAssign;
use supera_core::{GroupLabel, LabelConfig, SemanticType};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Counters reported by [`AncestryResolver::resolve_and_merge`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MergeStatistics {
    /// Number of full passes over the labels.
    pub passes: usize,
    /// Total number of merges performed.
    pub merges: usize,
    /// Fragments left unmerged because no valid ancestor was reachable.
    pub unresolved: usize,
    /// Fragments left unmerged because they lie on or loop into a cycle.
    pub cyclic: usize,
}

impl AddAssign for MergeStatistics {
    fn add_assign(&mut self, other: Self) {
        self.passes += other.passes;
        self.merges += other.merges;
        self.unresolved += other.unresolved;
        self.cyclic += other.cyclic;
    }
}

/// Outcome of walking up from one fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Walk {
    /// A valid ancestor at this index.
    Found(usize),
    /// The chain ran out of parents after the given index.
    NoParent { previous: usize },
    /// An invalid label that names itself as parent.
    InvalidRoot(usize),
    /// The chain came back to the fragment or exceeded the arena size.
    Cycle,
}

/// Merges fragment labels into their nearest valid ancestor.
#[derive(Debug, Clone)]
pub struct AncestryResolver {
    fragment_types: Vec<SemanticType>,
}

impl Default for AncestryResolver {
    fn default() -> Self {
        Self::new(&LabelConfig::default())
    }
}

impl AncestryResolver {
    /// Creates a resolver merging the configured fragment types.
    #[must_use]
    pub fn new(config: &LabelConfig) -> Self {
        Self::with_fragment_types(config.fragment_types.clone())
    }

    /// Creates a resolver merging the given fragment types.
    #[must_use]
    pub fn with_fragment_types(fragment_types: Vec<SemanticType>) -> Self {
        Self { fragment_types }
    }

    /// Returns true if labels of this type are merged into an ancestor.
    #[must_use]
    pub fn is_fragment(&self, semantic_type: SemanticType) -> bool {
        self.fragment_types.contains(&semantic_type)
    }

    /// Merges every resolvable fragment into its nearest valid ancestor.
    ///
    /// Merges are visible immediately: within one pass, a later fragment
    /// walks through labels merged earlier in the same pass, and a fragment
    /// that already absorbed children may itself be merged. Fragments that
    /// cannot be resolved stay valid and untouched. A fragment below a cycle
    /// still merges into its nearest valid ancestor, even one on the cycle.
    pub fn resolve_and_merge<L: GroupLabel>(&self, labels: &mut [L]) -> MergeStatistics {
        let cyclic = cycle_members(labels.len(), |idx| labels[idx].parent_index());

        let mut stats = MergeStatistics::default();
        loop {
            stats.passes += 1;
            let mut merges = 0usize;
            let mut unresolved = 0usize;
            let mut cycles = 0usize;

            for idx in 0..labels.len() {
                let label = &labels[idx];
                if !label.is_valid() || !self.is_fragment(label.semantic_type()) {
                    continue;
                }
                if cyclic[idx] {
                    trace!("{} lies on an ancestry cycle, left unmerged", label.track_id());
                    cycles += 1;
                    continue;
                }

                match find_ancestor(labels, idx) {
                    Walk::Found(target) => {
                        let (parent, child) = pair_mut(labels, target, idx);
                        trace!("merging {} into {}", child.track_id(), parent.track_id());
                        parent.merge(child);
                        merges += 1;
                    }
                    Walk::NoParent { previous } => {
                        trace!(
                            "no valid parent for {} ({}); chain ends at {}",
                            labels[idx].track_id(),
                            labels[idx].semantic_type(),
                            labels[previous].track_id()
                        );
                        unresolved += 1;
                    }
                    Walk::InvalidRoot(root) => {
                        trace!(
                            "{} is a root and invalid; cannot place {}",
                            labels[root].track_id(),
                            labels[idx].track_id()
                        );
                        unresolved += 1;
                    }
                    Walk::Cycle => {
                        trace!("walk from {} loops back, left unmerged", labels[idx].track_id());
                        cycles += 1;
                    }
                }
            }

            debug!(
                "ancestry pass {}: {} merged, {} unresolved, {} cyclic",
                stats.passes, merges, unresolved, cycles
            );
            stats.merges += merges;

            if merges == 0 {
                stats.unresolved = unresolved;
                stats.cyclic = cycles;
                return stats;
            }
        }
    }
}

/// Walks up from `start` to the first valid label.
///
/// Out-of-range parent indices count as missing. The walk is capped at the
/// arena size.
fn find_ancestor<L: GroupLabel>(labels: &[L], start: usize) -> Walk {
    let n = labels.len();
    let mut previous = start;
    let mut parent = labels[start].parent_index();

    for _ in 0..n {
        let Some(idx) = parent.filter(|&p| p < n) else {
            return Walk::NoParent { previous };
        };
        if idx == start {
            return Walk::Cycle;
        }

        let candidate = &labels[idx];
        if candidate.is_valid() {
            return Walk::Found(idx);
        }

        let ancestor = candidate.parent_index();
        if ancestor == Some(idx) {
            return Walk::InvalidRoot(idx);
        }
        previous = idx;
        parent = ancestor;
    }

    Walk::Cycle
}

/// Mutable references to two distinct labels.
fn pair_mut<L>(labels: &mut [L], a: usize, b: usize) -> (&mut L, &mut L) {
    debug_assert_ne!(a, b);
    if a < b {
        let (lo, hi) = labels.split_at_mut(b);
        (&mut lo[a], &mut hi[0])
    } else {
        let (lo, hi) = labels.split_at_mut(a);
        (&mut hi[0], &mut lo[b])
    }
}

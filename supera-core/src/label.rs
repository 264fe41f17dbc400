//! Particle labels and the merge capability used by ancestry resolution.

use crate::particle::{ParticleRecord, TrackId};
use crate::semantic::SemanticType;
use crate::vertex::Vertex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node in the per-event particle arena that can absorb other nodes.
///
/// The ancestry resolver only needs to know whether a node is live, what its
/// category and parent are, and how to fold a child into it.
pub trait GroupLabel {
    /// Returns true while the label is an independent, unmerged group.
    fn is_valid(&self) -> bool;

    /// Semantic category assigned at initialization.
    fn semantic_type(&self) -> SemanticType;

    /// Arena index of the parent, `None` if there is none.
    fn parent_index(&self) -> Option<usize>;

    /// Track id, for diagnostics.
    fn track_id(&self) -> TrackId;

    /// Folds `child` into `self` and marks `child` as merged away.
    fn merge(&mut self, child: &mut Self);
}

/// Labeling state for one simulated particle.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ParticleLabel {
    /// Copy of the simulation record.
    pub part: ParticleRecord,
    /// Semantic category, set once at initialization.
    pub semantic_type: SemanticType,
    /// True while this label represents a live, unmerged group.
    pub valid: bool,
    /// Resolved arena index of the parent.
    pub parent_index: Option<usize>,
    /// Energy deposited by the whole group (MeV).
    pub energy_deposit: f64,
    /// Earliest point of the group's deposit extent.
    pub first_pt: Vertex,
    /// Latest point of the group's deposit extent.
    pub last_pt: Vertex,
    /// Track ids absorbed into this group.
    pub merged_track_ids: Vec<TrackId>,
    /// Track id of the group this label was merged into.
    pub merged_into: Option<TrackId>,
}

impl ParticleLabel {
    /// Creates a valid label wrapping `part`.
    ///
    /// The deposit and extent start from the record's own values.
    #[must_use]
    pub fn new(part: ParticleRecord, semantic_type: SemanticType) -> Self {
        Self {
            energy_deposit: part.energy_deposit,
            first_pt: part.first_step,
            last_pt: part.last_step,
            part,
            semantic_type,
            valid: true,
            parent_index: None,
            merged_track_ids: Vec::new(),
            merged_into: None,
        }
    }

    /// Sets the resolved parent index.
    #[must_use]
    pub fn with_parent_index(mut self, parent_index: Option<usize>) -> Self {
        self.parent_index = parent_index;
        self
    }

    /// Number of particles in this group, including itself.
    #[must_use]
    pub fn group_size(&self) -> usize {
        1 + self.merged_track_ids.len()
    }
}

fn earlier(a: Vertex, b: Vertex) -> Vertex {
    match (a.is_valid(), b.is_valid()) {
        (true, true) if b.t < a.t => b,
        (false, true) => b,
        _ => a,
    }
}

fn later(a: Vertex, b: Vertex) -> Vertex {
    match (a.is_valid(), b.is_valid()) {
        (true, true) if b.t > a.t => b,
        (false, true) => b,
        _ => a,
    }
}

impl GroupLabel for ParticleLabel {
    #[inline]
    fn is_valid(&self) -> bool {
        self.valid
    }

    #[inline]
    fn semantic_type(&self) -> SemanticType {
        self.semantic_type
    }

    #[inline]
    fn parent_index(&self) -> Option<usize> {
        self.parent_index
    }

    #[inline]
    fn track_id(&self) -> TrackId {
        self.part.track_id
    }

    fn merge(&mut self, child: &mut Self) {
        self.energy_deposit += child.energy_deposit;
        child.energy_deposit = 0.0;

        self.first_pt = earlier(self.first_pt, child.first_pt);
        self.last_pt = later(self.last_pt, child.last_pt);

        self.merged_track_ids.push(child.part.track_id);
        self.merged_track_ids.append(&mut child.merged_track_ids);

        child.valid = false;
        child.merged_into = Some(self.part.track_id);
    }
}

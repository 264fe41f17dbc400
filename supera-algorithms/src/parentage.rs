//! Parent and ancestor lookup over one event's particle records.

use crate::chain::chain_roots;
use std::collections::HashMap;
use supera_core::{Error, ParticleRecord, Result, TrackId, INVALID_PDG};

/// Index-based ancestry for one event.
///
/// Every table is indexed by position in the record sequence it was built
/// from. Parents that are missing from the event resolve to `None`.
#[derive(Debug, Clone, Default)]
pub struct Parentage {
    track_index: HashMap<TrackId, usize>,
    parent_index: Vec<Option<usize>>,
    parent_pdg: Vec<i32>,
    ancestor_index: Vec<Option<usize>>,
}

impl Parentage {
    /// Builds the lookup tables for `records`.
    ///
    /// # Errors
    /// Returns [`Error::DuplicateTrackId`] if two records share a track id.
    pub fn infer(records: &[ParticleRecord]) -> Result<Self> {
        let mut track_index = HashMap::with_capacity(records.len());
        for (idx, record) in records.iter().enumerate() {
            if track_index.insert(record.track_id, idx).is_some() {
                return Err(Error::DuplicateTrackId(record.track_id));
            }
        }

        let parent_index: Vec<Option<usize>> = records
            .iter()
            .map(|record| {
                record
                    .parent_track_id
                    .and_then(|id| track_index.get(&id).copied())
            })
            .collect();

        let parent_pdg = parent_index
            .iter()
            .map(|parent| parent.map_or(INVALID_PDG, |idx| records[idx].pdg))
            .collect();

        let ancestor_index = chain_roots(records.len(), |idx| parent_index[idx]);

        Ok(Self {
            track_index,
            parent_index,
            parent_pdg,
            ancestor_index,
        })
    }

    /// Index of the record with the given track id.
    #[must_use]
    pub fn track_index(&self, track_id: TrackId) -> Option<usize> {
        self.track_index.get(&track_id).copied()
    }

    /// Parent index per record.
    #[must_use]
    pub fn parent_index(&self) -> &[Option<usize>] {
        &self.parent_index
    }

    /// Parent PDG code per record, [`INVALID_PDG`] without a parent.
    #[must_use]
    pub fn parent_pdg(&self) -> &[i32] {
        &self.parent_pdg
    }

    /// Top-most ancestor index per record; `None` if the chain is cyclic.
    #[must_use]
    pub fn ancestor_index(&self) -> &[Option<usize>] {
        &self.ancestor_index
    }

    /// Number of records covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent_index.len()
    }

    /// Returns true if built from an empty event.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent_index.is_empty()
    }
}

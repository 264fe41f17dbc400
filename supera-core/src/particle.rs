//! Simulation truth records consumed by the labeling core.

use crate::vertex::Vertex;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Sentinel for an unknown or unset PDG code.
pub const INVALID_PDG: i32 = 0;

/// Track identifier assigned by the simulation, unique within an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct TrackId(pub u32);

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

/// One simulated particle as produced by the upstream simulation.
///
/// The labeling core never mutates the input records; labels own a copy.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParticleRecord {
    /// Track id of this particle.
    pub track_id: TrackId,
    /// Track id of the parent, `None` for primaries.
    pub parent_track_id: Option<TrackId>,
    /// Track id of the top-most ancestor, if known upstream.
    pub ancestor_track_id: Option<TrackId>,
    /// PDG code.
    pub pdg: i32,
    /// Parent PDG code, [`INVALID_PDG`] if unknown.
    pub parent_pdg: i32,
    /// Ancestor PDG code, [`INVALID_PDG`] if unknown.
    pub ancestor_pdg: i32,
    /// Name of the generating physics process (e.g. `"eIoni"`, `"primary"`).
    pub process: String,
    /// Total energy at creation (MeV).
    pub energy_init: f64,
    /// Energy deposited in the active volume (MeV).
    pub energy_deposit: f64,
    /// Creation vertex.
    pub position: Vertex,
    /// First energy-depositing step.
    pub first_step: Vertex,
    /// Last energy-depositing step.
    pub last_step: Vertex,
    /// Trajectory end point.
    pub end_pt: Vertex,
    /// Validity flag from the upstream simulation.
    pub upstream_valid: bool,
}

impl Default for ParticleRecord {
    fn default() -> Self {
        Self {
            track_id: TrackId::default(),
            parent_track_id: None,
            ancestor_track_id: None,
            pdg: INVALID_PDG,
            parent_pdg: INVALID_PDG,
            ancestor_pdg: INVALID_PDG,
            process: String::new(),
            energy_init: 0.0,
            energy_deposit: 0.0,
            position: Vertex::invalid(),
            first_step: Vertex::invalid(),
            last_step: Vertex::invalid(),
            end_pt: Vertex::invalid(),
            upstream_valid: true,
        }
    }
}

impl ParticleRecord {
    /// Creates a record with invalid vertices and zero energies.
    #[must_use]
    pub fn new(
        track_id: TrackId,
        parent_track_id: Option<TrackId>,
        pdg: i32,
        process: impl Into<String>,
    ) -> Self {
        Self {
            track_id,
            parent_track_id,
            pdg,
            process: process.into(),
            ..Self::default()
        }
    }

    /// Sets the deposited energy.
    #[must_use]
    pub fn with_energy_deposit(mut self, energy: f64) -> Self {
        self.energy_deposit = energy;
        self
    }

    /// Sets the energy at creation.
    #[must_use]
    pub fn with_energy_init(mut self, energy: f64) -> Self {
        self.energy_init = energy;
        self
    }

    /// Sets the parent PDG code.
    #[must_use]
    pub fn with_parent_pdg(mut self, pdg: i32) -> Self {
        self.parent_pdg = pdg;
        self
    }

    /// Sets the first and last energy-depositing steps.
    #[must_use]
    pub fn with_steps(mut self, first: Vertex, last: Vertex) -> Self {
        self.first_step = first;
        self.last_step = last;
        self
    }

    /// Sets the creation vertex and trajectory end point.
    #[must_use]
    pub fn with_endpoints(mut self, position: Vertex, end_pt: Vertex) -> Self {
        self.position = position;
        self.end_pt = end_pt;
        self
    }

    /// Sets the upstream validity flag.
    #[must_use]
    pub fn with_upstream_valid(mut self, valid: bool) -> Self {
        self.upstream_valid = valid;
        self
    }
}

//! Labeling configuration.

use crate::error::{Error, Result};
use crate::semantic::{SemanticPriority, SemanticType};
use crate::vertex::Vertex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box of the simulated world.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorldBounds {
    /// Lower corner (x, y, z).
    pub min: [f64; 3],
    /// Upper corner (x, y, z).
    pub max: [f64; 3],
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            min: [f64::MIN; 3],
            max: [f64::MAX; 3],
        }
    }
}

impl WorldBounds {
    /// Creates bounds from two corners.
    #[must_use]
    pub fn new(min: [f64; 3], max: [f64; 3]) -> Self {
        Self { min, max }
    }

    /// Returns true if no limit is NaN and `min <= max` on every axis.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.min
            .iter()
            .zip(&self.max)
            .all(|(lo, hi)| !lo.is_nan() && !hi.is_nan() && lo <= hi)
    }

    /// Returns true if the spatial part of `v` lies inside the bounds.
    #[must_use]
    pub fn contains(&self, v: &Vertex) -> bool {
        let p = [v.x, v.y, v.z];
        (0..3).all(|axis| p[axis] >= self.min[axis] && p[axis] <= self.max[axis])
    }
}

/// Configuration shared by the labeling components.
///
/// Size and distance thresholds are carried for the voxel-level stages that
/// consume the labels; the ancestry resolver itself only reads
/// `fragment_types`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[allow(clippy::struct_excessive_bools)]
pub struct LabelConfig {
    /// Ranking of semantic shapes.
    pub semantic_priority: SemanticPriority,
    /// Voxel distance at which two deposits count as touching.
    pub touch_distance: usize,
    /// Minimum voxel count for a delta ray to keep its own shape.
    pub delta_size: usize,
    /// Minimum voxel count for an ionization fragment.
    pub ionization_size: usize,
    /// Minimum voxel count for a Compton fragment.
    pub compton_size: usize,
    /// Energy deposits below this value (MeV) are ignored.
    pub edep_threshold: f64,
    /// Use simulation energy-deposit records instead of trajectory points.
    pub use_sed: bool,
    /// Use the individual energy-deposit points.
    pub use_sed_points: bool,
    /// Store dE/dx alongside deposits.
    pub store_dedx: bool,
    /// Trust true positions rather than reconstructed ones.
    pub use_true_position: bool,
    /// Reject events containing records flagged invalid upstream.
    pub check_particle_validity: bool,
    /// World bounding box.
    pub world_bounds: WorldBounds,
    /// Categories merged into their nearest valid ancestor.
    pub fragment_types: Vec<SemanticType>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            semantic_priority: SemanticPriority::default(),
            touch_distance: 1,
            delta_size: 10,
            ionization_size: 5,
            compton_size: 10,
            edep_threshold: 0.01,
            use_sed: false,
            use_sed_points: false,
            store_dedx: false,
            use_true_position: true,
            check_particle_validity: true,
            world_bounds: WorldBounds::default(),
            fragment_types: vec![SemanticType::Ionization],
        }
    }
}

impl LabelConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the semantic priority.
    #[must_use]
    pub fn with_semantic_priority(mut self, priority: SemanticPriority) -> Self {
        self.semantic_priority = priority;
        self
    }

    /// Sets the energy-deposit threshold.
    #[must_use]
    pub fn with_edep_threshold(mut self, threshold: f64) -> Self {
        self.edep_threshold = threshold;
        self
    }

    /// Sets the world bounds.
    #[must_use]
    pub fn with_world_bounds(mut self, bounds: WorldBounds) -> Self {
        self.world_bounds = bounds;
        self
    }

    /// Sets the fragment categories.
    #[must_use]
    pub fn with_fragment_types(mut self, types: Vec<SemanticType>) -> Self {
        self.fragment_types = types;
        self
    }

    /// Enables or disables the particle validity check.
    #[must_use]
    pub fn with_particle_validity_check(mut self, enabled: bool) -> Self {
        self.check_particle_validity = enabled;
        self
    }

    /// Checks the configuration for inconsistent values.
    ///
    /// # Errors
    /// Returns [`Error::ConfigError`] describing the first problem found.
    pub fn validate(&self) -> Result<()> {
        if !self.world_bounds.is_valid() {
            return Err(Error::ConfigError(format!(
                "world bounds min {:?} exceed max {:?}",
                self.world_bounds.min, self.world_bounds.max
            )));
        }
        if self.edep_threshold.is_nan() || self.edep_threshold < 0.0 {
            return Err(Error::ConfigError(format!(
                "energy deposit threshold must be non-negative, got {}",
                self.edep_threshold
            )));
        }
        if self.fragment_types.is_empty() {
            return Err(Error::ConfigError(
                "at least one fragment type is required".to_string(),
            ));
        }
        Ok(())
    }
}

//! Semantic categories assigned to simulated particles.

use crate::error::{Error, Result};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Semantic category of a particle, derived from its PDG code and process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SemanticType {
    /// Any non-electron, non-photon particle.
    Track,
    /// Neutron (PDG 2112).
    Neutron,
    /// Photon (PDG 22).
    Photon,
    /// Electron injected by the generator.
    Primary,
    /// Compton electron.
    Compton,
    /// Delta ray knocked out by a muon or hadron.
    Delta,
    /// Electron from pair conversion.
    Conversion,
    /// Ionization electron from another electron.
    Ionization,
    /// Photo-electron.
    PhotoElectron,
    /// Electron from decay or muon capture (Michel).
    Decay,
    /// Electron from any other process.
    OtherShower,
}

impl SemanticType {
    /// Every semantic type, in declaration order.
    pub const ALL: [SemanticType; 11] = [
        Self::Track,
        Self::Neutron,
        Self::Photon,
        Self::Primary,
        Self::Compton,
        Self::Delta,
        Self::Conversion,
        Self::Ionization,
        Self::PhotoElectron,
        Self::Decay,
        Self::OtherShower,
    ];

    /// Short human-readable name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Track => "Track",
            Self::Neutron => "Neutron",
            Self::Photon => "Photon",
            Self::Primary => "Primary",
            Self::Compton => "Compton",
            Self::Delta => "Delta",
            Self::Conversion => "Conversion",
            Self::Ionization => "Ionization",
            Self::PhotoElectron => "PhotoElectron",
            Self::Decay => "Decay",
            Self::OtherShower => "OtherShower",
        }
    }

    /// Parses a name produced by [`SemanticType::name`].
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.name() == name)
    }

    /// Returns true for the electron subtypes (PDG 11).
    #[must_use]
    pub fn is_electron_family(self) -> bool {
        !matches!(self, Self::Track | Self::Neutron | Self::Photon)
    }

    /// Default semantic shape for this category.
    #[must_use]
    pub fn shape(self) -> SemanticShape {
        match self {
            Self::Track => SemanticShape::Track,
            Self::Delta => SemanticShape::Delta,
            Self::Decay => SemanticShape::Michel,
            Self::Neutron => SemanticShape::LEScatter,
            _ => SemanticShape::Shower,
        }
    }
}

impl fmt::Display for SemanticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Voxel-level shape category used as the segmentation target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SemanticShape {
    Shower = 0,
    Track = 1,
    Michel = 2,
    Delta = 3,
    LEScatter = 4,
    Ghost = 5,
}

impl SemanticShape {
    /// Number of shape categories.
    pub const COUNT: usize = 6;

    /// Every shape, indexed by discriminant.
    pub const ALL: [SemanticShape; Self::COUNT] = [
        Self::Shower,
        Self::Track,
        Self::Michel,
        Self::Delta,
        Self::LEScatter,
        Self::Ghost,
    ];

    /// Index of this shape in `0..COUNT`.
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Ranking of shapes used when two groups claim the same voxel.
///
/// Holds a permutation of `0..SemanticShape::COUNT`; the first entry is the
/// shape index with the highest priority.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<usize>", into = "Vec<usize>"))]
pub struct SemanticPriority {
    order: Vec<usize>,
    rank: [usize; SemanticShape::COUNT],
}

impl SemanticPriority {
    /// Builds a priority from an ordering of shape indices.
    ///
    /// # Errors
    /// Returns [`Error::ConfigError`] if `order` is not a permutation of
    /// `0..SemanticShape::COUNT`.
    pub fn new(order: Vec<usize>) -> Result<Self> {
        if order.len() != SemanticShape::COUNT {
            return Err(Error::ConfigError(format!(
                "semantic priority needs {} entries, got {}",
                SemanticShape::COUNT,
                order.len()
            )));
        }
        let mut rank = [usize::MAX; SemanticShape::COUNT];
        for (position, &shape) in order.iter().enumerate() {
            if shape >= SemanticShape::COUNT {
                return Err(Error::ConfigError(format!(
                    "semantic priority entry {shape} out of range"
                )));
            }
            if rank[shape] != usize::MAX {
                return Err(Error::ConfigError(format!(
                    "semantic priority lists shape {shape} twice"
                )));
            }
            rank[shape] = position;
        }
        Ok(Self { order, rank })
    }

    /// Rank of a shape; lower ranks win.
    #[inline]
    #[must_use]
    pub fn rank(&self, shape: SemanticShape) -> usize {
        self.rank[shape.index()]
    }

    /// Returns whichever of the two shapes has priority.
    #[must_use]
    pub fn prefer(&self, a: SemanticShape, b: SemanticShape) -> SemanticShape {
        if self.rank(b) < self.rank(a) {
            b
        } else {
            a
        }
    }

    /// The ordering as configured.
    #[must_use]
    pub fn order(&self) -> &[usize] {
        &self.order
    }
}

impl Default for SemanticPriority {
    fn default() -> Self {
        Self {
            order: (0..SemanticShape::COUNT).collect(),
            rank: std::array::from_fn(|i| i),
        }
    }
}

impl TryFrom<Vec<usize>> for SemanticPriority {
    type Error = Error;

    fn try_from(order: Vec<usize>) -> Result<Self> {
        Self::new(order)
    }
}

impl From<SemanticPriority> for Vec<usize> {
    fn from(priority: SemanticPriority) -> Self {
        priority.order
    }
}

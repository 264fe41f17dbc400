//! supera-core: Core types for semantic particle labeling.
//!
//! This crate provides the data model shared by the labeling algorithms:
//! simulation truth records, semantic categories, particle labels and the
//! merge capability the ancestry resolver depends on.
//!

pub mod config;
pub mod error;
pub mod label;
pub mod particle;
pub mod semantic;
pub mod vertex;

pub use config::{LabelConfig, WorldBounds};
pub use error::{Error, Result};
pub use label::{GroupLabel, ParticleLabel};
pub use particle::{ParticleRecord, TrackId, INVALID_PDG};
pub use semantic::{SemanticPriority, SemanticShape, SemanticType};
pub use vertex::{Vertex, INVALID_DOUBLE};

//! supera-algorithms: Classification and ancestry merging for particle labels.
//!
//! This crate provides the labeling stages run on every event:
//! - **Parentage** - track id to index lookup, parent and ancestor inference
//! - **Classification** - PDG code and process name to semantic type
//! - **Initialization** - one label per particle, photon kinematics reset
//! - **Ancestry resolution** - merge fragments into their nearest valid ancestor
//!
#![warn(missing_docs)]

mod ancestry;
mod chain;
mod classify;
mod initializer;
mod parentage;
mod processing;

pub use ancestry::{AncestryResolver, MergeStatistics};
pub use classify::{classify_particle, classify_process};
pub use initializer::{initialize_labels, initialize_with_parentage};
pub use parentage::Parentage;
pub use processing::{label_event, label_events, EventLabeler, EventLabels};

// Re-export core labeling types
pub use supera_core::{GroupLabel, LabelConfig, ParticleLabel, ParticleRecord, SemanticType};

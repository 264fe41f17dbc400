//! High-level helpers that run every labeling stage on an event.

use crate::ancestry::{AncestryResolver, MergeStatistics};
use crate::initializer::initialize_with_parentage;
use crate::parentage::Parentage;
use log::{debug, warn};
use rayon::prelude::*;
use std::collections::HashMap;
use supera_core::{Error, LabelConfig, ParticleLabel, ParticleRecord, Result, SemanticType};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Labels and counters for one event.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EventLabels {
    /// One label per input record, in input order.
    pub labels: Vec<ParticleLabel>,
    /// Ancestry resolution counters.
    pub stats: MergeStatistics,
    /// Valid groups whose first deposit lies outside the world bounds.
    pub out_of_bounds: usize,
}

impl EventLabels {
    /// Iterator over labels that still represent an independent group.
    pub fn groups(&self) -> impl Iterator<Item = &ParticleLabel> {
        self.labels.iter().filter(|label| label.valid)
    }

    /// Number of independent groups per semantic type.
    #[must_use]
    pub fn count_by_type(&self) -> HashMap<SemanticType, usize> {
        let mut counts = HashMap::new();
        for label in self.groups() {
            *counts.entry(label.semantic_type).or_insert(0) += 1;
        }
        counts
    }
}

/// Runs parentage inference, initialization and ancestry resolution.
#[derive(Debug, Clone)]
pub struct EventLabeler {
    config: LabelConfig,
    resolver: AncestryResolver,
}

impl EventLabeler {
    /// Creates a labeler after validating `config`.
    ///
    /// # Errors
    /// Returns [`Error::ConfigError`] if the configuration is inconsistent.
    pub fn new(config: LabelConfig) -> Result<Self> {
        config.validate()?;
        let resolver = AncestryResolver::new(&config);
        Ok(Self { config, resolver })
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    /// Labels one event.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParticle`] when the validity check is enabled
    /// and a record fails it, and [`Error::DuplicateTrackId`] for repeated
    /// track ids.
    pub fn label_event(&self, records: &[ParticleRecord]) -> Result<EventLabels> {
        if self.config.check_particle_validity {
            records.iter().try_for_each(check_particle)?;
        }

        let parentage = Parentage::infer(records)?;
        let mut labels = initialize_with_parentage(records, &parentage)?;
        let stats = self.resolver.resolve_and_merge(&mut labels);

        let bounds = &self.config.world_bounds;
        let out_of_bounds = labels
            .iter()
            .filter(|label| label.valid && label.first_pt.is_valid())
            .filter(|label| !bounds.contains(&label.first_pt))
            .count();
        if out_of_bounds > 0 {
            warn!("{out_of_bounds} particle group(s) start outside the world bounds");
        }

        debug!(
            "labeled {} particles: {} merges in {} passes, {} unresolved, {} cyclic",
            labels.len(),
            stats.merges,
            stats.passes,
            stats.unresolved,
            stats.cyclic
        );

        Ok(EventLabels {
            labels,
            stats,
            out_of_bounds,
        })
    }

    /// Labels independent events in parallel, preserving their order.
    ///
    /// # Errors
    /// Fails if any event fails; the error of one failing event is returned.
    pub fn label_events(&self, events: &[Vec<ParticleRecord>]) -> Result<Vec<EventLabels>> {
        events
            .par_iter()
            .map(|records| self.label_event(records))
            .collect()
    }
}

fn check_particle(record: &ParticleRecord) -> Result<()> {
    let reason = if !record.upstream_valid {
        "flagged invalid by the simulation"
    } else if !record.energy_init.is_finite() {
        "non-finite initial energy"
    } else if !record.energy_deposit.is_finite() {
        "non-finite deposited energy"
    } else {
        return Ok(());
    };
    Err(Error::InvalidParticle {
        track_id: record.track_id,
        reason: reason.to_string(),
    })
}

/// Labels one event with the given configuration.
///
/// # Errors
/// See [`EventLabeler::new`] and [`EventLabeler::label_event`].
pub fn label_event(records: &[ParticleRecord], config: &LabelConfig) -> Result<EventLabels> {
    EventLabeler::new(config.clone())?.label_event(records)
}

/// Labels a batch of events with the given configuration.
///
/// # Errors
/// See [`EventLabeler::new`] and [`EventLabeler::label_events`].
pub fn label_events(
    events: &[Vec<ParticleRecord>],
    config: &LabelConfig,
) -> Result<Vec<EventLabels>> {
    EventLabeler::new(config.clone())?.label_events(events)
}

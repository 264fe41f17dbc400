//! Creation of the initial label set for an event.

use crate::classify::{classify_particle, PDG_PHOTON};
use crate::parentage::Parentage;
use supera_core::{Error, ParticleLabel, ParticleRecord, Result, Vertex, INVALID_PDG};

fn check_len(what: &'static str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::LengthMismatch {
            what,
            expected,
            actual,
        })
    }
}

/// Builds one label per record, in input order.
///
/// Every label starts valid. A missing parent PDG is backfilled from
/// `parent_pdg_of` when the record has a parent. Photons lose their step and
/// end-point kinematics, which are not meaningful after propagation.
///
/// # Errors
/// Returns [`Error::LengthMismatch`] if either lookup table does not have one
/// entry per record.
pub fn initialize_labels(
    inputs: &[ParticleRecord],
    parent_index_of: &[Option<usize>],
    parent_pdg_of: &[i32],
) -> Result<Vec<ParticleLabel>> {
    check_len("parent index table", inputs.len(), parent_index_of.len())?;
    check_len("parent PDG table", inputs.len(), parent_pdg_of.len())?;

    let labels = inputs
        .iter()
        .zip(parent_index_of.iter().zip(parent_pdg_of))
        .map(|(record, (&parent_index, &parent_pdg))| {
            let mut part = record.clone();
            if parent_index.is_some() && part.parent_pdg == INVALID_PDG {
                part.parent_pdg = parent_pdg;
            }

            let semantic_type = classify_particle(part.pdg, &part.process);
            if part.pdg == PDG_PHOTON {
                part.first_step = Vertex::invalid();
                part.last_step = Vertex::invalid();
                part.end_pt = Vertex::invalid();
            }

            ParticleLabel::new(part, semantic_type).with_parent_index(parent_index)
        })
        .collect();

    Ok(labels)
}

/// Builds labels from inferred parentage, also backfilling ancestor info.
///
/// # Errors
/// Returns [`Error::LengthMismatch`] if `parentage` was built from a
/// different number of records.
pub fn initialize_with_parentage(
    inputs: &[ParticleRecord],
    parentage: &Parentage,
) -> Result<Vec<ParticleLabel>> {
    check_len("ancestor table", inputs.len(), parentage.ancestor_index().len())?;
    let mut labels = initialize_labels(inputs, parentage.parent_index(), parentage.parent_pdg())?;

    for (label, ancestor) in labels.iter_mut().zip(parentage.ancestor_index()) {
        let Some(ancestor) = *ancestor else { continue };
        let root = &inputs[ancestor];
        if label.part.ancestor_track_id.is_none() {
            label.part.ancestor_track_id = Some(root.track_id);
        }
        if label.part.ancestor_pdg == INVALID_PDG {
            label.part.ancestor_pdg = root.pdg;
        }
    }

    Ok(labels)
}

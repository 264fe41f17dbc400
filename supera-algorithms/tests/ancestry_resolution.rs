#![allow(clippy::uninlined_format_args)]
use approx::assert_relative_eq;
use supera_algorithms::{AncestryResolver, ParticleLabel, SemanticType};
use supera_core::{ParticleRecord, TrackId};

/// Builds a label whose parent is given directly as an arena index.
fn label(
    id: u32,
    parent: Option<usize>,
    semantic_type: SemanticType,
    deposit: f64,
) -> ParticleLabel {
    let pdg = match semantic_type {
        SemanticType::Track => 13,
        _ => 11,
    };
    let record = ParticleRecord::new(TrackId(id), None, pdg, "").with_energy_deposit(deposit);
    ParticleLabel::new(record, semantic_type).with_parent_index(parent)
}

fn resolver() -> AncestryResolver {
    AncestryResolver::default()
}

#[test]
fn test_rerun_is_fixed_point() {
    let mut labels = vec![
        label(0, None, SemanticType::Track, 10.0),
        label(1, Some(0), SemanticType::Ionization, 1.0),
        label(2, Some(1), SemanticType::Ionization, 1.0),
        label(3, None, SemanticType::Ionization, 1.0),
        label(4, Some(5), SemanticType::Ionization, 1.0),
        label(5, Some(4), SemanticType::Ionization, 1.0),
    ];
    let first = resolver().resolve_and_merge(&mut labels);
    assert_eq!(first.merges, 2);

    let snapshot = labels.clone();
    let second = resolver().resolve_and_merge(&mut labels);
    assert_eq!(second.merges, 0);
    assert_eq!(second.passes, 1);
    assert_eq!(labels, snapshot);
}

#[test]
fn test_orphan_is_not_promoted() {
    let mut labels = vec![
        label(0, None, SemanticType::Ionization, 2.0),
        label(1, Some(99), SemanticType::Ionization, 3.0),
    ];
    let before = labels.clone();
    let stats = resolver().resolve_and_merge(&mut labels);

    assert_eq!(stats.merges, 0);
    assert_eq!(stats.unresolved, 2);
    assert_eq!(labels, before);
    assert!(labels.iter().all(|l| l.valid));
}

#[test]
fn test_orphan_behind_merged_parent_stays_valid() {
    // 0 is already merged away and has no parent, so 1 has nowhere to go.
    let mut labels = vec![
        label(0, None, SemanticType::Track, 1.0),
        label(1, Some(0), SemanticType::Ionization, 1.0),
    ];
    labels[0].valid = false;
    let stats = resolver().resolve_and_merge(&mut labels);
    assert_eq!(stats.unresolved, 1);
    assert!(labels[1].valid);
}

#[test]
fn test_dangling_chain_behind_invalid_parent() {
    // 0 points outside the arena and is already merged away.
    let mut labels = vec![
        label(0, Some(999), SemanticType::Ionization, 1.0),
        label(1, Some(0), SemanticType::Ionization, 2.0),
        label(2, None, SemanticType::Track, 10.0),
    ];
    labels[0].valid = false;
    let stats = resolver().resolve_and_merge(&mut labels);

    assert_eq!(stats.merges, 0);
    assert_eq!(stats.unresolved, 1);
    assert_eq!(stats.cyclic, 0);
    assert!(labels[1].valid);
    assert_relative_eq!(labels[1].energy_deposit, 2.0);
    assert_relative_eq!(labels[2].energy_deposit, 10.0);
}

#[test]
fn test_fragment_below_cycle_merges_into_valid_parent() {
    let mut labels = vec![
        label(0, Some(1), SemanticType::Track, 5.0),
        label(1, Some(0), SemanticType::Track, 5.0),
        label(2, Some(0), SemanticType::Ionization, 1.0),
    ];
    let stats = resolver().resolve_and_merge(&mut labels);

    assert_eq!(stats.merges, 1);
    assert_eq!(stats.cyclic, 0);
    assert!(!labels[2].valid);
    assert_eq!(labels[2].merged_into, Some(TrackId(0)));
    assert!(labels[0].valid && labels[1].valid);
    assert_relative_eq!(labels[0].energy_deposit, 6.0);
    assert_relative_eq!(labels[1].energy_deposit, 5.0);
}

#[test]
fn test_two_cycle_terminates_without_merging() {
    let mut labels = vec![
        label(0, Some(1), SemanticType::Ionization, 1.0),
        label(1, Some(0), SemanticType::Ionization, 2.0),
    ];
    let stats = resolver().resolve_and_merge(&mut labels);

    assert_eq!(stats.merges, 0);
    assert_eq!(stats.cyclic, 2);
    assert!(labels[0].valid && labels[1].valid);
    assert!(labels[0].merged_track_ids.is_empty());
    assert!(labels[1].merged_track_ids.is_empty());
    assert_relative_eq!(labels[0].energy_deposit, 1.0);
    assert_relative_eq!(labels[1].energy_deposit, 2.0);
}

#[test]
fn test_long_cycle_terminates() {
    let n = 50;
    let mut labels: Vec<ParticleLabel> = (0..n)
        .map(|i| {
            let kind = if i % 2 == 0 {
                SemanticType::Ionization
            } else {
                SemanticType::Track
            };
            label(i as u32, Some((i + 1) % n), kind, 1.0)
        })
        .collect();
    let stats = resolver().resolve_and_merge(&mut labels);
    assert_eq!(stats.merges, 0);
    assert_eq!(stats.cyclic, n / 2);
}

#[test]
fn test_self_referential_valid_root_accepts_merges() {
    let mut labels = vec![
        label(0, Some(0), SemanticType::Track, 5.0),
        label(1, Some(0), SemanticType::Ionization, 1.0),
    ];
    let stats = resolver().resolve_and_merge(&mut labels);
    assert_eq!(stats.merges, 1);
    assert_relative_eq!(labels[0].energy_deposit, 6.0);
}

#[test]
fn test_self_referential_invalid_root_blocks_walk() {
    let mut labels = vec![
        label(0, Some(0), SemanticType::Track, 5.0),
        label(1, Some(0), SemanticType::Ionization, 1.0),
    ];
    labels[0].valid = false;
    let stats = resolver().resolve_and_merge(&mut labels);
    assert_eq!(stats.merges, 0);
    assert_eq!(stats.unresolved, 1);
    assert!(labels[1].valid);
}

#[test]
fn test_merges_visible_within_same_pass() {
    // Deepest fragment first in index order: 10 -> 11 -> 12.
    let mut labels = vec![
        label(10, Some(1), SemanticType::Ionization, 0.5),
        label(11, Some(2), SemanticType::Ionization, 1.0),
        label(12, None, SemanticType::Track, 20.0),
    ];
    let stats = resolver().resolve_and_merge(&mut labels);

    // Pass 1: 10 merges into 11, then 11 (carrying 10) merges into 12.
    // Pass 2 finds nothing left to do.
    assert_eq!(stats.merges, 2);
    assert_eq!(stats.passes, 2);
    assert_relative_eq!(labels[2].energy_deposit, 21.5);
    assert_eq!(labels[2].merged_track_ids, vec![TrackId(11), TrackId(10)]);
    assert_eq!(labels[0].merged_into, Some(TrackId(11)));
    assert_eq!(labels[1].merged_into, Some(TrackId(12)));
}

#[test]
fn test_later_fragment_walks_past_earlier_merge() {
    let mut labels = vec![
        label(0, None, SemanticType::Track, 20.0),
        label(1, Some(0), SemanticType::Ionization, 1.0),
        label(2, Some(1), SemanticType::Ionization, 0.5),
    ];
    let stats = resolver().resolve_and_merge(&mut labels);

    assert_eq!(stats.merges, 2);
    assert_eq!(stats.passes, 2);
    assert_eq!(labels[2].merged_into, Some(TrackId(0)));
    assert_relative_eq!(labels[0].energy_deposit, 21.5);
}

#[test]
fn test_non_fragment_types_untouched() {
    let kinds = [
        SemanticType::Delta,
        SemanticType::Compton,
        SemanticType::Photon,
        SemanticType::Decay,
        SemanticType::OtherShower,
    ];
    let mut labels = vec![label(0, None, SemanticType::Track, 1.0)];
    for (i, kind) in kinds.into_iter().enumerate() {
        labels.push(label(i as u32 + 1, Some(0), kind, 1.0));
    }
    let stats = resolver().resolve_and_merge(&mut labels);
    assert_eq!(stats.merges, 0);
    assert!(labels.iter().all(|l| l.valid));
}

#[test]
fn test_empty_arena() {
    let mut labels: Vec<ParticleLabel> = Vec::new();
    let stats = resolver().resolve_and_merge(&mut labels);
    assert_eq!(stats.passes, 1);
    assert_eq!(stats.merges, 0);
}

//! JSON adapter for simulation records and label output.
//!
//! Input is an array of events, each event an array of particle records.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use supera_algorithms::EventLabels;
use supera_core::{LabelConfig, ParticleRecord};

/// Reads every event from a JSON file.
pub(crate) fn read_events(path: &Path) -> crate::Result<Vec<Vec<ParticleRecord>>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Reads a labeling configuration; missing keys take their defaults.
pub(crate) fn read_config(path: &Path) -> crate::Result<LabelConfig> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// Writes labeled events as a JSON array.
pub(crate) fn write_labels(path: &Path, events: &[EventLabels]) -> crate::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, events)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use supera_algorithms::label_events;
    use supera_core::{SemanticType, TrackId};

    const EVENTS: &str = r#"[
        [
            {"track_id": 0, "pdg": 13, "process": "primary", "energy_deposit": 40.0},
            {"track_id": 1, "parent_track_id": 0, "pdg": 11, "process": "eIoni",
             "energy_deposit": 1.5,
             "first_step": {"x": 1.0, "y": 2.0, "z": 3.0, "t": 4.0},
             "last_step": {"x": 1.5, "y": 2.0, "z": 3.0, "t": 4.5}}
        ],
        []
    ]"#;

    #[test]
    fn test_read_events() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        std::fs::write(&path, EVENTS).unwrap();

        let events = read_events(&path).unwrap();
        assert_eq!(events.len(), 2);
        assert!(events[1].is_empty());

        let electron = &events[0][1];
        assert_eq!(electron.parent_track_id, Some(TrackId(0)));
        assert!(electron.first_step.is_valid());
        assert!(!electron.end_pt.is_valid());
        assert!(electron.upstream_valid);
    }

    #[test]
    fn test_write_labels() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("events.json");
        let output = dir.path().join("labels.json");
        std::fs::write(&input, EVENTS).unwrap();

        let events = read_events(&input).unwrap();
        let labeled = label_events(&events, &LabelConfig::default()).unwrap();
        write_labels(&output, &labeled).unwrap();

        let written: Vec<EventLabels> =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written.len(), 2);
        assert_eq!(written[0].stats.merges, 1);
        assert_eq!(written[0].labels[1].semantic_type, SemanticType::Ionization);
        assert!(!written[0].labels[1].valid);
    }

    #[test]
    fn test_read_partial_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(
            &path,
            r#"{"delta_size": 3, "fragment_types": ["Ionization", "Compton"],
                "semantic_priority": [1, 0, 2, 3, 4, 5]}"#,
        )
        .unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.delta_size, 3);
        assert_eq!(config.ionization_size, 5);
        assert!(config.fragment_types.contains(&SemanticType::Compton));
        assert_eq!(config.semantic_priority.order(), &[1, 0, 2, 3, 4, 5]);
    }

    #[test]
    fn test_bad_priority_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"semantic_priority": [0, 0, 0, 0, 0, 0]}"#).unwrap();
        assert!(read_config(&path).is_err());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_events(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, crate::CliError::Io(_)));
    }
}

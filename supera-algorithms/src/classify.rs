//! Fixed classification rules from PDG code and process name.

use supera_core::SemanticType;

/// PDG code of the photon.
pub(crate) const PDG_PHOTON: i32 = 22;
/// PDG code of the electron.
pub(crate) const PDG_ELECTRON: i32 = 11;
/// PDG code of the neutron.
pub(crate) const PDG_NEUTRON: i32 = 2112;

/// Semantic type of an electron created by `process`.
///
/// Names are matched exactly and case-sensitively; unknown processes map to
/// [`SemanticType::OtherShower`].
#[must_use]
pub fn classify_process(process: &str) -> SemanticType {
    match process {
        "muIoni" | "hIoni" | "muPairProd" => SemanticType::Delta,
        "muMinusCaptureAtRest" | "muPlusCaptureAtRest" | "Decay" => SemanticType::Decay,
        "compt" => SemanticType::Compton,
        "phot" => SemanticType::PhotoElectron,
        "eIoni" => SemanticType::Ionization,
        "conv" => SemanticType::Conversion,
        "primary" => SemanticType::Primary,
        _ => SemanticType::OtherShower,
    }
}

/// Semantic type of a particle with the given PDG code and creating process.
///
/// Photons and neutrons are classified by PDG alone, electrons by process,
/// and everything else is a [`SemanticType::Track`].
#[must_use]
pub fn classify_particle(pdg: i32, process: &str) -> SemanticType {
    match pdg {
        PDG_PHOTON => SemanticType::Photon,
        PDG_ELECTRON => classify_process(process),
        PDG_NEUTRON => SemanticType::Neutron,
        _ => SemanticType::Track,
    }
}

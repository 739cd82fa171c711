//! Candidate and constraints file loading.
//!
//! Input files are TOML or JSON, selected by extension, and deserialize straight into the
//! core models. Schema validation beyond serde's type checks (GC bounds, homopolymer
//! minimums) happens inside the core workflow, not here.

use crate::error::{CliError, Result};
use biogate::core::models::candidate::CandidateSpec;
use biogate::core::models::constraints::ManufacturingConstraints;
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

fn load<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("toml") => toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        }),
        Some("json") => serde_json::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        }),
        _ => Err(CliError::Argument(format!(
            "unsupported input extension for '{}'; expected .toml or .json",
            path.display()
        ))),
    }
}

pub fn load_candidate(path: &Path) -> Result<CandidateSpec> {
    let spec: CandidateSpec = load(path)?;
    debug!(
        project = %spec.project_name,
        modality = %spec.modality,
        "Candidate specification loaded."
    );
    Ok(spec)
}

/// Loads constraints from `path`, or returns the built-in generic vendor profile when no
/// file is given.
pub fn load_constraints(path: Option<&Path>) -> Result<ManufacturingConstraints> {
    match path {
        Some(path) => {
            let constraints: ManufacturingConstraints = load(path)?;
            debug!(vendor_profile = %constraints.vendor_profile, "Constraints file loaded.");
            Ok(constraints)
        }
        None => Ok(ManufacturingConstraints::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biogate::core::models::candidate::{ExpressionSystem, Modality, SequenceType};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_named(content: &str, suffix: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn candidate_loads_from_toml() {
        let file = write_named(
            r#"
            project_name = "her2-lead"
            modality = "VHH_bispecific"
            targets = ["HER2", "CD3"]
            expression_system = "ecoli"
            sequence_type = "protein"
            sequence = "MVHLTPEEKS"
            "#,
            ".toml",
        );
        let spec = load_candidate(file.path()).unwrap();
        assert_eq!(spec.project_name, "her2-lead");
        assert_eq!(spec.modality, Modality::VhhBispecific);
        assert_eq!(spec.expression_system, ExpressionSystem::EColi);
        assert_eq!(spec.sequence_type, SequenceType::Protein);
    }

    #[test]
    fn candidate_loads_from_json() {
        let file = write_named(
            r#"{
                "project_name": "fusion-7",
                "modality": "Fc_fusion",
                "expression_system": "mammalian",
                "sequence_type": "dna_cds",
                "sequence": "ACGTACGT"
            }"#,
            ".json",
        );
        let spec = load_candidate(file.path()).unwrap();
        assert_eq!(spec.modality, Modality::FcFusion);
        assert!(spec.targets.is_empty());
        assert!(spec.notes.is_none());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let file = write_named("project_name = \"x\"", ".yaml");
        let err = load_candidate(file.path()).unwrap_err();
        assert!(matches!(err, CliError::Argument(_)));
    }

    #[test]
    fn malformed_toml_reports_the_path() {
        let file = write_named("modality = [ unclosed", ".toml");
        let err = load_candidate(file.path()).unwrap_err();
        assert!(matches!(err, CliError::FileParsing { .. }));
    }

    #[test]
    fn missing_constraints_file_falls_back_to_defaults() {
        let constraints = load_constraints(None).unwrap();
        assert_eq!(constraints, ManufacturingConstraints::default());
    }

    #[test]
    fn partial_constraints_fill_in_defaults() {
        let file = write_named(
            r#"
            gc_min = 0.35
            restriction_sites = ["EcoRI"]
            "#,
            ".toml",
        );
        let constraints = load_constraints(Some(file.path())).unwrap();
        assert_eq!(constraints.gc_min, 0.35);
        assert_eq!(constraints.restriction_sites, vec!["EcoRI".to_string()]);
        assert_eq!(constraints.max_homopolymer, 6);
        assert_eq!(constraints.vendor_profile, "generic");
    }
}

//! # Workflows Module
//!
//! High-level entry points that orchestrate the full assessment pipeline.
//!
//! ## Overview
//!
//! Workflows are the public API of the gate. Each call validates its inputs up front,
//! normalizes the sequence, runs the analysis scans, maps the construct blueprint, and
//! scores the result; fatal validation errors surface before any analysis runs, so a
//! caller never receives a partial result. Every workflow is a pure function of its
//! arguments, which is what makes byte-identical reruns testable.
//!
//! ## Architecture
//!
//! - [`score`] - Full pipeline: constraints validation, normalization, sequence scans,
//!   blueprint mapping, scoring
//! - [`blueprint`] - Normalization plus blueprint mapping only, for callers that want
//!   the chain/domain decomposition without a score

use crate::core::analysis;
use crate::core::models::blueprint::Blueprint;
use crate::core::models::candidate::CandidateSpec;
use crate::core::models::constraints::ManufacturingConstraints;
use crate::core::models::result::GateResult;
use crate::core::normalize;
use crate::core::tables::ReferenceTables;
use crate::engine::blueprint::build_blueprint;
use crate::engine::error::GateError;
use crate::engine::scoring;
use tracing::{info, instrument};

/// Scores a construct candidate against manufacturing constraints.
///
/// Reference tables are passed in explicitly; use [`ReferenceTables::default`] for the
/// built-in restriction-site and expression-liability data.
#[instrument(skip_all, name = "score_workflow", fields(project = %spec.project_name, modality = %spec.modality))]
pub fn score(
    spec: &CandidateSpec,
    constraints: &ManufacturingConstraints,
    tables: &ReferenceTables,
) -> Result<GateResult, GateError> {
    constraints.validate()?;
    let sequence = normalize::normalize(
        &spec.sequence,
        spec.sequence_type.residue_type(),
        &spec.project_name,
    )?;
    info!(
        residues = sequence.len(),
        residue_type = %sequence.residue_type(),
        "Sequence normalized; running analysis scans."
    );

    let findings = analysis::analyze(&sequence, constraints, &tables.restriction_sites);
    let blueprint = build_blueprint(spec.modality, sequence.len(), &spec.targets);
    let result = scoring::score(
        &sequence,
        constraints,
        &blueprint,
        &findings,
        spec.expression_system,
        tables,
    );

    info!(
        overall_score = result.overall_score,
        flags = result.flags.len(),
        "Scoring complete."
    );
    Ok(result)
}

/// Maps a candidate to its chain/domain blueprint without scoring it.
#[instrument(skip_all, name = "blueprint_workflow", fields(project = %spec.project_name, modality = %spec.modality))]
pub fn blueprint(spec: &CandidateSpec) -> Result<Blueprint, GateError> {
    let sequence = normalize::normalize(
        &spec.sequence,
        spec.sequence_type.residue_type(),
        &spec.project_name,
    )?;
    Ok(build_blueprint(spec.modality, sequence.len(), &spec.targets))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::candidate::{ExpressionSystem, Modality, SequenceType};
    use crate::core::models::finding::Severity;
    use crate::core::models::result::FlagKind;

    fn candidate(modality: Modality, sequence_type: SequenceType, sequence: &str) -> CandidateSpec {
        CandidateSpec {
            project_name: "test-construct".to_string(),
            modality,
            targets: vec!["HER2".to_string()],
            expression_system: ExpressionSystem::Mammalian,
            sequence_type,
            sequence: sequence.to_string(),
            notes: None,
        }
    }

    #[test]
    fn fourteen_alanines_yield_one_error_homopolymer_flag() {
        let spec = candidate(
            Modality::VhhBispecific,
            SequenceType::Protein,
            &"A".repeat(14),
        );
        let result = score(
            &spec,
            &ManufacturingConstraints::default(),
            &ReferenceTables::default(),
        )
        .unwrap();
        let runs: Vec<_> = result
            .flags
            .iter()
            .filter(|f| f.kind == FlagKind::Homopolymer)
            .collect();
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].severity, Severity::Error);
        assert_eq!(runs[0].span, Some((0, 13)));
    }

    #[test]
    fn vhh_bispecific_blueprint_spans_cover_the_whole_sequence() {
        let spec = candidate(
            Modality::VhhBispecific,
            SequenceType::Protein,
            &"ACDEFGHIKL".repeat(12),
        );
        let blueprint = blueprint(&spec).unwrap();
        assert_eq!(blueprint.chains.len(), 1);
        let names: Vec<_> = blueprint.domains.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["VHH1", "Linker", "VHH2"]);
        let covered: usize = blueprint
            .domains
            .iter()
            .filter_map(|d| d.span_len())
            .sum();
        assert_eq!(covered, 120);
    }

    #[test]
    fn an_all_gc_window_raises_one_gc_warning_flag() {
        let spec = candidate(Modality::FcFusion, SequenceType::DnaCds, &"GC".repeat(25));
        let result = score(
            &spec,
            &ManufacturingConstraints::default(),
            &ReferenceTables::default(),
        )
        .unwrap();
        let warnings: Vec<_> = result
            .flags
            .iter()
            .filter(|f| f.kind == FlagKind::GcWindow && f.severity == Severity::Warning)
            .collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings[0].span, Some((0, 49)));
    }

    #[test]
    fn invalid_constraints_fail_before_any_analysis() {
        let spec = candidate(Modality::FcFusion, SequenceType::DnaCds, "ACGTACGT");
        let constraints = ManufacturingConstraints {
            gc_min: 0.8,
            gc_max: 0.2,
            ..Default::default()
        };
        let err = score(&spec, &constraints, &ReferenceTables::default()).unwrap_err();
        assert!(matches!(err, GateError::Constraints(_)));
    }

    #[test]
    fn empty_sequence_is_a_fatal_normalization_error() {
        let spec = candidate(Modality::FcFusion, SequenceType::Protein, " \n\t ");
        let err = score(
            &spec,
            &ManufacturingConstraints::default(),
            &ReferenceTables::default(),
        )
        .unwrap_err();
        assert!(matches!(err, GateError::Normalize(_)));
    }

    #[test]
    fn repeated_calls_produce_identical_results() {
        let spec = candidate(
            Modality::IgGLikeBispecific,
            SequenceType::Protein,
            "MKTAYIAKQRNASDLMKRNGMKTAYIAKQRNASDLMKRNG",
        );
        let constraints = ManufacturingConstraints::default();
        let tables = ReferenceTables::default();
        let first = score(&spec, &constraints, &tables).unwrap();
        let second = score(&spec, &constraints, &tables).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn normalized_fasta_round_trips_through_the_workflow_input() {
        let spec = candidate(
            Modality::FcFusion,
            SequenceType::DnaCds,
            ">lead-42\nacgt acgt\nACGTACGT\n",
        );
        let sequence = normalize::normalize(
            &spec.sequence,
            spec.sequence_type.residue_type(),
            &spec.project_name,
        )
        .unwrap();
        let fasta = normalize::normalized_fasta(&spec.project_name, &sequence);
        let reparsed = normalize::normalize(
            &fasta,
            spec.sequence_type.residue_type(),
            &spec.project_name,
        )
        .unwrap();
        assert_eq!(reparsed.residues(), sequence.residues());
    }
}

//! Sub-score aggregation, flag assembly, and suggestion generation.
//!
//! ## Overview
//!
//! Every sub-score starts at 100 and is reduced by penalties from the named tables in
//! [`policy`](super::policy) and the [`ExpressionLiabilityTable`]. The function is pure:
//! no I/O, no randomness, no state between calls, so two calls on identical inputs produce
//! identical results down to flag ordering.

use super::{policy, suggestions};
use crate::core::analysis::gc::gc_fraction;
use crate::core::models::blueprint::Blueprint;
use crate::core::models::candidate::ExpressionSystem;
use crate::core::models::constraints::ManufacturingConstraints;
use crate::core::models::finding::{Finding, FindingKind, Severity};
use crate::core::models::result::{Flag, GateResult, SubScores};
use crate::core::models::sequence::NormalizedSequence;
use crate::core::tables::ReferenceTables;

/// Scores a candidate from its already-computed analysis findings and blueprint.
///
/// `findings` must be the analyzer output for `sequence` under `constraints`; the engine
/// adds protein developability findings of its own before assembling the flag list.
pub fn score(
    sequence: &NormalizedSequence,
    constraints: &ManufacturingConstraints,
    blueprint: &Blueprint,
    findings: &[Finding],
    expression_system: ExpressionSystem,
    tables: &ReferenceTables,
) -> GateResult {
    let dev_findings = developability_findings(sequence);

    let extra_fragments = extra_fragment_count(sequence.len(), constraints.max_fragment_length);

    let sub_scores = SubScores {
        sequence_synth: deduct(findings.iter().map(|f| policy::severity_penalty(f.severity)).sum()),
        assembly_risk: deduct(
            blueprint.warnings.len() as u32 * policy::BLUEPRINT_WARNING_PENALTY
                + blueprint.total_domains() as u32 * policy::DOMAIN_UNIT_PENALTY
                + extra_fragments * policy::FRAGMENT_SPLIT_PENALTY,
        ),
        developability: deduct(
            dev_findings.iter().map(|f| policy::severity_penalty(f.severity)).sum(),
        ),
        expression_risk: deduct(expression_penalty(
            sequence,
            expression_system,
            &tables.expression,
        )),
    };

    let mut flags: Vec<Flag> = findings
        .iter()
        .chain(dev_findings.iter())
        .map(Flag::from_finding)
        .collect();
    flags.extend(blueprint.warnings.iter().map(|w| Flag::construct(w.as_str())));
    if extra_fragments > 0 {
        flags.push(Flag::construct(format!(
            "length {} exceeds max fragment length {}; synthesis requires {} fragments",
            sequence.len(),
            constraints.max_fragment_length,
            extra_fragments + 1
        )));
    }

    // Dedup by (kind, span, detail); when duplicates differ in severity the highest wins.
    flags.sort_by(|a, b| {
        a.dedup_key()
            .cmp(&b.dedup_key())
            .then(b.severity.cmp(&a.severity))
    });
    flags.dedup_by(|a, b| a.dedup_key() == b.dedup_key());
    flags.sort_by(|a, b| a.presentation_order().cmp(&b.presentation_order()));

    let suggestions = suggestions::for_flags(&flags);

    GateResult {
        overall_score: overall(&sub_scores),
        sub_scores,
        flags,
        suggestions,
    }
}

fn deduct(penalty: u32) -> u8 {
    100u32.saturating_sub(penalty) as u8
}

fn overall(sub_scores: &SubScores) -> u8 {
    let w = policy::SUBSCORE_WEIGHTS;
    let weighted = w.sequence_synth * f64::from(sub_scores.sequence_synth)
        + w.assembly_risk * f64::from(sub_scores.assembly_risk)
        + w.developability * f64::from(sub_scores.developability)
        + w.expression_risk * f64::from(sub_scores.expression_risk);
    weighted.round() as u8
}

/// Number of synthesis fragments beyond the first needed to cover the sequence.
fn extra_fragment_count(sequence_len: usize, max_fragment_length: usize) -> u32 {
    (sequence_len.div_ceil(max_fragment_length).saturating_sub(1)) as u32
}

/// Protein liability scan. Nucleic sequences produce no findings, so their developability
/// sub-score is always 100.
fn developability_findings(sequence: &NormalizedSequence) -> Vec<Finding> {
    if sequence.residue_type().is_nucleic() {
        return Vec::new();
    }
    let residues = sequence.residues();
    let bytes = sequence.as_bytes();
    let mut findings = Vec::new();

    // N-X-[S/T] glycosylation sequons, X != P.
    for i in 0..bytes.len().saturating_sub(2) {
        if bytes[i] == b'N' && bytes[i + 1] != b'P' && matches!(bytes[i + 2], b'S' | b'T') {
            findings.push(Finding::new(
                FindingKind::Motif,
                Severity::Warning,
                i,
                i + 2,
                format!("N-glycosylation sequon '{}'", &residues[i..=i + 2]),
            ));
        }
    }

    // Deamidation-prone asparagine pairs.
    for i in 0..bytes.len().saturating_sub(1) {
        if bytes[i] == b'N' && matches!(bytes[i + 1], b'G' | b'S' | b'T') {
            findings.push(Finding::new(
                FindingKind::Motif,
                Severity::Info,
                i,
                i + 1,
                format!("deamidation-prone pair '{}'", &residues[i..=i + 1]),
            ));
        }
    }

    // Oxidation proxy: one finding when methionine density crosses the threshold.
    let met_count = bytes.iter().filter(|&&b| b == b'M').count();
    let met_fraction = met_count as f64 / bytes.len() as f64;
    if met_fraction > policy::MET_DENSITY_THRESHOLD {
        findings.push(Finding::new(
            FindingKind::Motif,
            Severity::Info,
            0,
            bytes.len() - 1,
            format!(
                "methionine fraction {:.3} above oxidation-risk threshold {:.3}",
                met_fraction,
                policy::MET_DENSITY_THRESHOLD
            ),
        ));
    }

    // Dibasic proteolysis motifs (RR, RK, KR; KK is not a classic cleavage pair).
    for i in 0..bytes.len().saturating_sub(1) {
        let pair = (bytes[i], bytes[i + 1]);
        if matches!(pair, (b'R', b'R') | (b'R', b'K') | (b'K', b'R')) {
            findings.push(Finding::new(
                FindingKind::Motif,
                Severity::Info,
                i,
                i + 1,
                format!("dibasic motif '{}'", &residues[i..=i + 1]),
            ));
        }
    }

    findings.sort_by(|a, b| a.scan_order().cmp(&b.scan_order()));
    findings
}

fn expression_penalty(
    sequence: &NormalizedSequence,
    system: ExpressionSystem,
    table: &crate::core::tables::expression::ExpressionLiabilityTable,
) -> u32 {
    let mut penalty = table.base_penalty(system);

    // Disulfide-rich proteins are a known E. coli liability.
    if system == ExpressionSystem::EColi && !sequence.residue_type().is_nucleic() {
        let cys_count = sequence.as_bytes().iter().filter(|&&b| b == b'C').count();
        if cys_count >= table.disulfide_cysteine_threshold {
            penalty += table.disulfide_penalty;
        }
    }

    // Mammalian codon-bias proxy: overall GC far from balanced suggests biased codon usage.
    if system == ExpressionSystem::Mammalian && sequence.residue_type().is_nucleic() {
        let gc = gc_fraction(sequence.as_bytes());
        let (low, high) = table.codon_bias_gc_range;
        if gc < low || gc > high {
            penalty += table.codon_bias_penalty;
        }
    }

    penalty + table.size_penalty(sequence.len())
}

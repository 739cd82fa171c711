//! # Sequence Analysis Module
//!
//! Leaf algorithms operating on a normalized sequence. Each scan is a pure function of
//! `(NormalizedSequence, constraints)` returning localized [`Finding`]s; the [`analyze`]
//! facade runs every scan and returns one list in canonical order.
//!
//! ## Determinism
//!
//! Identical sequence and constraints produce an identical finding list in identical order,
//! every run. Each scan returns its findings sorted by (start, kind, end), and the facade
//! re-sorts the merged list under the same key.

pub mod gc;
pub mod homopolymer;
pub mod motifs;
pub mod palindrome;
pub mod repeats;

use crate::core::models::constraints::ManufacturingConstraints;
use crate::core::models::finding::Finding;
use crate::core::models::sequence::NormalizedSequence;
use crate::core::tables::restriction::RestrictionSiteTable;

use palindrome::PalindromeParams;

/// Runs every sequence scan and returns the merged finding list, sorted by start ascending
/// with ties broken by kind, then end.
pub fn analyze(
    sequence: &NormalizedSequence,
    constraints: &ManufacturingConstraints,
    sites: &RestrictionSiteTable,
) -> Vec<Finding> {
    let mut findings = Vec::new();
    findings.extend(gc::scan(sequence, constraints.gc_min, constraints.gc_max));
    findings.extend(homopolymer::scan(sequence, constraints.max_homopolymer));
    findings.extend(repeats::scan(sequence, repeats::DEFAULT_KMER_SIZE));
    findings.extend(palindrome::scan(sequence, &PalindromeParams::default()));
    findings.extend(motifs::scan(
        sequence,
        &constraints.forbidden_motifs,
        &constraints.restriction_sites,
        sites,
    ));
    findings.sort_by(|a, b| a.scan_order().cmp(&b.scan_order()));
    findings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::sequence::ResidueType;
    use crate::core::normalize::normalize;

    fn dna(raw: &str) -> NormalizedSequence {
        normalize(raw, ResidueType::Dna, "test").unwrap()
    }

    #[test]
    fn merged_findings_are_sorted_by_start() {
        let sequence = dna(&format!("{}AAAAAAAAAA{}", "ACGT".repeat(5), "ACGT".repeat(5)));
        let constraints = ManufacturingConstraints::default();
        let findings = analyze(&sequence, &constraints, &RestrictionSiteTable::default());
        for pair in findings.windows(2) {
            assert!(pair[0].scan_order() <= pair[1].scan_order());
        }
    }

    #[test]
    fn analysis_is_deterministic_across_calls() {
        let raw = format!("GAATTC{}GGGGGGGGGG{}GAATTC", "ACGT".repeat(20), "AT".repeat(30));
        let sequence = dna(&raw);
        let constraints = ManufacturingConstraints {
            forbidden_motifs: vec!["GGGG".into()],
            restriction_sites: vec!["EcoRI".into(), "Mystery".into()],
            ..Default::default()
        };
        let sites = RestrictionSiteTable::default();
        let first = analyze(&sequence, &constraints, &sites);
        let second = analyze(&sequence, &constraints, &sites);
        assert_eq!(first, second);
    }
}

//! Maximal single-residue run detection.

use crate::core::models::finding::{Finding, FindingKind, Severity};
use crate::core::models::sequence::NormalizedSequence;

// Runs this far past the limit are errors rather than warnings.
const ERROR_MARGIN: usize = 3;

/// Finds all maximal runs of one repeated residue longer than `max_homopolymer`. A run at most
/// `ERROR_MARGIN` over the limit is a warning; anything longer is an error.
pub fn scan(sequence: &NormalizedSequence, max_homopolymer: usize) -> Vec<Finding> {
    let bytes = sequence.as_bytes();
    let mut findings = Vec::new();

    let mut i = 0;
    while i < bytes.len() {
        let mut j = i + 1;
        while j < bytes.len() && bytes[j] == bytes[i] {
            j += 1;
        }
        let run = j - i;
        if run > max_homopolymer {
            let severity = if run <= max_homopolymer + ERROR_MARGIN {
                Severity::Warning
            } else {
                Severity::Error
            };
            findings.push(Finding::new(
                FindingKind::Homopolymer,
                severity,
                i,
                j - 1,
                format!(
                    "homopolymer run of '{}' x{} exceeds limit {}",
                    bytes[i] as char, run, max_homopolymer
                ),
            ));
        }
        i = j;
    }
    findings
}

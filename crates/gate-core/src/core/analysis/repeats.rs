//! Repeated k-mer detection.

use crate::core::models::finding::{Finding, FindingKind, Severity};
use crate::core::models::sequence::NormalizedSequence;
use std::collections::BTreeMap;

pub const DEFAULT_KMER_SIZE: usize = 6;

/// Indexes every k-mer and, for each distinct k-mer occurring at least twice, emits one info
/// finding per additional occurrence beyond the first, spanning that occurrence. Overlapping
/// occurrences count separately. The index is a `BTreeMap`, so iteration order (and therefore
/// output order) is deterministic.
pub fn scan(sequence: &NormalizedSequence, k: usize) -> Vec<Finding> {
    let residues = sequence.residues();
    if k == 0 || residues.len() < k {
        return Vec::new();
    }

    let mut index: BTreeMap<&str, Vec<usize>> = BTreeMap::new();
    for i in 0..=residues.len() - k {
        index.entry(&residues[i..i + k]).or_default().push(i);
    }

    let mut findings = Vec::new();
    for (kmer, positions) in &index {
        if positions.len() < 2 {
            continue;
        }
        let first = positions[0];
        for &start in &positions[1..] {
            findings.push(Finding::new(
                FindingKind::Repeat,
                Severity::Info,
                start,
                start + k - 1,
                format!("repeated {k}-mer '{kmer}' (first occurrence at {first})"),
            ));
        }
    }
    findings.sort_by(|a, b| a.scan_order().cmp(&b.scan_order()));
    findings
}

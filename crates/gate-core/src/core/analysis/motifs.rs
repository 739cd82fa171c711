//! Forbidden-motif and restriction-site search.

use crate::core::models::finding::{Finding, FindingKind, Severity};
use crate::core::models::sequence::NormalizedSequence;
use crate::core::tables::restriction::RestrictionSiteTable;

/// All (possibly overlapping) occurrences of `motif` in `residues`, as inclusive spans.
/// The sequence is already uppercase; the motif must be too.
fn occurrences(residues: &str, motif: &str) -> Vec<(usize, usize)> {
    let seq = residues.as_bytes();
    let pat = motif.as_bytes();
    if pat.is_empty() || seq.len() < pat.len() {
        return Vec::new();
    }
    let mut spans = Vec::new();
    for start in 0..=seq.len() - pat.len() {
        if &seq[start..start + pat.len()] == pat {
            spans.push((start, start + pat.len() - 1));
        }
    }
    spans
}

/// Scans for every forbidden motif (error findings) and every named restriction site (warning
/// findings, resolved through `sites`). The search is case-insensitive. Unknown site names
/// degrade to an info finding instead of failing the scan.
pub fn scan(
    sequence: &NormalizedSequence,
    forbidden_motifs: &[String],
    restriction_sites: &[String],
    sites: &RestrictionSiteTable,
) -> Vec<Finding> {
    let residues = sequence.residues();
    let mut findings = Vec::new();

    for motif in forbidden_motifs {
        let motif = motif.trim().to_ascii_uppercase();
        if motif.is_empty() {
            continue;
        }
        for (start, end) in occurrences(residues, &motif) {
            findings.push(Finding::new(
                FindingKind::Motif,
                Severity::Error,
                start,
                end,
                format!("forbidden motif '{motif}'"),
            ));
        }
    }

    for name in restriction_sites {
        let name = name.trim();
        match sites.recognition(name) {
            Some(recognition) => {
                for (start, end) in occurrences(residues, recognition) {
                    findings.push(Finding::new(
                        FindingKind::RestrictionSite,
                        Severity::Warning,
                        start,
                        end,
                        format!("restriction site {name} ({recognition})"),
                    ));
                }
            }
            None => {
                findings.push(Finding::new(
                    FindingKind::RestrictionSite,
                    Severity::Info,
                    0,
                    0,
                    format!("unknown restriction site name '{name}'; skipped"),
                ));
            }
        }
    }
    findings.sort_by(|a, b| a.scan_order().cmp(&b.scan_order()));
    findings
}

//! Windowed GC-content scan for nucleic-acid sequences.

use crate::core::models::finding::{Finding, FindingKind, Severity};
use crate::core::models::sequence::NormalizedSequence;

pub const WINDOW_SIZE: usize = 50;
pub const WINDOW_STEP: usize = 10;

/// Fraction of `G`/`C` residues in a window. Ambiguity codes are not counted.
pub fn gc_fraction(window: &[u8]) -> f64 {
    if window.is_empty() {
        return 0.0;
    }
    let gc = window.iter().filter(|&&b| b == b'G' || b == b'C').count();
    gc as f64 / window.len() as f64
}

/// Scans fixed-size sliding windows (the final window shrinks at the sequence tail rather
/// than padding) and emits a warning per window whose GC fraction falls outside
/// `[gc_min, gc_max]`, plus one summary info finding carrying the overall GC fraction.
/// Protein input yields no findings.
pub fn scan(sequence: &NormalizedSequence, gc_min: f64, gc_max: f64) -> Vec<Finding> {
    if !sequence.residue_type().is_nucleic() {
        return Vec::new();
    }

    let bytes = sequence.as_bytes();
    let len = bytes.len();
    let mut findings = Vec::new();

    let mut start = 0;
    loop {
        let end = (start + WINDOW_SIZE).min(len);
        let fraction = gc_fraction(&bytes[start..end]);
        if fraction < gc_min || fraction > gc_max {
            findings.push(Finding::new(
                FindingKind::GcWindow,
                Severity::Warning,
                start,
                end - 1,
                format!(
                    "GC fraction {:.3} in window {}..={} outside [{:.2}, {:.2}]",
                    fraction,
                    start,
                    end - 1,
                    gc_min,
                    gc_max
                ),
            ));
        }
        if end == len {
            break;
        }
        start += WINDOW_STEP;
    }

    findings.push(Finding::new(
        FindingKind::GcWindow,
        Severity::Info,
        0,
        len - 1,
        format!("overall GC fraction {:.3}", gc_fraction(bytes)),
    ));
    findings.sort_by(|a, b| a.scan_order().cmp(&b.scan_order()));
    findings
}

//! Palindrome/hairpin proxy scan.
//!
//! This is a heuristic proxy for secondary-structure risk, not a thermodynamic fold
//! prediction: a window whose first half is (close to) the reverse complement of its second
//! half can fold back on itself. For protein input the check degrades to a literal mirror,
//! used as a coarse structural-risk signal.

use crate::core::models::finding::{Finding, FindingKind, Severity};
use crate::core::models::sequence::NormalizedSequence;

/// Tunable scan parameters. The defaults are deliberate approximations; both knobs are
/// exposed rather than hard-coded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PalindromeParams {
    pub window_lengths: Vec<usize>,      // Even window sizes to test
    pub mismatch_tolerance: usize,       // Allowed half-vs-half mismatches per window
}

impl Default for PalindromeParams {
    fn default() -> Self {
        Self {
            window_lengths: vec![12, 16, 20],
            mismatch_tolerance: 1,
        }
    }
}

fn complement(base: u8) -> u8 {
    match base {
        b'A' => b'T',
        b'T' | b'U' => b'A',
        b'G' => b'C',
        b'C' => b'G',
        // Ambiguity codes never satisfy the pairing check.
        _ => 0,
    }
}

/// Slides each window length across the sequence and emits a warning wherever the first half
/// pairs with the second half within the mismatch tolerance. Odd window lengths are rounded
/// down to the nearest even length.
pub fn scan(sequence: &NormalizedSequence, params: &PalindromeParams) -> Vec<Finding> {
    let bytes = sequence.as_bytes();
    let nucleic = sequence.residue_type().is_nucleic();
    let mut findings = Vec::new();

    for &window in &params.window_lengths {
        let window = window & !1;
        if window < 2 || bytes.len() < window {
            continue;
        }
        let half = window / 2;
        for start in 0..=bytes.len() - window {
            let slice = &bytes[start..start + window];
            let mismatches = (0..half)
                .filter(|&i| {
                    let a = slice[i];
                    let b = slice[window - 1 - i];
                    if nucleic {
                        a != complement(b)
                    } else {
                        a != b
                    }
                })
                .count();
            if mismatches <= params.mismatch_tolerance {
                findings.push(Finding::new(
                    FindingKind::Palindrome,
                    Severity::Warning,
                    start,
                    start + window - 1,
                    format!(
                        "self-{} window of {} residues ({} mismatch(es)); possible hairpin",
                        if nucleic { "complementary" } else { "mirrored" },
                        window,
                        mismatches
                    ),
                ));
            }
        }
    }
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

    fn protein(raw: &str) -> NormalizedSequence {
        normalize(raw, ResidueType::Protein, "test").unwrap()
    }

    fn params(windows: &[usize], tolerance: usize) -> PalindromeParams {
        PalindromeParams {
            window_lengths: windows.to_vec(),
            mismatch_tolerance: tolerance,
        }
    }

    #[test]
    fn perfect_dna_palindrome_is_flagged() {
        // GAATTC + GAATTC reverse complement of itself: "GAATTCGAATTC" reads as its own
        // reverse complement across the full 12-residue window.
        let findings = scan(&dna("GAATTCGAATTC"), &params(&[12], 0));
        assert_eq!(findings.len(), 1);
        assert_eq!((findings[0].start, findings[0].end), (0, 11));
        assert_eq!(findings[0].severity, Severity::Warning);
    }

    #[test]
    fn near_palindrome_within_tolerance_is_flagged() {
        // One mismatch against the perfect palindrome above.
        let findings = scan(&dna("GAATTCGAATTA"), &params(&[12], 1));
        assert_eq!(findings.len(), 1);
        assert!(findings[0].detail.contains("1 mismatch"));
    }

    #[test]
    fn near_palindrome_beyond_tolerance_is_not_flagged() {
        let findings = scan(&dna("GAATTCGAAAAA"), &params(&[12], 1));
        assert!(findings.is_empty());
    }

    #[test]
    fn poly_a_is_not_self_complementary() {
        let findings = scan(&dna(&"A".repeat(40)), &params(&[12, 16, 20], 1));
        assert!(findings.is_empty());
    }

    #[test]
    fn windows_of_different_lengths_are_interleaved_by_start() {
        // "GACTGACT" + its reverse complement: the full 16-residue window is a perfect
        // palindrome and so is the centered 12-residue window at start 2. The 16-window
        // starts earlier, so it must come first even though 12-windows are scanned first.
        let findings = scan(&dna("GACTGACTAGTCAGTC"), &params(&[12, 16], 0));
        assert_eq!(findings.len(), 2);
        assert_eq!((findings[0].start, findings[0].end), (0, 15));
        assert_eq!((findings[1].start, findings[1].end), (2, 13));
    }

    #[test]
    fn protein_mirror_window_is_flagged() {
        // Literal mirror: first half equals reversed second half.
        let findings = scan(&protein("MVHLTPPTLHVM"), &params(&[12], 0));
        assert_eq!(findings.len(), 1);
        assert!(findings[0].detail.contains("mirrored"));
    }

    #[test]
    fn sequence_shorter_than_every_window_yields_nothing() {
        assert!(scan(&dna("ACGT"), &PalindromeParams::default()).is_empty());
    }
}

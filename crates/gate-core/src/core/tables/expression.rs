use crate::core::models::candidate::ExpressionSystem;
use std::collections::BTreeMap;

/// Liability weights for expression-risk scoring, keyed by expression system, plus the
/// parameters of the sequence-level proxies. Passed into the scoring engine as read-only
/// data; the defaults mirror the reference liability weights this gate was calibrated
/// against.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionLiabilityTable {
    base_penalties: BTreeMap<ExpressionSystem, u32>,
    pub fallback_penalty: u32,           // Applied when a system has no table entry
    pub disulfide_cysteine_threshold: usize, // Cys count marking a protein disulfide-rich
    pub disulfide_penalty: u32,          // Extra E. coli penalty for disulfide-rich proteins
    pub codon_bias_gc_range: (f64, f64), // Acceptable overall GC for the mammalian codon proxy
    pub codon_bias_penalty: u32,
    pub size_penalty_divisor: usize,     // Length penalty: len / divisor ...
    pub size_penalty_cap: u32,           // ... saturating at this value
}

impl Default for ExpressionLiabilityTable {
    fn default() -> Self {
        let base_penalties = BTreeMap::from([
            (ExpressionSystem::Mammalian, 5),
            (ExpressionSystem::Yeast, 10),
            (ExpressionSystem::EColi, 12),
            (ExpressionSystem::CellFree, 8),
        ]);
        Self {
            base_penalties,
            fallback_penalty: 10,
            disulfide_cysteine_threshold: 4,
            disulfide_penalty: 8,
            codon_bias_gc_range: (0.4, 0.6),
            codon_bias_penalty: 4,
            size_penalty_divisor: 50,
            size_penalty_cap: 25,
        }
    }
}

impl ExpressionLiabilityTable {
    pub fn base_penalty(&self, system: ExpressionSystem) -> u32 {
        self.base_penalties
            .get(&system)
            .copied()
            .unwrap_or(self.fallback_penalty)
    }

    /// Monotonic, saturating length penalty: longer constructs express worse, up to a cap.
    pub fn size_penalty(&self, sequence_len: usize) -> u32 {
        let raw = (sequence_len / self.size_penalty_divisor) as u32;
        raw.min(self.size_penalty_cap)
    }
}

//! Scoring policy constants.
//!
//! Every behavior-relevant tunable of the gate lives here as a named constant so a reviewer
//! can audit the policy without reading algorithm code, and so tests can assert on the tables
//! directly.

use crate::core::models::candidate::Modality;
use crate::core::models::finding::Severity;

/// Penalty charged per finding, scaled by severity.
pub const SEVERITY_PENALTIES: [(Severity, u32); 3] = [
    (Severity::Info, 1),
    (Severity::Warning, 5),
    (Severity::Error, 15),
];

pub fn severity_penalty(severity: Severity) -> u32 {
    SEVERITY_PENALTIES
        .iter()
        .find(|(s, _)| *s == severity)
        .map(|&(_, penalty)| penalty)
        .unwrap_or(0)
}

/// Weights of the four sub-scores in the overall score. They must sum to 1; this is the
/// single most behavior-relevant tunable of the gate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScoreWeights {
    pub sequence_synth: f64,
    pub assembly_risk: f64,
    pub developability: f64,
    pub expression_risk: f64,
}

impl SubScoreWeights {
    pub fn sum(&self) -> f64 {
        self.sequence_synth + self.assembly_risk + self.developability + self.expression_risk
    }
}

pub const SUBSCORE_WEIGHTS: SubScoreWeights = SubScoreWeights {
    sequence_synth: 0.25,
    assembly_risk: 0.25,
    developability: 0.25,
    expression_risk: 0.25,
};

/// Assembly risk: penalty per blueprint warning.
pub const BLUEPRINT_WARNING_PENALTY: u32 = 5;

/// Assembly risk: penalty per domain in the fragment-count heuristic
/// (chain count x average domains per chain = total domain count).
pub const DOMAIN_UNIT_PENALTY: u32 = 2;

/// Assembly risk: penalty per synthesis fragment beyond the first, when the construct
/// exceeds the declared maximum fragment length.
pub const FRAGMENT_SPLIT_PENALTY: u32 = 4;

/// Developability: methionine fraction above which a sequence is oxidation-prone.
pub const MET_DENSITY_THRESHOLD: f64 = 0.02;

// Proportional span-allocation weights for single-chain modalities, in residues.
pub const VHH_DOMAIN_WEIGHT: usize = 120;
pub const BINDER_DOMAIN_WEIGHT: usize = 150;
pub const FC_DOMAIN_WEIGHT: usize = 230;
pub const LINKER_DOMAIN_WEIGHT: usize = 20;

/// Format-specific length thresholds: `(undersize, oversize)`. Outside these the mapper emits
/// a structural warning.
pub fn format_size_limits(modality: Modality) -> (Option<usize>, Option<usize>) {
    match modality {
        Modality::IgGLikeBispecific => (None, Some(400)),
        Modality::VhhBispecific => (Some(180), Some(350)),
        Modality::FabScFv => (None, Some(500)),
        Modality::FcFusion => (Some(200), None),
    }
}

/// Number of paratopes a modality topology supports; `None` means the topology repeats per
/// target and has no fixed ceiling.
pub fn paratope_capacity(modality: Modality) -> Option<usize> {
    match modality {
        Modality::IgGLikeBispecific => Some(2),
        Modality::VhhBispecific => None,
        Modality::FabScFv => Some(2),
        Modality::FcFusion => Some(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_penalties_are_ordered_and_fixed() {
        assert_eq!(severity_penalty(Severity::Info), 1);
        assert_eq!(severity_penalty(Severity::Warning), 5);
        assert_eq!(severity_penalty(Severity::Error), 15);
    }

    #[test]
    fn subscore_weights_sum_to_one() {
        assert!((SUBSCORE_WEIGHTS.sum() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn every_modality_has_size_limits_and_capacity_entries() {
        for modality in [
            Modality::IgGLikeBispecific,
            Modality::VhhBispecific,
            Modality::FabScFv,
            Modality::FcFusion,
        ] {
            let (min, max) = format_size_limits(modality);
            assert!(min.is_some() || max.is_some());
            // Capacity is either fixed or explicitly unbounded (VHH repeats per target).
            match modality {
                Modality::VhhBispecific => assert_eq!(paratope_capacity(modality), None),
                _ => assert!(paratope_capacity(modality).is_some()),
            }
        }
    }
}

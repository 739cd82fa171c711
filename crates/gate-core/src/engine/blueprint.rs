//! Construct blueprint mapping: modality -> fixed chain/domain topology with span estimation.

use crate::core::models::blueprint::{Blueprint, Domain};
use crate::core::models::candidate::Modality;
use crate::engine::policy::{
    BINDER_DOMAIN_WEIGHT, FC_DOMAIN_WEIGHT, LINKER_DOMAIN_WEIGHT, VHH_DOMAIN_WEIGHT,
    format_size_limits, paratope_capacity,
};

const MULTI_CHAIN_SPAN_WARNING: &str = "per-chain decomposition is not possible from a single \
     input sequence; domain spans left unspecified";

/// Allocates `sequence_len` residues across domains proportionally to `weights`. Every domain
/// gets at least one residue and the rounding remainder goes to the last domain, so the span
/// lengths sum to exactly `sequence_len`. Returns `None` when the sequence is shorter than
/// the domain count.
fn allocate_spans(sequence_len: usize, weights: &[usize]) -> Option<Vec<(usize, usize)>> {
    let n = weights.len();
    if n == 0 || sequence_len < n {
        return None;
    }
    let total: usize = weights.iter().sum();
    let mut spans = Vec::with_capacity(n);
    let mut cursor = 0;
    for (i, &weight) in weights.iter().enumerate() {
        let remaining = n - i - 1;
        let size = if remaining == 0 {
            sequence_len - cursor
        } else {
            let ideal = sequence_len * weight / total;
            // Leave at least one residue for every remaining domain.
            ideal.max(1).min(sequence_len - cursor - remaining)
        };
        spans.push((cursor, cursor + size - 1));
        cursor += size;
    }
    Some(spans)
}

/// Maps a `(modality, sequence length, targets)` tuple to its fixed chain/domain layout.
///
/// Single-chain modalities get proportional domain spans summing exactly to the sequence
/// length. Multi-chain modalities fed a single flat sequence leave spans `None` (never
/// guessed) and carry a structural warning instead. Additional warnings cover format size
/// limits and paratope capacity.
pub fn build_blueprint(modality: Modality, sequence_len: usize, targets: &[String]) -> Blueprint {
    let mut blueprint = match modality {
        Modality::IgGLikeBispecific => igg_like_bispecific(),
        Modality::VhhBispecific => vhh_bispecific(sequence_len, targets),
        Modality::FabScFv => fab_scfv(),
        Modality::FcFusion => fc_fusion(sequence_len),
    };

    let (min_len, max_len) = format_size_limits(modality);
    if let Some(max) = max_len {
        if sequence_len > max {
            blueprint.warnings.push(format!(
                "construct length {sequence_len} exceeds the {modality} size threshold \
                 ({max}); synthesis may require additional fragments"
            ));
        }
    }
    if let Some(min) = min_len {
        if sequence_len < min {
            blueprint.warnings.push(format!(
                "construct length {sequence_len} is below the typical {modality} size ({min}); \
                 verify the design is complete"
            ));
        }
    }
    if let Some(capacity) = paratope_capacity(modality) {
        if targets.len() > capacity {
            blueprint.warnings.push(format!(
                "{} target(s) declared but the {modality} topology supports {capacity} \
                 paratope(s)",
                targets.len()
            ));
        }
    }
    blueprint
}

fn igg_like_bispecific() -> Blueprint {
    let chains = vec!["HC1", "LC1", "HC2", "LC2"];
    let domains = vec![
        Domain::new("HC1", "VH1", None),
        Domain::new("HC1", "CH1", None),
        Domain::new("LC1", "VL1", None),
        Domain::new("LC1", "CL", None),
        Domain::new("HC2", "VH2", None),
        Domain::new("HC2", "CH1", None),
        Domain::new("LC2", "VL2", None),
        Domain::new("LC2", "CL", None),
    ];
    Blueprint {
        chains: chains.into_iter().map(String::from).collect(),
        domains,
        warnings: vec![MULTI_CHAIN_SPAN_WARNING.to_string()],
    }
}

fn vhh_bispecific(sequence_len: usize, targets: &[String]) -> Blueprint {
    // VHH1-Linker-VHH2, with one more (Linker, VHHn) unit per target beyond two.
    let paratopes = targets.len().max(2);
    let mut names = Vec::with_capacity(2 * paratopes - 1);
    let mut weights = Vec::with_capacity(2 * paratopes - 1);
    for i in 1..=paratopes {
        if i > 1 {
            names.push("Linker".to_string());
            weights.push(LINKER_DOMAIN_WEIGHT);
        }
        names.push(format!("VHH{i}"));
        weights.push(VHH_DOMAIN_WEIGHT);
    }
    single_chain("ScVHH", &names, &weights, sequence_len)
}

fn fab_scfv() -> Blueprint {
    let domains = vec![
        Domain::new("Fab_HC", "VH", None),
        Domain::new("Fab_HC", "CH1", None),
        Domain::new("Fab_LC", "VL", None),
        Domain::new("Fab_LC", "CL", None),
        Domain::new("scFv", "VH", None),
        Domain::new("scFv", "Linker", None),
        Domain::new("scFv", "VL", None),
    ];
    Blueprint {
        chains: vec!["Fab_HC".into(), "Fab_LC".into(), "scFv".into()],
        domains,
        warnings: vec![MULTI_CHAIN_SPAN_WARNING.to_string()],
    }
}

fn fc_fusion(sequence_len: usize) -> Blueprint {
    let names = ["Binder", "Linker", "Fc"].map(String::from);
    let weights = [BINDER_DOMAIN_WEIGHT, LINKER_DOMAIN_WEIGHT, FC_DOMAIN_WEIGHT];
    single_chain("Fusion", &names, &weights, sequence_len)
}

fn single_chain(
    chain: &str,
    domain_names: &[String],
    weights: &[usize],
    sequence_len: usize,
) -> Blueprint {
    let mut warnings = Vec::new();
    let spans = allocate_spans(sequence_len, weights);
    if spans.is_none() {
        warnings.push(format!(
            "sequence too short ({sequence_len} residues) to allocate {} domain spans",
            domain_names.len()
        ));
    }
    let domains = domain_names
        .iter()
        .enumerate()
        .map(|(i, name)| Domain::new(chain, name, spans.as_ref().map(|s| s[i])))
        .collect();
    Blueprint {
        chains: vec![chain.to_string()],
        domains,
        warnings,
    }
}

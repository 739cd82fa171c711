use crate::core::models::candidate::UnsupportedModality;
use crate::core::models::constraints::ConstraintError;
use crate::core::normalize::NormalizeError;
use thiserror::Error;

/// Error taxonomy of the gate. All fatal validation errors are raised before any analysis
/// runs; non-fatal issues (unknown restriction-site names, ambiguous per-chain spans) degrade
/// into findings or warnings instead and never appear here.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum GateError {
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    #[error(transparent)]
    Constraints(#[from] ConstraintError),

    #[error(transparent)]
    Modality(#[from] UnsupportedModality),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::sequence::ResidueType;

    #[test]
    fn wrapped_errors_keep_their_messages() {
        let err: GateError = NormalizeError::InvalidAlphabet {
            residue: 'Z',
            position: 4,
            residue_type: ResidueType::Dna,
        }
        .into();
        assert!(err.to_string().contains("'Z'"));
        assert!(err.to_string().contains("position 4"));

        let err: GateError = UnsupportedModality("nanobody_trimer".into()).into();
        assert!(err.to_string().contains("nanobody_trimer"));
    }
}

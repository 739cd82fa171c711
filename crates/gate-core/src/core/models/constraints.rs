use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConstraintError {
    #[error("Invalid constraints: gc_min ({gc_min}) must not exceed gc_max ({gc_max})")]
    GcRangeInverted { gc_min: f64, gc_max: f64 },
    #[error("Invalid constraints: GC bound {value} outside [0, 1]")]
    GcBoundOutOfRange { value: f64 },
    #[error("Invalid constraints: max_homopolymer must be at least 1")]
    MaxHomopolymerTooSmall,
    #[error("Invalid constraints: max_fragment_length must be at least 1")]
    MaxFragmentLengthTooSmall,
}

/// User-declared manufacturing thresholds. Validated once, before any analysis runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManufacturingConstraints {
    pub max_fragment_length: usize,      // Maximum synthesizable fragment length (bp or aa)
    pub gc_min: f64,                     // Minimum acceptable GC fraction, [0, 1]
    pub gc_max: f64,                     // Maximum acceptable GC fraction, [0, 1]
    pub max_homopolymer: usize,          // Longest tolerated single-residue run
    pub forbidden_motifs: Vec<String>,   // Literal motifs that must not occur (case-insensitive)
    pub restriction_sites: Vec<String>,  // Enzyme names to scan for (e.g. "EcoRI")
    pub vendor_profile: String,          // Free-form vendor profile label
}

impl Default for ManufacturingConstraints {
    fn default() -> Self {
        Self {
            max_fragment_length: 500,
            gc_min: 0.3,
            gc_max: 0.7,
            max_homopolymer: 6,
            forbidden_motifs: Vec::new(),
            restriction_sites: Vec::new(),
            vendor_profile: "generic".to_string(),
        }
    }
}

impl ManufacturingConstraints {
    pub fn validate(&self) -> Result<(), ConstraintError> {
        for value in [self.gc_min, self.gc_max] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConstraintError::GcBoundOutOfRange { value });
            }
        }
        if self.gc_min > self.gc_max {
            return Err(ConstraintError::GcRangeInverted {
                gc_min: self.gc_min,
                gc_max: self.gc_max,
            });
        }
        if self.max_homopolymer < 1 {
            return Err(ConstraintError::MaxHomopolymerTooSmall);
        }
        if self.max_fragment_length < 1 {
            return Err(ConstraintError::MaxFragmentLengthTooSmall);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(ManufacturingConstraints::default().validate().is_ok());
    }

    #[test]
    fn inverted_gc_range_is_rejected() {
        let constraints = ManufacturingConstraints {
            gc_min: 0.8,
            gc_max: 0.2,
            ..Default::default()
        };
        assert!(matches!(
            constraints.validate(),
            Err(ConstraintError::GcRangeInverted { .. })
        ));
    }

    #[test]
    fn gc_bound_outside_unit_interval_is_rejected() {
        let constraints = ManufacturingConstraints {
            gc_max: 1.2,
            ..Default::default()
        };
        assert!(matches!(
            constraints.validate(),
            Err(ConstraintError::GcBoundOutOfRange { .. })
        ));
    }

    #[test]
    fn zero_homopolymer_limit_is_rejected() {
        let constraints = ManufacturingConstraints {
            max_homopolymer: 0,
            ..Default::default()
        };
        assert_eq!(
            constraints.validate(),
            Err(ConstraintError::MaxHomopolymerTooSmall)
        );
    }

    #[test]
    fn partial_deserialization_fills_defaults() {
        let constraints: ManufacturingConstraints =
            serde_json::from_str(r#"{"max_homopolymer": 4}"#).unwrap();
        assert_eq!(constraints.max_homopolymer, 4);
        assert_eq!(constraints.gc_min, 0.3);
        assert_eq!(constraints.vendor_profile, "generic");
    }
}

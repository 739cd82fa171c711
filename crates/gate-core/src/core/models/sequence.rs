use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Residue alphabet of a normalized sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResidueType {
    Protein,
    Dna,
    Rna,
}

impl ResidueType {
    /// Whether this alphabet describes a nucleic acid.
    pub fn is_nucleic(self) -> bool {
        matches!(self, ResidueType::Dna | ResidueType::Rna)
    }
}

#[derive(Debug, Error)]
#[error("Invalid residue type string")]
pub struct ParseResidueTypeError;

impl FromStr for ResidueType {
    type Err = ParseResidueTypeError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "protein" => Ok(ResidueType::Protein),
            "dna" => Ok(ResidueType::Dna),
            "rna" => Ok(ResidueType::Rna),
            _ => Err(ParseResidueTypeError),
        }
    }
}

impl fmt::Display for ResidueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ResidueType::Protein => "protein",
                ResidueType::Dna => "dna",
                ResidueType::Rna => "rna",
            }
        )
    }
}

/// A canonical sequence record: uppercased, whitespace-stripped, and validated against the
/// IUPAC alphabet for its declared residue type. Created once per request by the normalizer
/// and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedSequence {
    id: String,             // FASTA header when present, caller-supplied identifier otherwise
    residues: String,       // Uppercase residue string, guaranteed non-empty
    residue_type: ResidueType,
}

impl NormalizedSequence {
    /// Only the normalizer builds these; the alphabet invariant is checked there.
    pub(crate) fn new(id: String, residues: String, residue_type: ResidueType) -> Self {
        debug_assert!(!residues.is_empty());
        Self {
            id,
            residues,
            residue_type,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn residues(&self) -> &str {
        &self.residues
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.residues.as_bytes()
    }

    pub fn residue_type(&self) -> ResidueType {
        self.residue_type
    }

    /// Residue count; always greater than zero.
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

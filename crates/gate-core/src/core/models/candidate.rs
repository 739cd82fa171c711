use super::sequence::ResidueType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Structural format of a construct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Modality {
    #[serde(rename = "IgG_like_bispecific")]
    IgGLikeBispecific,
    #[serde(rename = "VHH_bispecific")]
    VhhBispecific,
    #[serde(rename = "Fab_scFv")]
    FabScFv,
    #[serde(rename = "Fc_fusion")]
    FcFusion,
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
#[error("Unsupported modality: '{0}'")]
pub struct UnsupportedModality(pub String);

impl FromStr for Modality {
    type Err = UnsupportedModality;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "IgG_like_bispecific" => Ok(Modality::IgGLikeBispecific),
            "VHH_bispecific" => Ok(Modality::VhhBispecific),
            "Fab_scFv" => Ok(Modality::FabScFv),
            "Fc_fusion" => Ok(Modality::FcFusion),
            _ => Err(UnsupportedModality(s.to_string())),
        }
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Modality::IgGLikeBispecific => "IgG_like_bispecific",
                Modality::VhhBispecific => "VHH_bispecific",
                Modality::FabScFv => "Fab_scFv",
                Modality::FcFusion => "Fc_fusion",
            }
        )
    }
}

/// Production system a construct is destined for; drives the expression-risk liability table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpressionSystem {
    #[serde(rename = "mammalian")]
    Mammalian,
    #[serde(rename = "yeast")]
    Yeast,
    #[serde(rename = "ecoli")]
    EColi,
    #[serde(rename = "cell_free")]
    CellFree,
}

impl fmt::Display for ExpressionSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                ExpressionSystem::Mammalian => "mammalian",
                ExpressionSystem::Yeast => "yeast",
                ExpressionSystem::EColi => "ecoli",
                ExpressionSystem::CellFree => "cell_free",
            }
        )
    }
}

/// Declared type of the input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequenceType {
    #[serde(rename = "protein")]
    Protein,
    #[serde(rename = "dna_cds")]
    DnaCds,
}

impl SequenceType {
    /// Residue alphabet the normalizer validates against.
    pub fn residue_type(self) -> ResidueType {
        match self {
            SequenceType::Protein => ResidueType::Protein,
            SequenceType::DnaCds => ResidueType::Dna,
        }
    }
}

impl fmt::Display for SequenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SequenceType::Protein => "protein",
                SequenceType::DnaCds => "dna_cds",
            }
        )
    }
}

/// Input specification for a construct candidate. Schema validation (field lengths, required
/// keys) is the caller's concern; this struct carries already-type-checked values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateSpec {
    pub project_name: String,
    pub modality: Modality,
    #[serde(default)]
    pub targets: Vec<String>,            // Target antigens, free-form strings
    pub expression_system: ExpressionSystem,
    pub sequence_type: SequenceType,
    pub sequence: String,                // Bare sequence or single-record FASTA
    #[serde(default)]
    pub notes: Option<String>,
}

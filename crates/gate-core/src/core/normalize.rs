//! Input normalization: parses raw or single-record FASTA input into a canonical
//! [`NormalizedSequence`] and validates it against the IUPAC alphabet for its declared type.

use crate::core::models::sequence::{NormalizedSequence, ResidueType};
use phf::{Set, phf_set};
use thiserror::Error;

// IUPAC nucleotide codes including ambiguity characters.
static DNA_ALPHABET: Set<char> = phf_set! {
    'A', 'C', 'G', 'T', 'R', 'Y', 'S', 'W', 'K', 'M', 'B', 'D', 'H', 'V', 'N',
};

static RNA_ALPHABET: Set<char> = phf_set! {
    'A', 'C', 'G', 'U', 'R', 'Y', 'S', 'W', 'K', 'M', 'B', 'D', 'H', 'V', 'N',
};

// IUPAC amino-acid codes plus extended letters (U/O), ambiguity codes (B/Z/J/X) and stop (*).
static PROTEIN_ALPHABET: Set<char> = phf_set! {
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'P', 'Q', 'R',
    'S', 'T', 'V', 'W', 'Y', 'U', 'O', 'B', 'Z', 'J', 'X', '*',
};

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum NormalizeError {
    #[error(
        "Invalid residue '{residue}' at position {position} for declared type {residue_type}"
    )]
    InvalidAlphabet {
        residue: char,
        position: usize,
        residue_type: ResidueType,
    },
    #[error("Sequence is empty after normalization")]
    EmptySequence,
}

fn alphabet_for(residue_type: ResidueType) -> &'static Set<char> {
    match residue_type {
        ResidueType::Protein => &PROTEIN_ALPHABET,
        ResidueType::Dna => &DNA_ALPHABET,
        ResidueType::Rna => &RNA_ALPHABET,
    }
}

/// Parses a bare sequence string or single-record FASTA text into a canonical record.
///
/// FASTA headers (`>` lines) are recognized on the first line only in spirit: the first header
/// becomes the record id, sequence lines are concatenated with all whitespace stripped, and
/// parsing stops at a second header. Residues are uppercased before validation. `fallback_id`
/// is used when the input carries no header.
pub fn normalize(
    raw: &str,
    declared_type: ResidueType,
    fallback_id: &str,
) -> Result<NormalizedSequence, NormalizeError> {
    let mut header: Option<&str> = None;
    let mut residues = String::with_capacity(raw.len());

    for line in raw.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(name) = line.strip_prefix('>') {
            if header.is_none() && residues.is_empty() {
                header = Some(name.trim());
            } else {
                // Only the first record of a multi-record input is considered.
                break;
            }
        } else {
            for ch in line.chars() {
                if ch.is_whitespace() {
                    continue;
                }
                residues.push(ch.to_ascii_uppercase());
            }
        }
    }

    if residues.is_empty() {
        return Err(NormalizeError::EmptySequence);
    }

    let alphabet = alphabet_for(declared_type);
    for (position, residue) in residues.chars().enumerate() {
        if !alphabet.contains(&residue) {
            return Err(NormalizeError::InvalidAlphabet {
                residue,
                position,
                residue_type: declared_type,
            });
        }
    }

    let id = header
        .filter(|h| !h.is_empty())
        .unwrap_or(fallback_id)
        .to_string();
    Ok(NormalizedSequence::new(id, residues, declared_type))
}

/// Renders the byte-exact normalized FASTA representation: `>{project_name}\n{sequence}\n`.
/// This is the one byte-for-byte contract across the rendering boundary.
pub fn normalized_fasta(project_name: &str, sequence: &NormalizedSequence) -> String {
    format!(">{}\n{}\n", project_name, sequence.residues())
}

use super::finding::{Finding, FindingKind, Severity};
use serde::Serialize;
use std::cmp::Reverse;

/// The four independent risk dimensions, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SubScores {
    pub sequence_synth: u8,
    pub assembly_risk: u8,
    pub developability: u8,
    pub expression_risk: u8,
}

/// Origin of a flag: a sequence-level finding kind, or a construct-level blueprint warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagKind {
    GcWindow,
    Homopolymer,
    Repeat,
    Palindrome,
    Motif,
    RestrictionSite,
    Construct,
}

impl std::fmt::Display for FlagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FlagKind::GcWindow => "gc_window",
                FlagKind::Homopolymer => "homopolymer",
                FlagKind::Repeat => "repeat",
                FlagKind::Palindrome => "palindrome",
                FlagKind::Motif => "motif",
                FlagKind::RestrictionSite => "restriction_site",
                FlagKind::Construct => "construct",
            }
        )
    }
}

impl From<FindingKind> for FlagKind {
    fn from(kind: FindingKind) -> Self {
        match kind {
            FindingKind::GcWindow => FlagKind::GcWindow,
            FindingKind::Homopolymer => FlagKind::Homopolymer,
            FindingKind::Repeat => FlagKind::Repeat,
            FindingKind::Palindrome => FlagKind::Palindrome,
            FindingKind::Motif => FlagKind::Motif,
            FindingKind::RestrictionSite => FlagKind::RestrictionSite,
        }
    }
}

/// A finding or blueprint warning surfaced in the final result for user review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Flag {
    pub kind: FlagKind,
    pub severity: Severity,
    pub span: Option<(usize, usize)>,    // None for construct-level flags
    pub detail: String,
}

impl Flag {
    pub fn from_finding(finding: &Finding) -> Self {
        Self {
            kind: finding.kind.into(),
            severity: finding.severity,
            span: Some((finding.start, finding.end)),
            detail: finding.detail.clone(),
        }
    }

    pub fn construct(detail: impl Into<String>) -> Self {
        Self {
            kind: FlagKind::Construct,
            severity: Severity::Warning,
            span: None,
            detail: detail.into(),
        }
    }

    /// Deduplication identity: two flags with the same kind, span, and detail are one issue.
    pub(crate) fn dedup_key(&self) -> (FlagKind, Option<(usize, usize)>, &str) {
        (self.kind, self.span, &self.detail)
    }

    /// Presentation order: severity descending, then start ascending (spanless flags last),
    /// then kind and detail for a total, deterministic order.
    pub(crate) fn presentation_order(
        &self,
    ) -> (Reverse<Severity>, usize, usize, FlagKind, &str) {
        let (start, end) = self.span.unwrap_or((usize::MAX, usize::MAX));
        (Reverse(self.severity), start, end, self.kind, &self.detail)
    }
}

/// Result of one scoring call. Created fresh per call; the engine holds no state between
/// invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GateResult {
    pub overall_score: u8,
    pub sub_scores: SubScores,
    pub flags: Vec<Flag>,
    pub suggestions: Vec<String>,
}

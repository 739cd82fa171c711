use serde::Serialize;
use std::fmt;

/// Kind of observation a sequence scan can produce.
///
/// Developability liabilities (glycosylation sequons, deamidation pairs, oxidation-prone
/// methionines, dibasic cleavage sites) are reported as [`FindingKind::Motif`] findings with a
/// descriptive detail string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FindingKind {
    GcWindow,
    Homopolymer,
    Repeat,
    Palindrome,
    Motif,
    RestrictionSite,
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FindingKind::GcWindow => "gc_window",
                FindingKind::Homopolymer => "homopolymer",
                FindingKind::Repeat => "repeat",
                FindingKind::Palindrome => "palindrome",
                FindingKind::Motif => "motif",
                FindingKind::RestrictionSite => "restriction_site",
            }
        )
    }
}

/// Severity ladder; the derived ordering (`Info < Warning < Error`) drives flag sorting and
/// the penalty table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Severity::Info => "info",
                Severity::Warning => "warning",
                Severity::Error => "error",
            }
        )
    }
}

/// A localized observation on a normalized sequence. Spans are inclusive, 0-based, and always
/// within sequence bounds (`start <= end < sequence length`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub severity: Severity,
    pub start: usize,
    pub end: usize,
    pub detail: String,
}

impl Finding {
    pub fn new(
        kind: FindingKind,
        severity: Severity,
        start: usize,
        end: usize,
        detail: impl Into<String>,
    ) -> Self {
        debug_assert!(start <= end);
        Self {
            kind,
            severity,
            start,
            end,
            detail: detail.into(),
        }
    }

    /// Canonical scan order: by start ascending, ties broken by kind, then end.
    pub(crate) fn scan_order(&self) -> (usize, FindingKind, usize) {
        (self.start, self.kind, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_ordering_ranks_error_highest() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Info);
    }

    #[test]
    fn scan_order_sorts_by_start_then_kind_then_end() {
        let a = Finding::new(FindingKind::Repeat, Severity::Info, 3, 8, "a");
        let b = Finding::new(FindingKind::GcWindow, Severity::Warning, 3, 52, "b");
        let c = Finding::new(FindingKind::Homopolymer, Severity::Error, 0, 9, "c");

        let mut findings = vec![a.clone(), b.clone(), c.clone()];
        findings.sort_by(|x, y| x.scan_order().cmp(&y.scan_order()));
        assert_eq!(findings, vec![c, b, a]);
    }
}

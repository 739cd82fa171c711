//! Remediation suggestions derived from the flag set.
//!
//! The mapping is a fixed ordered rule table keyed on flag kind and severity, so the
//! suggestion list is a pure function of which (kind, severity) combinations survive
//! deduplication. No free-text generation, no scoring feedback loop.

use crate::core::models::finding::Severity;
use crate::core::models::result::{Flag, FlagKind};

struct SuggestionRule {
    kind: FlagKind,
    severities: &'static [Severity],
    text: &'static str,
}

const RULES: &[SuggestionRule] = &[
    SuggestionRule {
        kind: FlagKind::GcWindow,
        severities: &[Severity::Warning, Severity::Error],
        text: "Optimize GC content in the flagged windows (target around 50% for synthesis)",
    },
    SuggestionRule {
        kind: FlagKind::Homopolymer,
        severities: &[Severity::Warning, Severity::Error],
        text: "Reduce long homopolymer stretches (consider alternative codons or sequence \
               variants)",
    },
    SuggestionRule {
        kind: FlagKind::Repeat,
        severities: &[Severity::Info, Severity::Warning, Severity::Error],
        text: "Review and reduce repetitive k-mers to improve assembly fidelity",
    },
    SuggestionRule {
        kind: FlagKind::Palindrome,
        severities: &[Severity::Warning, Severity::Error],
        text: "Minimize self-complementary windows to reduce secondary-structure formation",
    },
    SuggestionRule {
        kind: FlagKind::Motif,
        severities: &[Severity::Error],
        text: "Recode or remove forbidden motifs before ordering synthesis",
    },
    SuggestionRule {
        kind: FlagKind::Motif,
        severities: &[Severity::Warning],
        text: "Review N-glycosylation sequons; consider mutations if unintended",
    },
    SuggestionRule {
        kind: FlagKind::Motif,
        severities: &[Severity::Info],
        text: "Audit low-severity liability motifs (deamidation, oxidation, dibasic sites) \
               during developability review",
    },
    SuggestionRule {
        kind: FlagKind::RestrictionSite,
        severities: &[Severity::Warning, Severity::Error],
        text: "Remove or recode internal restriction sites that conflict with the cloning \
               strategy",
    },
    SuggestionRule {
        kind: FlagKind::Construct,
        severities: &[Severity::Warning, Severity::Error],
        text: "Revisit the construct format; blueprint warnings indicate size or topology \
               limits",
    },
];

const POSITIVE_SUGGESTION: &str =
    "Construct appears well-optimized; proceed with experimental validation";

/// Builds the suggestion list for a deduplicated, ordered flag set. When no flag reaches
/// warning severity the list is exactly the single positive suggestion, even if info-level
/// flags are present.
pub(crate) fn for_flags(flags: &[Flag]) -> Vec<String> {
    if !flags.iter().any(|f| f.severity >= Severity::Warning) {
        return vec![POSITIVE_SUGGESTION.to_string()];
    }
    RULES
        .iter()
        .filter(|rule| {
            flags
                .iter()
                .any(|f| f.kind == rule.kind && rule.severities.contains(&f.severity))
        })
        .map(|rule| rule.text.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::finding::{Finding, FindingKind};

    fn flag(kind: FindingKind, severity: Severity) -> Flag {
        Flag::from_finding(&Finding::new(kind, severity, 0, 5, "detail"))
    }

    #[test]
    fn no_flags_yields_the_positive_suggestion_alone() {
        let suggestions = for_flags(&[]);
        assert_eq!(suggestions, vec![POSITIVE_SUGGESTION.to_string()]);
    }

    #[test]
    fn info_only_flags_still_yield_the_positive_suggestion() {
        let flags = vec![flag(FindingKind::Repeat, Severity::Info)];
        assert_eq!(for_flags(&flags), vec![POSITIVE_SUGGESTION.to_string()]);
    }

    #[test]
    fn warning_flags_select_their_rule_text() {
        let flags = vec![flag(FindingKind::Homopolymer, Severity::Warning)];
        let suggestions = for_flags(&flags);
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].contains("homopolymer"));
    }

    #[test]
    fn motif_rules_distinguish_severity() {
        let forbidden = vec![flag(FindingKind::Motif, Severity::Error)];
        let sequon = vec![flag(FindingKind::Motif, Severity::Warning)];
        assert!(for_flags(&forbidden)[0].contains("forbidden motifs"));
        assert!(for_flags(&sequon)[0].contains("N-glycosylation"));
    }

    #[test]
    fn suggestion_order_follows_the_rule_table_not_flag_order() {
        let flags = vec![
            flag(FindingKind::Palindrome, Severity::Warning),
            flag(FindingKind::GcWindow, Severity::Warning),
        ];
        let suggestions = for_flags(&flags);
        assert_eq!(suggestions.len(), 2);
        assert!(suggestions[0].contains("GC content"));
        assert!(suggestions[1].contains("self-complementary"));
    }

    #[test]
    fn construct_warnings_map_to_format_advice() {
        let flags = vec![Flag::construct("oversized for format")];
        let suggestions = for_flags(&flags);
        assert_eq!(suggestions.len(), 1);
        assert!(suggestions[0].contains("construct format"));
    }
}

use serde::Serialize;

/// A functional domain within a construct blueprint. The span is `None` when the modality does
/// not localize the domain to sequence offsets (multi-chain formats fed a single flat
/// sequence); spans are never guessed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Domain {
    pub chain: String,                   // Chain identifier (e.g. "HC1", "ScVHH")
    pub name: String,                    // Domain name (e.g. "VH1", "Linker")
    pub span: Option<(usize, usize)>,    // Inclusive 0-based (start, end) when localizable
}

impl Domain {
    pub fn new(chain: &str, name: &str, span: Option<(usize, usize)>) -> Self {
        Self {
            chain: chain.to_string(),
            name: name.to_string(),
            span,
        }
    }

    /// Residue count covered by this domain, when localized.
    pub fn span_len(&self) -> Option<usize> {
        self.span.map(|(start, end)| end - start + 1)
    }
}

/// Abstract chain/domain decomposition of a construct, independent of scoring. Immutable once
/// returned by the mapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Blueprint {
    pub chains: Vec<String>,
    pub domains: Vec<Domain>,
    pub warnings: Vec<String>,
}

impl Blueprint {
    pub fn domains_of(&self, chain: &str) -> impl Iterator<Item = &Domain> {
        self.domains.iter().filter(move |d| d.chain == chain)
    }

    /// Total domain count across all chains; the assembly-risk fragment heuristic
    /// (chain count x average domains per chain) reduces to exactly this number.
    pub fn total_domains(&self) -> usize {
        self.domains.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn span_len_is_inclusive() {
        let domain = Domain::new("ScVHH", "VHH1", Some((0, 119)));
        assert_eq!(domain.span_len(), Some(120));
        let unlocalized = Domain::new("HC1", "VH1", None);
        assert_eq!(unlocalized.span_len(), None);
    }

    #[test]
    fn domains_of_filters_by_chain() {
        let blueprint = Blueprint {
            chains: vec!["A".into(), "B".into()],
            domains: vec![
                Domain::new("A", "VH", None),
                Domain::new("B", "VL", None),
                Domain::new("A", "CH1", None),
            ],
            warnings: vec![],
        };
        assert_eq!(blueprint.domains_of("A").count(), 2);
        assert_eq!(blueprint.total_domains(), 3);
    }
}

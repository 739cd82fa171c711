use phf::{Map, phf_map};
use std::collections::BTreeMap;

// Recognition sequences of common cloning enzymes. Names are looked up verbatim.
static BUILTIN_SITES: Map<&'static str, &'static str> = phf_map! {
    "EcoRI" => "GAATTC",
    "BamHI" => "GGATCC",
    "HindIII" => "AAGCTT",
    "XbaI" => "TCTAGA",
    "NotI" => "GCGGCCGC",
    "XhoI" => "CTCGAG",
    "NcoI" => "CCATGG",
    "NdeI" => "CATATG",
    "SalI" => "GTCGAC",
    "PstI" => "CTGCAG",
    "SpeI" => "ACTAGT",
    "KpnI" => "GGTACC",
    "SacI" => "GAGCTC",
    "BglII" => "AGATCT",
    "SmaI" => "CCCGGG",
    "AvrII" => "CCTAGG",
};

/// Name -> recognition-sequence lookup for restriction-site scanning. The built-in table
/// covers common cloning enzymes; callers may layer additional entries on top (vendor tables
/// loaded externally). Unknown names are the caller's signal to degrade, not to fail.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RestrictionSiteTable {
    extra: BTreeMap<String, String>,     // Overrides and additions, checked before built-ins
}

impl RestrictionSiteTable {
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            extra: entries
                .into_iter()
                .map(|(name, site)| (name.into(), site.into().to_ascii_uppercase()))
                .collect(),
        }
    }

    pub fn recognition(&self, name: &str) -> Option<&str> {
        self.extra
            .get(name)
            .map(String::as_str)
            .or_else(|| BUILTIN_SITES.get(name).copied())
    }
}

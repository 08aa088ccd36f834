//! Reference catalog of known coverage products.

pub mod data;
pub mod entry;
pub mod rules;

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::debug;

pub use entry::{Benefit, CatalogEntry, ExpansionItem, Tier};
pub use rules::FallbackRule;

/// Minimum similarity for suggesting a catalog key on an unmatched name.
pub const HINT_SIMILARITY: f64 = 0.5;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(data::ENTRIES));

/// A resolved catalog entry together with the key it is stored under.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolved {
    pub key: &'static str,
    pub entry: &'static CatalogEntry,
}

/// Immutable lookup table with ordered fallback rules.
#[derive(Debug)]
pub struct Catalog {
    entries: &'static [(&'static str, CatalogEntry)],
    index: HashMap<&'static str, usize>,
}

impl Catalog {
    pub fn new(entries: &'static [(&'static str, CatalogEntry)]) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(idx, (key, _))| (*key, idx))
            .collect();
        Self { entries, index }
    }

    /// The catalog for the supported proposal template, shared process-wide.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn get(&self, key: &str) -> Option<Resolved> {
        self.index.get(key).map(|&idx| {
            let entries = self.entries;
            let (key, entry) = &entries[idx];
            Resolved { key: *key, entry }
        })
    }

    /// Resolve an extracted coverage name: exact key first, then the first
    /// matching fallback rule.
    pub fn resolve(&self, name: &str) -> Option<Resolved> {
        if let Some(found) = self.get(name) {
            return Some(found);
        }
        let rule = rules::first_match(name)?;
        let resolved = rule.target.and_then(|key| self.get(key));
        debug!(item = name, rule = rule.label, matched = resolved.is_some(), "fallback rule");
        resolved
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(key, _)| *key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Catalog key most similar to `name`, if any reaches [`HINT_SIMILARITY`].
    pub fn closest_key(&self, name: &str) -> Option<&'static str> {
        self.keys()
            .map(|key| (key, strsim::normalized_levenshtein(name, key)))
            .filter(|(_, score)| *score >= HINT_SIMILARITY)
            .max_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(key, _)| key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_key_lookup() {
        let catalog = Catalog::builtin();
        let resolved = catalog.resolve(data::HEAVY_ION).unwrap();
        assert_eq!(resolved.key, data::HEAVY_ION);
        assert_eq!(
            *resolved.entry,
            CatalogEntry::PassThrough {
                display_name: "(최초1회) 중입자방사선치료비"
            }
        );
        assert_eq!(catalog.len(), 12);
    }

    #[test]
    fn fallback_resolves_variant_spellings() {
        let catalog = Catalog::builtin();
        let key = |name| catalog.resolve(name).map(|r| r.key);
        assert_eq!(key("암 통합치료비(기본형) 갱신형"), Some(data::BASIC));
        assert_eq!(key("(갱신형)표적항암약물허가치료비Ⅱ"), Some(data::TARGETED));
        assert_eq!(key("26종항암방사선및약물치료비(최대26회)"), Some(data::TWENTY_SIX));
    }

    #[test]
    fn unsupported_products_stay_unresolved() {
        let catalog = Catalog::builtin();
        assert!(catalog.resolve("암 통합치료비(주요치료)(비급여)").is_none());
        assert!(catalog.resolve("질병사망").is_none());
    }

    #[test]
    fn closest_key_needs_enough_similarity() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.closest_key("항암중입자방사선치료금"), Some(data::HEAVY_ION));
        assert_eq!(catalog.closest_key("상해사망"), None);
    }
}

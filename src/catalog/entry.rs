use serde::Serialize;

use crate::core::model::MatchKind;

/// One benefit paid out under a tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Benefit {
    pub name: &'static str,
    pub amount: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<&'static str>,
    /// Underlying benefits that make up `amount`.
    pub sub: &'static [&'static str],
    pub hidden_in_detail: bool,
}

impl Benefit {
    pub const fn new(name: &'static str, amount: &'static str) -> Self {
        Self {
            name,
            amount,
            max_amount: None,
            sub: &[],
            hidden_in_detail: false,
        }
    }

    pub const fn with_sub(mut self, sub: &'static [&'static str]) -> Self {
        self.sub = sub;
        self
    }

    pub const fn capped(mut self, max_amount: &'static str) -> Self {
        self.max_amount = Some(max_amount);
        self
    }

    pub const fn hidden(mut self) -> Self {
        self.hidden_in_detail = true;
        self
    }
}

/// Benefits for a minimum insured amount, keyed in man-won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tier {
    pub min_amount: u64,
    pub benefits: &'static [Benefit],
}

impl Tier {
    pub fn visible_benefits(&self) -> impl Iterator<Item = &'static Benefit> {
        self.benefits.iter().filter(|b| !b.hidden_in_detail)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExpansionItem {
    pub name: &'static str,
    /// Group to file this item under instead of deriving one from `name`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_name: Option<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CatalogEntry {
    Tiered {
        tiers: &'static [Tier],
    },
    PassThrough {
        display_name: &'static str,
    },
    TwentySixCategory {
        detail_name: &'static str,
        summary_items: &'static [ExpansionItem],
    },
}

/// Fallback tiers tried, in order, when the amount has no exact tier.
const APPROXIMATION_BANDS: &[(u64, [u64; 2])] = &[
    (6_000, [8_000, 10_000]),
    (3_000, [5_000, 4_000]),
    (1_000, [2_000, 1_000]),
];

const LAST_RESORT_TIER: u64 = 10_000;

impl CatalogEntry {
    pub fn kind(&self) -> MatchKind {
        match self {
            CatalogEntry::Tiered { .. } => MatchKind::Tiered,
            CatalogEntry::PassThrough { .. } => MatchKind::PassThrough,
            CatalogEntry::TwentySixCategory { .. } => MatchKind::TwentySixCategory,
        }
    }

    /// Tier for an insured amount in man-won.
    ///
    /// An exact tier wins. Otherwise the first band the amount exceeds picks
    /// its candidates in order, and the 10,000 tier is the last resort.
    pub fn select_tier(&self, amount: u64) -> Option<&'static Tier> {
        let CatalogEntry::Tiered { tiers } = *self else {
            return None;
        };
        let find = |key: u64| tiers.iter().find(|tier| tier.min_amount == key);

        if let Some(tier) = find(amount) {
            return Some(tier);
        }
        APPROXIMATION_BANDS
            .iter()
            .find(|(threshold, _)| amount > *threshold)
            .and_then(|(_, candidates)| candidates.iter().find_map(|key| find(*key)))
            .or_else(|| find(LAST_RESORT_TIER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BENEFITS: &[Benefit] = &[Benefit::new("수술비", "500만")];
    const SPARSE: CatalogEntry = CatalogEntry::Tiered {
        tiers: &[
            Tier { min_amount: 10_000, benefits: BENEFITS },
            Tier { min_amount: 5_000, benefits: BENEFITS },
            Tier { min_amount: 2_000, benefits: BENEFITS },
        ],
    };

    fn selected(entry: &CatalogEntry, amount: u64) -> Option<u64> {
        entry.select_tier(amount).map(|tier| tier.min_amount)
    }

    #[test]
    fn exact_tier_wins() {
        assert_eq!(selected(&SPARSE, 5_000), Some(5_000));
        assert_eq!(selected(&SPARSE, 2_000), Some(2_000));
    }

    #[test]
    fn bands_pick_nearest_defined_tier() {
        assert_eq!(selected(&SPARSE, 7_000), Some(10_000));
        assert_eq!(selected(&SPARSE, 4_500), Some(5_000));
        assert_eq!(selected(&SPARSE, 1_500), Some(2_000));
    }

    #[test]
    fn falls_back_to_top_tier() {
        assert_eq!(selected(&SPARSE, 1_000), Some(10_000));
        assert_eq!(selected(&SPARSE, 0), Some(10_000));
    }

    #[test]
    fn no_tier_without_top_tier() {
        let entry = CatalogEntry::Tiered {
            tiers: &[Tier { min_amount: 3_000, benefits: BENEFITS }],
        };
        assert_eq!(selected(&entry, 500), None);
        let pass = CatalogEntry::PassThrough { display_name: "x" };
        assert_eq!(selected(&pass, 3_000), None);
    }

    #[test]
    fn hidden_benefits_are_not_visible() {
        const MIXED: &[Benefit] = &[
            Benefit::new("표적", "1,000만").capped("3,000만"),
            Benefit::new("면역", "1,000만").capped("3,000만").hidden(),
        ];
        let tier = Tier { min_amount: 4_000, benefits: MIXED };
        let names: Vec<&str> = tier.visible_benefits().map(|b| b.name).collect();
        assert_eq!(names, vec!["표적"]);
    }
}

use std::collections::HashMap;

use crate::catalog::{Catalog, CatalogEntry};
use crate::core::amount::{format_amount, parse_amount};
use crate::core::model::{
    AnalysisSummary, ClassifiedCoverageItem, CoverageStatus, GroupMember, SummaryGroup,
};

/// Keyword stems and the group they file a benefit under, by priority.
/// Every stem of an entry must occur in the name.
const GROUP_KEYWORDS: &[(&[&str], &str)] = &[
    (&["표적"], "표적항암약물치료비"),
    (&["면역"], "면역항암약물치료비"),
    (&["양성자"], "양성자방사선치료비"),
    (&["중입자"], "중입자방사선치료비"),
    (&["다빈치"], "다빈치로봇수술비"),
    (&["로봇"], "다빈치로봇수술비"),
    (&["세기조절"], "세기조절방사선치료비"),
    (&["수술", "암"], "암수술비"),
    (&["약물"], "항암약물치료비"),
    (&["방사선"], "항암방사선치료비"),
];

/// Group a benefit name belongs to; names without a known stem are their own group.
pub fn canonical_group_key(name: &str) -> &str {
    GROUP_KEYWORDS
        .iter()
        .find(|(stems, _)| stems.iter().all(|stem| name.contains(stem)))
        .map(|(_, key)| *key)
        .unwrap_or(name)
}

/// One amount credited to a summary group.
#[derive(Debug, Clone, Copy)]
pub struct Attribution<'a> {
    /// Catalog name of the benefit.
    pub name: &'a str,
    pub amount: &'a str,
    pub max_amount: Option<&'a str>,
    /// Explicit group, bypassing keyword derivation.
    pub group: Option<&'a str>,
    /// Name of the proposal row the amount came from.
    pub source: Option<&'a str>,
}

/// Folds attributions into groups, keeping first-seen group order.
#[derive(Debug, Default)]
pub struct SummaryBuilder {
    groups: Vec<SummaryGroup>,
    index: HashMap<String, usize>,
}

impl SummaryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, attribution: Attribution<'_>) {
        let key = attribution
            .group
            .unwrap_or_else(|| canonical_group_key(attribution.name));

        let idx = match self.index.get(key) {
            Some(&idx) => idx,
            None => {
                self.groups.push(SummaryGroup {
                    name: key.to_string(),
                    total_min: 0,
                    total_max: 0,
                    count: 0,
                    items: Vec::new(),
                });
                self.index.insert(key.to_string(), self.groups.len() - 1);
                self.groups.len() - 1
            }
        };

        let min = parse_amount(attribution.amount);
        let max = attribution.max_amount.map(parse_amount).unwrap_or(min);

        let group = &mut self.groups[idx];
        group.total_min = group.total_min.saturating_add(min);
        group.total_max = group.total_max.saturating_add(max);
        group.count += 1;
        group.items.push(GroupMember {
            name: attribution.source.unwrap_or(attribution.name).to_string(),
            amount: attribution.amount.to_string(),
        });
    }

    pub fn finish(self) -> Vec<SummaryGroup> {
        self.groups
    }
}

/// Build the document summary from classified items.
///
/// Each item is resolved against the catalog again and its benefits credited
/// to groups. Items without a match only count towards the warning total.
pub fn aggregate(items: &[ClassifiedCoverageItem], catalog: &Catalog) -> AnalysisSummary {
    let mut builder = SummaryBuilder::new();
    let mut bundle_credited = false;

    for item in items {
        let Some(resolved) = catalog.resolve(&item.record.name) else {
            continue;
        };
        let source = Some(item.record.name.as_str());

        match *resolved.entry {
            CatalogEntry::Tiered { .. } => {
                let Some(tier) = resolved.entry.select_tier(parse_amount(&item.record.amount))
                else {
                    continue;
                };
                for benefit in tier.benefits {
                    builder.add(Attribution {
                        name: benefit.name,
                        amount: benefit.amount,
                        max_amount: benefit.max_amount,
                        group: None,
                        source,
                    });
                }
            }
            CatalogEntry::PassThrough { display_name } => builder.add(Attribution {
                name: display_name,
                amount: &item.record.amount,
                max_amount: None,
                group: None,
                source,
            }),
            CatalogEntry::TwentySixCategory { summary_items, .. } => {
                if bundle_credited {
                    continue;
                }
                bundle_credited = true;
                for expansion in summary_items {
                    builder.add(Attribution {
                        name: expansion.name,
                        amount: &item.record.amount,
                        max_amount: None,
                        group: expansion.target_name,
                        source,
                    });
                }
            }
        }
    }

    let mut summary = AnalysisSummary {
        total_item_count: items.len(),
        matched_item_count: count_status(items, CoverageStatus::Good),
        warning_item_count: count_status(items, CoverageStatus::Warning),
        total_premium: String::new(),
        groups: builder.finish(),
    };
    summary.total_premium = format_amount(summary.grand_total_min());
    summary
}

fn count_status(items: &[ClassifiedCoverageItem], status: CoverageStatus) -> usize {
    items.iter().filter(|item| item.status == status).count()
}

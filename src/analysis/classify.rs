use tracing::debug;

use crate::catalog::{Catalog, CatalogEntry};
use crate::core::amount::{parse_amount, try_parse_amount};
use crate::core::model::{
    ClassifiedCoverageItem, CoverageStatus, MatchKind, RawCoverageRecord, SubDetail,
};

/// Amount shown for sub-benefits whose share is not itemised.
pub const UNITEMISED_AMOUNT: &str = "-";

/// Classifies the records of one document.
///
/// The 26-category bundle is expanded for its first occurrence only, so the
/// classifier carries that state and must not be reused across documents.
#[derive(Debug)]
pub struct Classifier<'c> {
    catalog: &'c Catalog,
    bundle_expanded: bool,
}

impl<'c> Classifier<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self {
            catalog,
            bundle_expanded: false,
        }
    }

    pub fn classify(&mut self, record: &RawCoverageRecord) -> ClassifiedCoverageItem {
        let Some(resolved) = self.catalog.resolve(&record.name) else {
            let review_hint = self.catalog.closest_key(&record.name).map(str::to_string);
            debug!(name = %record.name, hint = ?review_hint, "no catalog match");
            return ClassifiedCoverageItem {
                record: record.clone(),
                status: CoverageStatus::Warning,
                match_kind: MatchKind::Unknown,
                sub_details: None,
                review_hint,
            };
        };

        let sub_details = match resolved.entry {
            CatalogEntry::Tiered { .. } => tier_sub_details(resolved.entry, &record.amount),
            CatalogEntry::PassThrough { .. } => None,
            CatalogEntry::TwentySixCategory { summary_items, .. } => {
                if self.bundle_expanded {
                    None
                } else {
                    self.bundle_expanded = true;
                    Some(
                        summary_items
                            .iter()
                            .map(|item| SubDetail {
                                name: item.name.to_string(),
                                amount: record.amount.clone(),
                            })
                            .collect(),
                    )
                }
            }
        };

        ClassifiedCoverageItem {
            record: record.clone(),
            status: CoverageStatus::Good,
            match_kind: resolved.entry.kind(),
            sub_details,
            review_hint: None,
        }
    }
}

/// Flattened `sub` breakdowns of the tier selected by `amount`.
fn tier_sub_details(entry: &CatalogEntry, amount: &str) -> Option<Vec<SubDetail>> {
    if try_parse_amount(amount).is_none() {
        debug!(amount, "unreadable amount, selecting fallback tier");
    }
    let tier = entry.select_tier(parse_amount(amount))?;
    let subs: Vec<SubDetail> = tier
        .benefits
        .iter()
        .flat_map(|benefit| benefit.sub.iter())
        .map(|sub| SubDetail {
            name: sub.to_string(),
            amount: UNITEMISED_AMOUNT.to_string(),
        })
        .collect();
    (!subs.is_empty()).then_some(subs)
}

/// Classify every record of a document, preserving order.
pub fn classify_records(records: &[RawCoverageRecord], catalog: &Catalog) -> Vec<ClassifiedCoverageItem> {
    let mut classifier = Classifier::new(catalog);
    records.iter().map(|record| classifier.classify(record)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::data;

    fn record(name: &str, amount: &str) -> RawCoverageRecord {
        RawCoverageRecord {
            sequence_id: 0,
            name: name.to_string(),
            amount: amount.to_string(),
            premium: "-".to_string(),
            period: "-".to_string(),
            original: format!("{name} {amount}"),
        }
    }

    #[test]
    fn tiered_match_lists_sub_breakdowns() {
        let item = classify_records(&[record(data::BASIC, "1억원")], Catalog::builtin()).remove(0);
        assert_eq!(item.status, CoverageStatus::Good);
        assert_eq!(item.match_kind, MatchKind::Tiered);
        let subs = item.sub_details.unwrap();
        // 다빈치 2, 표적 2, 면역 3, 양성자 2, 중입자 1, 세기조절 1
        assert_eq!(subs.len(), 11);
        assert_eq!(subs[0].name, "(매회) (급여/비급여) 암 수술비 1,000만");
        assert!(subs.iter().all(|s| s.amount == UNITEMISED_AMOUNT));
    }

    #[test]
    fn tier_without_breakdowns_has_no_sub_details() {
        let item = classify_records(&[record(data::RANGE_III, "5,000만원")], Catalog::builtin())
            .remove(0);
        assert_eq!(item.status, CoverageStatus::Good);
        assert_eq!(item.sub_details, None);
    }

    #[test]
    fn pass_through_has_no_sub_details() {
        let item = classify_records(&[record(data::HEAVY_ION, "1,000만원")], Catalog::builtin())
            .remove(0);
        assert_eq!(item.match_kind, MatchKind::PassThrough);
        assert_eq!(item.sub_details, None);
    }

    #[test]
    fn bundle_expands_once_per_document() {
        let records = [
            record(data::TWENTY_SIX, "1,000만원"),
            record("26종항암방사선및약물치료비(갱신)", "1,000만원"),
        ];
        let items = classify_records(&records, Catalog::builtin());
        assert!(items.iter().all(|i| i.match_kind == MatchKind::TwentySixCategory));
        let first = items[0].sub_details.as_ref().unwrap();
        assert_eq!(first.len(), 6);
        assert!(first.iter().all(|s| s.amount == "1,000만원"));
        assert_eq!(items[1].sub_details, None);

        // A fresh pass starts over.
        let again = classify_records(&records[1..], Catalog::builtin());
        assert!(again[0].sub_details.is_some());
    }

    #[test]
    fn unmatched_items_need_review() {
        let items = classify_records(
            &[record("다빈치 암수술비", "1,000만원"), record("질병사망", "1억원")],
            Catalog::builtin(),
        );
        assert!(items.iter().all(|i| i.status == CoverageStatus::Warning));
        assert!(items.iter().all(|i| i.match_kind == MatchKind::Unknown));
        assert_eq!(items[0].review_hint.as_deref(), Some(data::ROBOTIC_SURGERY));
        assert_eq!(items[1].review_hint, None);
    }
}

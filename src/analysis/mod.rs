pub mod aggregate;
pub mod classify;

use tracing::info;

use crate::catalog::Catalog;
use crate::core::model::{AnalysisReport, RawCoverageRecord};

pub use aggregate::{aggregate, canonical_group_key, SummaryBuilder};
pub use classify::{classify_records, Classifier};

pub trait CoverageAnalyzer {
    fn analyze(&self, records: &[RawCoverageRecord]) -> AnalysisReport;
}

/// Classifies and aggregates against a [`Catalog`].
#[derive(Debug, Clone, Copy)]
pub struct CatalogAnalyzer<'c> {
    catalog: &'c Catalog,
}

impl<'c> CatalogAnalyzer<'c> {
    pub fn new(catalog: &'c Catalog) -> Self {
        Self { catalog }
    }
}

impl Default for CatalogAnalyzer<'static> {
    fn default() -> Self {
        Self::new(Catalog::builtin())
    }
}

impl CoverageAnalyzer for CatalogAnalyzer<'_> {
    fn analyze(&self, records: &[RawCoverageRecord]) -> AnalysisReport {
        let items = classify_records(records, self.catalog);
        let summary = aggregate(&items, self.catalog);
        info!(
            items = summary.total_item_count,
            matched = summary.matched_item_count,
            warnings = summary.warning_item_count,
            groups = summary.groups.len(),
            total = %summary.total_premium,
            "coverage analysis finished"
        );
        AnalysisReport { items, summary }
    }
}

/// Analyze records against the built-in catalog.
pub fn analyze(records: &[RawCoverageRecord]) -> AnalysisReport {
    CatalogAnalyzer::default().analyze(records)
}

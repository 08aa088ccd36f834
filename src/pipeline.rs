use std::path::Path;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::analysis::{CatalogAnalyzer, CoverageAnalyzer};
use crate::catalog::Catalog;
use crate::core::model::AnalysisReport;
use crate::export::json_export::JsonExporter;
use crate::export::text_export::TextExporter;
use crate::export::{Exporter, ReportFormat};
use crate::extract::extract_records;
use crate::parser::{join_pages, reconstruct_page_text, FragmentSource, PageRange};

#[derive(Debug, Clone, Default)]
pub struct AnalysisConfig {
    /// Pages to read; the document's default range when unset.
    pub page_range: Option<PageRange>,
}

impl AnalysisConfig {
    pub fn new(page_range: Option<PageRange>) -> Self {
        Self { page_range }
    }

    pub fn resolve_range(&self, page_count: usize) -> PageRange {
        self.page_range
            .map(|range| PageRange::new(range.first, range.last.min(page_count)))
            .unwrap_or_else(|| PageRange::default_for(page_count))
    }
}

/// Reading-order text of the configured pages.
///
/// Pages that cannot be read are logged and skipped. `progress` receives a
/// percentage and a status message before each page and once at the end.
pub fn collect_text<S, F>(source: &S, config: &AnalysisConfig, mut progress: F) -> String
where
    S: FragmentSource + ?Sized,
    F: FnMut(u8, &str),
{
    let range = config.resolve_range(source.page_count());
    let total = range.len();
    let mut pages = Vec::with_capacity(total);

    for (done, page) in range.pages().enumerate() {
        progress(percent(done, total), &format!("{page}페이지 분석 중..."));

        match source.page_fragments(page) {
            Ok(fragments) if fragments.is_empty() => {
                debug!(page, "page has no text fragments");
            }
            Ok(fragments) => {
                let text = reconstruct_page_text(&fragments);
                debug!(page, fragments = fragments.len(), chars = text.len(), "page text rebuilt");
                pages.push(text);
            }
            Err(err) => warn!(page, error = %err, "skipping unreadable page"),
        }
    }

    progress(100, "분석 완료");
    join_pages(pages)
}

fn percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((done as f64 / total as f64) * 100.0).round() as u8
}

/// Extract and analyze coverage rows from already reconstructed text.
pub fn analyze_text(text: &str) -> AnalysisReport {
    let records = extract_records(text);
    info!(records = records.len(), "coverage rows extracted");
    CatalogAnalyzer::default().analyze(&records)
}

pub fn analyze_source<S>(source: &S, config: &AnalysisConfig) -> AnalysisReport
where
    S: FragmentSource + ?Sized,
{
    analyze_source_with_progress(source, config, |_, _| {})
}

pub fn analyze_source_with_progress<S, F>(
    source: &S,
    config: &AnalysisConfig,
    progress: F,
) -> AnalysisReport
where
    S: FragmentSource + ?Sized,
    F: FnMut(u8, &str),
{
    let text = collect_text(source, config, progress);
    analyze_text(&text)
}

/// Write `report` in every requested format. `catalog` must be the one the
/// report was analyzed against.
pub fn export_report(
    report: &AnalysisReport,
    catalog: &Catalog,
    output: &Path,
    formats: &[ReportFormat],
) -> Result<()> {
    for format in formats {
        match format {
            ReportFormat::Json => JsonExporter::new(output.to_path_buf()).export(report)?,
            ReportFormat::Text => {
                TextExporter::new(output.to_path_buf(), catalog).export(report)?
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::PositionedFragment;
    use crate::parser::{FragmentDump, SourceError};

    fn row(text: &str, y: f32) -> Vec<PositionedFragment> {
        vec![PositionedFragment::new(text, 10.0, y, 200.0, 10.0)]
    }

    struct FailingPage(FragmentDump);

    impl FragmentSource for FailingPage {
        fn page_count(&self) -> usize {
            self.0.page_count()
        }

        fn page_fragments(&self, page: usize) -> Result<Vec<PositionedFragment>, SourceError> {
            if page == 4 {
                return Err(SourceError::PageOutOfRange { page, page_count: 0 });
            }
            self.0.page_fragments(page)
        }
    }

    fn five_pages() -> FragmentDump {
        FragmentDump::from_pages(vec![
            row("표지", 700.0),
            row("목차", 700.0),
            row("가입담보리스트", 700.0),
            row("항암양성자방사선치료비 1,000만원", 700.0),
            vec![],
        ])
    }

    #[test]
    fn default_range_starts_at_page_three() {
        let text = collect_text(&five_pages(), &AnalysisConfig::default(), |_, _| {});
        assert_eq!(text, "가입담보리스트\n항암양성자방사선치료비 1,000만원\n");
    }

    #[test]
    fn explicit_range_is_clamped() {
        let config = AnalysisConfig::new(Some(PageRange::new(1, 40)));
        let text = collect_text(&five_pages(), &config, |_, _| {});
        assert!(text.starts_with("표지\n목차\n"));
    }

    #[test]
    fn unreadable_pages_are_skipped() {
        let source = FailingPage(five_pages());
        let report = analyze_source(&source, &AnalysisConfig::default());
        assert_eq!(report.summary.total_item_count, 0);
    }

    #[test]
    fn progress_runs_to_completion() {
        let mut seen = Vec::new();
        collect_text(&five_pages(), &AnalysisConfig::default(), |pct, msg| {
            seen.push((pct, msg.to_string()))
        });
        assert_eq!(
            seen,
            vec![
                (0, "3페이지 분석 중...".to_string()),
                (33, "4페이지 분석 중...".to_string()),
                (67, "5페이지 분석 중...".to_string()),
                (100, "분석 완료".to_string()),
            ]
        );
    }

    #[test]
    fn source_to_report() {
        let report = analyze_source(&five_pages(), &AnalysisConfig::default());
        assert_eq!(report.items.len(), 1);
        assert_eq!(report.items[0].record.name, "항암양성자방사선치료비");
        assert_eq!(report.summary.total_premium, "1,000만원");
    }
}

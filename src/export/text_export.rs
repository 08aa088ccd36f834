use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::catalog::{Catalog, CatalogEntry};
use crate::core::amount::{format_amount, parse_amount};
use crate::core::model::{AnalysisReport, ClassifiedCoverageItem, CoverageStatus, SummaryGroup};
use crate::export::Exporter;

pub const REPORT_FILE: &str = "report.txt";

/// Writes `report.txt`. Tier breakdowns come from the catalog the report was
/// analyzed against.
#[derive(Debug, Clone)]
pub struct TextExporter<'c> {
    out_dir: PathBuf,
    catalog: &'c Catalog,
}

impl<'c> TextExporter<'c> {
    pub fn new(out_dir: PathBuf, catalog: &'c Catalog) -> Self {
        Self { out_dir, catalog }
    }
}

impl Exporter for TextExporter<'_> {
    fn export(&self, report: &AnalysisReport) -> Result<()> {
        fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("Failed to create {}", self.out_dir.display()))?;
        let path = self.out_dir.join(REPORT_FILE);
        fs::write(&path, render_text_report(report, self.catalog))
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }
}

/// Human-readable report: counts, per-group totals, then every item.
pub fn render_text_report(report: &AnalysisReport, catalog: &Catalog) -> String {
    let summary = &report.summary;
    let mut out = String::new();

    let _ = writeln!(out, "=== 보장 분석 요약 ===");
    let _ = writeln!(out, "전체 담보: {}", summary.total_item_count);
    let _ = writeln!(out, "확인 완료: {}", summary.matched_item_count);
    let _ = writeln!(out, "확인 필요: {}", summary.warning_item_count);
    let _ = writeln!(out, "총 보장금액: {}", summary.total_premium);
    out.push('\n');

    if !summary.groups.is_empty() {
        let _ = writeln!(out, "=== 항목별 합계 ===");
        for group in &summary.groups {
            write_group(&mut out, group);
        }
        out.push('\n');
    }

    let _ = writeln!(out, "=== 담보 목록 ===");
    for item in &report.items {
        write_item(&mut out, item, catalog);
    }

    out
}

fn write_group(out: &mut String, group: &SummaryGroup) {
    let total = if group.total_max > group.total_min {
        format!(
            "{} ~ {}",
            format_amount(group.total_min),
            format_amount(group.total_max)
        )
    } else {
        format_amount(group.total_min)
    };
    let _ = writeln!(out, "{} ({}건): {}", group.name, group.count, total);
    for member in &group.items {
        let _ = writeln!(out, "  - {} {}", member.name, member.amount);
    }
}

fn write_item(out: &mut String, item: &ClassifiedCoverageItem, catalog: &Catalog) {
    let record = &item.record;
    let marker = match item.status {
        CoverageStatus::Good => "[OK]",
        CoverageStatus::Warning => "[확인필요]",
        CoverageStatus::Missing => "[누락]",
    };
    let _ = writeln!(
        out,
        "{marker} {} | {} | {} | {}",
        record.name, record.amount, record.premium, record.period
    );

    if let Some(hint) = &item.review_hint {
        let _ = writeln!(out, "    유사 담보: {hint}");
    }

    match catalog.resolve(&record.name).map(|r| r.entry) {
        Some(entry @ CatalogEntry::Tiered { .. }) => {
            if let Some(tier) = entry.select_tier(parse_amount(&record.amount)) {
                for benefit in tier.visible_benefits() {
                    let _ = writeln!(out, "    · {} {}", benefit.name, benefit.amount);
                }
            }
        }
        Some(CatalogEntry::TwentySixCategory { detail_name, .. }) => {
            let _ = writeln!(out, "    · {detail_name}");
        }
        _ => {}
    }

    for sub in item.sub_details.iter().flatten() {
        let _ = writeln!(out, "      ㄴ {} {}", sub.name, sub.amount);
    }
}

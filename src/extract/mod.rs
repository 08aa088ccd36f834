//! Coverage rows from reconstructed proposal text.
//!
//! The coverage list is bounded by its heading, wrapped table rows are joined
//! back together, and every joined row that carries an amount becomes a
//! [`RawCoverageRecord`].

pub mod merge;
pub mod record;
pub mod section;

pub use record::{parse_coverage_line, DETAIL_REFERENCE};
pub use section::{locate_section, SectionBounds};

use tracing::debug;

use crate::core::model::RawCoverageRecord;

/// Extract coverage records in document order.
pub fn extract_records(text: &str) -> Vec<RawCoverageRecord> {
    if text.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = text.split('\n').collect();
    let bounds = locate_section(&lines);
    let section = bounds.slice(&lines);
    if bounds.start.is_none() {
        debug!("no coverage list heading, scanning whole document");
    }

    // The heading itself never continues into the first row.
    let merged = match (bounds.start, section.split_first()) {
        (Some(_), Some((heading, rows))) => {
            let mut merged = vec![heading.trim().to_string()];
            merged.extend(merge::merge_wrapped_lines(rows));
            merged
        }
        _ => merge::merge_wrapped_lines(section),
    };

    let records: Vec<RawCoverageRecord> = merged
        .iter()
        .enumerate()
        .filter_map(|(idx, line)| parse_coverage_line(line, bounds.offset() + idx))
        .collect();

    debug!(
        section_start = ?bounds.start,
        section_end = bounds.end,
        merged_lines = merged.len(),
        records = records.len(),
        "extracted coverage rows"
    );

    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const PROPOSAL: &str = "\
보험가입설계서
가입담보리스트
암 통합치료비(기본형)
(암중점치료기관(상급종합병원 포함)) 1억원 35,000원 20년/100세
해약환급금 예시표 1,000만원
항암중입자방사선치료비 1,000만원 1,200원 10년/100세
주의사항
질병사망 5,000만원
";

    #[test]
    fn extracts_rows_inside_the_section() {
        let records = extract_records(PROPOSAL);
        let names: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "암 통합치료비(기본형) (암중점치료기관(상급종합병원 포함))",
                "항암중입자방사선치료비",
            ]
        );
        assert_eq!(records[0].amount, "1억원");
        assert_eq!(records[0].premium, "35,000원");
        assert_eq!(records[0].period, "20년/100세");
    }

    #[test]
    fn sequence_ids_are_offset_by_section_start() {
        let records = extract_records(PROPOSAL);
        // heading at line 1; merged rows: heading, wrapped row, deny-listed row, 중입자
        assert_eq!(records[0].sequence_id, 2);
        assert_eq!(records[1].sequence_id, 4);
    }

    #[test]
    fn whole_document_without_heading() {
        let records = extract_records("질병사망 5,000만원\n상해사망 1억원\n");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sequence_id, 0);
        assert_eq!(records[1].sequence_id, 1);
    }

    #[test]
    fn empty_text_yields_nothing() {
        assert!(extract_records("").is_empty());
        assert!(extract_records("가입담보리스트\n주의사항\n").is_empty());
    }
}

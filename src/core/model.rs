use serde::{Deserialize, Serialize};

/// One positioned run of text as emitted by the page text source.
///
/// `y` grows towards the top of the page (PDF user space), so reading order
/// walks fragments by descending `y`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionedFragment {
    #[serde(alias = "str")]
    pub text: String,
    pub x: f32,
    pub y: f32,
    #[serde(default, alias = "w")]
    pub width: f32,
    #[serde(default, alias = "h")]
    pub height: f32,
    #[serde(default, alias = "hasEOL")]
    pub end_of_line: bool,
}

impl PositionedFragment {
    pub fn new(text: impl Into<String>, x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            width,
            height,
            end_of_line: false,
        }
    }

    pub fn right_edge(&self) -> f32 {
        self.x + self.width
    }
}

/// A coverage row recovered from the proposal text, before catalog lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCoverageRecord {
    pub sequence_id: usize,
    pub name: String,
    pub amount: String,
    pub premium: String,
    pub period: String,
    pub original: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CoverageStatus {
    Good,
    Warning,
    Missing,
}

/// Which kind of catalog entry a record resolved to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Tiered,
    PassThrough,
    TwentySixCategory,
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubDetail {
    pub name: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedCoverageItem {
    #[serde(flatten)]
    pub record: RawCoverageRecord,
    pub status: CoverageStatus,
    pub match_kind: MatchKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_details: Option<Vec<SubDetail>>,
    /// Closest catalog key for items that need manual review.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_hint: Option<String>,
}

impl ClassifiedCoverageItem {
    pub fn is_matched(&self) -> bool {
        self.status == CoverageStatus::Good
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    pub name: String,
    pub amount: String,
}

/// Amounts folded under one canonical benefit name. Totals are in man-won.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryGroup {
    pub name: String,
    pub total_min: u64,
    pub total_max: u64,
    pub count: usize,
    pub items: Vec<GroupMember>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisSummary {
    pub total_item_count: usize,
    pub matched_item_count: usize,
    pub warning_item_count: usize,
    pub total_premium: String,
    pub groups: Vec<SummaryGroup>,
}

impl AnalysisSummary {
    pub fn group(&self, name: &str) -> Option<&SummaryGroup> {
        self.groups.iter().find(|group| group.name == name)
    }

    /// Sum of every group's minimum total, in man-won.
    pub fn grand_total_min(&self) -> u64 {
        self.groups
            .iter()
            .fold(0, |total: u64, group| total.saturating_add(group.total_min))
    }
}

/// Everything produced for one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub items: Vec<ClassifiedCoverageItem>,
    pub summary: AnalysisSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_accepts_viewer_field_names() {
        let json = r#"{"str":"암","x":10.0,"y":700.0,"w":12.5,"h":10.0,"hasEOL":true}"#;
        let fragment: PositionedFragment = serde_json::from_str(json).unwrap();
        assert_eq!(fragment.text, "암");
        assert_eq!(fragment.right_edge(), 22.5);
        assert!(fragment.end_of_line);
    }

    #[test]
    fn status_serializes_lowercase() {
        let json = serde_json::to_string(&CoverageStatus::Warning).unwrap();
        assert_eq!(json, "\"warning\"");
        let json = serde_json::to_string(&MatchKind::TwentySixCategory).unwrap();
        assert_eq!(json, "\"twenty_six_category\"");
    }
}

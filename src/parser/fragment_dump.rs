use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::model::PositionedFragment;
use crate::parser::{FragmentSource, SourceError};

/// Page fragments captured from a PDF text layer and stored as JSON:
/// `{"pages": [[{"text": "..", "x": .., "y": .., "width": .., "height": ..}, ..], ..]}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FragmentDump {
    #[serde(default)]
    pub pages: Vec<Vec<PositionedFragment>>,
}

impl FragmentDump {
    pub fn from_pages(pages: Vec<Vec<PositionedFragment>>) -> Self {
        Self { pages }
    }

    pub fn from_json(data: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let data = fs::read_to_string(path).map_err(|source| SourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&data)
    }
}

impl FragmentSource for FragmentDump {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page_fragments(&self, page: usize) -> Result<Vec<PositionedFragment>, SourceError> {
        page.checked_sub(1)
            .and_then(|idx| self.pages.get(idx))
            .cloned()
            .ok_or(SourceError::PageOutOfRange {
                page,
                page_count: self.pages.len(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_pages_with_defaults() {
        let dump = FragmentDump::from_json(
            r#"{"pages": [[{"text": "가입담보", "x": 10, "y": 700}], []]}"#,
        )
        .unwrap();
        assert_eq!(dump.page_count(), 2);
        let first = dump.page_fragments(1).unwrap();
        assert_eq!(first[0].width, 0.0);
        assert!(dump.page_fragments(2).unwrap().is_empty());
    }

    #[test]
    fn rejects_out_of_range_pages() {
        let dump = FragmentDump::default();
        assert!(matches!(
            dump.page_fragments(0),
            Err(SourceError::PageOutOfRange { page: 0, .. })
        ));
        assert!(matches!(
            dump.page_fragments(1),
            Err(SourceError::PageOutOfRange { page_count: 0, .. })
        ));
    }

    #[test]
    fn reports_malformed_json() {
        assert!(matches!(
            FragmentDump::from_json("{\"pages\": 3}"),
            Err(SourceError::Json(_))
        ));
    }
}

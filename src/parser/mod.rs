pub mod fragment_dump;
pub mod line_builder;

pub use fragment_dump::FragmentDump;
pub use line_builder::{join_pages, reconstruct_page_text};

use std::path::PathBuf;

use thiserror::Error;

use crate::core::model::PositionedFragment;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read fragment dump {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed fragment dump: {0}")]
    Json(#[from] serde_json::Error),

    #[error("page {page} out of range (document has {page_count} pages)")]
    PageOutOfRange { page: usize, page_count: usize },
}

/// Supplies positioned text fragments page by page. Pages are 1-based.
pub trait FragmentSource {
    fn page_count(&self) -> usize;

    fn page_fragments(&self, page: usize) -> Result<Vec<PositionedFragment>, SourceError>;
}

/// Inclusive, 1-based page range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub first: usize,
    pub last: usize,
}

impl PageRange {
    pub fn new(first: usize, last: usize) -> Self {
        Self { first, last }
    }

    /// Pages 3 through 6, clamped to the document length.
    pub fn default_for(page_count: usize) -> Self {
        Self {
            first: page_count.min(3),
            last: page_count.min(6),
        }
    }

    pub fn pages(&self) -> std::ops::RangeInclusive<usize> {
        self.first.max(1)..=self.last
    }

    pub fn len(&self) -> usize {
        self.pages().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

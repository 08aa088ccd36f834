pub mod analysis;
pub mod catalog;
pub mod core;
pub mod export;
pub mod extract;
pub mod parser;
pub mod pipeline;

pub use core::model::{
    AnalysisReport, AnalysisSummary, ClassifiedCoverageItem, CoverageStatus, RawCoverageRecord,
    SummaryGroup,
};

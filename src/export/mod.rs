pub mod json_export;
pub mod text_export;

use anyhow::Result;

use crate::core::model::AnalysisReport;

pub use json_export::JsonExporter;
pub use text_export::{render_text_report, TextExporter};

/// Output formats a report can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Json,
    Text,
}

pub trait Exporter {
    fn export(&self, report: &AnalysisReport) -> Result<()>;
}

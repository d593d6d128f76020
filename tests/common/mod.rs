#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use fee_report::{ReportConfig, ReportGenerator, StatementRecord};
use lopdf::Document as LopdfDocument;
use serde_json::Value;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text runs of one page (1-based), in drawing order.
    pub fn page_text(&self, page: u32) -> Vec<String> {
        pdf_assertions::page_text_runs(&self.doc, page)
    }

    pub fn all_text(&self) -> Vec<String> {
        (1..=self.page_count() as u32).flat_map(|p| self.page_text(p)).collect()
    }
}

/// A config for tests: no logo, stock theme.
pub fn test_config() -> ReportConfig {
    ReportConfig::builder()
        .with_logo(None)
        .build()
        .expect("stock config is valid")
}

pub fn record_from(value: Value) -> Result<StatementRecord, Box<dyn std::error::Error>> {
    match value {
        Value::Object(map) => Ok(StatementRecord::from_map(map)?),
        other => Err(format!("fixture is not an object: {}", other).into()),
    }
}

/// Renders `value` with `config` into an in-memory PDF.
pub fn render_with(config: ReportConfig, value: Value) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    let record = record_from(value)?;
    let (bytes, _) = ReportGenerator::new(config).render(&record)?;
    GeneratedPdf::from_bytes(bytes)
}

pub fn render(value: Value) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    render_with(test_config(), value)
}

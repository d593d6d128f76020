//! Renders a student's tuition account statement from a JSON document into a
//! paginated A4 PDF.
//!
//! ```no_run
//! use fee_report::{ReportConfig, run};
//!
//! let config = ReportConfig::builder().with_output("statement.pdf").build()?;
//! if let Some(summary) = run(config)? {
//!     println!("{} page(s)", summary.page_count);
//! }
//! # Ok::<(), fee_report::ReportError>(())
//! ```

pub mod config;
pub mod datasets;
pub mod error;
pub mod format;
pub mod loader;
pub mod record;
pub mod report;
pub mod sections;

#[cfg(test)]
pub(crate) mod test_utils;

pub use config::{Branding, ReportConfig, ReportConfigBuilder};
pub use error::{LoadError, RecordError, ReportError};
pub use record::{CostFigures, DebtEntry, PaymentEntry, StatementRecord};
pub use report::{run, GenerationSummary, ReportGenerator};

pub use fee_report_render_core::{Canvas, ImageData, RenderError};
pub use fee_report_style::Theme;

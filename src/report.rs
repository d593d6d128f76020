//! Assembles a full statement: banner, identity, costs, tables and signature.

use crate::config::ReportConfig;
use crate::datasets::statement_tables;
use crate::error::ReportError;
use crate::loader;
use crate::record::StatementRecord;
use crate::sections::{
    draw_banner, draw_cost_summary, draw_identity, draw_signature_block, draw_table, signature_block_height,
};
use fee_report_render_core::{Canvas, ImageData};
use fee_report_render_lopdf::LopdfCanvas;
use log::{debug, error, info, warn};
use std::fmt;
use std::path::{Path, PathBuf};

/// What a successful run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub output_path: PathBuf,
    pub page_count: usize,
    pub byte_len: usize,
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Reporte generado: {}", self.output_path.display())
    }
}

pub struct ReportGenerator {
    config: ReportConfig,
}

impl ReportGenerator {
    pub fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    fn load_logo(&self) -> Option<ImageData> {
        let path = self.config.logo.as_ref()?;
        match ImageData::from_path(path) {
            Ok(image) => Some(image),
            Err(e) => {
                warn!("Error al cargar imagen: {} ({})", e, path.display());
                None
            }
        }
    }

    /// Starts a new page when the cursor has dropped below `floor`.
    fn ensure_room(&self, canvas: &mut dyn Canvas, cursor: f32, floor: f32) -> f32 {
        let layout = &self.config.theme.layout;
        if cursor >= floor {
            return cursor;
        }
        canvas.show_page();
        debug!("Cursor at {:.1}, starting page {}", cursor, canvas.page_count());
        canvas.page_size().height - layout.new_page_top_offset
    }

    /// Draws the whole statement for `record` onto `canvas`.
    pub fn render_into(&self, canvas: &mut dyn Canvas, record: &StatementRecord) {
        let theme = &self.config.theme;
        let logo = self.load_logo();
        draw_banner(canvas, theme, &self.config.branding, logo.as_ref());

        let report_number = record.report_number.as_deref().unwrap_or(&self.config.report_number);
        let mut cursor = draw_identity(canvas, theme, report_number, record);
        cursor = draw_cost_summary(canvas, theme, cursor, &record.costs);

        for table in statement_tables(record) {
            cursor = self.ensure_room(canvas, cursor, theme.layout.pagination_threshold);
            cursor = draw_table(canvas, theme, table.title, &table.grid, Some(table.header.as_slice()), cursor);
        }

        let signature_floor = theme.layout.bottom_margin + signature_block_height(theme);
        cursor = self.ensure_room(canvas, cursor, signature_floor);
        draw_signature_block(canvas, theme, cursor);
    }

    fn canvas(&self) -> LopdfCanvas {
        LopdfCanvas::new(self.config.theme.layout.page_size).with_title(self.config.branding.title.clone())
    }

    /// Renders to an in-memory PDF, returning its bytes and page count.
    pub fn render(&self, record: &StatementRecord) -> Result<(Vec<u8>, usize), ReportError> {
        let mut canvas = self.canvas();
        self.render_into(&mut canvas, record);
        let page_count = canvas.page_count();
        Ok((canvas.finish()?, page_count))
    }

    pub fn generate(&self, record: &StatementRecord, output: impl AsRef<Path>) -> Result<GenerationSummary, ReportError> {
        let output = output.as_ref();
        let mut canvas = self.canvas();
        self.render_into(&mut canvas, record);
        let page_count = canvas.page_count();
        let byte_len = canvas.save(output)?;

        let summary = GenerationSummary {
            output_path: output.to_path_buf(),
            page_count,
            byte_len,
        };
        info!("{}", summary);
        Ok(summary)
    }
}

/// Loads the configured input and writes the statement to the configured
/// output.
///
/// An unreadable input or an empty document is logged and yields `Ok(None)`:
/// there is simply no report to produce. A document that is present but not
/// a valid statement is an error.
pub fn run(config: ReportConfig) -> Result<Option<GenerationSummary>, ReportError> {
    let map = match loader::load(&config.input) {
        Ok(map) => map,
        Err(e) => {
            error!("Error al cargar datos: {}", e);
            return Ok(None);
        }
    };
    if map.is_empty() {
        info!("{} holds no data, no report generated", config.input.display());
        return Ok(None);
    }

    let record = StatementRecord::from_map(map)?;
    let output = config.output.clone();
    ReportGenerator::new(config).generate(&record, output).map(Some)
}

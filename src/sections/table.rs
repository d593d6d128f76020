//! Titled, bordered tables centered on the page.

use fee_report_render_core::{Canvas, PaintMode};
use fee_report_style::{metrics, BuiltinFont, Theme};
use fee_report_types::{Rect, Size};
use std::borrow::Cow;

/// Display cells of one table. Row 0 is always styled as the header; the
/// `has_header` flag records whether the caller already put one there.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Grid {
    rows: Vec<Vec<String>>,
    has_header: bool,
}

impl Grid {
    pub fn new(rows: Vec<Vec<String>>, has_header: bool) -> Self {
        Self { rows, has_header }
    }

    /// A grid of data rows only; the header is supplied at render time.
    pub fn body(rows: Vec<Vec<String>>) -> Self {
        Self::new(rows, false)
    }

    pub fn has_header(&self) -> bool {
        self.has_header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Inserts `header` as row 0 unless the grid already carries one.
    pub fn ensure_header(&mut self, header: &[String]) {
        if !self.has_header {
            self.rows.insert(0, header.to_vec());
            self.has_header = true;
        }
    }
}

fn row_font(row: usize) -> BuiltinFont {
    if row == 0 {
        BuiltinFont::HelveticaBold
    } else {
        BuiltinFont::Helvetica
    }
}

/// Natural geometry of a grid: every column as wide as its widest cell.
#[derive(Debug, Clone, PartialEq)]
pub struct TableMetrics {
    pub column_widths: Vec<f32>,
    pub row_heights: Vec<f32>,
}

impl TableMetrics {
    pub fn measure(grid: &Grid, theme: &Theme) -> Self {
        let layout = &theme.layout;
        let size = theme.typography.cell_size;

        let mut column_widths = vec![0.0_f32; grid.column_count()];
        for (r, row) in grid.rows().iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let width = metrics::string_width(cell, row_font(r), size) + 2.0 * layout.cell_padding_x;
                column_widths[c] = column_widths[c].max(width);
            }
        }
        // Columns that only ever hold missing cells still get their padding.
        for width in &mut column_widths {
            *width = width.max(2.0 * layout.cell_padding_x);
        }

        let row_heights = (0..grid.len())
            .map(|r| {
                let bottom = if r == 0 { layout.header_padding_bottom } else { layout.cell_padding_bottom };
                theme.typography.cell_leading + layout.cell_padding_top + bottom
            })
            .collect();

        Self { column_widths, row_heights }
    }

    pub fn size(&self) -> Size {
        Size::new(self.column_widths.iter().sum(), self.row_heights.iter().sum())
    }
}

/// Draws `title` centered at `cursor` and the grid centered below it.
///
/// When `default_header` is given and the grid has no header row, it is
/// inserted before drawing. Returns the cursor below the table and its
/// trailing gap.
pub fn draw_table(
    canvas: &mut dyn Canvas,
    theme: &Theme,
    title: &str,
    grid: &Grid,
    default_header: Option<&[String]>,
    cursor: f32,
) -> f32 {
    let layout = &theme.layout;
    let palette = &theme.palette;
    let page_width = canvas.page_size().width;

    canvas.set_font(BuiltinFont::HelveticaBold, theme.typography.table_title_size);
    canvas.set_fill_color(palette.body_text);
    canvas.draw_centred_string(page_width / 2.0, cursor, title);

    let mut grid = Cow::Borrowed(grid);
    if let Some(header) = default_header
        && !grid.has_header()
    {
        grid.to_mut().ensure_header(header);
    }
    if grid.is_empty() {
        return cursor - layout.table_gap_above - layout.table_gap_below;
    }

    let table = TableMetrics::measure(&grid, theme);
    let size = table.size();
    let left = (page_width - size.width) / 2.0;
    let top = cursor - layout.table_gap_above;
    log::debug!(
        "Table '{}': {} row(s), {:.1}x{:.1} at x={:.1}, top={:.1}",
        title,
        grid.len(),
        size.width,
        size.height,
        left,
        top
    );

    let cell_size = theme.typography.cell_size;
    let mut row_top = top;
    for (r, row) in grid.rows().iter().enumerate() {
        let height = table.row_heights[r];
        let bottom = row_top - height;
        let (background, text_color, padding_bottom) = if r == 0 {
            (palette.header_background, palette.header_text, layout.header_padding_bottom)
        } else {
            (palette.row_background, palette.body_text, layout.cell_padding_bottom)
        };

        canvas.set_fill_color(background);
        canvas.rect(Rect::new(left, bottom, size.width, height), PaintMode::Fill);

        canvas.set_fill_color(text_color);
        canvas.set_font(row_font(r), cell_size);
        let baseline = bottom + padding_bottom + metrics::descent(cell_size);
        let mut x = left;
        for (c, width) in table.column_widths.iter().enumerate() {
            if let Some(cell) = row.get(c) {
                canvas.draw_centred_string(x + width / 2.0, baseline, cell);
            }
            x += width;
        }
        row_top = bottom;
    }

    canvas.set_stroke_color(palette.grid);
    canvas.set_line_width(layout.grid_line_width);
    let bottom = top - size.height;
    canvas.rect(Rect::new(left, bottom, size.width, size.height), PaintMode::Stroke);
    if let Some((_, inner)) = table.column_widths.split_last() {
        let mut x = left;
        for width in inner {
            x += width;
            canvas.line(x, top, x, bottom);
        }
    }
    if let Some((_, inner)) = table.row_heights.split_last() {
        let mut y = top;
        for height in inner {
            y -= height;
            canvas.line(left, y, left + size.width, y);
        }
    }

    cursor - size.height - layout.table_gap_above - layout.table_gap_below
}

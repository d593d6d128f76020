use crate::error::RenderError;
use crate::raster::ImageData;
use fee_report_style::{metrics, BuiltinFont};
use fee_report_types::{Color, Rect, Size};

/// How a closed path is painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintMode {
    Fill,
    Stroke,
}

/// An immediate-mode drawing surface.
///
/// Coordinates are PDF user space: the origin is the bottom-left corner of the
/// current page and `y` grows upwards. Text and fill share the fill color, lines
/// and borders use the stroke color, as in the PDF graphics model.
pub trait Canvas {
    /// Size of the current page.
    fn page_size(&self) -> Size;

    fn set_font(&mut self, font: BuiltinFont, size: f32);

    /// The face and size the next text run will use.
    fn font(&self) -> (BuiltinFont, f32);

    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color);

    fn set_line_width(&mut self, width: f32);

    /// Draws `text` with its baseline starting at (`x`, `y`).
    fn draw_string(&mut self, x: f32, y: f32, text: &str);

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32);

    fn rect(&mut self, rect: Rect, mode: PaintMode);

    /// Places `image` stretched over `frame`.
    fn draw_image(&mut self, image: &ImageData, frame: Rect) -> Result<(), RenderError>;

    /// Closes the current page and starts a fresh one with reset graphics state.
    fn show_page(&mut self);

    /// Pages emitted so far, including the one being drawn.
    fn page_count(&self) -> usize;

    fn string_width(&self, text: &str, font: BuiltinFont, size: f32) -> f32 {
        metrics::string_width(text, font, size)
    }

    /// Draws `text` horizontally centered on `center_x`.
    fn draw_centred_string(&mut self, center_x: f32, y: f32, text: &str) {
        let (font, size) = self.font();
        let width = self.string_width(text, font, size);
        self.draw_string(center_x - width / 2.0, y, text);
    }
}

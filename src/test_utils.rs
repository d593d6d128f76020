use fee_report_render_core::{Canvas, ImageData, PaintMode, RenderError};
use fee_report_style::{BuiltinFont, PageSize};
use fee_report_types::{Color, Rect, Size};

/// One recorded drawing call, with the graphics state it was issued under.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Text {
        x: f32,
        y: f32,
        text: String,
        font: BuiltinFont,
        size: f32,
        fill: Color,
    },
    Line {
        from: (f32, f32),
        to: (f32, f32),
        stroke: Color,
        width: f32,
    },
    Rect {
        rect: Rect,
        mode: PaintMode,
        fill: Color,
        stroke: Color,
    },
    Image {
        frame: Rect,
    },
    ShowPage,
}

/// A `Canvas` that records draw calls instead of producing PDF bytes.
pub struct RecordingCanvas {
    size: Size,
    font: BuiltinFont,
    font_size: f32,
    fill: Color,
    stroke: Color,
    line_width: f32,
    pages: usize,
    pub ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn a4() -> Self {
        Self {
            size: PageSize::A4.size(),
            font: BuiltinFont::Helvetica,
            font_size: 12.0,
            fill: Color::BLACK,
            stroke: Color::BLACK,
            line_width: 1.0,
            pages: 1,
            ops: Vec::new(),
        }
    }

    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// The first text op whose content equals `needle`.
    pub fn text_op(&self, needle: &str) -> Option<&DrawOp> {
        self.ops
            .iter()
            .find(|op| matches!(op, DrawOp::Text { text, .. } if text == needle))
    }

    pub fn text_y(&self, needle: &str) -> Option<f32> {
        match self.text_op(needle) {
            Some(DrawOp::Text { y, .. }) => Some(*y),
            _ => None,
        }
    }

    pub fn filled_rects(&self) -> Vec<(Rect, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Rect { rect, mode: PaintMode::Fill, fill, .. } => {
                    Some((*rect, *fill))
                }
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<((f32, f32), (f32, f32))> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }
}

impl Canvas for RecordingCanvas {
    fn page_size(&self) -> Size {
        self.size
    }

    fn set_font(&mut self, font: BuiltinFont, size: f32) {
        self.font = font;
        self.font_size = size;
    }

    fn font(&self) -> (BuiltinFont, f32) {
        (self.font, self.font_size)
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill = color;
    }

    fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.line_width = width;
    }

    fn draw_string(&mut self, x: f32, y: f32, text: &str) {
        self.ops.push(DrawOp::Text {
            x,
            y,
            text: text.to_string(),
            font: self.font,
            size: self.font_size,
            fill: self.fill,
        });
    }

    fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.ops.push(DrawOp::Line {
            from: (x1, y1),
            to: (x2, y2),
            stroke: self.stroke,
            width: self.line_width,
        });
    }

    fn rect(&mut self, rect: Rect, mode: PaintMode) {
        self.ops.push(DrawOp::Rect {
            rect,
            mode,
            fill: self.fill,
            stroke: self.stroke,
        });
    }

    fn draw_image(&mut self, _image: &ImageData, frame: Rect) -> Result<(), RenderError> {
        self.ops.push(DrawOp::Image { frame });
        Ok(())
    }

    fn show_page(&mut self) {
        self.pages += 1;
        self.font = BuiltinFont::Helvetica;
        self.font_size = 12.0;
        self.fill = Color::BLACK;
        self.stroke = Color::BLACK;
        self.line_width = 1.0;
        self.ops.push(DrawOp::ShowPage);
    }

    fn page_count(&self) -> usize {
        self.pages
    }
}

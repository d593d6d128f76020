use fee_report_render_core::PaintMode;
use fee_report_render_core::utils::to_win_ansi;
use fee_report_types::{Color, Rect};
use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};

/// Graphics state already emitted into the current page's content stream.
#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    fill_color: Option<Color>,
    stroke_color: Option<Color>,
    line_width: Option<f32>,
}

/// The content stream of one page under construction.
pub(crate) struct PageContent {
    content: Content,
    state: PageRenderState,
}

impl PageContent {
    pub(crate) fn new() -> Self {
        Self {
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
        }
    }

    pub(crate) fn encode(&self) -> Result<Vec<u8>, lopdf::Error> {
        self.content.encode()
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn color_operands(color: &Color) -> Vec<Object> {
        color.components().iter().map(|c| (*c).into()).collect()
    }

    pub(crate) fn set_fill_color(&mut self, color: Color) {
        if self.state.fill_color != Some(color) {
            self.push("rg", Self::color_operands(&color));
            self.state.fill_color = Some(color);
        }
    }

    pub(crate) fn set_stroke_color(&mut self, color: Color) {
        if self.state.stroke_color != Some(color) {
            self.push("RG", Self::color_operands(&color));
            self.state.stroke_color = Some(color);
        }
    }

    pub(crate) fn set_line_width(&mut self, width: f32) {
        if self.state.line_width != Some(width) {
            self.push("w", vec![width.into()]);
            self.state.line_width = Some(width);
        }
    }

    pub(crate) fn text(&mut self, font_resource: &str, size: f32, x: f32, y: f32, text: &str) {
        if text.is_empty() {
            return;
        }
        self.push("BT", vec![]);
        self.push(
            "Tf",
            vec![Object::Name(font_resource.as_bytes().to_vec()), size.into()],
        );
        self.push("Td", vec![x.into(), y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(text), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
    }

    pub(crate) fn line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.push("m", vec![x1.into(), y1.into()]);
        self.push("l", vec![x2.into(), y2.into()]);
        self.push("S", vec![]);
    }

    pub(crate) fn rect(&mut self, rect: Rect, mode: PaintMode) {
        self.push(
            "re",
            vec![rect.x.into(), rect.y.into(), rect.width.into(), rect.height.into()],
        );
        let paint = match mode {
            PaintMode::Fill => "f",
            PaintMode::Stroke => "S",
        };
        self.push(paint, vec![]);
    }

    pub(crate) fn image(&mut self, xobject_name: &str, frame: Rect) {
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                frame.width.into(),
                0.into(),
                0.into(),
                frame.height.into(),
                frame.x.into(),
                frame.y.into(),
            ],
        );
        self.push("Do", vec![Object::Name(xobject_name.as_bytes().to_vec())]);
        self.push("Q", vec![]);
    }
}

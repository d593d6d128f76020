use crate::format::{currency, quantity};
use crate::record::CostFigures;
use fee_report_render_core::Canvas;
use fee_report_style::{BuiltinFont, Theme};

pub const COST_SUMMARY_TITLE: &str = "COSTOS DE LA MAESTRÍA";

/// One line of the cost block: label, formatted value and an optional detail.
#[derive(Debug, Clone, PartialEq)]
pub struct CostRow {
    pub label: &'static str,
    pub value: String,
    pub detail: String,
}

impl CostRow {
    fn new(label: &'static str, value: String, detail: String) -> Self {
        Self { label, value, detail }
    }
}

pub fn cost_rows(costs: &CostFigures) -> [CostRow; 6] {
    let installments = quantity(costs.installments);
    let enrollments = quantity(costs.enrollments);
    [
        CostRow::new(
            "COSTO PENSIÓN",
            currency(costs.tuition_cost),
            format!("{} CUOTAS X {}", installments, currency(costs.installment_amount)),
        ),
        CostRow::new(
            "MATRÍCULA",
            currency(costs.enrollment_cost),
            format!("{} MATRÍCULAS X {}", enrollments, currency(costs.enrollment_amount)),
        ),
        CostRow::new(
            "PAGOS PENSIÓN X CICLO",
            format!("{} CUOTAS", quantity(costs.payments_per_cycle)),
            String::new(),
        ),
        CostRow::new("COSTO TOTAL MAESTRÍA", currency(costs.total_cost), String::new()),
        CostRow::new("PENSIÓN A LA FECHA", format!("{} CUOTAS", installments), String::new()),
        CostRow::new("MATRÍCULAS A LA FECHA", format!("{} MATRÍCULAS", enrollments), String::new()),
    ]
}

/// Draws the underlined cost block title and its six rows at the label,
/// value and detail columns.
pub fn draw_cost_summary(canvas: &mut dyn Canvas, theme: &Theme, cursor: f32, costs: &CostFigures) -> f32 {
    let layout = &theme.layout;
    let title_size = theme.typography.section_title_size;
    let mut cursor = cursor;

    canvas.set_fill_color(theme.palette.body_text);
    canvas.set_font(BuiltinFont::HelveticaBold, title_size);
    canvas.draw_string(layout.left_column, cursor, COST_SUMMARY_TITLE);

    let title_width = canvas.string_width(COST_SUMMARY_TITLE, BuiltinFont::HelveticaBold, title_size);
    let rule_y = cursor - layout.title_rule_offset;
    canvas.set_stroke_color(theme.palette.rule);
    canvas.set_line_width(layout.rule_width);
    canvas.line(layout.left_column, rule_y, layout.left_column + title_width, rule_y);
    cursor -= layout.line_height;

    canvas.set_font(BuiltinFont::Helvetica, theme.typography.body_size);
    for row in cost_rows(costs) {
        canvas.draw_string(layout.left_column, cursor, row.label);
        canvas.draw_string(layout.value_column, cursor, &row.value);
        if !row.detail.is_empty() {
            canvas.draw_string(layout.detail_column, cursor, &row.detail);
        }
        cursor -= layout.line_height;
    }

    cursor - layout.section_gap
}

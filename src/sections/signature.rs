use fee_report_render_core::Canvas;
use fee_report_style::{BuiltinFont, Theme};

pub const SIGNATURE_TITLE: &str = "Firma del Responsable:";

pub const SIGNATURE_PROMPTS: [&str; 3] = [
    "Nombre: ________________________________",
    "Cargo: ________________________________",
    "Fecha: ________________________________",
];

/// Vertical space the block takes below its starting cursor: the rule, the
/// prompts and one trailing line.
pub fn signature_block_height(theme: &Theme) -> f32 {
    (SIGNATURE_PROMPTS.len() + 2) as f32 * theme.layout.line_height
}

/// Draws the centered signature area starting at `cursor`: title, a rule to
/// sign on, then the name, role and date prompts one line apart.
pub fn draw_signature_block(canvas: &mut dyn Canvas, theme: &Theme, cursor: f32) -> f32 {
    let layout = &theme.layout;
    let center = canvas.page_size().width / 2.0;
    let mut y = cursor;

    canvas.set_fill_color(theme.palette.body_text);
    canvas.set_font(BuiltinFont::HelveticaBold, theme.typography.signature_title_size);
    canvas.draw_centred_string(center, y, SIGNATURE_TITLE);

    y -= layout.line_height;
    let half = layout.signature_rule_length / 2.0;
    canvas.set_stroke_color(theme.palette.rule);
    canvas.set_line_width(layout.rule_width);
    canvas.line(center - half, y, center + half, y);

    canvas.set_font(BuiltinFont::Helvetica, theme.typography.signature_body_size);
    for prompt in SIGNATURE_PROMPTS {
        y -= layout.line_height;
        canvas.draw_centred_string(center, y, prompt);
    }

    y - layout.line_height
}

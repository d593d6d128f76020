use crate::config::Branding;
use crate::record::StatementRecord;
use fee_report_render_core::{Canvas, ImageData, PaintMode};
use fee_report_style::{BuiltinFont, Theme};
use fee_report_types::Rect;
use log::warn;

/// Paints the colored header band across the top of the page, the optional
/// logo at its left and the three centered branding lines.
///
/// A logo that cannot be embedded is reported and skipped.
pub fn draw_banner(canvas: &mut dyn Canvas, theme: &Theme, branding: &Branding, logo: Option<&ImageData>) {
    let layout = &theme.layout;
    let page = canvas.page_size();

    canvas.set_fill_color(theme.palette.banner);
    canvas.rect(
        Rect::new(0.0, page.height - layout.banner_height, page.width, layout.banner_height),
        PaintMode::Fill,
    );

    if let Some(image) = logo {
        let slot = Rect::new(
            layout.logo_x,
            page.height - layout.logo_top_offset,
            layout.logo_size,
            layout.logo_size,
        );
        if let Err(e) = canvas.draw_image(image, slot.fit_centered(image.size())) {
            warn!("Error al cargar imagen: {}", e);
        }
    }

    canvas.set_fill_color(theme.palette.banner_text);
    let lines = [
        branding.institution.as_str(),
        branding.department.as_str(),
        branding.title.as_str(),
    ];
    for ((text, size), offset) in lines
        .into_iter()
        .zip(theme.typography.banner_sizes)
        .zip(layout.banner_title_offsets)
    {
        canvas.set_font(BuiltinFont::HelveticaBold, size);
        canvas.draw_centred_string(page.width / 2.0, page.height - offset, text);
    }
}

/// Draws the report number and student identity lines below the banner and
/// returns the cursor for the next block.
pub fn draw_identity(canvas: &mut dyn Canvas, theme: &Theme, report_number: &str, record: &StatementRecord) -> f32 {
    let layout = &theme.layout;
    let lines = [
        format!("INFORME ECONÓMICO N° {}", report_number),
        format!("ALUMNO: {}", record.student),
        format!("PROGRAMA: {}", record.program),
        format!("PROMOCIÓN: {}", record.cohort),
    ];

    canvas.set_fill_color(theme.palette.body_text);
    canvas.set_font(BuiltinFont::HelveticaBold, theme.typography.identity_size);

    let mut cursor = canvas.page_size().height - layout.identity_top_offset;
    for (i, line) in lines.iter().enumerate() {
        canvas.draw_string(layout.left_column, cursor, line);
        cursor -= if i + 1 == lines.len() { layout.block_gap } else { layout.line_height };
    }
    cursor
}

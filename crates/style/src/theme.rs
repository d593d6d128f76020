//! The visual configuration handed to every section renderer.
//!
//! A [`Theme`] bundles the palette, type sizes and page geometry so that no
//! renderer reaches for process-wide constants. Every group implements
//! `Default` with the statement's stock look and deserializes with
//! `#[serde(default)]`, so a theme file only needs the keys it overrides.

use crate::dimension::PageSize;
use fee_report_types::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StyleError {
    #[error("Theme parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid value for '{property}': {reason}")]
    InvalidValue { property: String, reason: String },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Palette {
    pub banner: Color,
    pub banner_text: Color,
    pub body_text: Color,
    pub header_background: Color,
    pub header_text: Color,
    pub row_background: Color,
    pub grid: Color,
    pub rule: Color,
}

impl Default for Palette {
    fn default() -> Self {
        let institution_green = Color::rgb(12, 76, 68);
        Self {
            banner: institution_green,
            banner_text: Color::WHITE,
            body_text: Color::BLACK,
            header_background: institution_green,
            header_text: Color::WHITESMOKE,
            row_background: Color::WHITESMOKE,
            grid: Color::BLACK,
            rule: Color::BLACK,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Typography {
    /// Institution, department and report title lines inside the banner.
    pub banner_sizes: [f32; 3],
    pub identity_size: f32,
    pub section_title_size: f32,
    pub body_size: f32,
    pub table_title_size: f32,
    pub cell_size: f32,
    pub cell_leading: f32,
    pub signature_title_size: f32,
    pub signature_body_size: f32,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            banner_sizes: [16.0, 13.0, 12.0],
            identity_size: 14.0,
            section_title_size: 12.0,
            body_size: 11.0,
            table_title_size: 12.0,
            cell_size: 10.0,
            cell_leading: 12.0,
            signature_title_size: 12.0,
            signature_body_size: 11.0,
        }
    }
}

/// Page geometry in points. Vertical offsets are measured down from the
/// page top unless the name says otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    pub page_size: PageSize,
    pub banner_height: f32,
    /// Baselines of the three banner lines.
    pub banner_title_offsets: [f32; 3],
    pub logo_x: f32,
    pub logo_top_offset: f32,
    pub logo_size: f32,
    pub identity_top_offset: f32,
    pub left_column: f32,
    pub value_column: f32,
    pub detail_column: f32,
    pub line_height: f32,
    /// Gap after the identity lines.
    pub block_gap: f32,
    /// Trailing gap after the cost summary.
    pub section_gap: f32,
    pub title_rule_offset: f32,
    pub rule_width: f32,
    pub table_gap_above: f32,
    pub table_gap_below: f32,
    pub cell_padding_x: f32,
    pub cell_padding_top: f32,
    pub cell_padding_bottom: f32,
    pub header_padding_bottom: f32,
    pub grid_line_width: f32,
    /// Cursor floor (from the page bottom) below which a new page starts.
    pub pagination_threshold: f32,
    pub new_page_top_offset: f32,
    /// Lowest point (from the page bottom) the signature block may reach.
    pub bottom_margin: f32,
    pub signature_rule_length: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            banner_height: 80.0,
            banner_title_offsets: [35.0, 55.0, 75.0],
            logo_x: 20.0,
            logo_top_offset: 70.0,
            logo_size: 60.0,
            identity_top_offset: 100.0,
            left_column: 50.0,
            value_column: 250.0,
            detail_column: 400.0,
            line_height: 20.0,
            block_gap: 40.0,
            section_gap: 20.0,
            title_rule_offset: 5.0,
            rule_width: 1.0,
            table_gap_above: 20.0,
            table_gap_below: 20.0,
            cell_padding_x: 6.0,
            cell_padding_top: 3.0,
            cell_padding_bottom: 3.0,
            header_padding_bottom: 10.0,
            grid_line_width: 1.0,
            pagination_threshold: 200.0,
            new_page_top_offset: 50.0,
            bottom_margin: 36.0,
            signature_rule_length: 200.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Theme {
    pub palette: Palette,
    pub typography: Typography,
    pub layout: LayoutConfig,
}

impl Theme {
    /// Rejects geometry that would make the layout arithmetic meaningless.
    pub fn validate(&self) -> Result<(), StyleError> {
        let (width, height) = self.layout.page_size.dimensions_pt();
        if width <= 0.0 || height <= 0.0 {
            return Err(StyleError::InvalidValue {
                property: "layout.pageSize".into(),
                reason: format!("page must have a positive area, got {}x{}", width, height),
            });
        }
        if self.layout.line_height <= 0.0 {
            return Err(StyleError::InvalidValue {
                property: "layout.lineHeight".into(),
                reason: "must be positive".into(),
            });
        }
        if self.layout.bottom_margin < 0.0 || self.layout.bottom_margin >= height {
            return Err(StyleError::InvalidValue {
                property: "layout.bottomMargin".into(),
                reason: format!("must lie within the page height ({})", height),
            });
        }
        if self.layout.pagination_threshold >= height {
            return Err(StyleError::InvalidValue {
                property: "layout.paginationThreshold".into(),
                reason: format!("must be below the page height ({})", height),
            });
        }
        let sizes = [
            self.typography.identity_size,
            self.typography.body_size,
            self.typography.cell_size,
            self.typography.table_title_size,
        ];
        if sizes.iter().any(|s| *s <= 0.0) {
            return Err(StyleError::InvalidValue {
                property: "typography".into(),
                reason: "font sizes must be positive".into(),
            });
        }
        Ok(())
    }
}

//! Section renderers. Each one draws onto a [`Canvas`](fee_report_render_core::Canvas)
//! starting at a vertical cursor and returns the cursor below what it drew.

mod banner;
mod cost_summary;
mod signature;
mod table;

pub use banner::{draw_banner, draw_identity};
pub use cost_summary::{cost_rows, draw_cost_summary, CostRow, COST_SUMMARY_TITLE};
pub use signature::{draw_signature_block, signature_block_height, SIGNATURE_PROMPTS, SIGNATURE_TITLE};
pub use table::{draw_table, Grid, TableMetrics};

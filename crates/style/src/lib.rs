pub mod dimension;
pub mod font;
pub mod metrics;
pub mod theme;

pub use dimension::PageSize;
pub use font::BuiltinFont;
pub use theme::{LayoutConfig, Palette, StyleError, Theme, Typography};

//! Page sizes in PDF points.
use fee_report_types::Size;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Paper the statement is laid out on. Written in theme files either as a
/// name (`"A4"`, `"letter"`) or as `{ "width": .., "height": .. }`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "PageSizeRepr", into = "PageSizeRepr")]
pub enum PageSize {
    #[default]
    A4,
    Letter,
    Custom { width: f32, height: f32 },
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PageSizeRepr {
    Named(String),
    Points { width: f32, height: f32 },
}

impl TryFrom<PageSizeRepr> for PageSize {
    type Error = String;

    fn try_from(repr: PageSizeRepr) -> Result<Self, Self::Error> {
        match repr {
            PageSizeRepr::Named(name) => name.parse(),
            PageSizeRepr::Points { width, height } => Ok(PageSize::Custom { width, height }),
        }
    }
}

impl From<PageSize> for PageSizeRepr {
    fn from(size: PageSize) -> Self {
        match size {
            PageSize::Custom { width, height } => PageSizeRepr::Points { width, height },
            named => PageSizeRepr::Named(named.to_string()),
        }
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("a4") {
            Ok(PageSize::A4)
        } else if s.eq_ignore_ascii_case("letter") {
            Ok(PageSize::Letter)
        } else {
            Err(format!("unknown page size '{}', expected A4, Letter or explicit points", s))
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::A4 => f.write_str("A4"),
            PageSize::Letter => f.write_str("Letter"),
            PageSize::Custom { width, height } => write!(f, "{}x{}pt", width, height),
        }
    }
}

impl PageSize {
    /// Width and height in points.
    pub fn dimensions_pt(&self) -> (f32, f32) {
        match *self {
            PageSize::A4 => (595.28, 841.89),
            PageSize::Letter => (612.0, 792.0),
            PageSize::Custom { width, height } => (width, height),
        }
    }

    pub fn size(&self) -> Size {
        let (width, height) = self.dimensions_pt();
        Size::new(width, height)
    }
}

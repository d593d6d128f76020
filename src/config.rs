//! Run configuration: file locations, branding texts and the theme.

use crate::error::ReportError;
use fee_report_style::{StyleError, Theme};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT: &str = "reporte.json";
pub const DEFAULT_OUTPUT: &str = "reporte_economico_mejorado.pdf";
pub const DEFAULT_LOGO: &str = "20.png";
pub const DEFAULT_REPORT_NUMBER: &str = "-2025-OAE-EPG-UNAP";

/// The three lines printed inside the banner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Branding {
    pub institution: String,
    pub department: String,
    pub title: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            institution: "UNIVERSIDAD NACIONAL DE LA AMAZONIA PERUANA".to_string(),
            department: "CENTRO DE IDIOMAS DE LA UNAP (CI-UNAP)".to_string(),
            title: "REPORTE ECONÓMICO".to_string(),
        }
    }
}

/// A theme file: theme keys at the top level plus an optional `branding` object.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StyleFile {
    #[serde(flatten)]
    theme: Theme,
    branding: Option<Branding>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// `None` draws the banner without a logo.
    pub logo: Option<PathBuf>,
    /// Used when the record carries no `numero_informe`.
    pub report_number: String,
    pub branding: Branding,
    pub theme: Theme,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            logo: Some(PathBuf::from(DEFAULT_LOGO)),
            report_number: DEFAULT_REPORT_NUMBER.to_string(),
            branding: Branding::default(),
            theme: Theme::default(),
        }
    }
}

impl ReportConfig {
    pub fn builder() -> ReportConfigBuilder {
        ReportConfigBuilder::new()
    }
}

/// A builder for [`ReportConfig`]. Every setting starts at the stock value.
#[derive(Debug, Default)]
pub struct ReportConfigBuilder {
    config: ReportConfig,
}

impl ReportConfigBuilder {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_input(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.input = path.into();
        self
    }

    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.output = path.into();
        self
    }

    pub fn with_logo(mut self, path: Option<PathBuf>) -> Self {
        self.config.logo = path;
        self
    }

    pub fn with_report_number(mut self, number: impl Into<String>) -> Self {
        self.config.report_number = number.into();
        self
    }

    /// Loads theme overrides, and branding when present, from a JSON file.
    pub fn with_theme_file(self, path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| {
            io::Error::new(e.kind(), format!("Failed to read theme from '{}': {}", path.display(), e))
        })?;
        self.with_theme_source(&source)
    }

    pub fn with_theme_source(mut self, source: &str) -> Result<Self, ReportError> {
        let file: StyleFile = serde_json::from_str(source).map_err(StyleError::from)?;
        self.config.theme = file.theme;
        if let Some(branding) = file.branding {
            self.config.branding = branding;
        }
        Ok(self)
    }

    pub fn build(self) -> Result<ReportConfig, ReportError> {
        self.config.theme.validate()?;
        Ok(self.config)
    }
}

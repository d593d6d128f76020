use fee_report_render_core::RenderError;
use fee_report_style::StyleError;
use std::path::PathBuf;
use thiserror::Error;

/// Why an input document could not be turned into a JSON object.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("permission denied reading {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed JSON in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("{} does not contain a JSON object", path.display())]
    NotAnObject { path: PathBuf },
}

impl LoadError {
    pub(crate) fn from_io(path: PathBuf, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => LoadError::NotFound { path },
            std::io::ErrorKind::PermissionDenied => LoadError::PermissionDenied { path },
            _ => LoadError::Io { path, source },
        }
    }
}

/// The loaded mapping does not have the shape of an account statement.
#[derive(Error, Debug)]
pub enum RecordError {
    #[error("missing required field '{0}'")]
    MissingField(&'static str),

    #[error("invalid statement record: {0}")]
    Invalid(#[from] serde_json::Error),
}

/// A comprehensive error type for statement generation.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Loading failed: {0}")]
    Load(#[from] LoadError),

    #[error("Record error: {0}")]
    Record(#[from] RecordError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("Theme error: {0}")]
    Style(#[from] StyleError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

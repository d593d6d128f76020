use thiserror::Error;

/// Failures while building or writing a statement document.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PDF serialization failed: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("could not decode image: {0}")]
    Image(#[from] ::image::ImageError),

    /// Sample buffer does not match the declared image dimensions.
    #[error("image buffer holds {actual} bytes, {width}x{height} RGB needs {expected}")]
    ImageBuffer {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}

//! Core drawing abstractions for statement rendering.
//!
//! This crate provides the types every rendering backend shares:
//! - the `Canvas` trait, an immediate-mode page canvas in PDF user space
//! - `ImageData`, decoded raster images ready for embedding
//! - `RenderError`
//! - text encoding helpers

mod error;
mod raster;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use raster::ImageData;
pub use traits::{Canvas, PaintMode};

//! PDF canvas backend using lopdf.
//!
//! `LopdfCanvas` implements the `Canvas` trait by recording PDF content-stream
//! operations per page and assembling the document object graph in memory.

mod canvas;
mod page;

pub use canvas::LopdfCanvas;

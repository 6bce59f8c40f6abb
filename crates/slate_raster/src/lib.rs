//! CPU rasterization of whiteboard shape batches
//!
//! This crate is the rendering half of the whiteboard: it owns the pixel
//! surface and knows how to turn one [`DrawingBatch`] into pixels.
//!
//! - [`Surface`] wraps a tiny-skia pixmap with a fixed size and a white
//!   background, and exports PNG snapshots
//! - [`render`] draws one shape and reports a per-shape [`RenderOutcome`]
//! - [`replay`] clears the surface and replays a whole batch in z-order,
//!   isolating failures at shape granularity: one malformed shape never
//!   aborts the batch
//!
//! [`DrawingBatch`]: slate_shapes::DrawingBatch

mod interpreter;
mod pipeline;
mod surface;
mod text;

pub use interpreter::{render, RenderOutcome};
pub use pipeline::{replay, RenderReport};
pub use surface::{Surface, WHITEBOARD_HEIGHT, WHITEBOARD_WIDTH};

use thiserror::Error;

/// Errors from surface management and PNG export.
#[derive(Debug, Error)]
pub enum RasterError {
    /// Surface dimensions must be non-zero.
    #[error("invalid surface dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding or file write failed.
    #[error("PNG export failed: {0}")]
    Png(String),
}

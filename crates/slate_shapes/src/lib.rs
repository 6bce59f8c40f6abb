//! Shape descriptor model for the Slate whiteboard
//!
//! The remote drawing service answers each request with a JSON list of
//! loosely-typed shape descriptors. This crate turns that list into a
//! closed, fully-populated data model:
//!
//! - [`RawShape`] mirrors the wire record (every field optional)
//! - [`ShapeDescriptor::classify`] validates a raw record, fills defaults,
//!   and produces a typed variant (or [`SkipReason`] for bad records)
//! - [`DrawingBatch`] is one ordered drawing response; order is z-order
//!
//! Decoding is defensive throughout: an unrecognized `type`, a missing
//! field, or a field of the wrong JSON type marks that one shape as
//! skippable and never aborts the batch.

mod batch;
mod color;
mod descriptor;
mod raw;

pub use batch::DrawingBatch;
pub use color::Color;
pub use descriptor::{
    CircleShape, LineShape, RectShape, ShapeDescriptor, SkipReason, TextShape,
};
pub use raw::RawShape;

/// Default stroke width when the wire record omits `strokeWidth`.
pub const DEFAULT_STROKE_WIDTH: f32 = 2.0;

/// Default font size when the wire record omits `fontSize`.
pub const DEFAULT_FONT_SIZE: f32 = 20.0;

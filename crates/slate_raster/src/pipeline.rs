//! Batch replay with per-shape failure isolation
//!
//! The batch is the unit of request/response; the shape is the unit of
//! failure. Replay clears the surface, walks the batch in stored order
//! (stored order is z-order) and records one outcome per shape, always
//! continuing to the next shape. A batch with one bad shape among fifty
//! still renders the other forty-nine.

use slate_shapes::DrawingBatch;

use crate::interpreter::{render, RenderOutcome};
use crate::surface::Surface;

/// Aggregated outcome of replaying one batch, indexed by shape position.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderReport {
    pub outcomes: Vec<RenderOutcome>,
}

impl RenderReport {
    /// Number of shapes whose drawing calls were issued.
    pub fn drawn(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_drawn()).count()
    }

    /// Number of shapes skipped (unknown kind or invalid field).
    pub fn skipped(&self) -> usize {
        self.outcomes.len() - self.drawn()
    }
}

/// Clear the surface to opaque white and replay the batch in z-order.
pub fn replay(surface: &mut Surface, batch: &DrawingBatch) -> RenderReport {
    surface.clear();

    let outcomes = batch
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            let outcome = render(surface, raw);
            if let RenderOutcome::Skipped(reason) = &outcome {
                tracing::debug!(index, %reason, "skipped shape");
            }
            outcome
        })
        .collect();

    RenderReport { outcomes }
}

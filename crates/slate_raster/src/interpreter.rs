//! Shape interpreter: one descriptor in, one drawing side effect out
//!
//! Matches the conventional 2D-canvas semantics the drawing service is
//! prompted against: fill happens before stroke, circles are addressed by
//! bounding-box origin, text sits on the `top + fontSize` baseline.
//! Classification failures come back as [`RenderOutcome::Skipped`] and
//! leave the surface untouched.

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};

use slate_shapes::{
    CircleShape, Color, LineShape, RawShape, RectShape, ShapeDescriptor, SkipReason,
};

use crate::surface::Surface;
use crate::text;

/// Per-shape result of attempting to render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderOutcome {
    /// The shape was interpreted and its drawing calls were issued.
    /// Degenerate geometry (zero-area box, non-positive radius) still
    /// counts as drawn; it just leaves no visible mark.
    Drawn,
    /// The shape was not drawable; the surface was not touched.
    Skipped(SkipReason),
}

impl RenderOutcome {
    pub fn is_drawn(&self) -> bool {
        matches!(self, RenderOutcome::Drawn)
    }
}

/// Render one raw shape onto the surface.
pub fn render(surface: &mut Surface, raw: &RawShape) -> RenderOutcome {
    match ShapeDescriptor::classify(raw) {
        Ok(ShapeDescriptor::Rectangle(rect)) => {
            draw_rectangle(surface.pixmap_mut(), &rect);
            RenderOutcome::Drawn
        }
        Ok(ShapeDescriptor::Circle(circle)) => {
            draw_circle(surface.pixmap_mut(), &circle);
            RenderOutcome::Drawn
        }
        Ok(ShapeDescriptor::Line(line)) => {
            draw_line(surface.pixmap_mut(), &line);
            RenderOutcome::Drawn
        }
        Ok(ShapeDescriptor::Text(text_shape)) => {
            text::painter().draw(surface.pixmap_mut(), &text_shape);
            RenderOutcome::Drawn
        }
        Ok(ShapeDescriptor::Unknown { kind }) => {
            RenderOutcome::Skipped(SkipReason::UnknownKind(kind))
        }
        Err(reason) => RenderOutcome::Skipped(reason),
    }
}

fn draw_rectangle(pixmap: &mut Pixmap, shape: &RectShape) {
    // Canvas semantics: negative extents draw toward the origin.
    let (left, width) = normalize(shape.left, shape.width);
    let (top, height) = normalize(shape.top, shape.height);

    let Some(rect) = Rect::from_xywh(left, top, width, height) else {
        // Zero-area box: a degenerate, invisible mark.
        return;
    };

    let mut paint = Paint::default();
    paint.set_color(to_skia(shape.fill));
    paint.anti_alias = true;
    pixmap.fill_rect(rect, &paint, Transform::identity(), None);

    if shape.stroke_width > 0.0 {
        let mut pb = PathBuilder::new();
        pb.push_rect(rect);
        if let Some(path) = pb.finish() {
            paint.set_color(to_skia(shape.stroke));
            let stroke = Stroke {
                width: shape.stroke_width,
                ..Stroke::default()
            };
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }
}

fn draw_circle(pixmap: &mut Pixmap, shape: &CircleShape) {
    let (cx, cy) = shape.center();

    let mut pb = PathBuilder::new();
    pb.push_circle(cx, cy, shape.radius);
    // radius <= 0 leaves the builder empty: a degenerate mark, not an error.
    let Some(path) = pb.finish() else { return };

    let mut paint = Paint::default();
    paint.set_color(to_skia(shape.fill));
    paint.anti_alias = true;
    pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);

    if shape.stroke_width > 0.0 {
        paint.set_color(to_skia(shape.stroke));
        let stroke = Stroke {
            width: shape.stroke_width,
            ..Stroke::default()
        };
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }
}

fn draw_line(pixmap: &mut Pixmap, shape: &LineShape) {
    if shape.stroke_width <= 0.0 {
        return;
    }

    let mut pb = PathBuilder::new();
    pb.move_to(shape.x1, shape.y1);
    pb.line_to(shape.x2, shape.y2);
    let Some(path) = pb.finish() else { return };

    let mut paint = Paint::default();
    paint.set_color(to_skia(shape.stroke));
    paint.anti_alias = true;
    let stroke = Stroke {
        width: shape.stroke_width,
        ..Stroke::default()
    };
    pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
}

fn normalize(origin: f32, extent: f32) -> (f32, f32) {
    if extent < 0.0 {
        (origin + extent, -extent)
    } else {
        (origin, extent)
    }
}

pub(crate) fn to_skia(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba(color.r, color.g, color.b, color.a)
        .unwrap_or(tiny_skia::Color::BLACK)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> RawShape {
        RawShape::from_value(&value)
    }

    #[test]
    fn valid_rectangle_is_drawn_and_mutates_surface() {
        let mut surface = Surface::new(100, 100).unwrap();
        let before = surface.data().to_vec();
        let outcome = render(
            &mut surface,
            &raw(json!({"type": "rectangle", "left": 10, "top": 10, "width": 50, "height": 20})),
        );
        assert_eq!(outcome, RenderOutcome::Drawn);
        assert_ne!(surface.data(), &before[..]);
    }

    #[test]
    fn rectangle_fills_then_strokes() {
        let mut surface = Surface::new(100, 100).unwrap();
        render(
            &mut surface,
            &raw(json!({
                "type": "rectangle", "left": 10, "top": 10, "width": 50, "height": 20,
                "fill": "#ff0000"
            })),
        );
        // Interior is the red fill.
        assert_eq!(surface.pixel(35, 20), Some([255, 0, 0, 255]));
        // Border center line is the default black 2px stroke.
        assert_eq!(surface.pixel(10, 20), Some([0, 0, 0, 255]));
        // Well outside stays white.
        assert_eq!(surface.pixel(80, 80), Some([255, 255, 255, 255]));
    }

    #[test]
    fn circle_center_is_bounding_box_origin_plus_radius() {
        let mut surface = Surface::new(100, 100).unwrap();
        let outcome = render(
            &mut surface,
            &raw(json!({"type": "circle", "left": 0, "top": 0, "radius": 10})),
        );
        assert_eq!(outcome, RenderOutcome::Drawn);
        // Filled black disc centered at (10, 10).
        assert_eq!(surface.pixel(10, 10), Some([0, 0, 0, 255]));
        assert_eq!(surface.pixel(5, 10), Some([0, 0, 0, 255]));
        // Outside the radius stays white.
        assert_eq!(surface.pixel(30, 30), Some([255, 255, 255, 255]));
    }

    #[test]
    fn degenerate_circle_is_drawn_but_invisible() {
        let mut surface = Surface::new(50, 50).unwrap();
        let before = surface.data().to_vec();
        let outcome = render(
            &mut surface,
            &raw(json!({"type": "circle", "left": 10, "top": 10, "radius": 0})),
        );
        assert_eq!(outcome, RenderOutcome::Drawn);
        assert_eq!(surface.data(), &before[..]);
    }

    #[test]
    fn line_strokes_between_endpoints() {
        let mut surface = Surface::new(100, 100).unwrap();
        let outcome = render(
            &mut surface,
            &raw(json!({"type": "line", "x1": 10, "y1": 50, "x2": 90, "y2": 50, "strokeWidth": 4})),
        );
        assert_eq!(outcome, RenderOutcome::Drawn);
        assert_eq!(surface.pixel(50, 50), Some([0, 0, 0, 255]));
        assert_eq!(surface.pixel(50, 10), Some([255, 255, 255, 255]));
    }

    #[test]
    fn zero_stroke_width_line_draws_with_default_width() {
        let mut surface = Surface::new(100, 100).unwrap();
        let outcome = render(
            &mut surface,
            &raw(json!({"type": "line", "x1": 10, "y1": 50, "x2": 90, "y2": 50, "strokeWidth": 0})),
        );
        // An explicit zero coalesces to the 2px default, so the line
        // is actually visible, not a silent no-op.
        assert_eq!(outcome, RenderOutcome::Drawn);
        assert_eq!(surface.pixel(50, 50), Some([0, 0, 0, 255]));
    }

    #[test]
    fn text_is_drawn_and_mutates_surface() {
        let mut surface = Surface::new(200, 100).unwrap();
        let before = surface.data().to_vec();
        let outcome = render(
            &mut surface,
            &raw(json!({"type": "text", "left": 10, "top": 10, "text": "Ax", "fontSize": 40})),
        );
        assert_eq!(outcome, RenderOutcome::Drawn);
        // Either real glyphs or the tofu fallback must leave a mark.
        assert_ne!(surface.data(), &before[..]);
    }

    #[test]
    fn unknown_kind_is_skipped_and_surface_unchanged() {
        let mut surface = Surface::new(50, 50).unwrap();
        let before = surface.data().to_vec();
        let outcome = render(&mut surface, &raw(json!({"type": "triangle", "left": 1})));
        assert_eq!(
            outcome,
            RenderOutcome::Skipped(SkipReason::UnknownKind("triangle".into()))
        );
        assert_eq!(surface.data(), &before[..]);
    }

    #[test]
    fn missing_required_field_is_skipped_and_surface_unchanged() {
        let mut surface = Surface::new(50, 50).unwrap();
        let before = surface.data().to_vec();
        let outcome = render(
            &mut surface,
            &raw(json!({"type": "rectangle", "left": 1, "top": 2, "height": 3})),
        );
        assert_eq!(
            outcome,
            RenderOutcome::Skipped(SkipReason::InvalidField("width"))
        );
        assert_eq!(surface.data(), &before[..]);
    }

    #[test]
    fn negative_extent_rectangle_draws_toward_origin() {
        let mut surface = Surface::new(100, 100).unwrap();
        render(
            &mut surface,
            &raw(json!({
                "type": "rectangle", "left": 60, "top": 60, "width": -40, "height": -40,
                "fill": "#00ff00"
            })),
        );
        assert_eq!(surface.pixel(40, 40), Some([0, 255, 0, 255]));
    }
}

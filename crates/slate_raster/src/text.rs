//! Single-line text painting
//!
//! Draws a [`TextShape`] the way a browser canvas `fillText` call would: one line,
//! left-anchored, baseline at `top + fontSize`, default sans-serif face.
//! Glyph outlines come from ttf-parser and are filled as tiny-skia paths;
//! a process-wide painter holds the discovered font bytes so the system
//! font lookup happens once.
//!
//! Headless hosts may have no fonts at all. In that case (and for glyphs
//! the face lacks) we draw placeholder "tofu" boxes so text still leaves a
//! visible mark on the surface.

use std::path::Path;
use std::sync::OnceLock;

use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

use slate_shapes::TextShape;

use crate::interpreter::to_skia;

/// Essential faces probed by path before falling back to a full system
/// font scan.
const KNOWN_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
];

static PAINTER: OnceLock<TextPainter> = OnceLock::new();

/// Shared painter, initialized on first text draw.
pub(crate) fn painter() -> &'static TextPainter {
    PAINTER.get_or_init(TextPainter::discover)
}

struct FontData {
    bytes: Vec<u8>,
    index: u32,
}

pub(crate) struct TextPainter {
    font: Option<FontData>,
}

impl TextPainter {
    /// Locate a sans-serif face: known paths first, then a full system
    /// scan, then any face at all. `font` stays `None` on font-less hosts.
    fn discover() -> Self {
        let mut db = fontdb::Database::new();
        for path in KNOWN_FONT_PATHS {
            if Path::new(path).exists() {
                db.load_font_file(path).ok();
            }
        }

        let query = fontdb::Query {
            families: &[fontdb::Family::SansSerif],
            weight: fontdb::Weight::NORMAL,
            stretch: fontdb::Stretch::Normal,
            style: fontdb::Style::Normal,
        };
        let id = db.query(&query).or_else(|| {
            db.load_system_fonts();
            db.query(&query)
                .or_else(|| db.faces().next().map(|face| face.id))
        });

        let font = id.and_then(|id| {
            db.with_face_data(id, |data, index| FontData {
                bytes: data.to_vec(),
                index,
            })
        });

        match &font {
            Some(f) => tracing::debug!(index = f.index, "text painter found a font face"),
            None => tracing::warn!("no usable font found, text will render as placeholder boxes"),
        }
        Self { font }
    }

    pub(crate) fn draw(&self, pixmap: &mut Pixmap, shape: &TextShape) {
        let mut paint = Paint::default();
        paint.set_color(to_skia(shape.fill));
        paint.anti_alias = true;

        let size = shape.font_size;
        let baseline = shape.baseline();
        let mut pen_x = shape.left;

        let face = self
            .font
            .as_ref()
            .and_then(|f| ttf_parser::Face::parse(&f.bytes, f.index).ok());

        for ch in shape.text.chars() {
            if ch.is_whitespace() {
                pen_x += size * 0.3;
                continue;
            }
            pen_x += match &face {
                Some(face) => match face.glyph_index(ch) {
                    Some(glyph) => {
                        draw_glyph(pixmap, &paint, face, glyph, size, pen_x, baseline)
                    }
                    None => draw_tofu(pixmap, shape, pen_x, baseline),
                },
                None => draw_tofu(pixmap, shape, pen_x, baseline),
            };
        }
    }
}

/// Fill one glyph outline; returns the advance in pixels.
fn draw_glyph(
    pixmap: &mut Pixmap,
    paint: &Paint,
    face: &ttf_parser::Face,
    glyph: ttf_parser::GlyphId,
    size: f32,
    pen_x: f32,
    baseline: f32,
) -> f32 {
    let scale = size / face.units_per_em() as f32;

    let mut sink = PathSink(PathBuilder::new());
    if face.outline_glyph(glyph, &mut sink).is_some() {
        if let Some(path) = sink.0.finish() {
            // Glyph outlines are y-up in font units; flip and place the pen.
            let transform = Transform::from_row(scale, 0.0, 0.0, -scale, pen_x, baseline);
            pixmap.fill_path(&path, paint, FillRule::Winding, transform, None);
        }
    }

    let advance = face
        .glyph_hor_advance(glyph)
        .map(|units| units as f32 * scale)
        .unwrap_or(0.0);
    if advance > 0.0 {
        advance
    } else {
        size * 0.6
    }
}

/// Stroke a placeholder box for a missing glyph or missing font; returns
/// the advance in pixels.
fn draw_tofu(pixmap: &mut Pixmap, shape: &TextShape, pen_x: f32, baseline: f32) -> f32 {
    let size = shape.font_size;
    let mut paint = Paint::default();
    paint.set_color(to_skia(shape.fill));
    paint.anti_alias = true;

    if let Some(rect) = tiny_skia::Rect::from_xywh(
        pen_x + size * 0.08,
        baseline - size * 0.7,
        size * 0.48,
        size * 0.7,
    ) {
        let mut pb = PathBuilder::new();
        pb.push_rect(rect);
        if let Some(path) = pb.finish() {
            let stroke = Stroke {
                width: (size / 12.0).max(1.0),
                ..Stroke::default()
            };
            pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }
    size * 0.64
}

struct PathSink(PathBuilder);

impl ttf_parser::OutlineBuilder for PathSink {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.0.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.0.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.0.close();
    }
}

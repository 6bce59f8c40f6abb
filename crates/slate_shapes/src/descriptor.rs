//! Classification of raw wire shapes into a closed descriptor type
//!
//! Default filling and validation happen here, once, so everything past
//! this point (the interpreter in particular) works on fully-populated
//! records and never reaches for an inline fallback.

use thiserror::Error;

use crate::color::Color;
use crate::raw::RawShape;
use crate::{DEFAULT_FONT_SIZE, DEFAULT_STROKE_WIDTH};

/// Why a shape was not classified into a drawable variant.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SkipReason {
    /// A field the variant requires is absent, not a number, or not finite.
    #[error("invalid field: {0}")]
    InvalidField(&'static str),
    /// The `type` discriminant is not one we draw.
    #[error("unknown shape type: {0}")]
    UnknownKind(String),
}

/// An axis-aligned rectangle; `left`/`top` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectShape {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f32,
}

/// A circle addressed by its bounding-box origin: the center is at
/// `(left + radius, top + radius)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleShape {
    pub left: f32,
    pub top: f32,
    pub radius: f32,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f32,
}

impl CircleShape {
    /// Effective drawing center.
    pub fn center(&self) -> (f32, f32) {
        (self.left + self.radius, self.top + self.radius)
    }
}

/// A straight stroked segment. Lines have no fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LineShape {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub stroke: Color,
    pub stroke_width: f32,
}

/// A single line of text, left-anchored at `left`, with the baseline at
/// `top + font_size` (`top` is the top of the text block).
#[derive(Clone, Debug, PartialEq)]
pub struct TextShape {
    pub left: f32,
    pub top: f32,
    pub text: String,
    pub fill: Color,
    pub font_size: f32,
}

impl TextShape {
    pub fn baseline(&self) -> f32 {
        self.top + self.font_size
    }
}

/// The closed union of everything the interpreter knows how to draw,
/// plus `Unknown` so unrecognized wire types classify instead of erroring.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeDescriptor {
    Rectangle(RectShape),
    Circle(CircleShape),
    Line(LineShape),
    Text(TextShape),
    Unknown { kind: String },
}

impl ShapeDescriptor {
    /// Classify a raw wire shape, populating defaults.
    ///
    /// Recognized kinds with a missing or non-finite required field fail
    /// with [`SkipReason::InvalidField`]; unrecognized kinds succeed as
    /// [`ShapeDescriptor::Unknown`] so the caller can skip them without
    /// treating them as decode failures.
    pub fn classify(raw: &RawShape) -> Result<Self, SkipReason> {
        match raw.kind.as_str() {
            "rectangle" => Ok(Self::Rectangle(RectShape {
                left: require(raw.left, "left")?,
                top: require(raw.top, "top")?,
                width: require(raw.width, "width")?,
                height: require(raw.height, "height")?,
                fill: style(&raw.fill),
                stroke: style(&raw.stroke),
                stroke_width: stroke_width(raw),
            })),
            "circle" => Ok(Self::Circle(CircleShape {
                left: require(raw.left, "left")?,
                top: require(raw.top, "top")?,
                radius: require(raw.radius, "radius")?,
                fill: style(&raw.fill),
                stroke: style(&raw.stroke),
                stroke_width: stroke_width(raw),
            })),
            "line" => Ok(Self::Line(LineShape {
                x1: require(raw.x1, "x1")?,
                y1: require(raw.y1, "y1")?,
                x2: require(raw.x2, "x2")?,
                y2: require(raw.y2, "y2")?,
                stroke: style(&raw.stroke),
                stroke_width: stroke_width(raw),
            })),
            "text" => Ok(Self::Text(TextShape {
                left: require(raw.left, "left")?,
                top: require(raw.top, "top")?,
                text: raw
                    .text
                    .clone()
                    .ok_or(SkipReason::InvalidField("text"))?,
                fill: style(&raw.fill),
                font_size: match raw.font_size {
                    // Optional fields never invalidate a shape; a non-finite
                    // or non-positive size falls back like an absent one.
                    Some(size) if size.is_finite() && size > 0.0 => size as f32,
                    _ => DEFAULT_FONT_SIZE,
                },
            })),
            other => Ok(Self::Unknown {
                kind: other.to_owned(),
            }),
        }
    }
}

fn require(field: Option<f64>, name: &'static str) -> Result<f32, SkipReason> {
    match field {
        Some(v) if v.is_finite() => Ok(v as f32),
        _ => Err(SkipReason::InvalidField(name)),
    }
}

/// Optional CSS color, defaulting to opaque black. An unparseable string
/// also falls back to the default; styling never invalidates a shape.
fn style(field: &Option<String>) -> Color {
    field
        .as_deref()
        .and_then(Color::parse)
        .unwrap_or(Color::BLACK)
}

/// Zero and negative widths coalesce to the default, so a classified
/// shape always carries a strokeable width.
fn stroke_width(raw: &RawShape) -> f32 {
    match raw.stroke_width {
        Some(w) if w.is_finite() && w > 0.0 => w as f32,
        _ => DEFAULT_STROKE_WIDTH,
    }
}

//! Loosely-typed wire record
//!
//! One element of the `shapes` array as the service actually sends it:
//! a `type` discriminant plus whatever fields the model chose to emit.
//! Fields are read individually from the JSON value, so a single field of
//! the wrong type costs only that field, not the whole shape (and never
//! the batch).

use serde_json::Value;

/// One shape as received on the wire, before classification.
///
/// Every field is optional; [`ShapeDescriptor::classify`] decides which
/// ones a given `kind` actually requires.
///
/// [`ShapeDescriptor::classify`]: crate::ShapeDescriptor::classify
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawShape {
    /// The `type` discriminant. Empty when absent or not a string.
    pub kind: String,
    pub left: Option<f64>,
    pub top: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub radius: Option<f64>,
    pub x1: Option<f64>,
    pub y1: Option<f64>,
    pub x2: Option<f64>,
    pub y2: Option<f64>,
    pub text: Option<String>,
    pub font_size: Option<f64>,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
}

impl RawShape {
    /// Extract a raw shape from a JSON value. Total: anything that is not
    /// an object yields a record with an empty `kind`, which classifies as
    /// an unknown shape type downstream.
    pub fn from_value(value: &Value) -> Self {
        let num = |name: &str| value.get(name).and_then(Value::as_f64);
        let string = |name: &str| {
            value
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_owned)
        };
        Self {
            kind: string("type").unwrap_or_default(),
            left: num("left"),
            top: num("top"),
            width: num("width"),
            height: num("height"),
            radius: num("radius"),
            x1: num("x1"),
            y1: num("y1"),
            x2: num("x2"),
            y2: num("y2"),
            text: string("text"),
            font_size: num("fontSize"),
            fill: string("fill"),
            stroke: string("stroke"),
            stroke_width: num("strokeWidth"),
        }
    }
}

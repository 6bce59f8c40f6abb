//! Drawing batch: one ordered response from the drawing service
//!
//! The envelope is `{ "shapes": [ ... ], "description": "..." }`. A body
//! where `shapes` is missing or not an array decodes to an empty batch:
//! the whiteboard clears and draws nothing rather than failing the
//! request.

use serde_json::Value;

use crate::raw::RawShape;

/// An immutable, ordered sequence of raw shapes from one drawing request.
/// Stored order is z-order: later shapes paint over earlier ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DrawingBatch {
    shapes: Vec<RawShape>,
    /// Free-text description the service sends alongside the shapes.
    pub description: Option<String>,
}

impl DrawingBatch {
    /// Decode a response envelope.
    pub fn from_json_value(value: &Value) -> Self {
        let shapes = match value.get("shapes").and_then(Value::as_array) {
            Some(items) => {
                tracing::debug!(count = items.len(), "decoding drawing batch");
                items.iter().map(RawShape::from_value).collect()
            }
            None => {
                tracing::debug!("response has no shapes array, treating batch as empty");
                Vec::new()
            }
        };
        Self {
            shapes,
            description: value
                .get("description")
                .and_then(Value::as_str)
                .map(str::to_owned),
        }
    }

    /// Decode an envelope from raw JSON bytes (e.g. a saved batch file).
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_slice(bytes)?;
        Ok(Self::from_json_value(&value))
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RawShape> {
        self.shapes.iter()
    }
}

impl<'a> IntoIterator for &'a DrawingBatch {
    type Item = &'a RawShape;
    type IntoIter = std::slice::Iter<'a, RawShape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_envelope_in_order() {
        let batch = DrawingBatch::from_json_value(&json!({
            "shapes": [
                {"type": "line", "x1": 0, "y1": 0, "x2": 1, "y2": 1},
                {"type": "circle", "left": 0, "top": 0, "radius": 5}
            ],
            "description": "a line and a circle"
        }));
        assert_eq!(batch.len(), 2);
        let kinds: Vec<_> = batch.iter().map(|s| s.kind.as_str()).collect();
        assert_eq!(kinds, ["line", "circle"]);
        assert_eq!(batch.description.as_deref(), Some("a line and a circle"));
    }

    #[test]
    fn missing_shapes_is_empty_batch() {
        assert!(DrawingBatch::from_json_value(&json!({})).is_empty());
        assert!(DrawingBatch::from_json_value(&json!({"shapes": null})).is_empty());
        assert!(DrawingBatch::from_json_value(&json!({"shapes": "nope"})).is_empty());
    }

    #[test]
    fn malformed_elements_are_kept_as_unclassifiable_shapes() {
        // One bad element must not shorten the batch; index mapping between
        // shapes and render outcomes depends on it.
        let batch = DrawingBatch::from_json_value(&json!({
            "shapes": [
                {"type": "line", "x1": 0, "y1": 0, "x2": 1, "y2": 1},
                42,
                {"type": "circle", "left": 0, "top": 0, "radius": 5}
            ]
        }));
        assert_eq!(batch.len(), 3);
        assert_eq!(batch.iter().nth(1).unwrap().kind, "");
    }

    #[test]
    fn from_slice_rejects_non_json() {
        assert!(DrawingBatch::from_slice(b"not json").is_err());
        let batch = DrawingBatch::from_slice(br#"{"shapes": []}"#).unwrap();
        assert!(batch.is_empty());
    }
}

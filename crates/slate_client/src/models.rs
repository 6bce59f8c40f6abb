//! Request/response models mirroring the service's wire format

use serde::{Deserialize, Serialize};

/// Body of `POST /api/whiteboard/draw`.
#[derive(Clone, Debug, Serialize)]
pub struct DrawRequest {
    /// Free-text description of what to draw.
    pub request: String,
    pub canvas_width: u32,
    pub canvas_height: u32,
}

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest {
    pub message: String,
    /// Full prior conversation, when the caller keeps one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

/// Response of `POST /api/chat`.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub latex_expressions: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn draw_request_serializes_to_service_shape() {
        let body = serde_json::to_value(DrawRequest {
            request: "draw a circle".into(),
            canvas_width: 800,
            canvas_height: 600,
        })
        .unwrap();
        assert_eq!(
            body,
            json!({"request": "draw a circle", "canvas_width": 800, "canvas_height": 600})
        );
    }

    #[test]
    fn chat_request_omits_absent_context() {
        let body = serde_json::to_value(ChatRequest {
            message: "hi".into(),
            context: None,
        })
        .unwrap();
        assert_eq!(body, json!({"message": "hi"}));
    }

    #[test]
    fn chat_reply_defaults_list_fields() {
        let reply: ChatReply =
            serde_json::from_value(json!({"response": "hello"})).unwrap();
        assert_eq!(reply.response, "hello");
        assert!(reply.subject.is_empty());
        assert!(reply.latex_expressions.is_empty());
        assert!(reply.suggestions.is_empty());
    }
}

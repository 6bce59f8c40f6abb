//! The typed HTTP client

use serde_json::Value;

use slate_shapes::DrawingBatch;

use crate::error::ClientError;
use crate::models::{ChatReply, ChatRequest, DrawRequest};

/// Client for the drawing and chat endpoints of one service instance.
#[derive(Clone, Debug)]
pub struct WhiteboardClient {
    http: reqwest::Client,
    base_url: String,
}

impl WhiteboardClient {
    /// Create a client for the service at `base_url` (no trailing slash
    /// required).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    /// Request a drawing for a free-text description.
    ///
    /// Non-success statuses and network failures are
    /// [`ClientError::Transport`]; a non-JSON body is
    /// [`ClientError::Decode`]. A JSON body without a usable `shapes`
    /// array yields an empty batch.
    pub async fn request_drawing(
        &self,
        request: &str,
        canvas_width: u32,
        canvas_height: u32,
    ) -> Result<DrawingBatch, ClientError> {
        let url = format!("{}/api/whiteboard/draw", self.base_url);
        tracing::debug!(%url, request, "requesting drawing");

        let body = DrawRequest {
            request: request.to_owned(),
            canvas_width,
            canvas_height,
        };
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let value: Value = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;
        let batch = DrawingBatch::from_json_value(&value);
        tracing::debug!(shapes = batch.len(), "drawing batch received");
        Ok(batch)
    }

    /// One chat round trip.
    pub async fn chat(
        &self,
        message: &str,
        context: Option<&str>,
    ) -> Result<ChatReply, ClientError> {
        let url = format!("{}/api/chat", self.base_url);
        tracing::debug!(%url, "sending chat message");

        let body = ChatRequest {
            message: message.to_owned(),
            context: context.map(str::to_owned),
        };
        let response = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }
}

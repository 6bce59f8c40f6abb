//! HTTP boundary to the remote AI service
//!
//! The whiteboard's intelligence lives in an external HTTP service; this
//! crate is the typed boundary around it. Two endpoints matter:
//!
//! - `POST /api/whiteboard/draw`: free-text request in, [`DrawingBatch`]
//!   out
//! - `POST /api/chat`: chat message (plus optional conversation context)
//!   in, [`ChatReply`] out
//!
//! Failure posture follows the rendering side: network and HTTP failures
//! are [`ClientError::Transport`], a body that is not JSON at all is
//! [`ClientError::Decode`], and a JSON body whose `shapes` list is missing
//! or not an array decodes to an *empty* batch rather than an error.
//!
//! [`DrawingBatch`]: slate_shapes::DrawingBatch

mod client;
mod error;
mod models;

pub use client::WhiteboardClient;
pub use error::ClientError;
pub use models::{ChatReply, ChatRequest, DrawRequest};

/// Default base URL of the local development service.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

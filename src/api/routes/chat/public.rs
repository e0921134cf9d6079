//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::openai::Message;

#[derive(Deserialize)]
pub struct ChatRequest {
    // Omitting the session ID starts a new session
    pub session_id: Option<String>,
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub session_id: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatTranscriptResponse {
    pub transcript: Vec<Message>,
}

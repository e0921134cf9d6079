//! Public types for the status API
use serde::Serialize;

#[derive(Serialize)]
pub struct StatusResponse {
    pub ready: bool,
    // The specific startup failure, shown to the user when the chat
    // feature is disabled
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

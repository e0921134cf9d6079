use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::ai::chat::Transcript;
use crate::core::{AppConfig, ChatFeature};

/// Shared server state.
///
/// Transcripts are in-memory only and live for the lifetime of the
/// process. Each session's transcript sits behind its own async mutex
/// which is held across the completion call, so turns within a
/// session are strictly serialized and replies land in submission
/// order.
pub struct AppState {
    pub feature: Arc<ChatFeature>,
    pub config: AppConfig,
    pub sessions: HashMap<String, Arc<Mutex<Transcript>>>,
}

impl AppState {
    pub fn new(feature: ChatFeature, config: AppConfig) -> Self {
        Self {
            feature: Arc::new(feature),
            config,
            sessions: HashMap::new(),
        }
    }

    /// Get the transcript for a session, creating it on first use.
    pub fn session(&mut self, id: &str) -> Arc<Mutex<Transcript>> {
        Arc::clone(self.sessions.entry(id.to_string()).or_default())
    }
}

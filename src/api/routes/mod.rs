//! API routes module

pub mod chat;
pub mod questions;
pub mod status;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Chat routes
        .nest("/chat", chat::router())
        // Sample question shortcuts
        .nest("/questions", questions::router())
        // Feature status for the UI
        .nest("/status", status::router())
}

//! Router for the status API

use std::sync::{Arc, RwLock};

use axum::{Router, extract::State, response::Json, routing::get};

use super::public;
use crate::api::state::AppState;
use crate::core::ChatFeature;

type SharedState = Arc<RwLock<AppState>>;

/// Report whether the chat feature is usable so the UI can disable
/// input and surface the exact startup failure
async fn status(State(state): State<SharedState>) -> Json<public::StatusResponse> {
    let feature = {
        let shared_state = state.read().expect("Unable to read shared state");
        Arc::clone(&shared_state.feature)
    };

    let response = match feature.as_ref() {
        ChatFeature::Ready { .. } => public::StatusResponse {
            ready: true,
            reason: None,
        },
        ChatFeature::Disabled(reason) => public::StatusResponse {
            ready: false,
            reason: Some(reason.to_string()),
        },
    };

    Json(response)
}

/// Create the status router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(status))
}

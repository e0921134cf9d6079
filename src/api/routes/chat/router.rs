//! Router for the chat API

use std::sync::{Arc, RwLock};

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use uuid::Uuid;

use super::public;
use crate::ai::chat::Chat;
use crate::api::state::AppState;
use crate::core::ChatFeature;
use crate::openai::{Message, Role};

type SharedState = Arc<RwLock<AppState>>;

/// Get the full transcript of a chat session by ID
async fn chat_session(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let session = {
        let shared_state = state.read().expect("Unable to read shared state");
        shared_state.sessions.get(&id).map(Arc::clone)
    };

    let Some(session) = session else {
        return Ok((
            StatusCode::NOT_FOUND,
            format!("Chat session {} not found", id),
        )
            .into_response());
    };

    let transcript = session.lock().await.messages();
    Ok(axum::Json(public::ChatTranscriptResponse { transcript }).into_response())
}

/// Run one turn of chat: append the user's message, get the model's
/// reply (or the failure converted to a readable reply), and append
/// that too. The session's transcript lock is held across the remote
/// call so a second submission can't interleave with a pending one.
async fn chat_handler(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::ChatRequest>,
) -> Result<impl IntoResponse, crate::api::public::ApiError> {
    let session_id = payload
        .session_id
        .unwrap_or_else(|| Uuid::new_v4().to_string());

    let (feature, config) = {
        let shared_state = state.read().expect("Unable to read shared state");
        (Arc::clone(&shared_state.feature), shared_state.config.clone())
    };

    // Fail closed: while disabled no transcript is created and no
    // network call is ever attempted
    let (api_key, corpus) = match feature.as_ref() {
        ChatFeature::Ready { api_key, corpus } => (api_key, corpus),
        ChatFeature::Disabled(reason) => {
            return Ok((StatusCode::SERVICE_UNAVAILABLE, reason.to_string()).into_response());
        }
    };

    let session = {
        let mut shared_state = state.write().expect("Unable to write shared state");
        shared_state.session(&session_id)
    };
    let mut transcript = session.lock().await;

    let chat = Chat::new(
        &config.openai_api_hostname,
        api_key,
        &config.openai_model,
        corpus,
    );

    let reply = match chat.next_msg(&transcript, &payload.message).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::error!("Chat turn failed: {}. Root cause: {}", e, e.root_cause());
            format!("Sorry, I encountered an error: {}", e)
        }
    };

    // The failure path is recorded in the transcript as an assistant
    // reply so the conversation record stays complete and the session
    // remains usable for the next turn
    transcript.push(Message::new(Role::User, &payload.message));
    transcript.push(Message::new(Role::Assistant, &reply));

    Ok(axum::Json(public::ChatResponse {
        session_id,
        message: reply,
    })
    .into_response())
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", post(chat_handler))
        .route("/{id}", get(chat_session))
}

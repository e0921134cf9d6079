//! Router for the sample questions API

use std::sync::{Arc, RwLock};

use axum::{Router, response::Json, routing::get};

use super::public;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

/// Pre-authored questions offered as one-click shortcuts in the UI.
/// Clicking one submits the identical text through the chat endpoint,
/// so it behaves exactly like typing the question.
pub const SAMPLE_QUESTIONS: [&str; 8] = [
    "What are my fundamental rights in The Gambia?",
    "What are my employment rights?",
    "Can I be forced to work without pay?",
    "What are my property rights?",
    "Do I have the right to freedom of speech?",
    "What are my rights if I'm arrested?",
    "Can I form a trade union?",
    "What are my family law rights?",
];

async fn sample_questions() -> Json<public::SampleQuestionsResponse> {
    Json(public::SampleQuestionsResponse {
        questions: SAMPLE_QUESTIONS.iter().map(|q| q.to_string()).collect(),
    })
}

/// Create the questions router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", get(sample_questions))
}

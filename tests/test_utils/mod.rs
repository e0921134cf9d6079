//! Test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};
use tempfile::TempDir;

use rights_chat::api::{AppState, app};
use rights_chat::core::{AppConfig, ChatFeature};

/// Corpus fixture. Kept free of characters that need JSON or regex
/// escaping so request body matchers can look for it verbatim.
pub const TEST_CORPUS: &str =
    "Section 22 of the Constitution protects the property rights of every person.";

pub fn test_config(corpus_path: &str, llm_host: &str) -> AppConfig {
    AppConfig {
        corpus_path: corpus_path.to_string(),
        openai_api_hostname: llm_host.to_string(),
        openai_api_key: Some("test-api-key".to_string()),
        openai_model: "gpt-3.5-turbo".to_string(),
    }
}

fn build_app(config: AppConfig) -> Router {
    let feature = ChatFeature::init(&config);
    let app_state = AppState::new(feature, config);
    app(Arc::new(RwLock::new(app_state)))
}

/// Creates a test application router backed by a temp corpus file and
/// the given completion endpoint (usually a mockito server). The temp
/// dir is returned so it outlives the test body.
pub fn test_app(llm_host: &str) -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let corpus_path = dir.path().join("gambian_legal_text.txt");
    fs::write(&corpus_path, TEST_CORPUS).expect("Failed to write corpus");

    let config = test_config(corpus_path.to_str().unwrap(), llm_host);
    (build_app(config), dir)
}

/// An app whose corpus file does not exist: the chat feature must be
/// disabled with the file-not-found reason.
pub fn test_app_missing_corpus(llm_host: &str) -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let corpus_path = dir.path().join("missing_legal_text.txt");

    let config = test_config(corpus_path.to_str().unwrap(), llm_host);
    (build_app(config), dir)
}

/// An app without an API credential: the chat feature must be
/// disabled with the credential reason even though the corpus exists.
pub fn test_app_missing_credential(llm_host: &str) -> (Router, TempDir) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let corpus_path = dir.path().join("gambian_legal_text.txt");
    fs::write(&corpus_path, TEST_CORPUS).expect("Failed to write corpus");

    let mut config = test_config(corpus_path.to_str().unwrap(), llm_host);
    config.openai_api_key = None;
    (build_app(config), dir)
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body was not UTF-8")
}

use anyhow::{Error, Result, bail};
use serde_json::json;

use super::models::Transcript;
use crate::ai::prompt::{self, Prompt};
use crate::openai::{Message, Role, completion};

// Sampling is pinned low and replies are capped so answers about the
// same legal text stay consistent between sessions.
const TEMPERATURE: f64 = 0.1;
const MAX_COMPLETION_TOKENS: u32 = 500;

/// The completion client for the legal rights assistant.
///
/// Owns the connection details and the legal corpus. The transcript
/// is always passed in explicitly rather than read from ambient
/// session state so the client can be exercised without a UI or a
/// live network dependency.
pub struct Chat {
    api_hostname: String,
    api_key: String,
    model: String,
    corpus: String,
}

impl Chat {
    pub fn new(api_hostname: &str, api_key: &str, model: &str, corpus: &str) -> Self {
        Self {
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
            corpus: corpus.to_string(),
        }
    }

    /// Runs the next turn in chat: renders the system instruction
    /// with the corpus embedded, sends it with the full prior history
    /// and the new user message, and returns the model's reply. The
    /// prompt is rebuilt from scratch on every call and never stored.
    pub async fn next_msg(
        &self,
        transcript: &Transcript,
        user_text: &str,
    ) -> Result<String, Error> {
        let registry = prompt::templates();
        let system_prompt = registry.render(
            &Prompt::LegalAssistant.to_string(),
            &json!({"corpus": self.corpus}),
        )?;

        let mut messages = vec![Message::new(Role::System, &system_prompt)];
        messages.extend(transcript.messages());
        messages.push(Message::new(Role::User, user_text));

        let resp = completion(
            &messages,
            &self.api_hostname,
            &self.api_key,
            &self.model,
            TEMPERATURE,
            MAX_COMPLETION_TOKENS,
        )
        .await?;

        // Auth, quota, and validation failures come back as an error
        // payload with a readable message
        if let Some(msg) = resp["error"]["message"].as_str() {
            bail!("{}", msg);
        }

        let Some(content) = resp["choices"][0]["message"]["content"].as_str() else {
            bail!("No message received. Resp:\n\n {}", resp);
        };

        Ok(content.to_string())
    }
}

use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub corpus_path: String,
    pub openai_api_hostname: String,
    // Absence of the key disables the chat feature rather than
    // falling back to a default that can't authenticate
    pub openai_api_key: Option<String>,
    pub openai_model: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        let corpus_path = env::var("RIGHTS_CHAT_CORPUS_PATH")
            .unwrap_or_else(|_| "./gambian_legal_text.txt".to_string());
        let openai_api_hostname = env::var("RIGHTS_CHAT_LLM_HOST")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let openai_api_key = env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());
        let openai_model =
            env::var("RIGHTS_CHAT_LLM_MODEL").unwrap_or_else(|_| "gpt-3.5-turbo".to_string());

        Self {
            corpus_path,
            openai_api_hostname,
            openai_api_key,
            openai_model,
        }
    }
}

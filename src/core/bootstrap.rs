//! One-shot startup sequence that gates the chat feature.

use std::fmt;
use std::path::Path;

use crate::core::AppConfig;
use crate::corpus::{self, CorpusError};

/// Why the chat feature is disabled for the lifetime of the session.
#[derive(Debug, Clone, PartialEq)]
pub enum DisabledReason {
    CredentialMissing,
    CorpusMissing(String),
    CorpusUnreadable(String),
}

impl fmt::Display for DisabledReason {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DisabledReason::CredentialMissing => write!(
                f,
                "OpenAI API key not found. Please set OPENAI_API_KEY in your environment."
            ),
            DisabledReason::CorpusMissing(path) => write!(
                f,
                "Legal text file not found. Please ensure '{}' exists.",
                path
            ),
            DisabledReason::CorpusUnreadable(err) => {
                write!(f, "Failed to read legal text file: {}", err)
            }
        }
    }
}

/// Result of the startup sequence. `Disabled` is terminal for the
/// session: there is no retry state, and no network call is ever made
/// while disabled.
pub enum ChatFeature {
    Ready { api_key: String, corpus: String },
    Disabled(DisabledReason),
}

impl ChatFeature {
    /// Runs once per session. The credential check comes before any
    /// file I/O so a missing key fails closed without touching the
    /// filesystem.
    pub fn init(config: &AppConfig) -> Self {
        let Some(api_key) = config.openai_api_key.clone() else {
            return ChatFeature::Disabled(DisabledReason::CredentialMissing);
        };

        match corpus::load(Path::new(&config.corpus_path)) {
            Ok(corpus) => ChatFeature::Ready { api_key, corpus },
            Err(CorpusError::NotFound(path)) => {
                ChatFeature::Disabled(DisabledReason::CorpusMissing(path))
            }
            Err(CorpusError::Io(err)) => {
                ChatFeature::Disabled(DisabledReason::CorpusUnreadable(err.to_string()))
            }
        }
    }
}
